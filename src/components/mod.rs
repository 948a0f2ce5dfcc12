//! UI Components

mod admin_dashboard;
mod calendar;
mod dashboard;
mod landing;
mod layout;
mod leaders;
mod login;
mod not_found;
mod projects;
mod protected;
mod settings;
mod sidebar;
mod signup;
mod task_board;
mod task_details;
mod task_form;
mod teams;
mod topbar;

pub use admin_dashboard::AdminDashboard;
pub use calendar::CalendarPage;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use layout::{AdminPageView, EmployeePageView, Layout, LeaderPageView, ThemeSignal};
pub use leaders::Leaders;
pub use login::Login;
pub use not_found::{NotFound, Unauthorized};
pub use projects::{ProjectScope, Projects};
pub use protected::Protected;
pub use settings::Settings;
pub use sidebar::Sidebar;
pub use signup::Signup;
pub use task_board::{TaskBoardPage, TaskScope};
pub use task_details::TaskDetails;
pub use task_form::AssignTaskForm;
pub use teams::Teams;
pub use topbar::Topbar;
