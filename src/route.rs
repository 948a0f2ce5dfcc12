//! Hash Route Table
//!
//! Views are switched by a signal fed from `location.hash`, so every route
//! is a plain enum value: parsing, formatting, and the role requirements
//! all live here and test natively.

use crate::models::Role;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const LEADER_ONLY: &[Role] = &[Role::Leader];
pub const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeePage {
    Dashboard,
    Tasks,
    TaskDetails(String),
    Teams,
    Calendar,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderPage {
    Dashboard,
    Projects,
    Tasks,
    Teams,
    Calendar,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Projects,
    Leaders,
    Calendar,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Employee(EmployeePage),
    Leader(LeaderPage),
    Admin(AdminPage),
    Unauthorized,
    NotFound,
}

impl Route {
    /// Parse a hash path (leading `#` already stripped). Unknown paths map
    /// to the not-found fallback.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["unauthorized"] => Route::Unauthorized,

            ["employee"] => Route::Employee(EmployeePage::Dashboard),
            ["employee", "tasks"] => Route::Employee(EmployeePage::Tasks),
            ["employee", "tasks", id] => {
                Route::Employee(EmployeePage::TaskDetails(id.to_string()))
            }
            ["employee", "teams"] => Route::Employee(EmployeePage::Teams),
            ["employee", "calendar"] => Route::Employee(EmployeePage::Calendar),
            ["employee", "settings"] => Route::Employee(EmployeePage::Settings),

            ["leader"] => Route::Leader(LeaderPage::Dashboard),
            ["leader", "projects"] => Route::Leader(LeaderPage::Projects),
            ["leader", "tasks"] => Route::Leader(LeaderPage::Tasks),
            ["leader", "teams"] => Route::Leader(LeaderPage::Teams),
            ["leader", "calendar"] => Route::Leader(LeaderPage::Calendar),
            ["leader", "settings"] => Route::Leader(LeaderPage::Settings),

            ["admin"] => Route::Admin(AdminPage::Dashboard),
            ["admin", "projects"] => Route::Admin(AdminPage::Projects),
            ["admin", "leaders"] => Route::Admin(AdminPage::Leaders),
            ["admin", "calendar"] => Route::Admin(AdminPage::Calendar),
            ["admin", "settings"] => Route::Admin(AdminPage::Settings),

            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::NotFound => "/404".to_string(),

            Route::Employee(EmployeePage::Dashboard) => "/employee".to_string(),
            Route::Employee(EmployeePage::Tasks) => "/employee/tasks".to_string(),
            Route::Employee(EmployeePage::TaskDetails(id)) => {
                format!("/employee/tasks/{id}")
            }
            Route::Employee(EmployeePage::Teams) => "/employee/teams".to_string(),
            Route::Employee(EmployeePage::Calendar) => "/employee/calendar".to_string(),
            Route::Employee(EmployeePage::Settings) => "/employee/settings".to_string(),

            Route::Leader(LeaderPage::Dashboard) => "/leader".to_string(),
            Route::Leader(LeaderPage::Projects) => "/leader/projects".to_string(),
            Route::Leader(LeaderPage::Tasks) => "/leader/tasks".to_string(),
            Route::Leader(LeaderPage::Teams) => "/leader/teams".to_string(),
            Route::Leader(LeaderPage::Calendar) => "/leader/calendar".to_string(),
            Route::Leader(LeaderPage::Settings) => "/leader/settings".to_string(),

            Route::Admin(AdminPage::Dashboard) => "/admin".to_string(),
            Route::Admin(AdminPage::Projects) => "/admin/projects".to_string(),
            Route::Admin(AdminPage::Leaders) => "/admin/leaders".to_string(),
            Route::Admin(AdminPage::Calendar) => "/admin/calendar".to_string(),
            Route::Admin(AdminPage::Settings) => "/admin/settings".to_string(),
        }
    }

    /// `href` value for anchors.
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// Roles allowed to see this route; `None` means public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Employee(_) => Some(EMPLOYEE_ONLY),
            Route::Leader(_) => Some(LEADER_ONLY),
            Route::Admin(_) => Some(ADMIN_ONLY),
            _ => None,
        }
    }

    /// Where a freshly logged-in user lands.
    pub fn home_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::Admin(AdminPage::Dashboard),
            Role::Leader => Route::Leader(LeaderPage::Dashboard),
            Role::Employee => Route::Employee(EmployeePage::Dashboard),
        }
    }
}

/// Route currently in the address bar.
pub fn current() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::parse(hash.trim_start_matches('#'))
}

/// Point the address bar at `route`; the hashchange listener re-renders.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        let routes = [
            Route::Landing,
            Route::Login,
            Route::Signup,
            Route::Unauthorized,
            Route::Employee(EmployeePage::Tasks),
            Route::Employee(EmployeePage::TaskDetails("t42".into())),
            Route::Employee(EmployeePage::Calendar),
            Route::Leader(LeaderPage::Projects),
            Route::Leader(LeaderPage::Settings),
            Route::Admin(AdminPage::Dashboard),
            Route::Admin(AdminPage::Leaders),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route, "path {}", route.path());
        }
    }

    #[test]
    fn empty_and_bare_slash_are_the_landing_page() {
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/"), Route::Landing);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound);
        assert_eq!(Route::parse("/employee/unknown"), Route::NotFound);
        assert_eq!(Route::parse("/admin/tasks/extra/deep"), Route::NotFound);
    }

    #[test]
    fn role_requirements_cover_the_three_areas() {
        assert_eq!(
            Route::Employee(EmployeePage::Dashboard).allowed_roles(),
            Some(EMPLOYEE_ONLY)
        );
        assert_eq!(
            Route::Leader(LeaderPage::Dashboard).allowed_roles(),
            Some(LEADER_ONLY)
        );
        assert_eq!(
            Route::Admin(AdminPage::Dashboard).allowed_roles(),
            Some(ADMIN_ONLY)
        );
        assert_eq!(Route::Login.allowed_roles(), None);
    }

    #[test]
    fn login_lands_each_role_on_its_own_dashboard() {
        assert_eq!(Route::home_for(Role::Admin).path(), "/admin");
        assert_eq!(Route::home_for(Role::Leader).path(), "/leader");
        assert_eq!(Route::home_for(Role::Employee).path(), "/employee");
    }
}
