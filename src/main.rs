//! TaskHub Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod context;
mod deadlines;
mod models;
mod route;
mod session;
mod storage;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

/// Console logging shims so non-view modules can log without pulling
/// `web_sys` in directly.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
