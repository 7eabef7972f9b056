//! Shared UI crate for Plotdeck. The navigation shell, route table, figure
//! geometry and every page live here; platform crates only add a router.

pub mod core;
pub mod figure;
pub mod i18n;
pub mod routes;
pub mod shell;
pub mod theme;
pub mod views;

pub mod components {
    // Responsive shell (components/app_shell.rs) and its parts
    pub mod app_shell;
    pub use app_shell::register_nav;
    pub use app_shell::use_language;
    pub use app_shell::AppShell;
    pub use app_shell::NavBuilder;

    mod icon;
    pub use icon::Icon;

    mod shell_header;
    mod sidebar;
}
