#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::warn;

use ui::components::{register_nav, AppShell, NavBuilder};
use ui::core::config::ShellConfig;
use ui::theme::THEME_CSS;
use ui::views::{CustomSubplots, FixedSubplots, Home, NotFound, SharedAxes, SubplotLayout};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/fixed-subplots")]
    FixedSubplots {},
    #[route("/custom-subplots")]
    CustomSubplots {},
    #[route("/shared-axes")]
    SharedAxes {},
    #[route("/layout")]
    SubplotLayout {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    // Maximize window on launch (dioxus-desktop 0.6.x: pass a WindowBuilder value)
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Plotdeck – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(path: &'static str, class: String, body: Element) -> Element {
    match path.parse::<Route>() {
        Ok(to) => rsx!(Link { class, to, {body} }),
        Err(_) => {
            warn!(path, "no router match for menu path");
            rsx!(a { class, href: path, {body} })
        }
    }
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Global reactive language code; the shell header updates it on selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(ShellConfig::default);

    register_nav(NavBuilder { link: nav_link });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{THEME_CSS}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `AppShell` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let current_path = use_route::<Route>().to_string();
    rsx! {
        AppShell { current_path,
            Outlet::<Route> {}
        }
    }
}
