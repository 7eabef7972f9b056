use dioxus::prelude::*;
use tracing::warn;

use ui::components::{register_nav, AppShell, NavBuilder};
use ui::core::config::ShellConfig;
use ui::theme::THEME_CSS;
use ui::core::platform::Platform;
use ui::views::{CustomSubplots, FixedSubplots, Home, NotFound, SharedAxes, SubplotLayout};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileShell)]
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

fn nav_link(path: &'static str, class: String, body: Element) -> Element {
    match path.parse::<Route>() {
        Ok(to) => rsx!(Link { class, to, {body} }),
        Err(_) => {
            warn!(path, "no router match for menu path");
            rsx!(a { class, href: path, {body} })
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    // Phones start narrow until the first resize report arrives.
    use_context_provider(|| ShellConfig {
        initial_width: Some(Platform::Mobile.assumed_width()),
        ..ShellConfig::default()
    });

    rsx! {
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A mobile-specific layout around the shared `AppShell` component
/// which allows us to use the mobile-specific `Route` enum.
#[component]
fn MobileShell() -> Element {
    let current_path = use_route::<Route>().to_string();
    rsx! {
        AppShell { current_path,
            Outlet::<Route> {}
        }
    }
}
