use dioxus::prelude::*;

use crate::components::app_shell::nav_link;
use crate::components::use_language;
use crate::routes::HOME_PATH;

/// Rendered for any path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _lang = use_language();
    let path = format!("/{}", segments.join("/"));
    let home = nav_link(
        HOME_PATH,
        "button button--primary".to_string(),
        rsx! { {crate::t!("header-back-home")} },
    );

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-body", path = path)} }
            {home}
        }
    }
}
