use dioxus::prelude::*;

use crate::routes::{RouteEntry, RouteRegistry};
use crate::shell::{BrandLabel, LayoutDecision, ShellEvent, SidebarPresentation};
use crate::t;

use super::app_shell::nav_link;
use super::icon::Icon;

#[component]
pub fn Sidebar(
    layout: LayoutDecision,
    current_path: String,
    brand: String,
    on_event: EventHandler<ShellEvent>,
) -> Element {
    let overlay = layout.sidebar == SidebarPresentation::Overlay;
    let compact = layout.brand == BrandLabel::Abbreviated;
    let sidebar_style = layout.sidebar_style();
    let variant = if overlay {
        "shell-sidebar--overlay"
    } else if compact {
        "shell-sidebar--collapsed"
    } else {
        "shell-sidebar--expanded"
    };
    let trigger_label = if compact {
        t!("sidebar-expand")
    } else {
        t!("sidebar-collapse")
    };

    let items: Vec<Element> = RouteRegistry::builtin()
        .entries()
        .iter()
        .map(|entry| menu_item(entry, &current_path, compact))
        .collect();

    rsx! {
        aside {
            class: "shell-sidebar {variant}",
            style: "{sidebar_style}",
            div { class: "shell-sidebar__brand",
                h4 { class: "shell-sidebar__brand-mark", "{brand}" }
            }

            nav {
                class: if overlay { "shell-menu shell-menu--vertical" } else { "shell-menu shell-menu--inline" },
                aria_label: t!("menu-label"),
                {items.into_iter()}
            }

            if overlay {
                div { class: "shell-sidebar__footer",
                    button {
                        r#type: "button",
                        class: "button button--primary shell-sidebar__back",
                        onclick: move |_| on_event.call(ShellEvent::CloseMenu),
                        {t!("shell-back-to-content")}
                    }
                }
            }

            if layout.show_collapse_trigger {
                button {
                    r#type: "button",
                    class: "shell-sidebar__trigger",
                    aria_label: "{trigger_label}",
                    title: "{trigger_label}",
                    onclick: move |_| on_event.call(ShellEvent::ToggleCollapsed),
                    if compact { "›" } else { "‹" }
                }
            }
        }
    }
}

fn menu_item(entry: &'static RouteEntry, current_path: &str, compact: bool) -> Element {
    let selected = entry.path == current_path;
    let label = entry.label();
    let class = if selected {
        "shell-menu__item shell-menu__item--selected".to_string()
    } else {
        "shell-menu__item".to_string()
    };

    let body = rsx! {
        Icon { id: entry.icon }
        if compact {
            span { class: "visually-hidden", "{label}" }
        } else {
            span { class: "shell-menu__label", "{label}" }
        }
    };

    nav_link(entry.path, class, body)
}
