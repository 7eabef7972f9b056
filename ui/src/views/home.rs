use dioxus::prelude::*;

use crate::components::app_shell::nav_link;
use crate::components::{use_language, Icon};
use crate::figure::{linspace, subplot, Figure, Panel, PlotKind, Series, PALETTE};
use crate::routes::{RouteRegistry, HOME_PATH};

/// Small 1x2 preview shown above the chapter cards.
fn preview_panels() -> Vec<Panel> {
    let xs = linspace(0.0, 6.0, 60);
    let mut panels = Vec::with_capacity(2);
    if let Ok(rect) = subplot(1, 2, 1) {
        panels.push(Panel::new(
            rect,
            PlotKind::Line,
            vec![Series::sampled("sin", PALETTE[0], &xs, f64::sin)],
        ));
    }
    if let Ok(rect) = subplot(1, 2, 2) {
        panels.push(Panel::new(
            rect,
            PlotKind::Bar,
            vec![Series::categorical("bars", PALETTE[1], &[3.0, 5.0, 2.0, 4.0])],
        ));
    }
    panels
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the language code so the page re-renders on change.
    let _lang = use_language();
    let panels = use_hook(preview_panels);

    let cards: Vec<Element> = RouteRegistry::builtin()
        .entries()
        .iter()
        .filter(|entry| entry.path != HOME_PATH)
        .map(|entry| {
            let title = entry.title();
            let label = entry.label();
            let body = rsx! {
                Icon { id: entry.icon }
                div { class: "card__text",
                    h3 { class: "card__title", "{title}" }
                    p { class: "card__hint", "{label}" }
                }
            };
            nav_link(entry.path, "card page-home__card".to_string(), body)
        })
        .collect();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page__lead", {crate::t!("home-intro")} }

            Figure { panels, width: 640, height: 240 }

            h2 { {crate::t!("home-chapters")} }
            div { class: "page-home__cards",
                {cards.into_iter()}
            }
            p { class: "page__note", {crate::t!("home-resize-hint")} }
        }
    }
}
