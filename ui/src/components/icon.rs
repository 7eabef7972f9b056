use dioxus::prelude::*;

use crate::routes::IconId;

impl IconId {
    /// Single-glyph rendering used in the menu and header buttons.
    pub fn glyph(self) -> &'static str {
        match self {
            IconId::Dashboard => "▦",
            IconId::BarChart => "▥",
            IconId::PieChart => "◔",
            IconId::LineChart => "⟋",
            IconId::Menu => "☰",
            IconId::ArrowLeft => "←",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            IconId::Dashboard => "dashboard",
            IconId::BarChart => "bar-chart",
            IconId::PieChart => "pie-chart",
            IconId::LineChart => "line-chart",
            IconId::Menu => "menu",
            IconId::ArrowLeft => "arrow-left",
        }
    }
}

#[component]
pub fn Icon(id: IconId) -> Element {
    rsx! {
        span {
            class: "icon icon--{id.css_modifier()}",
            aria_hidden: "true",
            "{id.glyph()}"
        }
    }
}
