//! Static route table: path, menu label, page title and icon for every page.
//!
//! Labels and titles are Fluent message ids resolved at lookup time so the
//! menu follows the active language. Lookups never fail: unknown paths get
//! the application title and no icon.

use crate::i18n;

/// Icon identifiers used by the menu and header controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Dashboard,
    BarChart,
    PieChart,
    LineChart,
    Menu,
    ArrowLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label_id: &'static str,
    pub title_id: &'static str,
    pub icon: IconId,
}

impl RouteEntry {
    pub fn label(&self) -> String {
        i18n::message(self.label_id)
    }

    pub fn title(&self) -> String {
        i18n::message(self.title_id)
    }
}

/// Resolved, displayable route information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub label: String,
    pub title: String,
    pub icon: Option<IconId>,
}

pub const HOME_PATH: &str = "/";

/// Message id of the title shown for paths outside the table.
pub const FALLBACK_TITLE_ID: &str = "app-title";

/// Menu display order.
pub static ROUTES: [RouteEntry; 5] = [
    RouteEntry {
        path: HOME_PATH,
        label_id: "route-home-label",
        title_id: "app-title",
        icon: IconId::Dashboard,
    },
    RouteEntry {
        path: "/fixed-subplots",
        label_id: "route-fixed-subplots-label",
        title_id: "route-fixed-subplots-title",
        icon: IconId::BarChart,
    },
    RouteEntry {
        path: "/custom-subplots",
        label_id: "route-custom-subplots-label",
        title_id: "route-custom-subplots-title",
        icon: IconId::PieChart,
    },
    RouteEntry {
        path: "/shared-axes",
        label_id: "route-shared-axes-label",
        title_id: "route-shared-axes-title",
        icon: IconId::LineChart,
    },
    RouteEntry {
        path: "/layout",
        label_id: "route-layout-label",
        title_id: "route-layout-title",
        icon: IconId::Dashboard,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct RouteRegistry {
    entries: &'static [RouteEntry],
}

impl RouteRegistry {
    pub const fn new(entries: &'static [RouteEntry]) -> Self {
        Self { entries }
    }

    /// The compiled-in table.
    pub const fn builtin() -> Self {
        Self::new(&ROUTES)
    }

    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    pub fn find(&self, path: &str) -> Option<&'static RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn lookup(&self, path: &str) -> RouteInfo {
        match self.find(path) {
            Some(entry) => RouteInfo {
                label: entry.label(),
                title: entry.title(),
                icon: Some(entry.icon),
            },
            None => {
                let fallback = i18n::message(FALLBACK_TITLE_ID);
                RouteInfo {
                    label: fallback.clone(),
                    title: fallback,
                    icon: None,
                }
            }
        }
    }

    pub fn title(&self, path: &str) -> String {
        self.lookup(path).title
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_menu_order() {
        let paths: Vec<_> = RouteRegistry::builtin()
            .entries()
            .iter()
            .map(|entry| entry.path)
            .collect();
        assert_eq!(
            paths,
            vec!["/", "/fixed-subplots", "/custom-subplots", "/shared-axes", "/layout"]
        );
    }

    #[test]
    fn paths_are_unique() {
        let entries = RouteRegistry::builtin().entries();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn every_known_path_resolves_to_its_configured_label() {
        i18n::init();
        let registry = RouteRegistry::builtin();
        for entry in registry.entries() {
            let info = registry.lookup(entry.path);
            assert_eq!(info.label, i18n::message(entry.label_id));
            assert_eq!(info.title, i18n::message(entry.title_id));
            assert_eq!(info.icon, Some(entry.icon));
            assert!(!info.label.is_empty());
        }
    }

    #[test]
    fn unknown_paths_degrade_to_fallback() {
        i18n::init();
        let registry = RouteRegistry::builtin();
        let fallback = i18n::message(FALLBACK_TITLE_ID);
        for path in ["/nope", "", "/fixed-subplots/", "/LAYOUT", "layout", "/shared-axes?x=1"] {
            let info = registry.lookup(path);
            assert_eq!(info.label, fallback, "path {path:?}");
            assert_eq!(info.title, fallback);
            assert_eq!(info.icon, None);
        }
    }

    #[test]
    fn home_title_is_the_application_title() {
        i18n::init();
        let registry = RouteRegistry::builtin();
        assert_eq!(registry.title(HOME_PATH), registry.title("/missing"));
    }

    #[test]
    fn fixed_subplots_label_in_fallback_language() {
        i18n::init();
        let entry = RouteRegistry::builtin()
            .find("/fixed-subplots")
            .expect("route present");
        assert_eq!(entry.icon, IconId::BarChart);
        if i18n::current_language() == "en-US" {
            assert_eq!(entry.label(), "Fixed-region subplots");
            assert_eq!(entry.title(), "5.1 Drawing subplots in fixed regions");
        }
    }
}
