//! Pure layout derivation for the shell.
//!
//! Computed from [`NavigationState`] on every render and never stored.

use crate::core::config::ShellConfig;
use crate::core::format::px;

use super::state::{NavigationState, ShellMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPresentation {
    /// Fixed to the left edge, pushing header and content right.
    Docked { width: u32 },
    /// Covers the whole viewport; header and content are not rendered.
    Overlay,
    Hidden,
}

/// Brand text at the top of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandLabel {
    Full,
    Abbreviated,
    Overlay,
}

impl BrandLabel {
    pub fn message_id(self) -> &'static str {
        match self {
            Self::Full => "brand-full",
            Self::Abbreviated => "brand-abbreviated",
            Self::Overlay => "brand-overlay",
        }
    }
}

/// What goes into the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSlot {
    Page,
    Suppressed,
}

impl ContentSlot {
    pub fn is_rendered(self) -> bool {
        matches!(self, Self::Page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDecision {
    pub mode: ShellMode,
    pub sidebar: SidebarPresentation,
    /// Horizontal space the sidebar takes from header and content.
    pub sidebar_width: u32,
    pub content_left_offset: u32,
    pub header_left_offset: u32,
    pub header_visible: bool,
    pub content_slot: ContentSlot,
    pub show_menu_button: bool,
    pub show_collapse_trigger: bool,
    pub show_back_home: bool,
    pub brand: BrandLabel,
    pub content_padding: u32,
    pub content_top_offset: u32,
}

impl LayoutDecision {
    pub fn derive(state: &NavigationState, config: &ShellConfig) -> Self {
        let mode = state.mode();
        let (sidebar, brand) = match mode {
            ShellMode::WideExpanded => (
                SidebarPresentation::Docked {
                    width: config.sidebar_expanded_width,
                },
                BrandLabel::Full,
            ),
            ShellMode::WideCollapsed => (
                SidebarPresentation::Docked {
                    width: config.sidebar_collapsed_width,
                },
                BrandLabel::Abbreviated,
            ),
            ShellMode::NarrowMenuOpen => (SidebarPresentation::Overlay, BrandLabel::Overlay),
            // Nothing visible; keep the full brand for when the menu reopens.
            ShellMode::NarrowMenuClosed => (SidebarPresentation::Hidden, BrandLabel::Full),
        };

        let sidebar_width = match sidebar {
            SidebarPresentation::Docked { width } => width,
            SidebarPresentation::Overlay | SidebarPresentation::Hidden => 0,
        };
        let menu_open = mode == ShellMode::NarrowMenuOpen;
        let content_padding = if mode.is_narrow() {
            config.content_padding_narrow
        } else {
            config.content_padding_wide
        };

        Self {
            mode,
            sidebar,
            sidebar_width,
            content_left_offset: sidebar_width,
            header_left_offset: sidebar_width,
            header_visible: !menu_open,
            content_slot: if menu_open {
                ContentSlot::Suppressed
            } else {
                ContentSlot::Page
            },
            show_menu_button: mode == ShellMode::NarrowMenuClosed,
            show_collapse_trigger: !mode.is_narrow(),
            show_back_home: !state.is_home(),
            brand,
            content_padding,
            content_top_offset: config.header_height,
        }
    }

    pub fn sidebar_style(&self) -> String {
        match self.sidebar {
            SidebarPresentation::Docked { width } => {
                format!("width:{};flex:0 0 {};", px(width), px(width))
            }
            SidebarPresentation::Overlay => "width:100%;".to_string(),
            SidebarPresentation::Hidden => "display:none;".to_string(),
        }
    }

    pub fn header_style(&self) -> String {
        format!("left:{};", px(self.header_left_offset))
    }

    pub fn content_style(&self) -> String {
        format!(
            "margin-left:{};margin-top:{};padding:{};",
            px(self.content_left_offset),
            px(self.content_top_offset),
            px(self.content_padding)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::Breakpoint;

    fn state_in(mode: ShellMode, path: &str) -> NavigationState {
        let width = if mode.is_narrow() { 400.0 } else { 1280.0 };
        let mut state = NavigationState::new(width, Breakpoint::default(), path);
        state.set_collapsed(mode.collapsed());
        assert_eq!(state.mode(), mode);
        state
    }

    const ALL_MODES: [ShellMode; 4] = [
        ShellMode::WideExpanded,
        ShellMode::WideCollapsed,
        ShellMode::NarrowMenuOpen,
        ShellMode::NarrowMenuClosed,
    ];

    #[test]
    fn widths_are_drawn_from_the_fixed_set() {
        let config = ShellConfig::default();
        for mode in ALL_MODES {
            let layout = state_in(mode, "/").layout(&config);
            assert!([0, 80, 200].contains(&layout.sidebar_width), "{mode:?}");
        }
    }

    #[test]
    fn offsets_track_sidebar_outside_the_overlay() {
        let config = ShellConfig::default();
        for mode in ALL_MODES {
            let layout = state_in(mode, "/").layout(&config);
            if mode == ShellMode::NarrowMenuOpen {
                assert_eq!(layout.sidebar, SidebarPresentation::Overlay);
                assert!(!layout.header_visible);
                assert_eq!(layout.content_slot, ContentSlot::Suppressed);
            } else {
                assert_eq!(layout.content_left_offset, layout.sidebar_width);
                assert_eq!(layout.header_left_offset, layout.sidebar_width);
                assert!(layout.header_visible);
                assert!(layout.content_slot.is_rendered());
            }
        }
    }

    #[test]
    fn per_mode_decisions() {
        let config = ShellConfig::default();

        let wide = state_in(ShellMode::WideExpanded, "/").layout(&config);
        assert_eq!(wide.sidebar, SidebarPresentation::Docked { width: 200 });
        assert_eq!(wide.brand, BrandLabel::Full);
        assert!(wide.show_collapse_trigger);
        assert!(!wide.show_menu_button);
        assert_eq!(wide.content_padding, 24);

        let collapsed = state_in(ShellMode::WideCollapsed, "/").layout(&config);
        assert_eq!(collapsed.sidebar, SidebarPresentation::Docked { width: 80 });
        assert_eq!(collapsed.brand, BrandLabel::Abbreviated);

        let open = state_in(ShellMode::NarrowMenuOpen, "/").layout(&config);
        assert_eq!(open.brand, BrandLabel::Overlay);
        assert!(!open.show_collapse_trigger);

        let closed = state_in(ShellMode::NarrowMenuClosed, "/").layout(&config);
        assert_eq!(closed.sidebar, SidebarPresentation::Hidden);
        assert_eq!(closed.sidebar_width, 0);
        assert!(closed.show_menu_button);
        assert_eq!(closed.content_padding, 10);
    }

    #[test]
    fn back_home_link_only_off_home() {
        let config = ShellConfig::default();
        assert!(!state_in(ShellMode::WideExpanded, "/").layout(&config).show_back_home);
        assert!(state_in(ShellMode::WideExpanded, "/layout").layout(&config).show_back_home);
        assert!(state_in(ShellMode::NarrowMenuClosed, "/unknown").layout(&config).show_back_home);
    }

    #[test]
    fn layout_is_recomputed_from_state() {
        let config = ShellConfig::default();
        let mut state = state_in(ShellMode::WideExpanded, "/");
        let before = state.layout(&config);
        state.toggle_collapsed();
        let after = state.layout(&config);
        assert_ne!(before, after);
        assert_eq!(after.content_style(), "margin-left:80px;margin-top:64px;padding:24px;");
        assert_eq!(after.header_style(), "left:80px;");
    }

    #[test]
    fn custom_widths_flow_through() {
        let config = ShellConfig {
            sidebar_expanded_width: 240,
            sidebar_collapsed_width: 64,
            ..ShellConfig::default()
        };
        let mut state = state_in(ShellMode::WideExpanded, "/");
        assert_eq!(state.layout(&config).sidebar_width, 240);
        state.toggle_collapsed();
        assert_eq!(state.layout(&config).content_left_offset, 64);
    }
}
