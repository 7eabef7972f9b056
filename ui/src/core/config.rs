//! Shell configuration provided to `AppShell` through context.
//!
//! Launchers may call `use_context_provider(|| ShellConfig { .. })` before
//! mounting the router; when no config is provided the defaults below apply.

use super::viewport::{Breakpoint, NARROW_BREAKPOINT_PX};

pub const SIDEBAR_EXPANDED_WIDTH: u32 = 200;
pub const SIDEBAR_COLLAPSED_WIDTH: u32 = 80;
pub const HEADER_HEIGHT: u32 = 64;
pub const CONTENT_PADDING_WIDE: u32 = 24;
pub const CONTENT_PADDING_NARROW: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Widths at or below this are laid out as narrow.
    pub narrow_max_px: f64,
    pub sidebar_expanded_width: u32,
    pub sidebar_collapsed_width: u32,
    pub header_height: u32,
    pub content_padding_wide: u32,
    pub content_padding_narrow: u32,
    /// Starting width on targets that only learn the real width after the
    /// first layout pass. `None` uses the platform's assumed width.
    pub initial_width: Option<f64>,
}

impl ShellConfig {
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.narrow_max_px)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            narrow_max_px: NARROW_BREAKPOINT_PX,
            sidebar_expanded_width: SIDEBAR_EXPANDED_WIDTH,
            sidebar_collapsed_width: SIDEBAR_COLLAPSED_WIDTH,
            header_height: HEADER_HEIGHT,
            content_padding_wide: CONTENT_PADDING_WIDE,
            content_padding_narrow: CONTENT_PADDING_NARROW,
            initial_width: None,
        }
    }
}
