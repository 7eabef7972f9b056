//! Navigation state machine.
//!
//! The shell tracks three inputs: the current path, the viewport class and a
//! "collapsed" flag whose meaning depends on the class. When wide it means the
//! sidebar is shrunk to icons; when narrow `false` means the full-screen menu
//! is showing. The flag keeps its raw value across a wide→narrow crossing and
//! is forced to `false` on narrow→wide. [`ShellMode`] names the four
//! resulting states so callers never interpret the flag themselves.

use tracing::debug;

use crate::core::config::ShellConfig;
use crate::core::viewport::{Breakpoint, ViewportChange, ViewportClass};
use crate::routes::HOME_PATH;

use super::layout::LayoutDecision;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    /// Wide viewport, full-width sidebar.
    WideExpanded,
    /// Wide viewport, icon-only sidebar.
    WideCollapsed,
    /// Narrow viewport, menu covers the whole screen.
    NarrowMenuOpen,
    /// Narrow viewport, menu hidden behind a header button.
    NarrowMenuClosed,
}

impl ShellMode {
    pub fn from_parts(class: ViewportClass, collapsed: bool) -> Self {
        match (class, collapsed) {
            (ViewportClass::Wide, false) => Self::WideExpanded,
            (ViewportClass::Wide, true) => Self::WideCollapsed,
            (ViewportClass::Narrow, false) => Self::NarrowMenuOpen,
            (ViewportClass::Narrow, true) => Self::NarrowMenuClosed,
        }
    }

    /// Raw flag value this mode corresponds to.
    pub fn collapsed(self) -> bool {
        matches!(self, Self::WideCollapsed | Self::NarrowMenuClosed)
    }

    pub fn viewport(self) -> ViewportClass {
        match self {
            Self::WideExpanded | Self::WideCollapsed => ViewportClass::Wide,
            Self::NarrowMenuOpen | Self::NarrowMenuClosed => ViewportClass::Narrow,
        }
    }

    pub fn is_narrow(self) -> bool {
        self.viewport().is_narrow()
    }
}

/// Inputs that drive the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Viewport(ViewportChange),
    /// Sidebar collapse trigger (wide).
    ToggleCollapsed,
    /// Header menu button (narrow).
    OpenMenu,
    /// "Back to content" button in the full-screen menu (narrow).
    CloseMenu,
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current_path: String,
    mode: ShellMode,
}

impl NavigationState {
    /// Initial state for a viewport of `width`: never collapsed.
    pub fn new(width: f64, breakpoint: Breakpoint, path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            mode: ShellMode::from_parts(breakpoint.classify(width), false),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn mode(&self) -> ShellMode {
        self.mode
    }

    pub fn collapsed(&self) -> bool {
        self.mode.collapsed()
    }

    pub fn is_narrow_viewport(&self) -> bool {
        self.mode.is_narrow()
    }

    pub fn is_home(&self) -> bool {
        self.current_path == HOME_PATH
    }

    pub fn apply(&mut self, event: ShellEvent) {
        let before = self.mode;
        match event {
            ShellEvent::Viewport(change) => self.apply_viewport(change),
            ShellEvent::ToggleCollapsed => self.set_collapsed(!self.collapsed()),
            ShellEvent::OpenMenu => self.set_collapsed(false),
            ShellEvent::CloseMenu => self.set_collapsed(true),
            ShellEvent::Navigate(path) => self.navigate(path),
        }
        if before != self.mode {
            debug!(from = ?before, to = ?self.mode, "shell mode changed");
        }
    }

    pub fn apply_viewport(&mut self, change: ViewportChange) {
        let collapsed = if change.resets_collapse() {
            false
        } else {
            self.collapsed()
        };
        self.mode = ShellMode::from_parts(change.class(), collapsed);
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.mode = ShellMode::from_parts(self.mode.viewport(), collapsed);
    }

    pub fn toggle_collapsed(&mut self) {
        self.apply(ShellEvent::ToggleCollapsed);
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.current_path {
            debug!(from = %self.current_path, to = %path, "route changed");
            self.current_path = path;
        }
    }

    /// Copy of this state showing `path`, for rendering before a pending
    /// `Navigate` has been applied.
    pub fn viewed_at(&self, path: &str) -> Self {
        if path == self.current_path {
            return self.clone();
        }
        Self {
            current_path: path.to_string(),
            mode: self.mode,
        }
    }

    pub fn layout(&self, config: &ShellConfig) -> LayoutDecision {
        LayoutDecision::derive(self, config)
    }
}
