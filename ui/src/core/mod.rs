//! Platform-agnostic plumbing shared by the shell and the demo pages.

pub mod config;
pub mod format;
pub mod platform;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod browser;
