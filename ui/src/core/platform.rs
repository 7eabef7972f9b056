//! Platform detection and viewport provider selection.

use std::rc::Rc;

use tracing::debug;

use super::config::ShellConfig;
use super::viewport::ViewportProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Width assumed before the first layout measurement arrives on targets
    /// without a synchronous window query.
    pub fn assumed_width(self) -> f64 {
        match self {
            Self::Mobile => 390.0,
            Self::Web | Self::Desktop => 1280.0,
        }
    }
}

/// Pick the viewport provider for the running target.
///
/// Browsers get a live window listener. Native targets get a
/// [`ManualViewport`] that the shell feeds from its root element's resize
/// observations.
pub fn viewport_provider(config: &ShellConfig) -> Rc<dyn ViewportProvider> {
    let platform = Platform::current();

    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        debug!(?platform, "using browser viewport provider");
        Rc::new(super::browser::BrowserViewport::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let width = config
            .initial_width
            .unwrap_or_else(|| platform.assumed_width());
        debug!(?platform, width, "using measured viewport provider");
        Rc::new(super::viewport::ManualViewport::new(width))
    }
}
