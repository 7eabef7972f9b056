//! Browser window viewport provider (wasm32 only).

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::viewport::{ListenerHandle, ResizeListener, ViewportProvider};

const RESIZE_EVENT: &str = "resize";

/// Reads `window.innerWidth` and subscribes to the window `resize` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserViewport;

impl BrowserViewport {
    pub fn new() -> Self {
        Self
    }
}

fn inner_width(window: &web_sys::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|value| value.as_f64())
}

impl ViewportProvider for BrowserViewport {
    fn width(&self) -> f64 {
        web_sys::window()
            .as_ref()
            .and_then(inner_width)
            .unwrap_or(f64::INFINITY)
    }

    fn listen(&self, listener: ResizeListener) -> ListenerHandle {
        let Some(window) = web_sys::window() else {
            warn!("no browser window; resize notifications disabled");
            return ListenerHandle::inert();
        };

        let listener = Rc::new(RefCell::new(listener));
        let target = window.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(width) = inner_width(&target) {
                (listener.borrow_mut())(width);
            }
        });

        if let Err(err) = window
            .add_event_listener_with_callback(RESIZE_EVENT, callback.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to register window resize listener");
            return ListenerHandle::inert();
        }

        ListenerHandle::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback(RESIZE_EVENT, callback.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to remove window resize listener");
            }
            // `callback` is dropped here, after the browser no longer references it.
        })
    }
}
