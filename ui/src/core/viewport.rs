//! Viewport classification and resize notification plumbing.
//!
//! The shell never reads the host window directly. It receives a
//! [`ViewportProvider`] (browser window, native window measurements, or a
//! scripted fake in tests) and wraps it in a [`ViewportMonitor`], which turns
//! raw width notifications into [`ViewportChange`] events.
//!
//! Listener lifetime is tied to [`ListenerHandle`]: dropping the handle
//! deregisters the listener, so a monitor dropped on any path (normal
//! teardown or unwinding) leaves nothing registered behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

/// Widths at or below this many logical pixels are considered narrow.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Coarse viewport class the shell lays itself out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

/// Boundary between the narrow and wide classes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    max_narrow_px: f64,
}

impl Breakpoint {
    pub const fn new(max_narrow_px: f64) -> Self {
        Self { max_narrow_px }
    }

    pub fn max_narrow_px(&self) -> f64 {
        self.max_narrow_px
    }

    /// `width <= breakpoint` is narrow. NaN widths count as wide.
    pub fn classify(&self, width: f64) -> ViewportClass {
        if width <= self.max_narrow_px {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(NARROW_BREAKPOINT_PX)
    }
}

/// Classify against the default 768px breakpoint.
pub fn classify(width: f64) -> ViewportClass {
    Breakpoint::default().classify(width)
}

/// A crossing of the breakpoint, emitted once per actual crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportChange {
    BecameNarrow,
    /// Narrow to wide. Receivers must clear the collapsed flag.
    BecameWide,
}

impl ViewportChange {
    pub fn class(self) -> ViewportClass {
        match self {
            Self::BecameNarrow => ViewportClass::Narrow,
            Self::BecameWide => ViewportClass::Wide,
        }
    }

    pub fn resets_collapse(self) -> bool {
        matches!(self, Self::BecameWide)
    }
}

/// Callback invoked with the new viewport width on every resize notification.
pub type ResizeListener = Box<dyn FnMut(f64)>;

/// Registration token for a resize listener. Dropping it deregisters.
#[must_use = "dropping the handle immediately deregisters the listener"]
pub struct ListenerHandle {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Handle for a provider that never notifies (nothing to release).
    pub fn inert() -> Self {
        Self { detach: None }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Source of viewport width and resize notifications.
pub trait ViewportProvider {
    /// Current viewport width in logical pixels.
    fn width(&self) -> f64;

    /// Register `listener` for resize notifications until the handle drops.
    fn listen(&self, listener: ResizeListener) -> ListenerHandle;

    /// Feed a width measured by the rendering layer (element resize
    /// observers on native targets). Providers with their own event source
    /// ignore it.
    fn report_width(&self, _width: f64) {}
}

/// In-memory provider driven by explicit [`ManualViewport::resize`] calls.
///
/// Native launchers feed it from layout measurements; tests script it.
#[derive(Clone, Default)]
pub struct ManualViewport {
    inner: Rc<RefCell<ManualInner>>,
}

#[derive(Default)]
struct ManualInner {
    width: f64,
    next_id: u64,
    listeners: Vec<(u64, ResizeListener)>,
    // Ids detached while their listener was checked out for dispatch.
    detached_during_dispatch: Vec<u64>,
    dispatching: bool,
}

impl ManualViewport {
    pub fn new(width: f64) -> Self {
        let viewport = Self::default();
        viewport.inner.borrow_mut().width = width;
        viewport
    }

    /// Set the width and notify every registered listener.
    pub fn resize(&self, width: f64) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.width = width;
            inner.dispatching = true;
            std::mem::take(&mut inner.listeners)
        };

        let mut dispatch = Dispatch {
            inner: &self.inner,
            listeners,
        };
        for (_, listener) in dispatch.listeners.iter_mut() {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Listeners checked out for one `resize` call. Dropping it puts them back,
/// so a panicking listener cannot strand the list or the dispatch flag.
struct Dispatch<'a> {
    inner: &'a RefCell<ManualInner>,
    listeners: Vec<(u64, ResizeListener)>,
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        let detached = std::mem::take(&mut inner.detached_during_dispatch);
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.retain(|(id, _)| !detached.contains(id));
        // Listeners registered during dispatch were pushed onto the now-empty list.
        listeners.append(&mut inner.listeners);
        inner.listeners = listeners;
        inner.dispatching = false;
    }
}

impl ViewportProvider for ManualViewport {
    fn width(&self) -> f64 {
        self.inner.borrow().width
    }

    fn listen(&self, listener: ResizeListener) -> ListenerHandle {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        ListenerHandle::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let mut inner = inner.borrow_mut();
            let before = inner.listeners.len();
            inner.listeners.retain(|(existing, _)| *existing != id);
            if inner.listeners.len() == before && inner.dispatching {
                inner.detached_during_dispatch.push(id);
            }
        })
    }

    fn report_width(&self, width: f64) {
        if self.width() != width {
            self.resize(width);
        }
    }
}

/// Classification state carried between resize notifications.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoint: Breakpoint,
    class: ViewportClass,
}

impl ViewportTracker {
    pub fn new(breakpoint: Breakpoint, initial_width: f64) -> Self {
        Self {
            breakpoint,
            class: breakpoint.classify(initial_width),
        }
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Evaluate one resize notification; `Some` only when the class flips.
    pub fn observe(&mut self, width: f64) -> Option<ViewportChange> {
        let next = self.breakpoint.classify(width);
        if next == self.class {
            return None;
        }
        self.class = next;
        Some(match next {
            ViewportClass::Narrow => ViewportChange::BecameNarrow,
            ViewportClass::Wide => ViewportChange::BecameWide,
        })
    }
}

/// Resize subscription that reports breakpoint crossings.
///
/// The underlying listener stays registered for exactly as long as the
/// monitor is alive.
pub struct ViewportMonitor {
    initial_class: ViewportClass,
    last_class: Rc<Cell<ViewportClass>>,
    _handle: ListenerHandle,
}

impl ViewportMonitor {
    pub fn attach<F>(provider: &dyn ViewportProvider, breakpoint: Breakpoint, mut on_change: F) -> Self
    where
        F: FnMut(ViewportChange) + 'static,
    {
        let mut tracker = ViewportTracker::new(breakpoint, provider.width());
        let initial_class = tracker.class();
        let last_class = Rc::new(Cell::new(initial_class));
        let shared = last_class.clone();

        let handle = provider.listen(Box::new(move |width| {
            if let Some(change) = tracker.observe(width) {
                debug!(width, ?change, "viewport crossed breakpoint");
                shared.set(change.class());
                on_change(change);
            }
        }));
        debug!(?initial_class, "viewport monitor attached");

        Self {
            initial_class,
            last_class,
            _handle: handle,
        }
    }

    pub fn initial_class(&self) -> ViewportClass {
        self.initial_class
    }

    pub fn current_class(&self) -> ViewportClass {
        self.last_class.get()
    }
}

impl Drop for ViewportMonitor {
    fn drop(&mut self) {
        debug!("viewport monitor detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_monitor(viewport: &ManualViewport) -> (ViewportMonitor, Rc<RefCell<Vec<ViewportChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let monitor = ViewportMonitor::attach(viewport, Breakpoint::default(), move |change| {
            sink.borrow_mut().push(change);
        });
        (monitor, seen)
    }

    #[test]
    fn classify_uses_inclusive_breakpoint() {
        assert_eq!(classify(0.0), ViewportClass::Narrow);
        assert_eq!(classify(500.0), ViewportClass::Narrow);
        assert_eq!(classify(768.0), ViewportClass::Narrow);
        assert_eq!(classify(768.5), ViewportClass::Wide);
        assert_eq!(classify(769.0), ViewportClass::Wide);
        assert_eq!(classify(1920.0), ViewportClass::Wide);
    }

    #[test]
    fn classify_matches_threshold_for_every_integer_width() {
        for w in 0..=2_000u32 {
            let expected = if w <= 768 {
                ViewportClass::Narrow
            } else {
                ViewportClass::Wide
            };
            assert_eq!(classify(f64::from(w)), expected, "width {w}");
        }
    }

    #[test]
    fn custom_breakpoint_is_respected() {
        let bp = Breakpoint::new(600.0);
        assert_eq!(bp.classify(600.0), ViewportClass::Narrow);
        assert_eq!(bp.classify(700.0), ViewportClass::Wide);
    }

    #[test]
    fn monitor_reports_initial_class() {
        let narrow = ManualViewport::new(400.0);
        let (monitor, _) = recording_monitor(&narrow);
        assert_eq!(monitor.initial_class(), ViewportClass::Narrow);

        let wide = ManualViewport::new(1024.0);
        let (monitor, _) = recording_monitor(&wide);
        assert_eq!(monitor.initial_class(), ViewportClass::Wide);
    }

    #[test]
    fn monitor_emits_once_per_crossing() {
        let viewport = ManualViewport::new(1024.0);
        let (monitor, seen) = recording_monitor(&viewport);

        for w in [1000.0, 900.0, 800.0, 769.0] {
            viewport.resize(w);
        }
        assert!(seen.borrow().is_empty());

        viewport.resize(768.0);
        viewport.resize(700.0);
        viewport.resize(320.0);
        assert_eq!(*seen.borrow(), vec![ViewportChange::BecameNarrow]);
        assert_eq!(monitor.current_class(), ViewportClass::Narrow);

        viewport.resize(1200.0);
        viewport.resize(1300.0);
        assert_eq!(
            *seen.borrow(),
            vec![ViewportChange::BecameNarrow, ViewportChange::BecameWide]
        );
    }

    #[test]
    fn monitor_never_drops_a_jump_across_the_boundary() {
        let viewport = ManualViewport::new(300.0);
        let (_monitor, seen) = recording_monitor(&viewport);
        viewport.resize(2000.0);
        viewport.resize(10.0);
        viewport.resize(2000.0);
        assert_eq!(
            *seen.borrow(),
            vec![
                ViewportChange::BecameWide,
                ViewportChange::BecameNarrow,
                ViewportChange::BecameWide,
            ]
        );
        assert!(seen.borrow()[0].resets_collapse());
        assert!(!seen.borrow()[1].resets_collapse());
    }

    #[test]
    fn dropping_monitor_deregisters_listener() {
        let viewport = ManualViewport::new(1024.0);
        let (monitor, seen) = recording_monitor(&viewport);
        assert_eq!(viewport.listener_count(), 1);

        drop(monitor);
        assert_eq!(viewport.listener_count(), 0);

        viewport.resize(300.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn listener_is_released_when_owner_unwinds() {
        let viewport = ManualViewport::new(1024.0);
        let probe = viewport.clone();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _monitor = ViewportMonitor::attach(&probe, Breakpoint::default(), |_| {});
            assert_eq!(probe.listener_count(), 1);
            panic!("teardown during render");
        }));

        assert!(outcome.is_err());
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn handle_dropped_during_dispatch_is_not_restored() {
        let viewport = ManualViewport::new(1024.0);
        let slot: Rc<RefCell<Option<ListenerHandle>>> = Rc::new(RefCell::new(None));
        let inner_slot = slot.clone();

        let handle = viewport.listen(Box::new(move |_| {
            inner_slot.borrow_mut().take();
        }));
        slot.borrow_mut().replace(handle);
        assert_eq!(viewport.listener_count(), 1);

        viewport.resize(500.0);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn panicking_listener_leaves_registrations_intact() {
        let viewport = ManualViewport::new(1024.0);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _counting = viewport.listen(Box::new(move |_| counter.set(counter.get() + 1)));
        let failing = viewport.listen(Box::new(|width| {
            if width < 600.0 {
                panic!("listener failed at {width}");
            }
        }));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| viewport.resize(500.0)));
        assert!(outcome.is_err());
        assert_eq!(viewport.listener_count(), 2);
        assert_eq!(hits.get(), 1);

        viewport.resize(900.0);
        assert_eq!(hits.get(), 2);
        assert_eq!(viewport.width(), 900.0);

        drop(failing);
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn report_width_only_notifies_on_change() {
        let viewport = ManualViewport::new(1024.0);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _handle = viewport.listen(Box::new(move |_| counter.set(counter.get() + 1)));

        viewport.report_width(1024.0);
        assert_eq!(hits.get(), 0);
        viewport.report_width(640.0);
        assert_eq!(hits.get(), 1);
        assert_eq!(viewport.width(), 640.0);
    }
}
