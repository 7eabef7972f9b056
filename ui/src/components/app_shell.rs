use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::core::config::ShellConfig;
use crate::core::platform;
use crate::core::viewport::{ViewportMonitor, ViewportProvider};
use crate::i18n;
use crate::routes::RouteRegistry;
use crate::shell::{NavigationState, ShellEvent, ShellMode, SidebarPresentation};

use super::shell_header::ShellHeader;
use super::sidebar::Sidebar;

/// Platform link factory.
///
/// `ui` does not know each platform's `Route` enum, so launchers register a
/// `NavBuilder` whose `link` turns a route path into a router `Link` that
/// wraps the supplied body (icon + label) and carries the supplied class.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::app_shell::{NavBuilder, register_nav};
/// fn nav_link(path: &'static str, class: String, body: Element) -> Element {
///     let to = path.parse::<Route>().unwrap_or(Route::Home {});
///     rsx!(Link { class, to, {body} })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder the shell falls back to plain anchors, which
/// navigate with a full page load.
pub struct NavBuilder {
    pub link: fn(path: &'static str, class: String, body: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("navigation builder already registered; keeping the first one");
    }
}

pub(crate) fn nav_link(path: &'static str, class: String, body: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(path, class, body),
        None => rsx! {
            a { class, href: path, {body} }
        },
    }
}

/// Language currently shown, subscribing the caller to changes made through
/// the header switcher.
pub fn use_language() -> String {
    let fallback = use_signal(i18n::current_language);
    let code = try_use_context::<Signal<String>>().unwrap_or(fallback);
    code()
}

fn mode_modifier(mode: ShellMode) -> &'static str {
    match mode {
        ShellMode::WideExpanded => "wide-expanded",
        ShellMode::WideCollapsed => "wide-collapsed",
        ShellMode::NarrowMenuOpen => "narrow-menu-open",
        ShellMode::NarrowMenuClosed => "narrow-menu-closed",
    }
}

/// Responsive navigation shell: sidebar, header and the routed page.
///
/// `current_path` is the router's current path; `children` is the routed
/// page (normally an `Outlet`). The page is only mounted while the
/// full-screen narrow menu is closed.
///
/// The viewport comes from an `Rc<dyn ViewportProvider>` in context when one
/// is provided, otherwise from [`platform::viewport_provider`].
#[component]
pub fn AppShell(current_path: String, children: Element) -> Element {
    i18n::init();
    let _lang = use_language();

    let config = try_use_context::<ShellConfig>().unwrap_or_default();
    let injected = try_use_context::<Rc<dyn ViewportProvider>>();
    let provider = use_hook(|| injected.unwrap_or_else(|| platform::viewport_provider(&config)));

    let mut nav = use_signal({
        let provider = provider.clone();
        let breakpoint = config.breakpoint();
        let path = current_path.clone();
        move || NavigationState::new(provider.width(), breakpoint, path)
    });

    // Every transition goes through one queue so each event is applied whole.
    let shell = use_coroutine(move |mut rx: UnboundedReceiver<ShellEvent>| async move {
        while let Some(event) = rx.next().await {
            nav.with_mut(|state| state.apply(event));
        }
    });

    let monitor = use_hook(|| {
        let tx = shell.tx();
        let monitor = ViewportMonitor::attach(provider.as_ref(), config.breakpoint(), move |change| {
            if tx.unbounded_send(ShellEvent::Viewport(change)).is_err() {
                warn!(?change, "shell event queue closed; viewport change dropped");
            }
        });
        Rc::new(RefCell::new(Some(monitor)))
    });
    use_drop(move || {
        monitor.borrow_mut().take();
    });

    use_effect(use_reactive((&current_path,), move |(path,)| {
        shell.send(ShellEvent::Navigate(path));
    }));

    // The router has already switched pages when the prop changes; render
    // against it now and let the queued Navigate update the stored state.
    let state = nav().viewed_at(&current_path);
    let layout = state.layout(&config);
    let info = RouteRegistry::builtin().lookup(state.current_path());
    let brand = i18n::message(layout.brand.message_id());
    let page_key = state.current_path().to_string();
    let modifier = mode_modifier(layout.mode);
    let content_style = layout.content_style();
    let measured = provider.clone();

    rsx! {
        div {
            class: "shell shell--{modifier}",
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.get_border_box_size() {
                    measured.report_width(size.width);
                }
            },

            if layout.sidebar != SidebarPresentation::Hidden {
                Sidebar {
                    layout: layout.clone(),
                    current_path: page_key.clone(),
                    brand,
                    on_event: move |event: ShellEvent| shell.send(event),
                }
            }

            if layout.header_visible {
                ShellHeader {
                    layout: layout.clone(),
                    title: info.title,
                    current_path: page_key.clone(),
                    on_event: move |event: ShellEvent| shell.send(event),
                }
            }

            if layout.content_slot.is_rendered() {
                main {
                    class: "shell-content",
                    style: "{content_style}",
                    div { key: "{page_key}", class: "shell-content__page", {children} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use futures_util::FutureExt;

    use super::*;
    use crate::core::viewport::ManualViewport;
    use crate::routes::HOME_PATH;

    /// Page lifecycle events seen under the shell.
    #[derive(Clone, Default)]
    struct PageLog(Rc<RefCell<Vec<String>>>);

    impl PageLog {
        fn push(&self, entry: String) {
            self.0.borrow_mut().push(entry);
        }

        fn entries(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    /// Records mounts, drops and any render where it is asked to show a
    /// different page than the one it was mounted for.
    #[component]
    fn RecordingPage(path: String) -> Element {
        let log = use_context::<PageLog>();
        let mounted_for = use_hook({
            let log = log.clone();
            let path = path.clone();
            move || {
                log.push(format!("mount {path}"));
                path
            }
        });
        if mounted_for != path {
            log.push(format!("stale {mounted_for} -> {path}"));
        }
        use_drop({
            let log = log.clone();
            let mounted_for = mounted_for.clone();
            move || log.push(format!("drop {mounted_for}"))
        });
        rsx! { p { "{path}" } }
    }

    #[derive(Clone)]
    struct Harness {
        viewport: ManualViewport,
        log: PageLog,
        path_slot: Rc<Cell<Option<Signal<String>>>>,
    }

    fn harness(props: Harness) -> Element {
        let viewport = props.viewport.clone();
        use_context_provider(move || Rc::new(viewport) as Rc<dyn ViewportProvider>);
        use_context_provider(|| props.log.clone());
        let path = use_signal(|| HOME_PATH.to_string());
        props.path_slot.set(Some(path));

        rsx! {
            AppShell { current_path: path(),
                RecordingPage { path: path() }
            }
        }
    }

    fn mount(width: f64) -> (VirtualDom, Harness) {
        let props = Harness {
            viewport: ManualViewport::new(width),
            log: PageLog::default(),
            path_slot: Rc::new(Cell::new(None)),
        };
        let mut dom = VirtualDom::new_with_props(harness, props.clone());
        dom.rebuild_in_place();
        settle(&mut dom);
        (dom, props)
    }

    /// Run queued tasks and effects until nothing is left to render.
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..16 {
            if dom.wait_for_work().now_or_never().is_none() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[test]
    fn injected_viewport_drives_the_shell_and_is_released() {
        crate::i18n::init();
        let (mut dom, props) = mount(1024.0);
        assert_eq!(props.viewport.listener_count(), 1);
        assert_eq!(props.log.entries(), vec!["mount /"]);

        // Narrowing while expanded opens the full-screen menu, which
        // suppresses the content slot.
        props.viewport.resize(500.0);
        settle(&mut dom);
        assert_eq!(props.log.entries(), vec!["mount /", "drop /"]);

        drop(dom);
        assert_eq!(props.viewport.listener_count(), 0);
    }

    #[test]
    fn route_change_mounts_the_new_page_once() {
        crate::i18n::init();
        let (mut dom, props) = mount(1024.0);
        let path = props.path_slot.get().expect("harness rendered");

        dom.in_runtime(|| {
            let mut path = path;
            path.set("/layout".to_string());
        });
        settle(&mut dom);

        let entries = props.log.entries();
        assert!(
            !entries.iter().any(|entry| entry.starts_with("stale")),
            "page rendered for the wrong route: {entries:?}"
        );
        assert!(entries.contains(&"drop /".to_string()), "{entries:?}");
        assert_eq!(
            entries.iter().filter(|entry| *entry == "mount /layout").count(),
            1,
            "{entries:?}"
        );
    }
}
