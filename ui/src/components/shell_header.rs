use dioxus::prelude::*;

use crate::i18n;
use crate::routes::{IconId, HOME_PATH};
use crate::shell::{LayoutDecision, ShellEvent};
use crate::t;

use super::app_shell::nav_link;
use super::icon::Icon;

#[component]
pub fn ShellHeader(
    layout: LayoutDecision,
    title: String,
    current_path: String,
    on_event: EventHandler<ShellEvent>,
) -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the launcher provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let header_style = layout.header_style();
    let back_home = if layout.show_back_home {
        let body = rsx! {
            Icon { id: IconId::ArrowLeft }
            span { {t!("header-back-home")} }
        };
        Some(nav_link(HOME_PATH, "button button--ghost shell-header__home".to_string(), body))
    } else {
        None
    };

    rsx! {
        header {
            id: "shell-header",
            class: "shell-header",
            style: "{header_style}",

            if layout.show_menu_button {
                button {
                    r#type: "button",
                    class: "button button--ghost shell-header__menu",
                    aria_label: t!("header-open-menu"),
                    onclick: move |_| on_event.call(ShellEvent::OpenMenu),
                    Icon { id: IconId::Menu }
                }
            }

            // Keyed by path so the title re-runs its entry animation on navigation.
            div { key: "{current_path}", class: "shell-header__title",
                h3 { "{title}" }
            }

            div { class: "shell-header__actions",
                if let Some(link) = back_home {
                    {link}
                }

                if show_switcher {
                    div { class: "shell-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
