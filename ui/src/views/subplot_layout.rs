use dioxus::prelude::*;
use tracing::warn;

use crate::components::use_language;
use crate::core::format::format_percent;
use crate::figure::{linspace, palette_color, Figure, GridError, GridSpec, Panel, PlotKind, Series};

/// Knobs of `plt.subplots_adjust` plus the first column's and row's ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spacing {
    pub wspace: f64,
    pub hspace: f64,
    pub first_width_ratio: f64,
    pub first_height_ratio: f64,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            wspace: 0.2,
            hspace: 0.2,
            first_width_ratio: 1.0,
            first_height_ratio: 1.0,
        }
    }
}

impl Spacing {
    pub fn grid(&self) -> Result<GridSpec, GridError> {
        GridSpec::new(2, 2)?
            .with_spacing(self.wspace, self.hspace)
            .with_width_ratios(vec![self.first_width_ratio, 1.0])?
            .with_height_ratios(vec![self.first_height_ratio, 1.0])
    }

    pub fn call(&self) -> String {
        format!(
            "plt.subplots_adjust(wspace={:.2}, hspace={:.2})",
            self.wspace, self.hspace
        )
    }
}

pub(crate) fn spaced_panels(spacing: &Spacing) -> Result<Vec<Panel>, GridError> {
    let grid = spacing.grid()?;
    let xs = linspace(0.0, 5.0, 40);
    Ok(grid
        .cells()
        .into_iter()
        .enumerate()
        .map(|(index, rect)| {
            let power = index as i32 + 1;
            let series = Series::sampled("power", palette_color(index), &xs, |x| x.powi(power));
            Panel::new(rect, PlotKind::Line, vec![series]).titled(format!("x^{power}"))
        })
        .collect())
}

fn parse_slider(evt: &FormEvent) -> Option<f64> {
    evt.value().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[component]
pub fn SubplotLayout() -> Element {
    let _lang = use_language();
    let mut spacing = use_signal(Spacing::default);
    let current = spacing();

    let figure = match spaced_panels(&current) {
        Ok(panels) => rsx! { Figure { panels } },
        Err(err) => {
            warn!(%err, ?current, "could not apply subplot spacing");
            rsx! { p { class: "page__error", {crate::t!("figure-error")} } }
        }
    };
    let wspace_label = format_percent(current.wspace);
    let hspace_label = format_percent(current.hspace);
    let ratio_label = format!("{:.1} : 1", current.first_width_ratio);
    let height_ratio_label = format!("{:.1} : 1", current.first_height_ratio);

    rsx! {
        section { class: "page page-layout",
            p { class: "page__lead", {crate::t!("layout-intro")} }

            div { class: "controls controls--stacked",
                label { class: "controls__field",
                    span { {crate::t!("control-wspace")} }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.05",
                        value: "{current.wspace}",
                        oninput: move |evt: FormEvent| {
                            if let Some(v) = parse_slider(&evt) {
                                spacing.with_mut(|s| s.wspace = v);
                            }
                        },
                    }
                    output { "{wspace_label}" }
                }
                label { class: "controls__field",
                    span { {crate::t!("control-hspace")} }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.05",
                        value: "{current.hspace}",
                        oninput: move |evt: FormEvent| {
                            if let Some(v) = parse_slider(&evt) {
                                spacing.with_mut(|s| s.hspace = v);
                            }
                        },
                    }
                    output { "{hspace_label}" }
                }
                label { class: "controls__field",
                    span { {crate::t!("control-width-ratio")} }
                    input {
                        r#type: "range",
                        min: "0.5",
                        max: "4",
                        step: "0.5",
                        value: "{current.first_width_ratio}",
                        oninput: move |evt: FormEvent| {
                            if let Some(v) = parse_slider(&evt) {
                                spacing.with_mut(|s| s.first_width_ratio = v);
                            }
                        },
                    }
                    output { "{ratio_label}" }
                }
                label { class: "controls__field",
                    span { {crate::t!("control-height-ratio")} }
                    input {
                        r#type: "range",
                        min: "0.5",
                        max: "4",
                        step: "0.5",
                        value: "{current.first_height_ratio}",
                        oninput: move |evt: FormEvent| {
                            if let Some(v) = parse_slider(&evt) {
                                spacing.with_mut(|s| s.first_height_ratio = v);
                            }
                        },
                    }
                    output { "{height_ratio_label}" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| spacing.set(Spacing::default()),
                    {crate::t!("control-reset")}
                }
            }

            pre { class: "code-block", "{current.call()}" }
            {figure}
        }
    }
}
