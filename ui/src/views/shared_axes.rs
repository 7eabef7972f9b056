use dioxus::prelude::*;
use tracing::warn;

use crate::components::use_language;
use crate::figure::{linspace, palette_color, Bounds, Figure, GridError, GridSpec, Panel, PlotKind, Series};

const ROWS: usize = 2;
const COLS: usize = 2;

/// Four panels on deliberately different data ranges.
fn base_panels() -> Result<Vec<Panel>, GridError> {
    let grid = GridSpec::new(ROWS, COLS)?;
    let ranges = [(0.0, 4.0, 1.0), (0.0, 8.0, 2.0), (-2.0, 4.0, 0.5), (1.0, 10.0, 3.0)];
    ranges
        .iter()
        .enumerate()
        .map(|(index, &(start, end, amplitude))| {
            let rect = grid.cell(index / COLS, index % COLS)?;
            let xs = linspace(start, end, 50);
            let series = Series::sampled("data", palette_color(index), &xs, |x| amplitude * (x * 1.3).sin() + x / 4.0);
            let kind = if index % 2 == 0 { PlotKind::Line } else { PlotKind::Scatter };
            Ok(Panel::new(rect, kind, vec![series]).titled(format!("ax[{}, {}]", index / COLS, index % COLS)))
        })
        .collect()
}

/// Apply `sharex` / `sharey`: shared axes take the union of every panel's
/// range, and tick labels stay only on the bottom row (x) or first column (y).
pub(crate) fn share_axes(panels: &mut [Panel], ncols: usize, sharex: bool, sharey: bool) {
    if panels.is_empty() || ncols == 0 {
        return;
    }
    let fitted: Vec<Option<Bounds>> = panels.iter().map(Panel::data_bounds).collect();
    let Some(all) = fitted.iter().flatten().copied().reduce(|a, b| a.union(&b)) else {
        return;
    };
    let nrows = panels.len().div_ceil(ncols);

    for (index, (panel, own)) in panels.iter_mut().zip(fitted).enumerate() {
        let Some(mut bounds) = own else { continue };
        if sharex {
            bounds.x_min = all.x_min;
            bounds.x_max = all.x_max;
            panel.show_x_labels = index / ncols == nrows - 1;
        }
        if sharey {
            bounds.y_min = all.y_min;
            bounds.y_max = all.y_max;
            panel.show_y_labels = index % ncols == 0;
        }
        if sharex || sharey {
            panel.bounds = Some(bounds);
        }
    }
}

pub(crate) fn shared_panels(sharex: bool, sharey: bool) -> Result<Vec<Panel>, GridError> {
    let mut panels = base_panels()?;
    share_axes(&mut panels, COLS, sharex, sharey);
    Ok(panels)
}

#[component]
pub fn SharedAxes() -> Element {
    let _lang = use_language();
    let mut sharex = use_signal(|| true);
    let mut sharey = use_signal(|| false);

    let figure = match shared_panels(sharex(), sharey()) {
        Ok(panels) => rsx! { Figure { panels } },
        Err(err) => {
            warn!(%err, "could not lay out shared-axes grid");
            rsx! { p { class: "page__error", {crate::t!("figure-error")} } }
        }
    };
    let call = format!(
        "fig, axes = plt.subplots({ROWS}, {COLS}, sharex={}, sharey={})",
        python_bool(sharex()),
        python_bool(sharey())
    );

    rsx! {
        section { class: "page page-shared",
            p { class: "page__lead", {crate::t!("shared-intro")} }

            div { class: "controls",
                label { class: "controls__toggle",
                    input {
                        r#type: "checkbox",
                        checked: sharex(),
                        onchange: move |evt: FormEvent| sharex.set(evt.checked()),
                    }
                    span { {crate::t!("control-sharex")} }
                }
                label { class: "controls__toggle",
                    input {
                        r#type: "checkbox",
                        checked: sharey(),
                        onchange: move |evt: FormEvent| sharey.set(evt.checked()),
                    }
                    span { {crate::t!("control-sharey")} }
                }
            }

            pre { class: "code-block", "{call}" }
            {figure}
        }
    }
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
