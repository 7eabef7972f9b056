use dioxus::prelude::*;
use tracing::warn;

use crate::components::use_language;
use crate::figure::{
    linspace, palette_color, sine_wave, subplot, Figure, GridError, GridSpec, Panel, PlotKind,
    Series,
};

const GRID_CHOICES: [usize; 3] = [1, 2, 3];
const KIND_CYCLE: [PlotKind; 3] = [PlotKind::Line, PlotKind::Bar, PlotKind::Scatter];

/// One panel per `plt.subplot(nrows, ncols, index)` call, cycling plot kinds.
pub(crate) fn fixed_panels(nrows: usize, ncols: usize) -> Result<Vec<Panel>, GridError> {
    GridSpec::new(nrows, ncols)?;
    let xs = linspace(0.0, 2.0 * std::f64::consts::PI, 40);
    (1..=nrows * ncols)
        .map(|index| {
            let rect = subplot(nrows, ncols, index)?;
            let color = palette_color(index - 1);
            let kind = KIND_CYCLE[(index - 1) % KIND_CYCLE.len()];
            let series = match kind {
                PlotKind::Bar => {
                    let heights: Vec<f64> = (1..=5).map(|k| ((k * index) % 7 + 1) as f64).collect();
                    Series::categorical("bars", color, &heights)
                }
                _ => Series::new("wave", color, sine_wave(&xs, 1.0, index as f64 * 0.5)),
            };
            Ok(Panel::new(rect, kind, vec![series]).titled(format!("subplot({nrows}, {ncols}, {index})")))
        })
        .collect()
}

#[component]
pub fn FixedSubplots() -> Element {
    let _lang = use_language();
    let mut nrows = use_signal(|| 2usize);
    let mut ncols = use_signal(|| 2usize);

    let figure = match fixed_panels(nrows(), ncols()) {
        Ok(panels) => rsx! { Figure { panels } },
        Err(err) => {
            warn!(%err, "could not lay out fixed subplots");
            rsx! { p { class: "page__error", {crate::t!("figure-error")} } }
        }
    };
    let count = nrows() * ncols();

    rsx! {
        section { class: "page page-fixed",
            p { class: "page__lead", {crate::t!("fixed-intro")} }

            div { class: "controls",
                label { class: "controls__field",
                    span { {crate::t!("control-rows")} }
                    select {
                        value: "{nrows()}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(n) = evt.value().parse() {
                                nrows.set(n);
                            }
                        },
                        for n in GRID_CHOICES {
                            option { key: "{n}", value: "{n}", "{n}" }
                        }
                    }
                }
                label { class: "controls__field",
                    span { {crate::t!("control-cols")} }
                    select {
                        value: "{ncols()}",
                        oninput: move |evt: FormEvent| {
                            if let Ok(n) = evt.value().parse() {
                                ncols.set(n);
                            }
                        },
                        for n in GRID_CHOICES {
                            option { key: "{n}", value: "{n}", "{n}" }
                        }
                    }
                }
            }

            p { class: "page__note", {crate::t!("fixed-grid-shape", rows = nrows(), cols = ncols(), count = count)} }

            {figure}
        }
    }
}
