use dioxus::prelude::*;
use tracing::warn;

use crate::components::use_language;
use crate::figure::{
    damped_oscillation, linspace, palette_color, sine_wave, subplot2grid, Figure, GridError, Panel,
    PlotKind, Series,
};

/// A `plt.subplot2grid` call: grid shape, 0-based location and spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub shape: (usize, usize),
    pub loc: (usize, usize),
    pub rowspan: usize,
    pub colspan: usize,
    pub kind: PlotKind,
}

impl Placement {
    const fn new(loc: (usize, usize), rowspan: usize, colspan: usize, kind: PlotKind) -> Self {
        Self {
            shape: (3, 3),
            loc,
            rowspan,
            colspan,
            kind,
        }
    }

    pub fn call(&self) -> String {
        format!(
            "subplot2grid(({}, {}), ({}, {}), rowspan={}, colspan={})",
            self.shape.0, self.shape.1, self.loc.0, self.loc.1, self.rowspan, self.colspan
        )
    }
}

pub(crate) const MOSAIC: [Placement; 5] = [
    Placement::new((0, 0), 1, 3, PlotKind::Line),
    Placement::new((1, 0), 1, 2, PlotKind::Bar),
    Placement::new((1, 2), 2, 1, PlotKind::Pie),
    Placement::new((2, 0), 1, 1, PlotKind::Scatter),
    Placement::new((2, 1), 1, 1, PlotKind::Line),
];

fn series_for(kind: PlotKind, index: usize) -> Vec<Series> {
    let xs = linspace(0.0, 10.0, 80);
    match kind {
        PlotKind::Line if index == 0 => vec![Series::new(
            "damped",
            palette_color(index),
            damped_oscillation(&xs),
        )],
        PlotKind::Line | PlotKind::Scatter => vec![Series::new(
            "wave",
            palette_color(index),
            sine_wave(&linspace(0.0, 6.0, 24), 1.5, index as f64),
        )],
        PlotKind::Bar => vec![Series::categorical(
            "bars",
            palette_color(index),
            &[4.0, 7.0, 3.0, 5.0, 6.0],
        )],
        PlotKind::Pie => [35.0, 25.0, 20.0, 20.0]
            .iter()
            .enumerate()
            .map(|(slice, &share)| Series::new(format!("slice {slice}"), palette_color(slice), vec![(0.0, share)]))
            .collect(),
    }
}

pub(crate) fn mosaic_panels(placements: &[Placement]) -> Result<Vec<Panel>, GridError> {
    placements
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let rect = subplot2grid(placement.shape, placement.loc, placement.rowspan, placement.colspan)?;
            Ok(Panel::new(rect, placement.kind, series_for(placement.kind, index)).titled(format!("ax{}", index + 1)))
        })
        .collect()
}

#[component]
pub fn CustomSubplots() -> Element {
    let _lang = use_language();

    let figure = match mosaic_panels(&MOSAIC) {
        Ok(panels) => rsx! { Figure { panels, height: 540 } },
        Err(err) => {
            warn!(%err, "could not lay out subplot2grid mosaic");
            rsx! { p { class: "page__error", {crate::t!("figure-error")} } }
        }
    };

    rsx! {
        section { class: "page page-custom",
            p { class: "page__lead", {crate::t!("custom-intro")} }
            {figure}

            h2 { {crate::t!("custom-calls-heading")} }
            ol { class: "code-list",
                for (index, placement) in MOSAIC.iter().enumerate() {
                    li { key: "{index}",
                        code { "ax{index + 1} = plt.{placement.call()}" }
                    }
                }
            }
        }
    }
}
