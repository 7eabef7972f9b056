//! Figure geometry and SVG rendering behind the demo pages.

pub mod grid;
pub mod series;
mod svg;

pub use grid::{subplot, subplot2grid, GridError, GridSpec, Rect};
pub use series::{damped_oscillation, linspace, palette_color, sine_wave, Bounds, Series, PALETTE};
pub use svg::{Figure, Panel, PlotKind};
