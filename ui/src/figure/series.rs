//! Sample data and axis ranges for the demo figures.

use std::f64::consts::PI;

/// Default color cycle (matplotlib "tab10").
pub const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: &'static str, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }

    /// Sample `f` over `xs`.
    pub fn sampled(
        label: impl Into<String>,
        color: &'static str,
        xs: &[f64],
        f: impl Fn(f64) -> f64,
    ) -> Self {
        Self::new(label, color, xs.iter().map(|&x| (x, f(x))).collect())
    }

    /// Values placed at x = 1, 2, 3, ...
    pub fn categorical(label: impl Into<String>, color: &'static str, values: &[f64]) -> Self {
        Self::new(
            label,
            color,
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| ((i + 1) as f64, v))
                .collect(),
        )
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.points)
    }
}

/// Data-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn of_points(points: &[(f64, f64)]) -> Option<Self> {
        let mut finite = points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = finite.next()?;
        Some(finite.fold(
            Self {
                x_min: x0,
                x_max: x0,
                y_min: y0,
                y_max: y0,
            },
            |acc, &(x, y)| Self {
                x_min: acc.x_min.min(x),
                x_max: acc.x_max.max(x),
                y_min: acc.y_min.min(y),
                y_max: acc.y_max.max(y),
            },
        ))
    }

    pub fn of_series<'a>(series: impl IntoIterator<Item = &'a Series>) -> Option<Self> {
        series
            .into_iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| a.union(&b))
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Widen each axis by `fraction` of its span (matplotlib's default
    /// margins are 5%). Degenerate spans get ±0.5.
    pub fn padded(&self, fraction: f64) -> Bounds {
        let (x_min, x_max) = pad_axis(self.x_min, self.x_max, fraction);
        let (y_min, y_max) = pad_axis(self.y_min, self.y_max, fraction);
        Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Same bounds with the y-axis stretched to include zero (bar charts).
    pub fn including_zero_y(&self) -> Bounds {
        Bounds {
            y_min: self.y_min.min(0.0),
            y_max: self.y_max.max(0.0),
            ..*self
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

fn pad_axis(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min - span * fraction, max + span * fraction)
    }
}

/// Round tick positions (1, 2, 2.5, 5 × 10ⁿ steps) inside `[min, max]`,
/// aiming for roughly `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let raw_step = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

pub fn sine_wave(xs: &[f64], frequency: f64, phase: f64) -> Vec<(f64, f64)> {
    xs.iter()
        .map(|&x| (x, (frequency * x + phase).sin()))
        .collect()
}

pub fn damped_oscillation(xs: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .map(|&x| (x, (-x / 3.0).exp() * (2.0 * PI * x / 2.5).cos()))
        .collect()
}
