//! Subplot grid geometry.
//!
//! Positions are figure fractions with the origin at the bottom-left, the
//! same convention matplotlib uses: `left/right/bottom/top` bound the area
//! the grid occupies and `wspace/hspace` are gaps expressed as a fraction of
//! the average cell width/height.

use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("a grid needs at least one row and one column (got {nrows}x{ncols})")]
    EmptyGrid { nrows: usize, ncols: usize },
    #[error("subplot index {index} is outside 1..={count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("span rows {rows:?} cols {cols:?} does not fit a {nrows}x{ncols} grid")]
    SpanOutOfBounds {
        rows: Range<usize>,
        cols: Range<usize>,
        nrows: usize,
        ncols: usize,
    },
    #[error("expected {expected} ratios, got {found}")]
    RatioCount { expected: usize, found: usize },
    #[error("ratios must be finite and positive")]
    InvalidRatio,
}

/// Axes rectangle in figure fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        self.left < other.right() - EPS
            && other.left < self.right() - EPS
            && self.bottom < other.top() - EPS
            && other.bottom < self.top() - EPS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    nrows: usize,
    ncols: usize,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
    width_ratios: Vec<f64>,
    height_ratios: Vec<f64>,
}

impl GridSpec {
    pub fn new(nrows: usize, ncols: usize) -> Result<Self, GridError> {
        if nrows == 0 || ncols == 0 {
            return Err(GridError::EmptyGrid { nrows, ncols });
        }
        Ok(Self {
            nrows,
            ncols,
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
            width_ratios: vec![1.0; ncols],
            height_ratios: vec![1.0; nrows],
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn with_spacing(mut self, wspace: f64, hspace: f64) -> Self {
        self.wspace = wspace.max(0.0);
        self.hspace = hspace.max(0.0);
        self
    }

    pub fn with_width_ratios(mut self, ratios: Vec<f64>) -> Result<Self, GridError> {
        validate_ratios(&ratios, self.ncols)?;
        self.width_ratios = ratios;
        Ok(self)
    }

    pub fn with_height_ratios(mut self, ratios: Vec<f64>) -> Result<Self, GridError> {
        validate_ratios(&ratios, self.nrows)?;
        self.height_ratios = ratios;
        Ok(self)
    }

    /// `(left, right)` of every column.
    pub fn column_bounds(&self) -> Vec<(f64, f64)> {
        let offsets = track_offsets(self.right - self.left, self.wspace, &self.width_ratios);
        offsets
            .into_iter()
            .map(|(start, end)| (self.left + start, self.left + end))
            .collect()
    }

    /// `(bottom, top)` of every row, top row first.
    pub fn row_bounds(&self) -> Vec<(f64, f64)> {
        let offsets = track_offsets(self.top - self.bottom, self.hspace, &self.height_ratios);
        offsets
            .into_iter()
            .map(|(start, end)| (self.top - end, self.top - start))
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Rect, GridError> {
        self.span_from(row, 1, col, 1)
    }

    /// `span` from a top-left cell and extents; ends past `usize::MAX`
    /// are out of bounds like any other.
    fn span_from(
        &self,
        row: usize,
        rowspan: usize,
        col: usize,
        colspan: usize,
    ) -> Result<Rect, GridError> {
        match (row.checked_add(rowspan), col.checked_add(colspan)) {
            (Some(row_end), Some(col_end)) => self.span(row..row_end, col..col_end),
            _ => Err(GridError::SpanOutOfBounds {
                rows: row..row.saturating_add(rowspan),
                cols: col..col.saturating_add(colspan),
                nrows: self.nrows,
                ncols: self.ncols,
            }),
        }
    }

    /// Rectangle covering `rows` × `cols` (half-open ranges).
    pub fn span(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Rect, GridError> {
        if rows.is_empty() || cols.is_empty() || rows.end > self.nrows || cols.end > self.ncols {
            return Err(GridError::SpanOutOfBounds {
                rows,
                cols,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let columns = self.column_bounds();
        let row_bounds = self.row_bounds();
        let left = columns[cols.start].0;
        let right = columns[cols.end - 1].1;
        let top = row_bounds[rows.start].1;
        let bottom = row_bounds[rows.end - 1].0;
        Ok(Rect {
            left,
            bottom,
            width: right - left,
            height: top - bottom,
        })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> Vec<Rect> {
        let columns = self.column_bounds();
        let rows = self.row_bounds();
        rows.iter()
            .flat_map(|&(bottom, top)| {
                columns.iter().map(move |&(left, right)| Rect {
                    left,
                    bottom,
                    width: right - left,
                    height: top - bottom,
                })
            })
            .collect()
    }
}

fn validate_ratios(ratios: &[f64], expected: usize) -> Result<(), GridError> {
    if ratios.len() != expected {
        return Err(GridError::RatioCount {
            expected,
            found: ratios.len(),
        });
    }
    if ratios.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        return Err(GridError::InvalidRatio);
    }
    Ok(())
}

/// Start/end offsets of each track along a total length, separated by gaps
/// of `space` × the mean cell size.
fn track_offsets(total: f64, space: f64, ratios: &[f64]) -> Vec<(f64, f64)> {
    let n = ratios.len() as f64;
    let mean_cell = total / (n + space * (n - 1.0));
    let gap = space * mean_cell;
    let ratio_sum: f64 = ratios.iter().sum();
    let scale = mean_cell * n / ratio_sum;

    let mut cursor = 0.0;
    let mut tracks = Vec::with_capacity(ratios.len());
    for (i, ratio) in ratios.iter().enumerate() {
        if i > 0 {
            cursor += gap;
        }
        let start = cursor;
        cursor += ratio * scale;
        tracks.push((start, cursor));
    }
    tracks
}

/// `plt.subplot(nrows, ncols, index)` with a 1-based, row-major index.
pub fn subplot(nrows: usize, ncols: usize, index: usize) -> Result<Rect, GridError> {
    let grid = GridSpec::new(nrows, ncols)?;
    let count = nrows.saturating_mul(ncols);
    if index == 0 || index > count {
        return Err(GridError::IndexOutOfRange { index, count });
    }
    let zero = index - 1;
    grid.cell(zero / ncols, zero % ncols)
}

/// `plt.subplot2grid(shape, loc, rowspan, colspan)` with a 0-based `loc`.
pub fn subplot2grid(
    shape: (usize, usize),
    loc: (usize, usize),
    rowspan: usize,
    colspan: usize,
) -> Result<Rect, GridError> {
    let grid = GridSpec::new(shape.0, shape.1)?;
    grid.span_from(loc.0, rowspan, loc.1, colspan)
}
