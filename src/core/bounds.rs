//! Geometry helpers: value extent, canvas shape + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};
use tracing::trace;

use crate::core::{
    constants::{FALLBACK_COLUMNS, FALLBACK_ROWS, MAX_CELLS, RANGE_PRECISION},
    data::Series,
    error::PlotError,
};

/// Round half to even, the way the row arithmetic has always been done.
#[inline]
#[must_use]
pub fn round_even(v: f64) -> f64 {
    v.round_ties_even()
}

/// Inclusive value extent of the enabled series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Min/max over the primary and (if present) auxiliary series.
    /// `None` for an empty series.
    #[must_use]
    pub fn of(series: &Series<'_>) -> Option<Self> {
        let values = series
            .primary
            .iter()
            .chain(series.auxiliary.unwrap_or_default());
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for &v in values {
            low = low.min(v);
            high = high.max(v);
        }
        (low <= high).then_some(Self {
            min: low,
            max: high,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_pair((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }

    /// Height of the canvas in value units.
    ///
    /// * baseline: `max - min`
    /// * perzero: from `min(min, 0)` up to `max(max, 0)`
    #[inline]
    #[must_use]
    pub fn span(self, perzero: bool) -> f64 {
        let (low, high) = self.label_bounds(perzero);
        high - low
    }

    /// The values the bottom and top rows stand for.
    #[inline]
    #[must_use]
    pub fn label_bounds(self, perzero: bool) -> (f64, f64) {
        if perzero {
            (self.min.min(0.0), self.max.max(0.0))
        } else {
            (self.min, self.max)
        }
    }
}

/// Row/column layout of one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasShape {
    pub rows: usize,
    pub columns: usize,
    /// First row below the zero line. Rows `0..split` hold values above the
    /// baseline (drawn upward), rows `split..rows` values below it.
    pub split: usize,
}

impl CanvasShape {
    /// # Errors
    /// [`PlotError::DegenerateRange`] when the span rounds to zero at three
    /// decimals (or is negative / not a number), [`PlotError::CanvasTooLarge`]
    /// when `rows × columns` exceeds [`MAX_CELLS`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(extent: Extent, perzero: bool, columns: usize) -> Result<Self, PlotError> {
        let range = extent.span(perzero);
        let rounded = round_even(range * RANGE_PRECISION) / RANGE_PRECISION;
        if rounded.is_nan() || rounded <= 0.0 {
            return Err(PlotError::DegenerateRange { range });
        }

        // a positive range below one half still gets a row to draw into
        let rows = (round_even(range) as usize).max(1);
        if rows
            .checked_mul(columns)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(PlotError::CanvasTooLarge {
                range,
                max_cells: MAX_CELLS,
            });
        }
        let split = if perzero {
            (round_even(extent.max).max(0.0) as usize).min(rows)
        } else {
            rows
        };
        trace!(range, rows, split, columns, "canvas shape");
        Ok(Self {
            rows,
            columns,
            split,
        })
    }
}

/// Current terminal geometry as `(columns, rows)` (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (usize, usize) {
    let (Width(w), Height(h)) =
        terminal_size().unwrap_or((Width(FALLBACK_COLUMNS), Height(FALLBACK_ROWS)));
    (usize::from(w), usize::from(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_spans_both_series() {
        let a = [1.0, 5.0, 3.0];
        let b = [-2.0, 0.0, 4.0];
        let e = Extent::of(&Series::dual(&a, &b)).unwrap();
        assert_eq!(e, Extent { min: -2.0, max: 5.0 });
        assert_eq!(Extent::of(&Series::single(&[])), None);
    }

    #[test]
    fn spans_per_mode() {
        let e = Extent { min: 2.0, max: 6.0 };
        assert_eq!(e.span(false), 4.0);
        assert_eq!(e.span(true), 6.0);

        let neg = Extent { min: -5.0, max: -1.0 };
        assert_eq!(neg.span(true), 5.0);
        assert_eq!(neg.label_bounds(true), (-5.0, 0.0));

        let mixed = Extent { min: -3.0, max: 4.0 };
        assert_eq!(mixed.span(true), 7.0);
        assert_eq!(mixed.span(false), 7.0);
    }

    #[test]
    fn shape_rows_and_split() {
        let s = CanvasShape::new(Extent { min: 0.0, max: 8.0 }, false, 3).unwrap();
        assert_eq!((s.rows, s.columns, s.split), (8, 3, 8));

        let s = CanvasShape::new(Extent { min: -3.0, max: 4.0 }, true, 2).unwrap();
        assert_eq!((s.rows, s.split), (7, 4));

        let s = CanvasShape::new(Extent { min: -3.0, max: -1.0 }, true, 2).unwrap();
        assert_eq!((s.rows, s.split), (3, 0));
    }

    #[test]
    fn rows_round_half_to_even() {
        let s = CanvasShape::new(Extent { min: 0.0, max: 2.5 }, false, 1).unwrap();
        assert_eq!(s.rows, 2);
        let s = CanvasShape::new(Extent { min: 0.0, max: 0.3 }, false, 1).unwrap();
        assert_eq!(s.rows, 1);
    }

    #[test]
    fn degenerate_range_in_every_mode() {
        for perzero in [false, true] {
            let e = Extent { min: 0.0, max: 0.0004 };
            assert!(matches!(
                CanvasShape::new(e, perzero, 4),
                Err(PlotError::DegenerateRange { .. })
            ));
        }
        let flat = Extent { min: 7.0, max: 7.0 };
        assert!(CanvasShape::new(flat, false, 1).is_err());
        assert!(CanvasShape::new(Extent { min: 3.0, max: 1.0 }, false, 1).is_err());
    }

    #[test]
    fn oversized_range_is_refused_before_allocation() {
        for max in [1e20, f64::MAX, f64::INFINITY] {
            let e = Extent { min: 0.0, max };
            assert!(matches!(
                CanvasShape::new(e, false, 2),
                Err(PlotError::CanvasTooLarge { .. })
            ));
        }
        let wide = Extent { min: 0.0, max: 1e6 };
        assert!(CanvasShape::new(wide, true, 1000).is_err());
        assert!(CanvasShape::new(wide, true, 1).is_ok());
    }
}
