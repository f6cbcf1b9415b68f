//! Fit samples to a terminal: scale Y to the available rows, cut X to the
//! available columns.

use tracing::debug;

use crate::core::{
    bounds::Extent,
    constants::{LABEL_ROWS, LABEL_WIDTH},
    data::Series,
    error::PlotError,
};

/// Target area + mode for [`Fit::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Fit {
    pub columns: usize,
    pub rows: usize,
    pub perzero: bool,
    /// User bounds replacing the data's min/max.
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

/// Samples after fitting, plus the bounds the renderer should use.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledSeries {
    pub primary: Vec<f64>,
    pub auxiliary: Option<Vec<f64>>,
    pub x: Option<Vec<f64>>,
    pub factor: f64,
    /// Scaled user bounds, only when the user supplied any.
    pub y_extrema: Option<(f64, f64)>,
    /// Unscaled values for the first/last row labels.
    pub y_limits: (f64, f64),
}

impl ScaledSeries {
    #[must_use]
    pub fn series(&self) -> Series<'_> {
        Series {
            primary: &self.primary,
            auxiliary: self.auxiliary.as_deref(),
            x: self.x.as_deref(),
        }
    }
}

impl Fit {
    #[inline]
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Leave room for the Y label column and the X axis row.
    #[inline]
    #[must_use]
    pub fn reserve_labels(mut self) -> Self {
        self.columns = self.columns.saturating_sub(LABEL_WIDTH);
        self.rows = self.rows.saturating_sub(LABEL_ROWS);
        self
    }

    #[inline]
    #[must_use]
    pub fn perzero(mut self, on: bool) -> Self {
        self.perzero = on;
        self
    }

    #[inline]
    #[must_use]
    pub fn y_bounds(mut self, y_min: Option<f64>, y_max: Option<f64>) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Scale every sample by `rows / range` and keep the first `columns`.
    ///
    /// # Errors
    /// [`PlotError::EmptyData`] for an empty series, [`PlotError::Scale`]
    /// when the value range is zero.
    pub fn apply(&self, series: &Series<'_>) -> Result<ScaledSeries, PlotError> {
        let data = Extent::of(series).ok_or(PlotError::EmptyData)?;
        let extent = Extent {
            min: self.y_min.unwrap_or(data.min),
            max: self.y_max.unwrap_or(data.max),
        };
        let overridden = self.y_min.is_some() || self.y_max.is_some();

        let range = extent.span(self.perzero);
        if range == 0.0 || !range.is_finite() {
            return Err(PlotError::Scale);
        }
        #[allow(clippy::cast_precision_loss)]
        let factor = self.rows as f64 / range;
        debug!(range, factor, columns = self.columns, "fitting to terminal");

        let fit = |values: &[f64]| -> Vec<f64> {
            values
                .iter()
                .take(self.columns)
                .map(|v| v * factor)
                .collect()
        };

        Ok(ScaledSeries {
            primary: fit(series.primary),
            auxiliary: series.auxiliary.map(fit),
            x: series.x.map(|x| x.iter().take(self.columns).copied().collect()),
            factor,
            y_extrema: overridden.then(|| (extent.min * factor, extent.max * factor)),
            y_limits: extent.label_bounds(self.perzero),
        })
    }
}
