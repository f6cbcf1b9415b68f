//! One render: validate, size, classify, fill, label.

use tracing::debug;

use crate::{
    core::{
        bounds::{CanvasShape, Extent},
        config::RenderConfig,
        data::Series,
        error::PlotError,
    },
    render::{axis::decorate, canvas::Canvas, classify::classify, fill::fill},
};

/// A filled canvas plus the numbers needed to label it.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub canvas: Canvas,
    /// Value extent the rows were sized from.
    pub extent: Extent,
    /// Smallest and largest X coordinate.
    pub x_span: (f64, f64),
}

/// Reject inputs that cannot be drawn before any cell is allocated.
///
/// # Errors
/// [`PlotError::EmptyData`], [`PlotError::ShapeMismatch`] or
/// [`PlotError::NonFinite`] for NaN/infinite samples, coordinates or
/// extrema.
pub fn validate(series: &Series<'_>, cfg: &RenderConfig) -> Result<(), PlotError> {
    if series.is_empty() {
        return Err(PlotError::EmptyData);
    }
    let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());
    let columns = [
        ("primary series", Some(series.primary)),
        ("auxiliary series", series.auxiliary),
        ("x coordinates", series.x),
    ];
    for (what, values) in columns {
        if values.is_some_and(|v| !finite(v)) {
            return Err(PlotError::NonFinite { what });
        }
    }
    if cfg.y_extrema.is_some_and(|(lo, hi)| !finite(&[lo, hi])) {
        return Err(PlotError::NonFinite { what: "y extrema" });
    }
    let expected = series.len();
    let others = [
        ("auxiliary series", series.auxiliary),
        ("x coordinates", series.x),
    ];
    for (what, values) in others {
        if let Some(values) = values {
            if values.len() != expected {
                return Err(PlotError::ShapeMismatch {
                    what,
                    expected,
                    got: values.len(),
                });
            }
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn x_span(series: &Series<'_>) -> (f64, f64) {
    match series.x {
        Some(x) => x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            }),
        None => (0.0, series.len().saturating_sub(1) as f64),
    }
}

impl Plot {
    /// Size and fill a canvas for `series`.
    ///
    /// # Errors
    /// Errors from [`validate`], [`PlotError::DegenerateRange`] and
    /// [`PlotError::CanvasTooLarge`].
    pub fn new(series: &Series<'_>, cfg: &RenderConfig) -> Result<Self, PlotError> {
        validate(series, cfg)?;
        let extent = match cfg.y_extrema {
            Some(pair) => Extent::from_pair(pair),
            None => Extent::of(series).ok_or(PlotError::EmptyData)?,
        };
        let shape = CanvasShape::new(extent, cfg.perzero, series.len())?;
        debug!(
            min = extent.min,
            max = extent.max,
            rows = shape.rows,
            columns = shape.columns,
            perzero = cfg.perzero,
            "rendering"
        );

        let mut canvas = Canvas::new(shape, cfg.grid);
        let roles = classify(series.primary, series.auxiliary);
        let baseline = if cfg.perzero { 0.0 } else { extent.min };
        fill(&mut canvas, series, &roles, baseline);

        Ok(Self {
            canvas,
            extent,
            x_span: x_span(series),
        })
    }

    /// Output lines: escapes applied, labels added when enabled.
    #[must_use]
    pub fn lines(&self, cfg: &RenderConfig) -> Vec<String> {
        let body = self.canvas.to_lines(&cfg.palette());
        decorate(body, cfg, self.extent, self.x_span, self.canvas.columns())
    }

    #[must_use]
    pub fn to_text(&self, cfg: &RenderConfig) -> String {
        self.lines(cfg).join("\n")
    }
}

/// Render `series` to a multi-line string.
///
/// # Errors
/// See [`Plot::new`].
pub fn render(series: &Series<'_>, cfg: &RenderConfig) -> Result<String, PlotError> {
    Ok(Plot::new(series, cfg)?.to_text(cfg))
}
