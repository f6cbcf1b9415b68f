//! Render configuration object + fluent builder.

use crate::core::{
    color::{Color, Palette},
    constants::{
        DEFAULT_AUXILIARY_COLOR, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PRIMARY_COLOR,
    },
    error::PlotError,
};

/// Period of the background grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Bars grow away from zero instead of from the minimum.
    pub perzero: bool,
    /// Y label column + X axis row.
    pub limits: bool,
    /// Label every other row (needs `limits`).
    pub tick: bool,
    pub color: bool,
    pub grid: Option<GridSize>,
    pub primary: Color,
    pub auxiliary: Color,
    /// Value extent used verbatim instead of the data's min/max.
    pub y_extrema: Option<(f64, f64)>,
    /// Labels written on the first/last row instead of the extent.
    pub y_limits: Option<(f64, f64)>,
    /// String labels for the X axis endpoints.
    pub x_limits: Option<(String, String)>,
}

impl RenderConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    #[inline]
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::new(self.primary, self.auxiliary, self.color)
    }
}

/// Fluent builder; colour names are resolved in `build`.
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
    perzero: bool,
    limits: bool,
    tick: bool,
    color: bool,
    grid: Option<GridSize>,
    primary: String,
    auxiliary: String,
    y_extrema: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    x_limits: Option<(String, String)>,
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            perzero: false,
            limits: false,
            tick: false,
            color: true,
            grid: None,
            primary: DEFAULT_PRIMARY_COLOR.to_owned(),
            auxiliary: DEFAULT_AUXILIARY_COLOR.to_owned(),
            y_extrema: None,
            y_limits: None,
            x_limits: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn perzero(mut self, on: bool) -> Self {
        self.perzero = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn limits(mut self, on: bool) -> Self {
        self.limits = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick(mut self, on: bool) -> Self {
        self.tick = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn grid(mut self, width: usize, height: usize) -> Self {
        self.grid = Some(GridSize { width, height });
        self
    }
    #[inline]
    #[must_use]
    pub fn grid_opt(mut self, grid: Option<GridSize>) -> Self {
        self.grid = grid;
        self
    }
    #[inline]
    #[must_use]
    pub fn primary_color(mut self, name: impl Into<String>) -> Self {
        self.primary = name.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn auxiliary_color(mut self, name: impl Into<String>) -> Self {
        self.auxiliary = name.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn y_extrema(mut self, lo: f64, hi: f64) -> Self {
        self.y_extrema = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub fn y_extrema_opt(mut self, extrema: Option<(f64, f64)>) -> Self {
        self.y_extrema = extrema;
        self
    }
    #[inline]
    #[must_use]
    pub fn y_limits(mut self, lo: f64, hi: f64) -> Self {
        self.y_limits = Some((lo, hi));
        self
    }
    #[inline]
    #[must_use]
    pub fn x_limits(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.x_limits = Some((left.into(), right.into()));
        self
    }

    /// # Errors
    /// [`PlotError::InvalidColor`] for an unknown colour name,
    /// [`PlotError::InvalidGrid`] for a zero grid period.
    pub fn build(self) -> Result<RenderConfig, PlotError> {
        if let Some(GridSize { width, height }) = self.grid {
            if width == 0 || height == 0 {
                return Err(PlotError::InvalidGrid { width, height });
            }
        }
        Ok(RenderConfig {
            perzero: self.perzero,
            limits: self.limits,
            tick: self.tick,
            color: self.color,
            grid: self.grid,
            primary: Color::from_name(&self.primary)?,
            auxiliary: Color::from_name(&self.auxiliary)?,
            y_extrema: self.y_extrema,
            y_limits: self.y_limits,
            x_limits: self.x_limits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RenderConfig::builder().build().unwrap();
        assert!(cfg.color);
        assert!(!cfg.perzero && !cfg.limits && !cfg.tick);
        assert_eq!(cfg.grid, None);
        assert_eq!(cfg.primary, Color::from_name("bright_gold").unwrap());
        assert_eq!(cfg.auxiliary, Color::from_name("bright_pine").unwrap());
    }

    #[test]
    fn rejects_unknown_colors() {
        let err = RenderConfig::builder()
            .auxiliary_color("bright_taupe")
            .build()
            .unwrap_err();
        assert!(matches!(err, PlotError::InvalidColor(_)));
    }

    #[test]
    fn rejects_zero_grid_period() {
        let err = RenderConfig::builder().grid(0, 2).build().unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidGrid {
                width: 0,
                height: 2
            }
        ));
        assert_eq!(GridSize::default(), GridSize { width: 3, height: 2 });
    }
}
