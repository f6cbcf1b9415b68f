//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    bounds::{CanvasShape, Extent},
    color::{AnsiCode, Color, ColorError, Palette, colorize},
    config::{GridSize, RenderConfig, RenderConfigBuilder},
    data::{Dataset, Lane, ParseDataError, Series},
    error::PlotError,
    scale::{Fit, ScaledSeries},
};

pub use render::{Canvas, Cell, Ink, Plot, render};

/// Fit `primary` (and `auxiliary`) into a `columns` × `rows` area,
/// label gutter included, and render it with limits and default colours.
///
/// # Errors
/// Any [`PlotError`] raised while scaling or rendering.
pub fn fit_and_render(
    primary: &[f64],
    auxiliary: Option<&[f64]>,
    columns: usize,
    rows: usize,
) -> Result<String, PlotError> {
    let series = Series {
        primary,
        auxiliary,
        x: None,
    };
    let scaled = Fit::new(columns, rows).reserve_labels().apply(&series)?;

    let (lo, hi) = scaled.y_limits;
    let cfg = RenderConfig::builder()
        .limits(true)
        .y_limits(lo, hi)
        .y_extrema_opt(scaled.y_extrema)
        .build()?;
    render(&scaled.series(), &cfg)
}

/// Convenience function: [`fit_and_render`] to the current terminal and
/// print the chart.
///
/// # Errors
/// Any [`PlotError`] raised while scaling or rendering.
pub fn plot_to_terminal(primary: &[f64], auxiliary: Option<&[f64]>) -> Result<(), PlotError> {
    let (columns, rows) = crate::core::bounds::terminal_geometry();
    println!("{}", fit_and_render(primary, auxiliary, columns, rows)?);
    Ok(())
}
