//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod scale;

// re-export frequently-used items for convenience
pub use bounds::{CanvasShape, Extent};
pub use color::{AnsiCode, Color, ColorError, Palette, colorize};
pub use config::{GridSize, RenderConfig, RenderConfigBuilder};
pub use data::{Dataset, Lane, Series};
pub use error::PlotError;
pub use scale::{Fit, ScaledSeries};
