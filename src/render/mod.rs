pub mod axis;
pub mod canvas;
pub mod classify;
pub mod fill;
pub mod plot;

pub use canvas::{Canvas, Cell, Ink};
pub use classify::{ColumnRoles, Direction, classify};
pub use plot::{Plot, render, validate};
