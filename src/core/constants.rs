//! A collection of constants.

/// Width of the Y label column, trailing space included.
pub const LABEL_WIDTH: usize = 8;
/// String X labels are cut to this many characters.
pub const X_LABEL_MAX: usize = 12;
/// Rows reserved below/around the plot when labels are on (X axis + prompt).
pub const LABEL_ROWS: usize = 2;

/// Each character cell splits into eight vertical levels.
pub const GLYPH_LEVELS: f64 = 8.0;
/// Blank followed by the seven partial blocks U+2581..U+2587.
pub const PARTIAL_GLYPHS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
pub const FULL_GLYPH: char = '█';

/// A bar ending in a row where the other bar still reaches this high gets a
/// two-colour cell.
pub const TRANSITION_THRESHOLD: f64 = 0.625;

/// Ranges are compared at three decimals before drawing.
pub const RANGE_PRECISION: f64 = 1000.0;
/// Upper bound on `rows × columns` for one canvas.
pub const MAX_CELLS: usize = 1 << 28;

/// Grid period used when the background grid is switched on.
pub const DEFAULT_GRID_WIDTH: usize = 3;
pub const DEFAULT_GRID_HEIGHT: usize = 2;

pub const DEFAULT_PRIMARY_COLOR: &str = "bright_gold";
pub const DEFAULT_AUXILIARY_COLOR: &str = "bright_pine";

/// Fallback when the terminal size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 30;
