use clap::{Parser, Subcommand};

use crate::core::constants::{
    DEFAULT_AUXILIARY_COLOR, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PRIMARY_COLOR,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "blockbar",
    version,
    about = "A bar plotter for up to two data streams using eighth-block glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plot one or two series read from stdin or a file
    Plot(PlotArgs),
    /// Show available color names
    Colors,
    /// Print example invocations
    Examples,
}

/// `blockbar plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// Shortcut for --stdin --adjust --limits --tick --grid
    #[arg(short = 'A', long)]
    pub auto: bool,

    // --- Data ---
    /// Read the data from stdin; ideal for piping
    #[arg(short, long, help_heading = "Data")]
    pub stdin: bool,

    /// Read the data from a file: one number per record, or two numbers
    /// separated by a comma; records split on any whitespace
    #[arg(short, long, value_name = "FILE", help_heading = "Data")]
    pub file: Option<String>,

    /// First column of every record is an X label
    #[arg(short, long, help_heading = "Data")]
    pub xlabels: bool,

    /// Y value at the bottom of the plot (needs --adjust)
    #[arg(long, allow_negative_numbers = true, help_heading = "Data")]
    pub ymin: Option<f64>,

    /// Y value at the top of the plot (needs --adjust)
    #[arg(long, allow_negative_numbers = true, help_heading = "Data")]
    pub ymax: Option<f64>,

    // --- Flags ---
    /// Write the axis limit values around the corners of the plot
    #[arg(short, long, help_heading = "Flags")]
    pub limits: bool,

    /// Draw relative to Y = 0: positive parts go up, negative parts go down
    #[arg(short = 'z', long, help_heading = "Flags")]
    pub perzero: bool,

    /// Write tick values on every other line (needs --limits)
    #[arg(short, long, help_heading = "Flags")]
    pub tick: bool,

    /// Fit the data to the terminal: Y is scaled, X is truncated
    #[arg(short, long, visible_alias = "scale", help_heading = "Flags")]
    pub adjust: bool,

    /// Draw a grid behind the data
    #[arg(short, long, help_heading = "Flags")]
    pub grid: bool,

    // --- Color ---
    /// Disable all color in the plot
    #[arg(short = 'c', long, help_heading = "Color")]
    pub nocolor: bool,

    /// Primary bar color (see `blockbar colors`)
    #[arg(long, default_value = DEFAULT_PRIMARY_COLOR, help_heading = "Color")]
    pub color1: String,

    /// Auxiliary bar color, used for the second series
    #[arg(long, default_value = DEFAULT_AUXILIARY_COLOR, help_heading = "Color")]
    pub color2: String,

    // --- Label ---
    /// Left-hand X axis label (needs --xmax and --limits)
    #[arg(long, allow_hyphen_values = true, help_heading = "Label")]
    pub xmin: Option<String>,

    /// Right-hand X axis label, at most twelve characters are shown
    #[arg(long, allow_hyphen_values = true, help_heading = "Label")]
    pub xmax: Option<String>,

    /// Width of the background grid
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH, help_heading = "Label")]
    pub grid_width: usize,

    /// Height of the background grid
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT, help_heading = "Label")]
    pub grid_height: usize,
}

impl PlotArgs {
    /// Fold `--auto` into the flags it stands for.
    pub fn expand_auto(&mut self) {
        if self.auto {
            self.stdin = true;
            self.adjust = true;
            self.limits = true;
            self.tick = true;
            self.grid = true;
        }
    }
}
