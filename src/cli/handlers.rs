use std::time::Instant;

use tracing::debug;

use crate::{
    core::{
        bounds::terminal_geometry,
        color::{AnsiCode, Color, colorize},
        config::{GridSize, RenderConfig},
        data::{Dataset, read_records_from},
        error::PlotError,
        scale::Fit,
    },
    render::render,
};

use super::parse::PlotArgs;

/// Colour names printed per line by `colors`.
const COLORS_PER_LINE: usize = 5;

pub fn plot(mut a: PlotArgs) -> Result<(), PlotError> {
    a.expand_auto();
    let source = match (a.stdin, a.file.as_deref()) {
        (true, _) => None,
        (false, Some(path)) => Some(path),
        (false, None) => return Err(PlotError::NoInput),
    };

    let t_ingest = Instant::now();
    let mut data = read_records_from(source, a.xlabels)?;
    debug!(
        micros = t_ingest.elapsed().as_micros(),
        records = data.primary.len(),
        "ingest"
    );

    let mut cfg = RenderConfig::builder()
        .perzero(a.perzero)
        .limits(a.limits)
        .tick(a.tick)
        .color(!a.nocolor)
        .grid_opt(a.grid.then_some(GridSize {
            width: a.grid_width,
            height: a.grid_height,
        }))
        .primary_color(&a.color1)
        .auxiliary_color(&a.color2);

    if a.adjust {
        let (columns, rows) = terminal_geometry();
        let mut fit = Fit::new(columns, rows)
            .perzero(a.perzero)
            .y_bounds(a.ymin, a.ymax);
        if a.limits {
            fit = fit.reserve_labels();
        }
        let scaled = fit.apply(&data.series())?;
        let (lo, hi) = scaled.y_limits;
        cfg = cfg.y_limits(lo, hi).y_extrema_opt(scaled.y_extrema);

        data.truncate(scaled.primary.len());
        data.primary = scaled.primary;
        data.auxiliary = scaled.auxiliary;
    }

    if let Some((first, last)) = endpoint_labels(&data) {
        cfg = cfg.x_limits(first, last);
    } else if let (Some(lo), Some(hi)) = (a.xmin, a.xmax) {
        cfg = cfg.x_limits(lo, hi);
    }

    let cfg = cfg.build()?;
    println!("{}", render(&data.series(), &cfg)?);
    Ok(())
}

/// First and last X label of the data, if it carried labels.
fn endpoint_labels(data: &Dataset) -> Option<(String, String)> {
    let labels = data.x_labels.as_ref()?;
    Some((labels.first()?.clone(), labels.last()?.clone()))
}

/// Pretty-print available color names.
pub fn colors() {
    println!("\nPossible colors:");
    let names: Vec<String> = Color::all_names().collect();
    for line in names.chunks(COLORS_PER_LINE) {
        let painted: Vec<String> = line
            .iter()
            .filter_map(|name| {
                let c = Color::from_name(name).ok()?;
                Some(colorize(&AnsiCode::fg(c), name))
            })
            .collect();
        println!("* {}", painted.join(", "));
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "blockbar plot";
    println!(
        "
Example invocations
-------------------
• One series from a file    : {bin} -f sample.txt
• Pipe + fit to terminal    : seq 1 40 | {bin} -s --adjust --limits
• Everything on             : seq -20 20 | {bin} -A
• Two series, around zero   : {bin} -f pairs.csv --perzero --limits
• Custom colors             : {bin} -f pairs.csv --color1 bright_violet --color2 gold
• Labelled rows             : {bin} -f months.csv --xlabels --limits
• Locked Y scale            : {bin} -f sample.txt --adjust --ymin 0 --ymax 100
• Plain text output         : {bin} -f sample.txt --nocolor --grid
"
    );
}
