//! Y label column + X axis row around a finished canvas.

use crate::core::{
    bounds::Extent,
    config::RenderConfig,
    constants::{LABEL_WIDTH, X_LABEL_MAX},
};

/// Y label: two decimals centred in seven characters, one space gutter.
#[inline]
fn y_label(v: f64) -> String {
    format!("{v:^7.2} ")
}

/// `n` evenly spaced values from `lo` to `hi`, both ends exact.
#[allow(clippy::cast_precision_loss)]
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![lo; n];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n)
        .map(|k| if k == n - 1 { hi } else { lo + step * k as f64 })
        .collect()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(at, _)| &s[..at])
}

/// Label text for every row, top row first.
#[must_use]
pub fn y_labels(rows: usize, cfg: &RenderConfig, extent: Extent) -> Vec<String> {
    let mut labels = vec![" ".repeat(LABEL_WIDTH); rows];
    let Some(last) = rows.checked_sub(1) else {
        return labels;
    };
    let (lo, hi) = cfg
        .y_limits
        .unwrap_or_else(|| extent.label_bounds(cfg.perzero));

    // explicit limits always label the ends; ticks otherwise take over
    if cfg.y_limits.is_some() || !cfg.tick {
        labels[0] = y_label(hi);
        labels[last] = y_label(lo);
    }
    if cfg.tick {
        let ticks = linspace(lo, hi, rows);
        let (start, end) = if cfg.y_limits.is_some() {
            (2, rows.saturating_sub(2))
        } else {
            (0, rows)
        };
        for i in (start..end).step_by(2) {
            labels[i] = y_label(ticks[last - i]);
        }
    }
    labels
}

/// Endpoint row under the plot.
#[must_use]
pub fn x_axis(columns: usize, cfg: &RenderConfig, x_span: (f64, f64)) -> String {
    let gap = " ".repeat(columns.saturating_sub(2 * X_LABEL_MAX));
    let (left, right) = match &cfg.x_limits {
        Some((l, r)) => (
            format!("{:<w$}", truncate_chars(l, X_LABEL_MAX), w = X_LABEL_MAX),
            format!("{:>w$}", truncate_chars(r, X_LABEL_MAX), w = X_LABEL_MAX),
        ),
        None => (
            format!("{:<w$.2} ", x_span.0, w = X_LABEL_MAX - 1),
            format!(" {:>w$.2}", x_span.1, w = X_LABEL_MAX - 1),
        ),
    };
    format!("{}{left}{gap}{right}", " ".repeat(LABEL_WIDTH))
}

/// Prefix every row with its label and append the X axis row.
/// Returns `lines` untouched when limits are off.
#[must_use]
pub fn decorate(
    lines: Vec<String>,
    cfg: &RenderConfig,
    extent: Extent,
    x_span: (f64, f64),
    columns: usize,
) -> Vec<String> {
    if !cfg.limits {
        return lines;
    }
    let labels = y_labels(lines.len(), cfg, extent);
    let mut out: Vec<String> = labels
        .into_iter()
        .zip(lines)
        .map(|(label, line)| label + &line)
        .collect();
    out.push(x_axis(columns, cfg, x_span));
    out
}
