//! Vertical fill engine: samples to eighth-block cells.
//!
//! ### Workflow
//! 1. Every sample is copied into a *remaining magnitude* (`Some(v)`), shifted
//!    so the baseline sits at zero.
//! 2. `fill_half` walks rows away from the baseline. Each row consumes up to
//!    one unit per lane; a remainder in `[0, 1)` becomes one of eight partial
//!    glyphs (`floor(8 × r)`) and the lane is exhausted (`None`).
//! 3. In dual mode the lane ending nearer the baseline is painted in front.
//!    When it ends while the other lane still reaches at least
//!    [`TRANSITION_THRESHOLD`] into the same row, the cell gets both colours.
//!
//! Below zero the same routine runs with the sign flipped. Partial glyphs
//! there are drawn reverse-video so they fill from the top of the cell.

use tracing::debug;

use crate::{
    core::{
        constants::{FULL_GLYPH, GLYPH_LEVELS, PARTIAL_GLYPHS, TRANSITION_THRESHOLD},
        data::{Lane, Series},
    },
    render::{
        canvas::{Canvas, Cell, Ink},
        classify::{ColumnRoles, Direction},
    },
};

/// Working copy of both series; the caller's slices are never written.
#[derive(Clone, Debug, PartialEq)]
pub struct Remaining {
    lanes: [Vec<Option<f64>>; 2],
}

impl Remaining {
    /// Copy `series`, subtracting `baseline` from every value.
    #[must_use]
    pub fn new(series: &Series<'_>, baseline: f64) -> Self {
        let copy = |values: &[f64]| -> Vec<Option<f64>> {
            values.iter().map(|v| Some(v - baseline)).collect()
        };
        Self {
            lanes: [
                copy(series.primary),
                series
                    .auxiliary
                    .map_or_else(|| vec![None; series.len()], copy),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, lane: Lane, x: usize) -> Option<f64> {
        self.lanes[lane.index()][x]
    }

    #[inline]
    fn set(&mut self, lane: Lane, x: usize, v: Option<f64>) {
        self.lanes[lane.index()][x] = v;
    }
}

/// Outcome of one cell: what to draw and what is left of each lane.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Step {
    cell: Option<Cell>,
    near: Option<f64>,
    far: Option<f64>,
}

/// Partial glyph for a magnitude in `[0, 1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn partial(magnitude: f64, dir: Direction, ink: Ink) -> Cell {
    let level = ((GLYPH_LEVELS * magnitude) as usize).min(PARTIAL_GLYPHS.len() - 1);
    match dir {
        Direction::Up => Cell {
            glyph: PARTIAL_GLYPHS[level],
            ink,
            reverse: false,
        },
        Direction::Down => Cell {
            glyph: PARTIAL_GLYPHS[PARTIAL_GLYPHS.len() - 1 - level],
            ink,
            reverse: true,
        },
    }
}

const fn full(lane: Lane) -> Cell {
    Cell {
        glyph: FULL_GLYPH,
        ink: Ink::Series(lane),
        reverse: false,
    }
}

/// Decide one cell from the remaining values of the near and far lanes.
fn step(lanes: (Option<Lane>, Lane), near: Option<f64>, far: Option<f64>, dir: Direction) -> Step {
    let (near_lane, far_lane) = lanes;
    let sign = dir.sign();
    let magnitude = |v: Option<f64>| v.map(|v| v * sign);
    let consume = |v: f64| v - sign;
    // a remainder of exactly zero below the line has nothing left to show
    let ends = |m: f64| match dir {
        Direction::Up => m >= 0.0,
        Direction::Down => m > 0.0,
    };
    let unchanged = Step {
        cell: None,
        near,
        far,
    };

    match (near_lane, magnitude(near), magnitude(far)) {
        (Some(lane), Some(a), Some(b)) if a >= 1.0 && b >= 1.0 => Step {
            cell: Some(full(lane)),
            near: near.map(consume),
            far: far.map(consume),
        },
        (Some(lane), Some(a), Some(b)) if ends(a) && b >= TRANSITION_THRESHOLD => Step {
            cell: Some(partial(a, dir, Ink::Transition(lane))),
            near: None,
            far: if b >= 1.0 { far.map(consume) } else { None },
        },
        (Some(lane), Some(a), _) if ends(a) => Step {
            cell: Some(partial(a, dir, Ink::Series(lane))),
            near: None,
            far: None,
        },
        (_, _, Some(b)) if b >= 1.0 => Step {
            cell: Some(full(far_lane)),
            far: far.map(consume),
            ..unchanged
        },
        (_, _, Some(b)) if ends(b) => Step {
            cell: Some(partial(b, dir, Ink::Series(far_lane))),
            far: None,
            ..unchanged
        },
        _ => unchanged,
    }
}

/// Fill `rows` (ordered away from the baseline) of every column.
pub fn fill_half(
    canvas: &mut Canvas,
    remaining: &mut Remaining,
    roles: &[ColumnRoles],
    rows: impl Iterator<Item = usize>,
    dir: Direction,
) {
    for y in rows {
        for (x, role) in roles.iter().enumerate() {
            let (near_lane, far_lane) = role.lanes(dir);
            let near = near_lane.and_then(|lane| remaining.get(lane, x));
            let far = remaining.get(far_lane, x);

            let out = step((near_lane, far_lane), near, far, dir);
            if let Some(lane) = near_lane {
                remaining.set(lane, x, out.near);
            }
            remaining.set(far_lane, x, out.far);
            if let Some(cell) = out.cell {
                canvas.set(x, y, cell);
            }
        }
    }
}

/// Draw `series` onto `canvas`.
///
/// `baseline` is subtracted from every sample first (the minimum in baseline
/// mode, zero in perzero mode). Rows `0..split` are filled upward from the
/// split, rows `split..rows` downward from it.
pub fn fill(canvas: &mut Canvas, series: &Series<'_>, roles: &[ColumnRoles], baseline: f64) {
    let shape = canvas.shape();
    let mut remaining = Remaining::new(series, baseline);
    debug!(
        above = shape.split,
        below = shape.rows - shape.split,
        dual = series.is_dual(),
        "filling canvas"
    );

    fill_half(canvas, &mut remaining, roles, (0..shape.split).rev(), Direction::Up);
    fill_half(canvas, &mut remaining, roles, shape.split..shape.rows, Direction::Down);
}
