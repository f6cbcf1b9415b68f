//! Per-column layering order for two series.

use crate::core::data::Lane;

/// Direction a half of the canvas is filled in, away from the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Values above the baseline, rows walked upward.
    Up,
    /// Values below zero, rows walked downward.
    Down,
}

impl Direction {
    /// Sign turning a remaining value into a magnitude along this direction.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

/// Which lane is drawn in front in one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRoles {
    Single,
    Dual { smaller: Lane, bigger: Lane },
}

impl ColumnRoles {
    /// `(near, far)` for a fill direction: `near` is the bar ending closer to
    /// the baseline and owns the foreground; `far` extends past it.
    ///
    /// Below zero the numerically bigger value is the one nearer the line.
    #[inline]
    #[must_use]
    pub const fn lanes(self, dir: Direction) -> (Option<Lane>, Lane) {
        match (self, dir) {
            (Self::Single, _) => (None, Lane::Primary),
            (Self::Dual { smaller, bigger }, Direction::Up) => (Some(smaller), bigger),
            (Self::Dual { smaller, bigger }, Direction::Down) => (Some(bigger), smaller),
        }
    }
}

/// Fix the roles of every column once, before any row is drawn.
///
/// On an exact tie the primary series counts as the smaller one.
#[must_use]
pub fn classify(primary: &[f64], auxiliary: Option<&[f64]>) -> Vec<ColumnRoles> {
    let Some(auxiliary) = auxiliary else {
        return vec![ColumnRoles::Single; primary.len()];
    };
    primary
        .iter()
        .zip(auxiliary)
        .map(|(p, a)| {
            if p > a {
                ColumnRoles::Dual {
                    smaller: Lane::Auxiliary,
                    bigger: Lane::Primary,
                }
            } else {
                ColumnRoles::Dual {
                    smaller: Lane::Primary,
                    bigger: Lane::Auxiliary,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_smaller_per_column() {
        let roles = classify(&[5.0, 1.0], Some(&[3.0, 2.0]));
        assert_eq!(
            roles,
            vec![
                ColumnRoles::Dual {
                    smaller: Lane::Auxiliary,
                    bigger: Lane::Primary
                },
                ColumnRoles::Dual {
                    smaller: Lane::Primary,
                    bigger: Lane::Auxiliary
                },
            ]
        );
    }

    #[test]
    fn ties_put_primary_in_front() {
        let roles = classify(&[2.0], Some(&[2.0]));
        assert_eq!(
            roles[0].lanes(Direction::Up),
            (Some(Lane::Primary), Lane::Auxiliary)
        );
        assert_eq!(
            roles[0].lanes(Direction::Down),
            (Some(Lane::Auxiliary), Lane::Primary)
        );
    }

    #[test]
    fn single_series_has_no_near_lane() {
        let roles = classify(&[1.0, 2.0, 3.0], None);
        assert_eq!(roles.len(), 3);
        for dir in [Direction::Up, Direction::Down] {
            assert_eq!(roles[1].lanes(dir), (None, Lane::Primary));
        }
    }
}
