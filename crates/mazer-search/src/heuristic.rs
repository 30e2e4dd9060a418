//! Remaining-cost estimates for frontier ranking.

use std::fmt;

use mazer_core::Point;

/// The selectable estimate of remaining cost from a cell to the goal.
///
/// Both estimates are admissible for unit-cost cardinal moves as long as the
/// session multiplier stays ≤ 1. Larger multipliers deliberately trade the
/// shortest-path guarantee for a greedier, faster-terminating search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// `|dx| + |dy|` — exact for an unobstructed cardinal-move grid.
    Manhattan,
    /// `sqrt(dx² + dy²)` — straight-line distance.
    #[default]
    Euclidean,
}

impl Heuristic {
    /// Estimate the remaining cost from `p` to `goal`, scaled by
    /// `multiplier`. Pure and deterministic; non-negative whenever
    /// `multiplier` is.
    pub fn estimate(self, p: Point, goal: Point, multiplier: f64) -> f64 {
        let dx = (goal.x - p.x).abs() as f64;
        let dy = (goal.y - p.y).abs() as f64;
        let base = match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
        };
        base * multiplier
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => f.write_str("manhattan"),
            Heuristic::Euclidean => f.write_str("euclidean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_the_goal() {
        let goal = Point::new(14, 9);
        assert_eq!(Heuristic::Manhattan.estimate(goal, goal, 1.0), 0.0);
        assert_eq!(Heuristic::Euclidean.estimate(goal, goal, 1.0), 0.0);
    }

    #[test]
    fn manhattan_counts_both_axes() {
        let goal = Point::new(14, 9);
        let h = Heuristic::Manhattan.estimate(Point::new(2, 4), goal, 1.0);
        assert_eq!(h, 17.0);
    }

    #[test]
    fn euclidean_is_a_lower_bound_on_manhattan() {
        let goal = Point::new(14, 9);
        for y in 0..10 {
            for x in 0..15 {
                let p = Point::new(x, y);
                let e = Heuristic::Euclidean.estimate(p, goal, 1.0);
                let m = Heuristic::Manhattan.estimate(p, goal, 1.0);
                assert!(e <= m + 1e-9, "euclidean exceeds manhattan at {p}");
                assert!(e >= 0.0);
            }
        }
    }

    #[test]
    fn multiplier_scales_linearly() {
        let goal = Point::new(9, 9);
        let p = Point::new(3, 4);
        let base = Heuristic::Euclidean.estimate(p, goal, 1.0);
        let scaled = Heuristic::Euclidean.estimate(p, goal, 2.5);
        assert!((scaled - base * 2.5).abs() < 1e-12);
    }

    #[test]
    fn estimates_shrink_toward_the_goal() {
        let goal = Point::new(14, 9);
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            let mut prev = f64::INFINITY;
            // Walk the diagonal-ish staircase toward the goal.
            for i in 0..10 {
                let p = Point::new(i, i.min(9));
                let est = h.estimate(p, goal, 1.0);
                assert!(est <= prev);
                prev = est;
            }
        }
    }
}
