//! Session configuration.

use crate::heuristic::Heuristic;

/// Initial settings for a [`Session`](crate::Session).
///
/// The defaults match the classic hand-editable board: a 15×10 grid with an
/// unweighted euclidean estimate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Grid width in cells (clamped to at least 1).
    pub width: i32,
    /// Grid height in cells (clamped to at least 1).
    pub height: i32,
    /// Remaining-cost estimate used to rank frontier cells.
    pub heuristic: Heuristic,
    /// Scale applied to the estimate. Values above 1 make the search
    /// greedier at the expense of the shortest-path guarantee.
    pub multiplier: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
            heuristic: Heuristic::Euclidean,
            multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_shape() {
        let cfg = SessionConfig::default();
        assert_eq!((cfg.width, cfg.height), (15, 10));
        assert_eq!(cfg.heuristic, Heuristic::Euclidean);
        assert_eq!(cfg.multiplier, 1.0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SessionConfig = serde_json::from_str(r#"{"width":8,"height":6}"#).unwrap();
        assert_eq!((cfg.width, cfg.height), (8, 6));
        assert_eq!(cfg.heuristic, Heuristic::Euclidean);
        assert_eq!(cfg.multiplier, 1.0);
    }

    #[test]
    fn heuristic_names_are_lowercase() {
        let cfg: SessionConfig =
            serde_json::from_str(r#"{"heuristic":"manhattan","multiplier":1.3}"#).unwrap();
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert_eq!(cfg.multiplier, 1.3);
    }
}
