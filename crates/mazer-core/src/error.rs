//! Error types for mazer-core.

use thiserror::Error;

/// Maze construction / import error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Wall matrices (or dimensions) do not describe a valid grid.
    #[error("wall matrices do not match a {width}x{height} grid")]
    ShapeMismatch { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, MazeError>;
