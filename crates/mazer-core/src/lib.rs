//! **mazer-core** — grid-maze editor core types.
//!
//! This crate provides the passive data the rest of the *mazer* workspace
//! operates on: integer cell coordinates ([`Point`], [`Direction`]) and the
//! maze topology ([`Maze`]) — a fixed-size rectangular grid whose edges are
//! enabled or disabled by per-edge wall state ([`WallEdge`]).
//!
//! With the `serde` feature enabled, a [`Maze`] serializes as exactly its
//! dimensions plus the two wall matrices, so an external persistence layer
//! can round-trip wall layouts verbatim.

pub mod error;
pub mod geom;
pub mod maze;

pub use error::MazeError;
pub use geom::{Direction, Point};
pub use maze::{Maze, WallEdge};
