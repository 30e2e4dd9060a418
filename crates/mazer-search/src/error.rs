//! Error types for mazer-search.

use thiserror::Error;

/// Internal invariant violations surfaced by the engine.
///
/// Note that an unreachable goal is *not* an error: the run terminates in
/// [`Status::Failed`](crate::Status::Failed) instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The parent-chain walk from the goal exceeded its bound without
    /// reaching the start. Indicates a corrupted parent graph, not an
    /// unreachable goal.
    #[error("parent chain exceeded {bound} cells without reaching the start")]
    ReconstructionBroken { bound: usize },
}

pub type Result<T> = std::result::Result<T, SearchError>;
