//! **mazer-search** — steppable best-first path search over mazer grids.
//!
//! The search runs from the maze entry `(0, 0)` to the exit
//! `(width-1, height-1)` with uniform unit edge costs and a selectable
//! remaining-cost estimate ([`Heuristic`]). It is built to be watched: a
//! [`Session`] advances one frontier relaxation per [`step`](Session::step)
//! call, so an external driver can single-step under user control or loop
//! until the [`Status`] is terminal.
//!
//! Unlike a classic A* implementation there is no priority queue: each step
//! re-scans the arena for the minimum `f = g + h`. The scan order is the
//! documented tie-break and part of the reproducible behavior.
//!
//! ```
//! use mazer_search::{Session, Status};
//!
//! let mut session = Session::new(15, 10);
//! session.start_run();
//! loop {
//!     match session.step().expect("parent graph stays intact") {
//!         Status::Done => break,
//!         Status::Failed => panic!("open maze is always solvable"),
//!         _ => {}
//!     }
//! }
//! assert_eq!(session.path().len(), 14 + 9 + 1);
//! ```

mod backtrace;
mod config;
mod error;
mod heuristic;
mod session;
mod step;

pub use config::SessionConfig;
pub use error::SearchError;
pub use heuristic::Heuristic;
pub use session::{CellView, Session, Status, UNREACHABLE};
