//! The [`Session`] type — owned, resettable state for one search run.
//!
//! A session owns the maze topology and a flat row-major arena of per-cell
//! search state. External drivers and renderers interact with it only
//! through the methods here plus [`step`](Session::step): the renderer reads
//! [`cell_state`](Session::cell_state) / [`wall_state`](Session::wall_state),
//! an editor calls [`toggle_wall`](Session::toggle_wall), and a run driver
//! calls [`start_run`](Session::start_run) then [`step`](Session::step)
//! until the status is terminal.

use mazer_core::{Maze, Point, WallEdge};

use crate::config::SessionConfig;
use crate::heuristic::Heuristic;

/// Sentinel accumulated cost meaning "not yet reached" (∞).
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Per-cell search state
// ---------------------------------------------------------------------------

/// Search state of a single cell, stored in the session arena.
#[derive(Clone, Debug)]
pub(crate) struct CellState {
    /// Best known accumulated cost from the start; [`UNREACHABLE`] until
    /// relaxed.
    pub(crate) g: u32,
    /// Static remaining-cost estimate, fixed at arena construction.
    pub(crate) h: f64,
    /// Finalized — no longer a frontier candidate, `g` is final.
    pub(crate) visited: bool,
    /// Arena index of the predecessor on the best known path.
    pub(crate) parent: Option<usize>,
    /// Set by the backtrace once a run completes.
    pub(crate) on_path: bool,
}

impl CellState {
    fn fresh(h: f64) -> Self {
        Self {
            g: UNREACHABLE,
            h,
            visited: false,
            parent: None,
            on_path: false,
        }
    }

    /// Frontier rank `f = g + h`, where `∞ + h = ∞`.
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        if self.g == UNREACHABLE {
            f64::INFINITY
        } else {
            self.g as f64 + self.h
        }
    }
}

// ---------------------------------------------------------------------------
// Status / CellView
// ---------------------------------------------------------------------------

/// Engine state. Stepping only does work while `Running`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// No active run; `step` is a no-op.
    Idle,
    /// A run is in progress.
    Running,
    /// The goal was reached and the path marked.
    Done,
    /// The frontier was exhausted without reaching the goal.
    Failed,
}

impl Status {
    /// Whether a run has terminated (successfully or not).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Done | Status::Failed)
    }
}

/// Render snapshot of one cell.
///
/// `g` uses the [`UNREACHABLE`] sentinel for cells the search has not
/// reached yet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellView {
    pub visited: bool,
    pub g: u32,
    pub h: f64,
    pub current: bool,
    pub on_path: bool,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Owned search context: maze topology plus the cell arena.
///
/// Construct one per board; there is no global state, so multiple sessions
/// can coexist. All state is rebuilt by the reset commands:
///
/// * [`reset_maze`](Session::reset_maze) — full reset, clears walls too.
/// * [`soft_reset`](Session::soft_reset) — rebuilds only cell state,
///   keeping the walls, ready for a new run over the same maze.
pub struct Session {
    maze: Maze,
    cells: Vec<CellState>,
    heuristic: Heuristic,
    multiplier: f64,
    status: Status,
    /// Arena index of the highlighted cell (display only).
    current: Option<usize>,
    /// Start→goal cell sequence, filled in once a run completes.
    path: Vec<Point>,
}

impl Session {
    /// Create an idle session over an open `width × height` maze.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(SessionConfig {
            width,
            height,
            ..SessionConfig::default()
        })
    }

    /// Create an idle session from a full configuration.
    pub fn with_config(cfg: SessionConfig) -> Self {
        let maze = Maze::new(cfg.width, cfg.height);
        let mut session = Self {
            maze,
            cells: Vec::new(),
            heuristic: cfg.heuristic,
            multiplier: cfg.multiplier,
            status: Status::Idle,
            current: None,
            path: Vec::new(),
        };
        session.rebuild_cells();
        session
    }

    /// Rebuild the arena: fresh `g`/`visited`/`parent`/`on_path`, estimates
    /// recomputed from the active heuristic, start seeded with `g = 0`.
    fn rebuild_cells(&mut self) {
        let goal = self.maze.goal();
        let (heuristic, multiplier) = (self.heuristic, self.multiplier);
        self.cells = self
            .maze
            .cells()
            .map(|p| CellState::fresh(heuristic.estimate(p, goal, multiplier)))
            .collect();
        let start = self.index_of(self.maze.start());
        self.cells[start].g = 0;
        self.current = None;
        self.path.clear();
    }

    // -----------------------------------------------------------------------
    // Arena addressing
    // -----------------------------------------------------------------------

    /// Flat row-major index of an in-bounds cell coordinate.
    #[inline]
    pub(crate) fn index_of(&self, p: Point) -> usize {
        (p.y * self.maze.width() + p.x) as usize
    }

    /// Cell coordinate of a flat arena index.
    #[inline]
    pub(crate) fn point_at(&self, idx: usize) -> Point {
        let w = self.maze.width();
        Point::new(idx as i32 % w, idx as i32 / w)
    }

    #[inline]
    pub(crate) fn goal_index(&self) -> usize {
        self.index_of(self.maze.goal())
    }

    pub(crate) fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub(crate) fn set_current(&mut self, idx: Option<usize>) {
        self.current = idx;
    }

    pub(crate) fn set_path(&mut self, path: Vec<Point>) {
        self.path = path;
    }

    // -----------------------------------------------------------------------
    // Lifecycle commands
    // -----------------------------------------------------------------------

    /// Rebuild cell state for a fresh run over the unchanged maze.
    pub fn soft_reset(&mut self) {
        self.rebuild_cells();
        self.status = Status::Idle;
    }

    /// Full reset: clear every wall and rebuild cell state.
    pub fn reset_maze(&mut self) {
        self.maze.clear_walls();
        self.rebuild_cells();
        self.status = Status::Idle;
    }

    /// Select the estimate function and its multiplier.
    ///
    /// Estimates are static per arena, so this rebuilds the cells
    /// (soft reset) rather than patching them in place.
    pub fn set_heuristic(&mut self, heuristic: Heuristic, multiplier: f64) {
        self.heuristic = heuristic;
        self.multiplier = multiplier;
        self.soft_reset();
    }

    /// Begin a run: soft reset, then mark the engine running.
    ///
    /// The caller drives the run by calling [`step`](Session::step) until
    /// the returned status is terminal.
    pub fn start_run(&mut self) {
        self.soft_reset();
        self.status = Status::Running;
        log::debug!(
            "run started on {}x{} maze, heuristic={} multiplier={}",
            self.maze.width(),
            self.maze.height(),
            self.heuristic,
            self.multiplier,
        );
    }

    // -----------------------------------------------------------------------
    // Wall commands
    // -----------------------------------------------------------------------

    /// Flip one wall. Out-of-range edges are ignored.
    ///
    /// Walls form the graph being searched, so edits are only accepted while
    /// no run is active; a toggle during `Running` is dropped with a
    /// warning. Costs already relaxed before an edit are not recomputed.
    pub fn toggle_wall(&mut self, edge: WallEdge) {
        if self.status == Status::Running {
            log::warn!("wall toggle at {edge:?} ignored while a run is active");
            return;
        }
        self.maze.toggle_wall(edge);
    }

    /// Replace the whole maze, e.g. with a persisted or generated layout.
    ///
    /// Adopts the new topology (and dimensions) verbatim and soft-resets.
    /// Ignored with a warning while a run is active.
    pub fn set_walls(&mut self, maze: Maze) {
        if self.status == Status::Running {
            log::warn!("maze replacement ignored while a run is active");
            return;
        }
        self.maze = maze;
        self.rebuild_cells();
        self.status = Status::Idle;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether a wall is present at `edge`. Out-of-range edges read `false`.
    #[inline]
    pub fn wall_state(&self, edge: WallEdge) -> bool {
        self.maze.wall(edge)
    }

    /// Render snapshot of the cell at `(x, y)`, or `None` out of bounds.
    pub fn cell_state(&self, x: i32, y: i32) -> Option<CellView> {
        let p = Point::new(x, y);
        if !self.maze.contains(p) {
            return None;
        }
        let idx = self.index_of(p);
        let cell = &self.cells[idx];
        Some(CellView {
            visited: cell.visited,
            g: cell.g,
            h: cell.h,
            current: self.current == Some(idx),
            on_path: cell.on_path,
        })
    }

    /// The maze topology (wall matrices verbatim, for persistence).
    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The highlighted cell, if a run has selected one.
    pub fn current(&self) -> Option<Point> {
        self.current.map(|i| self.point_at(i))
    }

    /// The completed path in start→goal order; empty unless `Done`.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Number of finalized cells so far.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Direction;

    #[test]
    fn fresh_session_seeds_only_the_start() {
        let s = Session::new(4, 3);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.cell_state(0, 0).unwrap().g, 0);
        for p in s.maze().cells().skip(1) {
            let view = s.cell_state(p.x, p.y).unwrap();
            assert_eq!(view.g, UNREACHABLE, "unexpected seed at {p}");
            assert!(!view.visited);
            assert!(!view.on_path);
        }
    }

    #[test]
    fn cell_state_out_of_bounds_is_none() {
        let s = Session::new(4, 3);
        assert!(s.cell_state(-1, 0).is_none());
        assert!(s.cell_state(4, 0).is_none());
        assert!(s.cell_state(0, 3).is_none());
    }

    #[test]
    fn estimates_follow_the_selected_heuristic() {
        let mut s = Session::new(15, 10);
        s.set_heuristic(Heuristic::Manhattan, 1.0);
        // Manhattan from (2, 4) to (14, 9) is 17.
        assert_eq!(s.cell_state(2, 4).unwrap().h, 17.0);
        s.set_heuristic(Heuristic::Manhattan, 0.5);
        assert_eq!(s.cell_state(2, 4).unwrap().h, 8.5);
        s.set_heuristic(Heuristic::Euclidean, 1.0);
        assert_eq!(s.cell_state(14, 9).unwrap().h, 0.0);
    }

    #[test]
    fn reset_maze_is_idempotent() {
        let mut s = Session::new(5, 4);
        s.toggle_wall(WallEdge::Vertical { x: 1, y: 1 });
        s.reset_maze();
        let after_one: Vec<_> = s
            .maze()
            .cells()
            .map(|p| s.cell_state(p.x, p.y).unwrap())
            .collect();
        s.reset_maze();
        let after_two: Vec<_> = s
            .maze()
            .cells()
            .map(|p| s.cell_state(p.x, p.y).unwrap())
            .collect();
        assert_eq!(after_one, after_two);
        assert_eq!(s.maze().wall_count(), 0);
    }

    #[test]
    fn soft_reset_preserves_walls() {
        let mut s = Session::new(5, 4);
        s.toggle_wall(WallEdge::Horizontal { x: 2, y: 1 });
        s.soft_reset();
        assert!(s.wall_state(WallEdge::Horizontal { x: 2, y: 1 }));
        assert_eq!(s.maze().wall_count(), 1);
    }

    #[test]
    fn wall_toggles_are_dropped_mid_run() {
        let mut s = Session::new(5, 4);
        s.start_run();
        s.toggle_wall(WallEdge::Vertical { x: 0, y: 0 });
        assert_eq!(s.maze().wall_count(), 0);
        // Terminal states accept edits again without an explicit reset.
        while !s.status().is_terminal() {
            s.step().unwrap();
        }
        s.toggle_wall(WallEdge::Vertical { x: 0, y: 0 });
        assert_eq!(s.maze().wall_count(), 1);
    }

    #[test]
    fn set_walls_adopts_dimensions() {
        let mut s = Session::new(4, 3);
        let mut replacement = Maze::new(6, 6);
        replacement.set_wall(WallEdge::Vertical { x: 0, y: 0 }, true);
        s.set_walls(replacement);
        assert_eq!(s.maze().width(), 6);
        assert_eq!(s.maze().height(), 6);
        assert!(s.wall_state(WallEdge::Vertical { x: 0, y: 0 }));
        assert_eq!(s.cell_state(0, 0).unwrap().g, 0);
        assert_eq!(s.maze().neighbor(Point::new(0, 0), Direction::Right), None);
    }

    #[test]
    fn arena_addressing_round_trips() {
        let s = Session::new(7, 5);
        for p in s.maze().cells() {
            assert_eq!(s.point_at(s.index_of(p)), p);
        }
    }
}
