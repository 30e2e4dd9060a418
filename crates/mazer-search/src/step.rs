//! Single-step frontier selection and relaxation.
//!
//! The frontier is selected by a linear scan over the whole arena instead of
//! a priority queue. That is deliberate: the scan order (row-major, y outer,
//! x inner, first minimum wins) fixes the tie-break between equal-`f` cells
//! and makes step-by-step runs reproducible. Do not swap in a heap without
//! reconciling that order.

use mazer_core::Direction;

use crate::error::Result;
use crate::session::{Session, Status};

impl Session {
    /// Advance the search by one unit of work.
    ///
    /// Outside `Running` this is a no-op returning the current status. One
    /// step finalizes the minimum-`f` unvisited cell, relaxes its unblocked
    /// neighbors at unit edge cost, then re-selects the minimum as the new
    /// highlight. Reaching the goal flips the session to `Done` and runs the
    /// backtrace; an exhausted frontier (no unvisited cell with finite `f`)
    /// ends the run as `Failed` instead of polling forever.
    ///
    /// `g` values never increase across steps, and a finalized cell's `g`
    /// never changes again: with uniform unit edge weights the global
    /// minimum-`f` cell already carries its optimal cost when selected.
    pub fn step(&mut self) -> Result<Status> {
        if self.status() != Status::Running {
            return Ok(self.status());
        }

        let Some(idx) = self.min_open_cell() else {
            return Ok(self.fail_exhausted());
        };

        // A 1×1 board starts on the goal; terminate before finalizing.
        if idx == self.goal_index() {
            return self.finish(idx);
        }

        let point = self.point_at(idx);
        let cell_g = {
            let cell = &mut self.cells_mut()[idx];
            cell.visited = true;
            cell.g
        };
        log::debug!("finalize {point} g={cell_g}");

        // Relax the four neighbors behind open edges.
        for dir in Direction::ALL {
            let Some(next) = self.maze().neighbor(point, dir) else {
                continue;
            };
            let nidx = self.index_of(next);
            let neighbor = &mut self.cells_mut()[nidx];
            if neighbor.g > cell_g + 1 {
                neighbor.g = cell_g + 1;
                neighbor.parent = Some(idx);
                log::trace!("relax {next} g={}", cell_g + 1);
            }
        }

        // Re-select with the relaxed costs; this is the highlighted cell.
        let Some(next_idx) = self.min_open_cell() else {
            return Ok(self.fail_exhausted());
        };
        self.set_current(Some(next_idx));

        if next_idx == self.goal_index() {
            return self.finish(next_idx);
        }
        Ok(Status::Running)
    }

    /// The unvisited cell with minimum `f = g + h`, scanning the arena in
    /// row-major order so the first of several equal minima wins. `None`
    /// when no unvisited cell has a finite `f`.
    fn min_open_cell(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, cell) in self.cells().iter().enumerate() {
            if cell.visited {
                continue;
            }
            let f = cell.f();
            if !f.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, best_f)| f < best_f) {
                best = Some((idx, f));
            }
        }
        best.map(|(idx, _)| idx)
    }

    fn fail_exhausted(&mut self) -> Status {
        log::debug!(
            "frontier exhausted after {} finalized cells; goal unreachable",
            self.visited_count()
        );
        self.set_current(None);
        self.set_status(Status::Failed);
        Status::Failed
    }

    fn finish(&mut self, goal_idx: usize) -> Result<Status> {
        self.set_current(Some(goal_idx));
        self.set_status(Status::Done);
        self.backtrace()?;
        log::debug!(
            "goal reached, path length {}, {} cells finalized",
            self.path().len().saturating_sub(1),
            self.visited_count()
        );
        Ok(Status::Done)
    }
}
