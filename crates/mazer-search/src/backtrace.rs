//! Path reconstruction from the finalized goal.

use mazer_core::Point;

use crate::error::{Result, SearchError};
use crate::session::Session;

impl Session {
    /// Walk the parent chain from the goal back to the start (`g = 0`),
    /// mark every cell on it, and record the start→goal path.
    ///
    /// The walk is bounded by the cell count: under the relaxation
    /// invariant parents form a tree rooted at the start, so running past
    /// the bound (or hitting a missing parent before `g = 0`) means the
    /// parent graph is corrupted and is reported as
    /// [`SearchError::ReconstructionBroken`]. Nothing is marked in that
    /// case.
    pub(crate) fn backtrace(&mut self) -> Result<()> {
        let bound = self.cells().len();
        let mut chain: Vec<usize> = Vec::new();
        let mut idx = self.goal_index();
        loop {
            chain.push(idx);
            if chain.len() > bound {
                return Err(SearchError::ReconstructionBroken { bound });
            }
            let cell = &self.cells()[idx];
            if cell.g == 0 {
                break;
            }
            let Some(parent) = cell.parent else {
                return Err(SearchError::ReconstructionBroken { bound });
            };
            idx = parent;
        }

        // The chain runs goal→start; the exposed path is start→goal.
        let mut path: Vec<Point> = chain.iter().map(|&i| self.point_at(i)).collect();
        path.reverse();
        for &i in &chain {
            self.cells_mut()[i].on_path = true;
        }
        self.set_path(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_chain_marks_goal_to_start() {
        let mut s = Session::new(3, 1);
        // Hand-build the relaxed arena: (0,0) → (1,0) → (2,0).
        {
            let cells = s.cells_mut();
            cells[1].g = 1;
            cells[1].parent = Some(0);
            cells[2].g = 2;
            cells[2].parent = Some(1);
        }
        s.backtrace().unwrap();
        assert_eq!(
            s.path(),
            &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        for x in 0..3 {
            assert!(s.cell_state(x, 0).unwrap().on_path);
        }
    }

    #[test]
    fn cyclic_parent_graph_is_detected() {
        let mut s = Session::new(3, 3);
        {
            let cells = s.cells_mut();
            let goal = 8;
            cells[goal].g = 4;
            cells[goal].parent = Some(7);
            cells[7].g = 3;
            cells[7].parent = Some(goal);
        }
        assert_eq!(
            s.backtrace().unwrap_err(),
            SearchError::ReconstructionBroken { bound: 9 }
        );
        // A failed walk marks nothing.
        for p in s.maze().cells() {
            assert!(!s.cell_state(p.x, p.y).unwrap().on_path);
        }
        assert!(s.path().is_empty());
    }

    #[test]
    fn missing_parent_before_the_start_is_detected() {
        let mut s = Session::new(2, 2);
        {
            let cells = s.cells_mut();
            cells[3].g = 2;
            cells[3].parent = None;
        }
        assert_eq!(
            s.backtrace().unwrap_err(),
            SearchError::ReconstructionBroken { bound: 4 }
        );
    }
}
