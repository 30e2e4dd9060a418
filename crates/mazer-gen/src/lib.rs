//! **mazer-gen** — wall-layout generation for mazer grids.
//!
//! Provides two generators as starting points for hand editing:
//!
//! - **Perfect maze**: depth-first carving that leaves exactly one route
//!   between any two cells.
//! - **Scatter**: independent random walls, which may or may not leave the
//!   exit reachable.
//!
//! Both are deterministic under a seeded rng.

use mazer_core::{Direction, Maze, Point, WallEdge};
use rand::Rng;
use rand::RngExt;

/// Maze generator owning an rng and the maze being built.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over an existing maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Create a generator over a fresh open `width × height` maze.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self::with_maze(Maze::new(width, height), rng)
    }

    /// Consume the generator, returning the maze.
    pub fn into_maze(self) -> Maze {
        self.maze
    }

    /// Carve a perfect maze: fill every wall slot, then depth-first carve a
    /// spanning tree from the entry so that every pair of cells is
    /// connected by exactly one route.
    pub fn perfect(&mut self) {
        self.maze.fill_walls();
        let (w, h) = (self.maze.width(), self.maze.height());
        let mut carved = vec![false; (w * h) as usize];
        let index = |p: Point| (p.y * w + p.x) as usize;

        let mut stack = vec![self.maze.start()];
        carved[index(self.maze.start())] = true;

        while let Some(&cur) = stack.last() {
            let open: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&dir| {
                    let n = cur.step(dir);
                    self.maze.contains(n) && !carved[index(n)]
                })
                .collect();
            match open.len() {
                0 => {
                    stack.pop();
                }
                n => {
                    let dir = open[self.rng.random_range(0..n)];
                    let next = cur.step(dir);
                    self.maze.set_wall(WallEdge::between(cur, dir), false);
                    carved[index(next)] = true;
                    stack.push(next);
                }
            }
        }
    }

    /// Set every wall slot independently with probability `density`
    /// (clamped to `[0, 1]`). Unlike [`perfect`](MazeGen::perfect) this can
    /// wall off the exit.
    pub fn scatter(&mut self, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for edge in self.maze.edges() {
            let present = self.rng.random_bool(density);
            self.maze.set_wall(edge, present);
        }
    }
}
