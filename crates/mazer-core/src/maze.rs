//! The [`Maze`] type — a rectangular grid whose edges are gated by walls.
//!
//! A maze stores no per-cell data. It only knows its dimensions and which of
//! the edges between adjacent cells carry a wall: vertical walls sit between
//! horizontally adjacent cells, horizontal walls between vertically adjacent
//! cells. A wall blocks the edge in both directions.

use crate::error::{MazeError, Result};
use crate::geom::{Direction, Point};

// ---------------------------------------------------------------------------
// WallEdge
// ---------------------------------------------------------------------------

/// Address of a single wall slot.
///
/// `Vertical { x, y }` separates cells `(x, y)` and `(x+1, y)`, with
/// `x` in `[0, width-1)` and `y` in `[0, height)`.
/// `Horizontal { x, y }` separates cells `(x, y)` and `(x, y+1)`, with
/// `x` in `[0, width)` and `y` in `[0, height-1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallEdge {
    Vertical { x: i32, y: i32 },
    Horizontal { x: i32, y: i32 },
}

impl WallEdge {
    /// The edge separating `p` from its neighbor one step in `dir`.
    ///
    /// The returned address may be out of range when `p` sits on the grid
    /// border; out-of-range edges are ignored by all [`Maze`] operations.
    #[inline]
    pub const fn between(p: Point, dir: Direction) -> Self {
        match dir {
            Direction::Up => WallEdge::Horizontal { x: p.x, y: p.y - 1 },
            Direction::Down => WallEdge::Horizontal { x: p.x, y: p.y },
            Direction::Left => WallEdge::Vertical { x: p.x - 1, y: p.y },
            Direction::Right => WallEdge::Vertical { x: p.x, y: p.y },
        }
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A `width × height` grid of cells with toggleable walls on interior edges.
///
/// The entry cell is `(0, 0)` and the exit cell `(width-1, height-1)`.
/// A fresh maze has no walls. Out-of-range wall commands are silent no-ops
/// and out-of-range wall queries read as "no wall"; neither is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    /// Row-major, `(width-1) * height` entries.
    v_walls: Vec<bool>,
    /// Row-major, `width * (height-1)` entries.
    h_walls: Vec<bool>,
}

impl Maze {
    /// Create a maze with no walls. Dimensions are clamped to at least 1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            v_walls: vec![false; ((width - 1) * height) as usize],
            h_walls: vec![false; (width * (height - 1)) as usize],
        }
    }

    /// Rebuild a maze from its parts, e.g. a persisted wall layout.
    ///
    /// The matrices are adopted verbatim. Fails with
    /// [`MazeError::ShapeMismatch`] if either matrix does not match the
    /// dimensions, or if a dimension is smaller than 1.
    pub fn from_parts(
        width: i32,
        height: i32,
        v_walls: Vec<bool>,
        h_walls: Vec<bool>,
    ) -> Result<Self> {
        if width < 1
            || height < 1
            || v_walls.len() != ((width - 1) * height) as usize
            || h_walls.len() != (width * (height - 1)) as usize
        {
            return Err(MazeError::ShapeMismatch { width, height });
        }
        Ok(Self {
            width,
            height,
            v_walls,
            h_walls,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The entry cell, `(0, 0)`.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The exit cell, `(width-1, height-1)`.
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Whether `p` is a valid cell coordinate.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn v_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width - 1 && y >= 0 && y < self.height {
            Some((y * (self.width - 1) + x) as usize)
        } else {
            None
        }
    }

    #[inline]
    fn h_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height - 1 {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Whether a wall is present at `edge`. Out-of-range edges read `false`.
    pub fn wall(&self, edge: WallEdge) -> bool {
        match edge {
            WallEdge::Vertical { x, y } => {
                self.v_index(x, y).map(|i| self.v_walls[i]).unwrap_or(false)
            }
            WallEdge::Horizontal { x, y } => {
                self.h_index(x, y).map(|i| self.h_walls[i]).unwrap_or(false)
            }
        }
    }

    /// Set the wall at `edge`. Does nothing if the edge is out of range.
    pub fn set_wall(&mut self, edge: WallEdge, present: bool) {
        match edge {
            WallEdge::Vertical { x, y } => {
                if let Some(i) = self.v_index(x, y) {
                    self.v_walls[i] = present;
                }
            }
            WallEdge::Horizontal { x, y } => {
                if let Some(i) = self.h_index(x, y) {
                    self.h_walls[i] = present;
                }
            }
        }
    }

    /// Flip the wall at `edge`. Does nothing if the edge is out of range.
    pub fn toggle_wall(&mut self, edge: WallEdge) {
        let present = self.wall(edge);
        self.set_wall(edge, !present);
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.v_walls.fill(false);
        self.h_walls.fill(false);
    }

    /// Put a wall on every interior edge.
    pub fn fill_walls(&mut self) {
        self.v_walls.fill(true);
        self.h_walls.fill(true);
    }

    /// Number of walls currently present.
    pub fn wall_count(&self) -> usize {
        self.v_walls.iter().filter(|&&w| w).count()
            + self.h_walls.iter().filter(|&&w| w).count()
    }

    /// The adjacent cell one step in `dir` from `p`, if it exists and the
    /// connecting edge is not walled.
    ///
    /// Both checks are required: a border cell has no neighbor in the
    /// outward direction regardless of wall state.
    pub fn neighbor(&self, p: Point, dir: Direction) -> Option<Point> {
        let n = p.step(dir);
        if !self.contains(p) || !self.contains(n) {
            return None;
        }
        if self.wall(WallEdge::between(p, dir)) {
            return None;
        }
        Some(n)
    }

    /// Row-major iterator over every cell coordinate.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Point::new(x, y)))
    }

    /// Iterator over every wall-edge address, vertical slots first.
    pub fn edges(&self) -> impl Iterator<Item = WallEdge> + use<> {
        let (w, h) = (self.width, self.height);
        let vertical = (0..h)
            .flat_map(move |y| (0..w - 1).map(move |x| WallEdge::Vertical { x, y }));
        let horizontal = (0..h - 1)
            .flat_map(move |y| (0..w).map(move |x| WallEdge::Horizontal { x, y }));
        vertical.chain(horizontal)
    }
}

// ---------------------------------------------------------------------------
// Serde — the persisted form is exactly the dimensions plus both matrices
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMaze {
    width: i32,
    height: i32,
    v_walls: Vec<bool>,
    h_walls: Vec<bool>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Maze {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawMaze {
            width: self.width,
            height: self.height,
            v_walls: self.v_walls.clone(),
            h_walls: self.h_walls.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawMaze::deserialize(deserializer)?;
        Maze::from_parts(raw.width, raw.height, raw.v_walls, raw.h_walls)
            .map_err(serde::de::Error::custom)
    }
}
