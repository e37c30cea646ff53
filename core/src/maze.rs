//! Rectangular mazes made of junctures, and the JSON format they load from.
//!
//! `(0, 0)` is the upper-left juncture; `x` grows to the right and `y`
//! grows downwards.

use crate::error::GraphError;
use crate::graph::Weight;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed maze JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("maze must be at least 1x1")]
    EmptyMaze,

    #[error("maze of {width}x{height} junctures is too large")]
    TooLarge { width: usize, height: usize },

    #[error("maze declares {expected} cells but lists {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("juncture {0} is outside the maze")]
    OutOfBounds(Juncture),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: i32,
    pub y: i32,
}

impl Juncture {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Juncture {
        let (dx, dy) = direction.offset();
        Juncture::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a juncture as \"x,y\", got {0:?}")]
pub struct ParseJunctureError(String);

impl FromStr for Juncture {
    type Err = ParseJunctureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed
            .split_once(',')
            .ok_or_else(|| ParseJunctureError(text.to_string()))?;

        let x = x.trim().parse().map_err(|_| ParseJunctureError(text.to_string()))?;
        let y = y.trim().parse().map_err(|_| ParseJunctureError(text.to_string()))?;
        Ok(Juncture::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Anything that can describe a rectangular maze.
pub trait Maze {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn is_wall(&self, juncture: Juncture, direction: Direction) -> bool;

    /// Cost of leaving `juncture` in `direction`. Only meaningful when there
    /// is no wall on that side.
    fn weight(&self, juncture: Juncture, direction: Direction) -> Weight;

    fn contains(&self, juncture: Juncture) -> bool {
        juncture.x >= 0
            && juncture.y >= 0
            && (juncture.x as usize) < self.width()
            && (juncture.y as usize) < self.height()
    }
}

/// Passages out of one juncture. `None` is a wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Weight>,
}

impl Cell {
    pub fn passage(&self, direction: Direction) -> Option<Weight> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn passage_mut(&mut self, direction: Direction) -> &mut Option<Weight> {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

#[derive(Deserialize)]
struct RawGridMaze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Maze stored as a row-major grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridMaze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridMaze {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, MazeError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(MazeError::CellCount {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Maze with every inner passage open at `weight` and a closed border.
    pub fn open(width: usize, height: usize, weight: Weight) -> Result<Self, MazeError> {
        let mut maze = Self::new(width, height, vec![Cell::default(); cell_count(width, height)?])?;

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let juncture = Juncture::new(x, y);
                for direction in Direction::ALL {
                    if maze.contains(juncture.step(direction)) {
                        maze.set_passage(juncture, direction, Some(weight))?;
                    }
                }
            }
        }

        Ok(maze)
    }

    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let raw: RawGridMaze = serde_json::from_str(json)?;
        Self::new(raw.width, raw.height, raw.cells)
    }

    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn cell(&self, juncture: Juncture) -> Option<&Cell> {
        self.index_of(juncture).map(|index| &self.cells[index])
    }

    /// Opens (`Some`) or walls off (`None`) one side of a juncture. The
    /// neighbour's matching side is left untouched.
    pub fn set_passage(
        &mut self,
        juncture: Juncture,
        direction: Direction,
        weight: Option<Weight>,
    ) -> Result<(), MazeError> {
        let index = self
            .index_of(juncture)
            .ok_or(MazeError::OutOfBounds(juncture))?;
        *self.cells[index].passage_mut(direction) = weight;
        Ok(())
    }

    /// Walls off both sides of the boundary between `juncture` and its
    /// neighbour in `direction`.
    pub fn add_wall(&mut self, juncture: Juncture, direction: Direction) -> Result<(), MazeError> {
        self.set_passage(juncture, direction, None)?;

        let neighbor = juncture.step(direction);
        if self.contains(neighbor) {
            self.set_passage(neighbor, direction.opposite(), None)?;
        }
        Ok(())
    }

    fn index_of(&self, juncture: Juncture) -> Option<usize> {
        if !self.contains(juncture) {
            return None;
        }
        Some(juncture.y as usize * self.width + juncture.x as usize)
    }
}

/// Number of cells in a `width` x `height` grid. Both sides must be non-zero
/// and every juncture must be addressable with `i32` coordinates.
fn cell_count(width: usize, height: usize) -> Result<usize, MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::EmptyMaze);
    }
    let max_side = i32::MAX as usize;
    if width > max_side || height > max_side {
        return Err(MazeError::TooLarge { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(MazeError::TooLarge { width, height })
}

impl Maze for GridMaze {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, juncture: Juncture, direction: Direction) -> bool {
        self.cell(juncture)
            .and_then(|cell| cell.passage(direction))
            .is_none()
    }

    fn weight(&self, juncture: Juncture, direction: Direction) -> Weight {
        self.cell(juncture)
            .and_then(|cell| cell.passage(direction))
            .unwrap_or_default()
    }
}
