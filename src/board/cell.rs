use std::{fmt::Debug, ops::Add};

use serde::{Deserialize, Serialize};

/// A board coordinate. The board is flat, so there is no z component;
/// renderers add their own height.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Manhattan distance, used to check that track neighbours touch.
    pub fn manhattan(&self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl Add<Step> for Cell {
    type Output = Cell;

    fn add(self, step: Step) -> Cell {
        let (dx, dy) = step.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One unit step along a board axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PosX,
    NegX,
    PosY,
    NegY,
}

impl Step {
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Step::PosX => (1, 0),
            Step::NegX => (-1, 0),
            Step::PosY => (0, 1),
            Step::NegY => (0, -1),
        }
    }

    /// `n` unit steps as a single offset.
    pub fn times(&self, n: i32) -> Cell {
        let (dx, dy) = self.delta();
        Cell::new(dx * n, dy * n)
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell::new(self.x + other.x, self.y + other.y)
    }
}
