use serde::{Deserialize, Serialize};

use crate::board::Step;

/// One of the four fixed positions around the board, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::Red, Seat::Green, Seat::Blue, Seat::Yellow];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Seat {
        Seat::ALL[index % Seat::ALL.len()]
    }

    pub fn next(&self) -> Seat {
        Seat::from_index(self.index() + 1)
    }

    /// Direction the home row extends from the cell in front of the seat's start.
    pub fn home_axis(&self) -> Step {
        match self {
            Seat::Red => Step::PosX,
            Seat::Green => Step::NegY,
            Seat::Blue => Step::NegX,
            Seat::Yellow => Step::PosY,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Seat::Red => 'R',
            Seat::Green => 'G',
            Seat::Blue => 'B',
            Seat::Yellow => 'Y',
        }
    }

    pub fn display_name(&self) -> String {
        format!("Player {}", self.index() + 1)
    }
}
