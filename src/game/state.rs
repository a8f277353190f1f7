use serde::{Deserialize, Serialize};

use crate::game::Seat;

/// Where the current turn stands, derived from [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The current player may roll.
    AwaitingRoll,
    /// A roll is waiting to be consumed by the next `advance`.
    RollPending(u8),
    /// No tries left; the next `advance` hands the turn on.
    TurnOver,
}

/// Live turn bookkeeping. Only [`crate::game::TurnEngine`] writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) current_player: usize,
    /// Pending die face, 0 when nothing has been rolled.
    pub(crate) dice: u8,
    pub(crate) tries_remaining: u8,
    /// Set once per turn when a player with nothing on the track got three tries.
    pub(crate) extra_turns_granted: bool,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            current_player: 0,
            dice: 0,
            tries_remaining: 1,
            extra_turns_granted: false,
        }
    }
}

impl GameState {
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn current_seat(&self) -> Seat {
        Seat::from_index(self.current_player)
    }

    pub fn dice(&self) -> u8 {
        self.dice
    }

    pub fn tries_remaining(&self) -> u8 {
        self.tries_remaining
    }

    pub fn extra_turns_granted(&self) -> bool {
        self.extra_turns_granted
    }

    pub fn phase(&self) -> TurnPhase {
        match (self.dice, self.tries_remaining) {
            (0, 0) => TurnPhase::TurnOver,
            (0, _) => TurnPhase::AwaitingRoll,
            (face, _) => TurnPhase::RollPending(face),
        }
    }
}
