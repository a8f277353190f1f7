use std::fmt::Display;

use crate::game::{PuppetId, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitBlock {
    /// One of the seat's own puppets still stands on the start cell.
    StartOccupied,
    /// Every puppet has already left home.
    HomeEmpty,
}

/// What a single `advance` did. Front-ends show these as chat lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    TurnPassed { from: Seat, to: Seat },
    GraceGranted { seat: Seat, tries: u8 },
    RollConsumed { seat: Seat, face: u8, tries_remaining: u8 },
    PuppetSpawned { seat: Seat, puppet: PuppetId },
    ExitBlocked { seat: Seat, reason: ExitBlock },
}

impl Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnEvent::TurnPassed { to, .. } => write!(f, "{} is up", to.display_name()),
            TurnEvent::GraceGranted { seat, tries } => {
                write!(f, "{} has nothing to move and gets {} tries", seat.display_name(), tries)
            }
            TurnEvent::RollConsumed { seat, face, tries_remaining } => write!(
                f,
                "{} rolled a {} ({} tries left)",
                seat.display_name(),
                face,
                tries_remaining
            ),
            TurnEvent::PuppetSpawned { seat, .. } => {
                write!(f, "{} brings a puppet onto the board", seat.display_name())
            }
            TurnEvent::ExitBlocked { seat, reason: ExitBlock::StartOccupied } => {
                write!(f, "{} must clear the start cell first", seat.display_name())
            }
            TurnEvent::ExitBlocked { seat, reason: ExitBlock::HomeEmpty } => {
                write!(f, "{} has no puppets left at home", seat.display_name())
            }
        }
    }
}
