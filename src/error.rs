use crate::{
    board::MAX_SIDE,
    game::{MAX_PUPPETS, PuppetId, Seat},
};

/// Errors raised by board generation and by the few API calls that can be
/// handed arguments with no meaning in the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(
        "invalid board: sides must be between 2 and {max}, got long_side={long_side}, short_side={short_side}",
        max = MAX_SIDE
    )]
    InvalidBoardShape { long_side: i32, short_side: i32 },

    #[error("invalid rules: every player needs at least one puppet")]
    NoPuppets,

    #[error("invalid rules: at most {max} puppets per player, got {num_puppets}", max = MAX_PUPPETS)]
    TooManyPuppets { num_puppets: usize },

    #[error("unsupported configuration: exactly 4 players are supported, got {num_players}")]
    UnsupportedPlayerCount { num_players: usize },

    #[error("die face must be between 1 and 6, got {0}")]
    InvalidDieFace(u8),

    #[error("{seat:?} has no active puppet {puppet:?}")]
    UnknownPuppet { seat: Seat, puppet: PuppetId },
}

impl GameError {
    /// `true` for the errors that must abort startup because the board
    /// cannot be laid out at all.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GameError::InvalidBoardShape { .. }
                | GameError::NoPuppets
                | GameError::TooManyPuppets { .. }
                | GameError::UnsupportedPlayerCount { .. }
        )
    }
}
