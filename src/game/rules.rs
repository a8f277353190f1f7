use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Seats around the board. The home-row layout only exists for four.
pub const NUM_SEATS: usize = 4;

/// Upper bound for `num_puppets`; every puppet a seat spawns gets its own
/// `u16` serial.
pub const MAX_PUPPETS: usize = u16::MAX as usize;

/// House rules. `cross_junction` and `backwards_attack` are accepted but have
/// no effect yet; `jump_in_house` only matters once puppets walk their home
/// row, which this engine does not model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub num_players: usize,
    /// Puppets each player starts with at home.
    pub num_puppets: usize,
    pub jump_in_house: bool,
    /// A six cannot bring a puppet out while the start cell is still taken.
    pub clear_exit: bool,
    /// A six brings a new puppet onto the track.
    pub six_force_exit: bool,
    pub cross_junction: bool,
    pub backwards_attack: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            num_players: NUM_SEATS,
            num_puppets: 4,
            jump_in_house: true,
            clear_exit: true,
            six_force_exit: true,
            cross_junction: false,
            backwards_attack: false,
        }
    }
}

impl GameRules {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_players != NUM_SEATS {
            return Err(GameError::UnsupportedPlayerCount { num_players: self.num_players });
        }
        if self.num_puppets == 0 {
            return Err(GameError::NoPuppets);
        }
        if self.num_puppets > MAX_PUPPETS {
            return Err(GameError::TooManyPuppets { num_puppets: self.num_puppets });
        }
        Ok(())
    }
}
