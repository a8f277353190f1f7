use crate::{
    board::{self, BoardShape, Track},
    config::GameConfig,
    error::GameError,
    game::{GameRules, GameState, Player, Seat},
};

/// Everything one game needs: the generated board, the rules and the live
/// turn state. The caller owns it and lends it to the
/// [`crate::game::TurnEngine`], which is the only thing that mutates it.
#[derive(Debug, Clone)]
pub struct GameSession {
    shape: BoardShape,
    rules: GameRules,
    track: Track,
    pub(crate) players: Vec<Player>,
    pub(crate) state: GameState,
}

impl GameSession {
    pub fn new(shape: BoardShape, rules: GameRules) -> Result<Self, GameError> {
        let (shape, track, players) = board::generate(shape, &rules)?.into_parts();
        Ok(GameSession {
            shape,
            rules,
            track,
            players,
            state: GameState::default(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(config.board, config.rules.clone())
    }

    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.state.current_player]
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// First seat whose puppets have all retired.
    pub fn winner(&self) -> Option<Seat> {
        self.players
            .iter()
            .find(|p| p.retired().len() >= self.rules.num_puppets)
            .map(Player::seat)
    }
}
