use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::{
    error::GameError,
    game::{
        ExitBlock, GameSession, PuppetId, PuppetStatus, RollHistogram, Seat, TurnEvent, dice,
    },
};

/// Tries granted to a player who has nothing on the track.
pub const GRACE_TRIES: u8 = 3;

/// Drives a [`GameSession`] from "dice rolled" events and per-frame ticks.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    rng: ChaCha8Rng,
    histogram: RollHistogram,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic engine; the same seed replays the same rolls.
    pub fn with_seed(seed: u64) -> Self {
        TurnEngine {
            rng: ChaCha8Rng::seed_from_u64(seed),
            histogram: RollHistogram::new(),
        }
    }

    pub fn histogram(&self) -> &RollHistogram {
        &self.histogram
    }

    /// Rolls the die for the current player and leaves the face pending for
    /// the next [`Self::advance`].
    pub fn roll_dice(&mut self, session: &mut GameSession) -> u8 {
        let face = dice::roll(&mut self.rng);
        self.record_roll(session, face);
        face
    }

    /// Same as [`Self::roll_dice`] for a face thrown somewhere else, e.g. a
    /// physical die.
    pub fn submit_roll(&mut self, session: &mut GameSession, face: u8) -> Result<u8, GameError> {
        let face = dice::check_face(face)?;
        self.record_roll(session, face);
        Ok(face)
    }

    fn record_roll(&mut self, session: &mut GameSession, face: u8) {
        let state = &mut session.state;
        if state.dice != 0 {
            debug!(pending = state.dice, face, "roll overwrites a pending roll");
        }
        self.histogram.record(face);
        state.dice = face;
        debug!(seat = ?state.current_seat(), face, histogram = %self.histogram, "dice rolled");
    }

    /// One tick of the turn state machine. Hands the turn on when no tries are
    /// left, grants the grace tries, then consumes a pending roll. Calling it
    /// with nothing pending only does the first two.
    pub fn advance(&self, session: &mut GameSession) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        let num_players = session.rules().num_players;

        if session.state.tries_remaining < 1 {
            let from = session.state.current_seat();
            let state = &mut session.state;
            state.current_player = (state.current_player + 1) % num_players;
            state.tries_remaining = 1;
            state.dice = 0;
            state.extra_turns_granted = false;

            let to = state.current_seat();
            info!("{} is up", session.player(to).name());
            events.push(TurnEvent::TurnPassed { from, to });
        }

        let seat = session.state.current_seat();
        if !session.player(seat).has_active_puppets() && !session.state.extra_turns_granted {
            session.state.extra_turns_granted = true;
            session.state.tries_remaining = GRACE_TRIES;
            debug!(?seat, "no puppets on the track, granting extra tries");
            events.push(TurnEvent::GraceGranted { seat, tries: GRACE_TRIES });
        }

        let face = session.state.dice;
        if face > 0 {
            session.state.tries_remaining = session.state.tries_remaining.saturating_sub(1);

            if face == dice::FACES {
                if session.rules().six_force_exit {
                    events.push(match Self::exit_puppet(session, seat) {
                        Ok(puppet) => TurnEvent::PuppetSpawned { seat, puppet },
                        Err(reason) => TurnEvent::ExitBlocked { seat, reason },
                    });
                }
                session.state.tries_remaining = 1;
            }
            session.state.dice = 0;

            events.push(TurnEvent::RollConsumed {
                seat,
                face,
                tries_remaining: session.state.tries_remaining,
            });
        }

        events
    }

    fn exit_puppet(session: &mut GameSession, seat: Seat) -> Result<PuppetId, ExitBlock> {
        let num_puppets = session.rules().num_puppets;
        let clear_exit = session.rules().clear_exit;
        let track_len = session.track().len();

        let player = session.player_mut(seat);
        if player.puppets_at_home(num_puppets) == 0 {
            return Err(ExitBlock::HomeEmpty);
        }
        if clear_exit && player.start_is_occupied() {
            return Err(ExitBlock::StartOccupied);
        }
        let puppet = player.spawn_puppet(track_len);
        debug!(?seat, ?puppet, "puppet enters the track");
        Ok(puppet)
    }

    /// Moves a puppet along the track. Puppets passing their goal retire.
    pub fn move_puppet(
        &self,
        session: &mut GameSession,
        puppet: PuppetId,
        amount: usize,
    ) -> Result<PuppetStatus, GameError> {
        session.player_mut(puppet.seat()).move_puppet(puppet, amount)
    }
}
