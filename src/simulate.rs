//! Headless self-play, many games at once.

use std::fmt::Display;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::{
    config::GameConfig,
    error::GameError,
    game::{
        GameSession, NUM_SEATS, PuppetStatus, RollHistogram, TurnEngine, TurnEvent, TurnPhase, dice,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    pub games: usize,
    pub ticks: u64,
    pub rolls: RollHistogram,
    pub turns_passed: u64,
    pub spawned: [u64; NUM_SEATS],
    pub retired: [u64; NUM_SEATS],
    pub blocked_exits: u64,
    pub wins: [u64; NUM_SEATS],
}

impl SimulationReport {
    fn merge(mut self, other: SimulationReport) -> Self {
        self.games += other.games;
        self.ticks += other.ticks;
        self.rolls = self.rolls.merge(other.rolls);
        self.turns_passed += other.turns_passed;
        self.blocked_exits += other.blocked_exits;
        for seat in 0..NUM_SEATS {
            self.spawned[seat] += other.spawned[seat];
            self.retired[seat] += other.retired[seat];
            self.wins[seat] += other.wins[seat];
        }
        self
    }
}

impl Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games: {}, Ticks: {}, Turns: {}", self.games, self.ticks, self.turns_passed)?;
        writeln!(f, "Rolls: {}", self.rolls)?;
        for seat in 0..NUM_SEATS {
            writeln!(
                f,
                "Player {}: spawned {}, retired {}, wins {}",
                seat + 1,
                self.spawned[seat],
                self.retired[seat],
                self.wins[seat]
            )?;
        }
        write!(f, "Blocked exits: {}", self.blocked_exits)
    }
}

/// The simple policy used by self-play: a six is left to bring a new puppet
/// out, anything else moves the current player's rearmost puppet.
pub fn move_rearmost(
    engine: &TurnEngine,
    session: &mut GameSession,
    face: u8,
) -> Result<Option<PuppetStatus>, GameError> {
    if face == dice::FACES {
        return Ok(None);
    }
    let rearmost = session
        .current_player()
        .puppets()
        .iter()
        .min_by_key(|p| p.distance_traveled())
        .map(|p| p.id());
    match rearmost {
        Some(puppet) => engine.move_puppet(session, puppet, face as usize).map(Some),
        None => Ok(None),
    }
}

/// Plays a single game for at most `ticks` ticks. Every tick the current
/// player rolls if it may, [`move_rearmost`] runs, and the engine advances.
pub fn play_game(
    config: &GameConfig,
    seed: u64,
    ticks: u64,
    mut on_event: impl FnMut(&GameSession, &TurnEvent),
) -> Result<SimulationReport, GameError> {
    let mut session = GameSession::from_config(config)?;
    let mut engine = TurnEngine::with_seed(seed);
    let mut report = SimulationReport {
        games: 1,
        ..SimulationReport::default()
    };

    for _ in 0..ticks {
        report.ticks += 1;
        if session.state().phase() == TurnPhase::AwaitingRoll {
            let face = engine.roll_dice(&mut session);
            move_rearmost(&engine, &mut session, face)?;
        }

        for event in engine.advance(&mut session) {
            match event {
                TurnEvent::TurnPassed { .. } => report.turns_passed += 1,
                TurnEvent::PuppetSpawned { seat, .. } => report.spawned[seat.index()] += 1,
                TurnEvent::ExitBlocked { .. } => report.blocked_exits += 1,
                _ => {}
            }
            on_event(&session, &event);
        }

        if let Some(winner) = session.winner() {
            debug!(?winner, seed, "game decided");
            report.wins[winner.index()] += 1;
            break;
        }
    }

    for player in session.players() {
        report.retired[player.seat().index()] = player.retired().len() as u64;
    }
    report.rolls = *engine.histogram();
    Ok(report)
}

/// Plays `games` independent games in parallel; game `i` uses seed `seed + i`.
pub fn simulate(config: &GameConfig, games: usize, ticks: u64, seed: u64) -> Result<SimulationReport, GameError> {
    (0..games)
        .into_par_iter()
        .map(|i| play_game(config, seed.wrapping_add(i as u64), ticks, |_, _| {}))
        .try_reduce(SimulationReport::default, |a, b| Ok(a.merge(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::BoardShape, game::GameRules};

    #[test]
    fn test_play_game() {
        let config = GameConfig::default();
        let mut events = 0;
        let report = play_game(&config, 5, 2000, |_, _| events += 1).unwrap();
        assert_eq!(report.games, 1);
        assert!(events > 0);
        assert!(report.turns_passed > 0);
        assert!(report.rolls.total() > 0);
        assert!(report.spawned.iter().sum::<u64>() > 0);
        assert!(report.spawned.iter().all(|&s| s <= 4));
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = GameConfig::default();
        let a = play_game(&config, 11, 500, |_, _| {}).unwrap();
        let b = play_game(&config, 11, 500, |_, _| {}).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = GameConfig::default();
        let parallel = simulate(&config, 8, 300, 100).unwrap();
        let sequential = (0..8)
            .map(|i| play_game(&config, 100 + i, 300, |_, _| {}).unwrap())
            .fold(SimulationReport::default(), SimulationReport::merge);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.games, 8);
    }

    #[test]
    fn test_long_games_finish() {
        let config = GameConfig {
            board: BoardShape::new(2, 2),
            rules: GameRules {
                num_puppets: 1,
                ..GameRules::default()
            },
        };
        let report = simulate(&config, 4, 100_000, 0).unwrap();
        assert_eq!(report.wins.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_move_rearmost() {
        let mut session = GameSession::from_config(&GameConfig::default()).unwrap();
        let engine = TurnEngine::with_seed(0);
        assert_eq!(move_rearmost(&engine, &mut session, 4), Ok(None));

        let red = crate::game::Seat::Red;
        let front = session.player_mut(red).spawn_puppet(48);
        engine.move_puppet(&mut session, front, 10).unwrap();
        let back = session.player_mut(red).spawn_puppet(48);

        assert_eq!(move_rearmost(&engine, &mut session, 6), Ok(None));
        assert_eq!(move_rearmost(&engine, &mut session, 3), Ok(Some(PuppetStatus::OnTrack(3))));
        assert_eq!(session.player(red).puppet(back).map(|p| p.distance_traveled()), Some(3));
        assert_eq!(session.player(red).puppet(front).map(|p| p.distance_traveled()), Some(10));
    }

    #[test]
    fn test_bad_config() {
        let config = GameConfig {
            board: BoardShape::new(1, 1),
            ..GameConfig::default()
        };
        assert!(simulate(&config, 2, 10, 0).is_err());
    }
}
