pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod presentation;
pub mod simulate;

pub use board::{BoardShape, Cell, Track};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameRules, GameSession, Seat, TurnEngine, TurnEvent};
