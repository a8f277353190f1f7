mod rules;
pub use rules::GameRules;
pub use rules::MAX_PUPPETS;
pub use rules::NUM_SEATS;

mod seat;
pub use seat::Seat;

mod puppet;
pub use puppet::Puppet;
pub use puppet::PuppetId;
pub use puppet::PuppetStatus;

mod player;
pub use player::Player;

pub mod dice;
pub use dice::RollHistogram;

mod state;
pub use state::GameState;
pub use state::TurnPhase;

mod event;
pub use event::ExitBlock;
pub use event::TurnEvent;

mod session;
pub use session::GameSession;

mod engine;
pub use engine::GRACE_TRIES;
pub use engine::TurnEngine;
