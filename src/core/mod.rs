//! Core engine types: seats, RNG, configuration, moves and state.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, MoveError};
pub use config::{ConfigError, JaipurConfig, Ladder, LADDER_LEN};
pub use player::{InvalidSeat, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
