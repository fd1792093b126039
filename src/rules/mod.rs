//! Jaipur rules: the token bank, the four moves, and the engine that
//! sequences turns and scores the game.
//!
//! The engine never renders anything and never asks anyone for input.
//! Callers hand it a state, a seat and a move; it answers with an outcome
//! or a `MoveError`.

pub mod actions;
pub mod engine;
pub mod tokens;

pub use actions::ActionOutcome;
pub use engine::{FinalScore, GameResult, GameStatus, JaipurRules, RulesEngine};
pub use tokens::{TokenBank, TokenGrant};
