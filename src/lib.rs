//! # jaipur-engine
//!
//! Rules engine for Jaipur, the two-player trading card game.
//!
//! ## Design Principles
//!
//! 1. **Engine, not interface**: Nothing here prints or prompts. Front ends
//!    drive a `Game` through its entry points or seat agents that answer
//!    `TurnView`s.
//!
//! 2. **Refusals are values**: An illegal move returns a `MoveError` and
//!    leaves the game exactly as it was.
//!
//! 3. **Hidden information stays hidden**: Agents only ever see their own
//!    projection of the game.
//!
//! ## Architecture
//!
//! - **Counted piles**: Every pile except the deck is a `CardCounts`
//!   multiset; the deck is an `im::Vector` so states clone in O(1).
//!
//! - **Seeded randomness**: One seed determines the deal and every agent's
//!   random choices, so games replay exactly.
//!
//! ## Modules
//!
//! - `core`: Players, actions, configuration, RNG and game state
//! - `cards`: Card kinds and card multisets
//! - `zones`: Deck, market and hands
//! - `rules`: Token bank, move legality and the `RulesEngine`
//! - `players`: Human, scripted and learned agents
//! - `nn`: Observation encoding and the policy network interface
//! - `game`: The game controller and per-player views

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod players;
pub mod nn;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameRng, GameState, JaipurConfig,
    MoveError, PlayerId, PlayerMap,
};

pub use crate::cards::{CardCounts, CardKind};

pub use crate::zones::{Deck, Hand, Market, ZoneError};

pub use crate::rules::{
    ActionOutcome, FinalScore, GameResult, GameStatus, JaipurRules, RulesEngine, TokenBank,
};

pub use crate::players::{Agent, AgentKind, HumanInput, LearnedAi, QueuedInput, ScriptedAi};

pub use crate::nn::{ActionIndex, EncodedState, ObservationEncoder, PolicyNetwork};

pub use crate::game::{Game, GameBuilder, MarketView, OpponentView, PlayerView, TurnView};
