//! Who sits in each seat.
//!
//! ## Key Types
//!
//! - `Agent`: the closed set of seat kinds (human, scripted, learned)
//! - `HumanInput`: callback a front end implements for human seats
//! - `ScriptedAi`: fixed-priority heuristic
//! - `LearnedAi`: policy-network player
//!
//! Every agent sees a `TurnView` and the legal moves, never the full state.

pub mod human;
pub mod learned;
pub mod scripted;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use human::{HumanInput, QueuedInput};
pub use learned::LearnedAi;
pub use scripted::ScriptedAi;

use crate::core::{Action, GameRng, MoveError};
use crate::game::TurnView;

/// Seat kind, without the agent's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Human,
    Scripted,
    Learned,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Human => "human",
            AgentKind::Scripted => "scripted",
            AgentKind::Learned => "learned",
        };
        f.write_str(name)
    }
}

/// The decision maker for one seat.
pub enum Agent {
    Human(Box<dyn HumanInput>),
    Scripted(ScriptedAi),
    Learned(LearnedAi),
}

impl Agent {
    pub fn human(input: impl HumanInput + 'static) -> Self {
        Agent::Human(Box::new(input))
    }

    #[must_use]
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Human(_) => AgentKind::Human,
            Agent::Scripted(_) => AgentKind::Scripted,
            Agent::Learned(_) => AgentKind::Learned,
        }
    }

    /// Pick a move, or `None` to pass up this attempt without moving.
    pub fn choose_action(
        &mut self,
        view: &TurnView,
        legal: &[Action],
        rng: &mut GameRng,
    ) -> Option<Action> {
        match self {
            Agent::Human(input) => input.choose_action(view, legal),
            Agent::Scripted(ai) => ai.choose_action(view, legal, rng),
            Agent::Learned(ai) => ai.choose_action(view, legal),
        }
    }

    /// Tell the agent its move was refused. Only human seats care.
    pub fn notify_refused(&mut self, action: &Action, error: &MoveError) {
        if let Agent::Human(input) = self {
            input.on_refused(action, error);
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Agent::Scripted(ScriptedAi::new())
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Human(_) => f.write_str("Human(..)"),
            Agent::Scripted(ai) => f.debug_tuple("Scripted").field(ai).finish(),
            Agent::Learned(ai) => f.debug_tuple("Learned").field(ai).finish(),
        }
    }
}
