//! Playing a game: the controller that seats agents and runs turns, and the
//! per-player projections handed to agents and front ends.

pub mod controller;
pub mod view;

pub use controller::{Game, GameBuilder};
pub use view::{MarketView, OpponentView, PlayerView, TurnView};
