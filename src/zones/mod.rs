//! Card piles: the draw deck, the shared market, and player hands.
//!
//! ## Key Types
//!
//! - `Deck`: Face-down shuffled pile, drawn from the top
//! - `Market`: Face-up cards both players trade against
//! - `Hand`: A player's goods, camel herd and earned tokens
//!
//! Removals are all-or-nothing and report `ZoneError::InvalidRemoval`
//! when the cards are not there. Player actions validate first, so that
//! error only surfaces when a caller bypasses the rules.

pub mod deck;
pub mod hand;
pub mod market;

pub use deck::Deck;
pub use hand::Hand;
pub use market::Market;

use thiserror::Error;

use crate::cards::CardCounts;

/// Integrity error from a pile.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ZoneError {
    #[error("cannot remove [{requested}] from {zone} holding [{available}]")]
    InvalidRemoval {
        zone: &'static str,
        requested: CardCounts,
        available: CardCounts,
    },
}
