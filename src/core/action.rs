//! Player moves and the reasons a move can be refused.
//!
//! A Jaipur turn is exactly one of four moves:
//! - take one good from the market
//! - take every camel from the market
//! - sell some units of one good
//! - exchange goods with the market, card for card
//!
//! Refusals are ordinary values (`MoveError`), never panics: an illegal
//! move leaves the game untouched and the same player moves again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CardCounts, CardKind};

/// One move by the active player.
///
/// ## Example
///
/// ```
/// use jaipur_engine::core::Action;
/// use jaipur_engine::cards::CardKind;
///
/// let sell = Action::Sell { good: CardKind::Diamond, count: 3 };
/// let swap = Action::exchange(&[(CardKind::Gold, 2)], &[(CardKind::Leather, 2)]);
///
/// assert_ne!(sell, swap);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take one good from the market; the market refills one card.
    TakeGood(CardKind),
    /// Take every camel in the market; the market refills as many cards.
    TakeCamels,
    /// Sell `count` units of `good` from hand.
    Sell { good: CardKind, count: u8 },
    /// Swap `give` from hand for `take` from the market. No refill.
    Exchange { take: CardCounts, give: CardCounts },
}

impl Action {
    /// Build an exchange from (kind, count) lists.
    #[must_use]
    pub fn exchange(take: &[(CardKind, u8)], give: &[(CardKind, u8)]) -> Self {
        let bundle = |pairs: &[(CardKind, u8)]| {
            let mut counts = CardCounts::new();
            for &(kind, count) in pairs {
                counts.add(kind, count);
            }
            counts
        };
        Action::Exchange {
            take: bundle(take),
            give: bundle(give),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::TakeGood(kind) => write!(f, "take {}", kind),
            Action::TakeCamels => f.write_str("take all camels"),
            Action::Sell { good, count } => write!(f, "sell {}x{}", count, good),
            Action::Exchange { take, give } => write!(f, "exchange [{}] for [{}]", give, take),
        }
    }
}

/// Why a move was refused. The game state is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },
    #[error("camels cannot be taken singly, sold or exchanged")]
    CamelNotTradable,
    #[error("no {0} in the market")]
    NotInMarket(CardKind),
    #[error("no camels in the market")]
    NoCamelsInMarket,
    #[error("must sell at least one card")]
    ZeroCount,
    #[error("cannot sell {requested} {good}: only {held} in hand")]
    NotEnoughGoods { good: CardKind, held: u8, requested: u8 },
    #[error("an exchange must take and give at least one card")]
    EmptyExchange,
    #[error("exchange takes {take} cards but gives {give}")]
    UnbalancedExchange { take: usize, give: usize },
    #[error("the market does not hold the requested cards")]
    NotEnoughInMarket,
    #[error("the hand does not hold the offered cards")]
    NotEnoughInHand,
    #[error("hand would exceed {limit} goods")]
    HandLimit { limit: usize },
}

/// An applied move, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move.
    pub action: Action,

    /// Turn index at which the move was applied.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_builder_merges_pairs() {
        let action = Action::exchange(
            &[(CardKind::Gold, 1), (CardKind::Gold, 1)],
            &[(CardKind::Leather, 2)],
        );
        match action {
            Action::Exchange { take, give } => {
                assert_eq!(take, CardCounts::of(CardKind::Gold, 2));
                assert_eq!(give, CardCounts::of(CardKind::Leather, 2));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_exchange_builder_saturates_large_counts() {
        let action = Action::exchange(&[(CardKind::Gold, 200), (CardKind::Gold, 100)], &[]);
        match action {
            Action::Exchange { take, .. } => assert_eq!(take.get(CardKind::Gold), u8::MAX),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::TakeGood(CardKind::Silver).to_string(), "take Silver");
        assert_eq!(
            Action::Sell { good: CardKind::Cloth, count: 4 }.to_string(),
            "sell 4xCloth"
        );
        assert_eq!(
            Action::exchange(&[(CardKind::Spice, 1)], &[(CardKind::Gold, 1)]).to_string(),
            "exchange [1xGold] for [1xSpice]"
        );
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::NotYourTurn {
            expected: PlayerId::FIRST,
            actual: PlayerId::SECOND,
        };
        assert_eq!(err.to_string(), "it is Player 1's turn, not Player 2's");
        assert_eq!(
            MoveError::NotEnoughGoods { good: CardKind::Gold, held: 1, requested: 3 }.to_string(),
            "cannot sell 3 Gold: only 1 in hand"
        );
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::SECOND,
            Action::exchange(&[(CardKind::Diamond, 1)], &[(CardKind::Cloth, 1)]),
            7,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
