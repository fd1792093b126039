//! Read-only projections for front ends and agents.
//!
//! A player may see their own goods, camels and tokens, the market, the
//! deck size and the sale counters. Of the opponent they see only the
//! camel herd and how many goods are hidden in hand. These projections are
//! the only view of the game handed to agents, so hidden information stays
//! hidden whoever is playing.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCounts, CardKind};
use crate::core::{GameState, PlayerId};

/// A player's own view of their holdings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    /// Goods in hand by kind. The camel slot is always zero.
    pub good_counts: CardCounts,
    pub camel_count: u8,
    pub token_total: u32,
}

impl PlayerView {
    #[must_use]
    pub fn new(state: &GameState, player: PlayerId, name: impl Into<String>) -> Self {
        let hand = state.hand(player);
        Self {
            name: name.into(),
            good_counts: *hand.goods(),
            camel_count: hand.camels(),
            token_total: hand.token_total(),
        }
    }
}

/// What a player may know about the other seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    pub name: String,
    pub camel_count: u8,
    /// Number of goods in hand; their kinds are not revealed.
    pub hidden_goods: usize,
}

impl OpponentView {
    #[must_use]
    pub fn new(state: &GameState, opponent: PlayerId, name: impl Into<String>) -> Self {
        let hand = state.hand(opponent);
        Self {
            name: name.into(),
            camel_count: hand.camels(),
            hidden_goods: hand.goods_len(),
        }
    }
}

/// The face-up market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketView {
    /// Goods on display by kind. The camel slot is always zero.
    pub good_counts: CardCounts,
    pub camel_count: u8,
}

impl MarketView {
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        let market = state.market();
        Self {
            good_counts: market.goods(),
            camel_count: market.camels(),
        }
    }

    /// Count of one kind, camels included.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u8 {
        if kind.is_good() {
            self.good_counts.get(kind)
        } else {
            self.camel_count
        }
    }
}

/// Everything the seat to move is allowed to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub player: PlayerId,
    pub turn_index: u32,
    pub me: PlayerView,
    pub opponent: OpponentView,
    pub market: MarketView,
    pub deck_size: usize,
    /// Units sold per good, both players combined.
    pub transactions: CardCounts,
}

impl TurnView {
    #[must_use]
    pub fn new(state: &GameState, player: PlayerId, names: [&str; 2]) -> Self {
        let opponent = player.opponent();
        Self {
            player,
            turn_index: state.turn_index(),
            me: PlayerView::new(state, player, names[player.index()]),
            opponent: OpponentView::new(state, opponent, names[opponent.index()]),
            market: MarketView::new(state),
            deck_size: state.deck().len(),
            transactions: *state.transactions(),
        }
    }
}
