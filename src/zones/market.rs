//! The face-up market both players trade against.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use super::ZoneError;
use crate::cards::{CardCounts, CardKind};

/// Face-up cards available for trading.
///
/// The market does not police its own size: the player actions refill it
/// card for card after every take, so it only shrinks once the deck is dry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    cards: CardCounts,
}

impl Market {
    /// Seed the market: pull `camels` camels out of the deck, then fill up
    /// to `size` cards with the topmost goods.
    pub fn init(deck: &mut Deck, camels: u8, size: usize) -> Self {
        let mut market = Self::default();
        market.add(deck.remove_kind(CardKind::Camel, camels as usize));
        let missing = size.saturating_sub(market.len());
        market.add(deck.draw_except(CardKind::Camel, missing));
        market
    }

    /// Market holding exactly these cards.
    #[must_use]
    pub fn from_counts(cards: CardCounts) -> Self {
        Self { cards }
    }

    /// Every card in the market.
    #[must_use]
    pub fn cards(&self) -> &CardCounts {
        &self.cards
    }

    /// The non-camel cards.
    #[must_use]
    pub fn goods(&self) -> CardCounts {
        self.cards.goods_only()
    }

    /// Number of camels.
    #[must_use]
    pub fn camels(&self) -> u8 {
        self.cards.get(CardKind::Camel)
    }

    /// Count of one kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u8 {
        self.cards.get(kind)
    }

    /// Total cards on display.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.total()
    }

    /// Check if the market is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove exactly `cards`, all or nothing.
    pub fn remove(&mut self, cards: &CardCounts) -> Result<(), ZoneError> {
        if self.cards.remove_all(cards) {
            Ok(())
        } else {
            Err(ZoneError::InvalidRemoval {
                zone: "market",
                requested: *cards,
                available: self.cards,
            })
        }
    }

    /// Lay cards out in the market.
    pub fn add(&mut self, cards: impl IntoIterator<Item = CardKind>) {
        for card in cards {
            self.cards.add(card, 1);
        }
    }
}
