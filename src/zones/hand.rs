//! A player's private hand, camel herd and token pile.

use serde::{Deserialize, Serialize};

use super::ZoneError;
use crate::cards::{CardCounts, CardKind};

/// Everything one player holds.
///
/// Goods and camels are kept apart: camels never sit in `goods` and never
/// count toward a goods limit. Tokens are kept as the individual values
/// earned, in the order they were earned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    goods: CardCounts,
    camels: u8,
    tokens: Vec<u32>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take cards into hand, routing camels to the herd.
    pub fn receive(&mut self, cards: impl IntoIterator<Item = CardKind>) {
        for card in cards {
            if card.is_good() {
                self.goods.add(card, 1);
            } else {
                self.camels += 1;
            }
        }
    }

    /// Add goods, ignoring any camel slot in `goods`.
    pub fn add_goods(&mut self, goods: &CardCounts) {
        self.goods.add_all(&goods.goods_only());
    }

    /// Add camels to the herd.
    pub fn add_camels(&mut self, count: u8) {
        self.camels += count;
    }

    /// Remove exactly `goods`, all or nothing.
    pub fn remove_goods(&mut self, goods: &CardCounts) -> Result<(), ZoneError> {
        if goods.get(CardKind::Camel) == 0 && self.goods.remove_all(goods) {
            Ok(())
        } else {
            Err(ZoneError::InvalidRemoval {
                zone: "hand",
                requested: *goods,
                available: self.goods,
            })
        }
    }

    /// Goods in hand.
    #[must_use]
    pub fn goods(&self) -> &CardCounts {
        &self.goods
    }

    /// Units of one good in hand.
    #[must_use]
    pub fn good_count(&self, good: CardKind) -> u8 {
        self.goods.get(good)
    }

    /// Number of goods in hand (camels excluded).
    #[must_use]
    pub fn goods_len(&self) -> usize {
        self.goods.total()
    }

    /// Size of the camel herd.
    #[must_use]
    pub fn camels(&self) -> u8 {
        self.camels
    }

    /// Goods plus camels.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.goods.total() + self.camels as usize
    }

    /// Tokens earned, in order.
    #[must_use]
    pub fn tokens(&self) -> &[u32] {
        &self.tokens
    }

    /// Sum of all tokens.
    #[must_use]
    pub fn token_total(&self) -> u32 {
        self.tokens.iter().sum()
    }

    /// Append earned tokens.
    pub fn push_tokens(&mut self, tokens: &[u32]) {
        self.tokens.extend_from_slice(tokens);
    }
}
