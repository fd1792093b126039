//! Token bank: what a sale pays.
//!
//! Every sale of `n` units of a good pays the first `min(n, 5)` values of
//! that good's ladder, plus a flat bonus token when 3, 4 or 5 units are sold
//! together. The ladder is read from the top on every sale.

use smallvec::SmallVec;

use crate::cards::CardKind;
use crate::core::{JaipurConfig, Ladder, LADDER_LEN};

/// Tokens paid for one sale: up to five ladder values and one bonus.
pub type TokenGrant = SmallVec<[u32; LADDER_LEN + 1]>;

/// Stateless price lookup built from a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBank {
    ladders: [Ladder; 6],
    bonuses: [u32; 3],
}

impl Default for TokenBank {
    fn default() -> Self {
        Self::new(&JaipurConfig::default())
    }
}

impl TokenBank {
    #[must_use]
    pub fn new(config: &JaipurConfig) -> Self {
        Self {
            ladders: config.ladders,
            bonuses: config.sale_bonuses,
        }
    }

    /// Ladder for a good. Panics for camels.
    #[must_use]
    pub fn ladder(&self, good: CardKind) -> &Ladder {
        assert!(good.is_good(), "camels have no price ladder");
        &self.ladders[good.index()]
    }

    /// Value at one ladder position.
    ///
    /// Panics if `position` is past the end of the ladder.
    #[must_use]
    pub fn price(&self, good: CardKind, position: usize) -> u32 {
        assert!(
            position < LADDER_LEN,
            "ladder position {} out of range for {}",
            position,
            good
        );
        self.ladder(good)[position]
    }

    /// Bonus token for selling `count` units at once, if any.
    ///
    /// Counts above five pay the five-card bonus.
    #[must_use]
    pub fn bonus(&self, count: u8) -> Option<u32> {
        match count {
            0..=2 => None,
            3 => Some(self.bonuses[0]),
            4 => Some(self.bonuses[1]),
            _ => Some(self.bonuses[2]),
        }
    }

    /// Every token paid for selling `count` units of `good`.
    #[must_use]
    pub fn sale_tokens(&self, good: CardKind, count: u8) -> TokenGrant {
        let paid = (count as usize).min(LADDER_LEN);
        let mut grant: TokenGrant = (0..paid).map(|pos| self.price(good, pos)).collect();
        if let Some(bonus) = self.bonus(count) {
            grant.push(bonus);
        }
        grant
    }
}
