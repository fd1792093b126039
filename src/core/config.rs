//! Rule configuration.
//!
//! `JaipurConfig::default()` is the published ruleset: a 55-card supply,
//! a five-card market seeded with three camels, five-card opening hands,
//! the standard price ladders and sale bonuses, and a five-point camel
//! bonus. Every number the rules engine consults lives here so that
//! variants can be loaded from JSON without touching the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardCounts, CardKind};

/// Number of tokens in each good's price ladder.
pub const LADDER_LEN: usize = 5;

/// Token values for selling 1..=5 units of one good, best first.
pub type Ladder = [u32; LADDER_LEN];

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("market needs {needed} starting camels but the supply has {available}")]
    NotEnoughCamels { needed: u8, available: u8 },
    #[error("market of {market_size} cards cannot hold {camels} starting camels")]
    MarketTooSmall { market_size: usize, camels: u8 },
    #[error("setup needs {needed} cards but the supply has {available}")]
    SupplyTooSmall { needed: usize, available: usize },
    #[error("price ladder for {0} must not increase")]
    LadderIncreasing(CardKind),
    #[error("game end requires between 1 and 6 sold-out goods, got {0}")]
    InvalidSoldOutKinds(usize),
    #[error("sold-out threshold must be at least 1")]
    ZeroSoldOutThreshold,
}

/// Complete rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaipurConfig {
    /// Cards in the box.
    pub supply: CardCounts,

    /// Face-up cards kept in the market.
    pub market_size: usize,

    /// Camels placed in the market before any card is drawn.
    pub market_camels: u8,

    /// Cards dealt to each player at setup.
    pub hand_size: usize,

    /// Price ladder per good, indexed by `CardKind::index()`.
    pub ladders: [Ladder; 6],

    /// Bonus token for selling 3, 4 and 5 units at once.
    pub sale_bonuses: [u32; 3],

    /// Awarded to the player with strictly more camels at the end.
    pub camel_bonus: u32,

    /// Units sold before a good counts as sold out.
    pub sold_out_threshold: u8,

    /// Sold-out goods that end the game.
    pub sold_out_kinds_to_end: usize,

    /// Optional cap on goods held after a take. `None` means no cap.
    pub max_hand_goods: Option<usize>,
}

impl Default for JaipurConfig {
    fn default() -> Self {
        Self {
            supply: CardCounts::standard_supply(),
            market_size: 5,
            market_camels: 3,
            hand_size: 5,
            ladders: [
                [7, 6, 5, 5, 4], // Diamond
                [6, 5, 5, 4, 3], // Gold
                [5, 5, 4, 3, 2], // Silver
                [5, 3, 3, 2, 1], // Cloth
                [5, 3, 3, 2, 1], // Spice
                [4, 3, 2, 1, 1], // Leather
            ],
            sale_bonuses: [1, 2, 3],
            camel_bonus: 5,
            sold_out_threshold: 5,
            sold_out_kinds_to_end: 3,
            max_hand_goods: None,
        }
    }
}

impl JaipurConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to the standard rules.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the goods hand cap.
    #[must_use]
    pub fn with_max_hand_goods(mut self, max: usize) -> Self {
        self.max_hand_goods = Some(max);
        self
    }

    /// Check that setup can always be dealt and ladders make sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let available = self.supply.get(CardKind::Camel);
        if available < self.market_camels {
            return Err(ConfigError::NotEnoughCamels {
                needed: self.market_camels,
                available,
            });
        }
        if self.market_size < self.market_camels as usize {
            return Err(ConfigError::MarketTooSmall {
                market_size: self.market_size,
                camels: self.market_camels,
            });
        }
        let needed = self.market_size + 2 * self.hand_size;
        if self.supply.total() < needed {
            return Err(ConfigError::SupplyTooSmall {
                needed,
                available: self.supply.total(),
            });
        }
        for good in CardKind::GOODS {
            if self.ladder(good).windows(2).any(|w| w[1] > w[0]) {
                return Err(ConfigError::LadderIncreasing(good));
            }
        }
        if !(1..=CardKind::GOODS.len()).contains(&self.sold_out_kinds_to_end) {
            return Err(ConfigError::InvalidSoldOutKinds(self.sold_out_kinds_to_end));
        }
        if self.sold_out_threshold == 0 {
            return Err(ConfigError::ZeroSoldOutThreshold);
        }
        Ok(())
    }

    /// Price ladder for a good.
    ///
    /// Panics for `CardKind::Camel`, which has no price.
    #[must_use]
    pub fn ladder(&self, good: CardKind) -> &Ladder {
        assert!(good.is_good(), "camels have no price ladder");
        &self.ladders[good.index()]
    }
}
