//! Card kinds - the fixed Jaipur catalog.
//!
//! Six goods (three high-value, three low-value) and the camel.
//! Camels are never sold and never count as goods in a hand.

use serde::{Deserialize, Serialize};

/// One of the seven card kinds in a Jaipur deck.
///
/// The discriminant doubles as the slot index in [`CardCounts`](super::CardCounts)
/// and in encoded observations, so the order is part of the public contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Diamond = 0,
    Gold = 1,
    Silver = 2,
    Cloth = 3,
    Spice = 4,
    Leather = 5,
    Camel = 6,
}

impl CardKind {
    /// Number of card kinds.
    pub const COUNT: usize = 7;

    /// Every kind, in slot order.
    pub const ALL: [CardKind; Self::COUNT] = [
        CardKind::Diamond,
        CardKind::Gold,
        CardKind::Silver,
        CardKind::Cloth,
        CardKind::Spice,
        CardKind::Leather,
        CardKind::Camel,
    ];

    /// The six tradable goods, in slot order.
    pub const GOODS: [CardKind; 6] = [
        CardKind::Diamond,
        CardKind::Gold,
        CardKind::Silver,
        CardKind::Cloth,
        CardKind::Spice,
        CardKind::Leather,
    ];

    /// Slot index of this kind (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind for a slot index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Goods can be traded and sold. Camels cannot.
    #[must_use]
    pub const fn is_good(self) -> bool {
        !matches!(self, CardKind::Camel)
    }

    /// Diamond, Gold and Silver.
    #[must_use]
    pub const fn is_high_value(self) -> bool {
        matches!(self, CardKind::Diamond | CardKind::Gold | CardKind::Silver)
    }

    /// Number of copies of this kind in a standard 55-card deck.
    #[must_use]
    pub const fn standard_supply(self) -> u8 {
        match self {
            CardKind::Diamond | CardKind::Gold | CardKind::Silver => 6,
            CardKind::Cloth | CardKind::Spice => 8,
            CardKind::Leather => 10,
            CardKind::Camel => 11,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Diamond => "Diamond",
            CardKind::Gold => "Gold",
            CardKind::Silver => "Silver",
            CardKind::Cloth => "Cloth",
            CardKind::Spice => "Spice",
            CardKind::Leather => "Leather",
            CardKind::Camel => "Camel",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for kind in CardKind::ALL {
            assert_eq!(CardKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(CardKind::from_index(CardKind::COUNT), None);
    }

    #[test]
    fn test_goods_exclude_camel() {
        assert!(CardKind::GOODS.iter().all(|k| k.is_good()));
        assert!(!CardKind::Camel.is_good());
        assert!(!CardKind::GOODS.contains(&CardKind::Camel));
    }

    #[test]
    fn test_value_classes() {
        assert!(CardKind::Diamond.is_high_value());
        assert!(CardKind::Silver.is_high_value());
        assert!(!CardKind::Leather.is_high_value());
        assert!(!CardKind::Camel.is_high_value());
    }

    #[test]
    fn test_standard_supply_totals_55() {
        let total: u32 = CardKind::ALL.iter().map(|k| u32::from(k.standard_supply())).sum();
        assert_eq!(total, 55);
        assert_eq!(CardKind::Camel.standard_supply(), 11);
        assert_eq!(CardKind::Leather.standard_supply(), 10);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardKind::Spice), "Spice");
    }
}
