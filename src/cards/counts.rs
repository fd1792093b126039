//! Fixed-size card multiset.
//!
//! Jaipur never cares which individual Diamond is where, only how many.
//! `CardCounts` stores one counter per [`CardKind`] and is used for the
//! market, hands, deck composition, transaction counters and exchanges.

use serde::{Deserialize, Serialize};

use super::kind::CardKind;

/// A multiset of card kinds, one `u8` counter per kind.
///
/// ## Example
///
/// ```
/// use jaipur_engine::cards::{CardCounts, CardKind};
///
/// let mut counts = CardCounts::new();
/// counts.add(CardKind::Gold, 2);
/// counts.add(CardKind::Camel, 1);
///
/// assert_eq!(counts.get(CardKind::Gold), 2);
/// assert_eq!(counts.total(), 3);
/// assert_eq!(counts.goods_total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCounts {
    counts: [u8; CardKind::COUNT],
}

impl CardCounts {
    /// Empty multiset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; CardKind::COUNT],
        }
    }

    /// The standard 55-card Jaipur supply.
    #[must_use]
    pub fn standard_supply() -> Self {
        let mut counts = Self::new();
        for kind in CardKind::ALL {
            counts.set(kind, kind.standard_supply());
        }
        counts
    }

    /// Multiset holding `count` copies of a single kind.
    #[must_use]
    pub fn of(kind: CardKind, count: u8) -> Self {
        let mut counts = Self::new();
        counts.set(kind, count);
        counts
    }

    /// Count for one kind.
    #[must_use]
    pub const fn get(&self, kind: CardKind) -> u8 {
        self.counts[kind.index()]
    }

    /// Overwrite the count for one kind.
    pub fn set(&mut self, kind: CardKind, count: u8) {
        self.counts[kind.index()] = count;
    }

    /// Add `count` copies of a kind, saturating at `u8::MAX`.
    pub fn add(&mut self, kind: CardKind, count: u8) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(count);
    }

    /// Remove `count` copies of a kind.
    ///
    /// Returns `false` and leaves the multiset untouched if fewer than
    /// `count` copies are present.
    pub fn remove(&mut self, kind: CardKind, count: u8) -> bool {
        match self.counts[kind.index()].checked_sub(count) {
            Some(rest) => {
                self.counts[kind.index()] = rest;
                true
            }
            None => false,
        }
    }

    /// Add every card of `other`.
    pub fn add_all(&mut self, other: &CardCounts) {
        for kind in CardKind::ALL {
            self.add(kind, other.get(kind));
        }
    }

    /// Remove every card of `other`, all or nothing.
    ///
    /// Returns `false` and leaves the multiset untouched unless `self`
    /// contains `other`.
    pub fn remove_all(&mut self, other: &CardCounts) -> bool {
        if !self.contains(other) {
            return false;
        }
        for kind in CardKind::ALL {
            self.counts[kind.index()] -= other.get(kind);
        }
        true
    }

    /// Does `self` hold at least every card of `other`?
    #[must_use]
    pub fn contains(&self, other: &CardCounts) -> bool {
        CardKind::ALL
            .iter()
            .all(|&kind| self.get(kind) >= other.get(kind))
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Total number of non-camel cards.
    #[must_use]
    pub fn goods_total(&self) -> usize {
        self.total() - self.get(CardKind::Camel) as usize
    }

    /// Check if the multiset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Copy with the camel slot cleared.
    #[must_use]
    pub fn goods_only(&self) -> Self {
        let mut goods = *self;
        goods.set(CardKind::Camel, 0);
        goods
    }

    /// Iterate over (kind, count) pairs with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, u8)> + '_ {
        CardKind::ALL
            .iter()
            .map(move |&kind| (kind, self.get(kind)))
            .filter(|&(_, count)| count > 0)
    }

    /// Raw counters in slot order.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; CardKind::COUNT] {
        &self.counts
    }

    /// Expand into individual cards, in slot order.
    #[must_use]
    pub fn to_cards(&self) -> Vec<CardKind> {
        self.iter()
            .flat_map(|(kind, count)| std::iter::repeat(kind).take(count as usize))
            .collect()
    }

    /// Every goods-only sub-multiset of exactly `size` cards.
    ///
    /// Camels are never part of the result. Used to enumerate exchanges.
    #[must_use]
    pub fn goods_subsets(&self, size: usize) -> Vec<CardCounts> {
        let mut out = Vec::new();
        let mut current = CardCounts::new();
        self.collect_subsets(0, size, &mut current, &mut out);
        out
    }

    fn collect_subsets(
        &self,
        good_idx: usize,
        remaining: usize,
        current: &mut CardCounts,
        out: &mut Vec<CardCounts>,
    ) {
        if remaining == 0 {
            out.push(*current);
            return;
        }
        let Some(&kind) = CardKind::GOODS.get(good_idx) else {
            return;
        };
        let max = (self.get(kind) as usize).min(remaining);
        for take in (0..=max).rev() {
            current.set(kind, take as u8);
            self.collect_subsets(good_idx + 1, remaining - take, current, out);
        }
        current.set(kind, 0);
    }
}

impl FromIterator<CardKind> for CardCounts {
    fn from_iter<I: IntoIterator<Item = CardKind>>(iter: I) -> Self {
        let mut counts = CardCounts::new();
        for kind in iter {
            counts.add(kind, 1);
        }
        counts
    }
}

impl std::fmt::Display for CardCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (kind, count) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}x{}", count, kind)?;
            first = false;
        }
        if first {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}
