//! The face-down draw pile.

use im::Vector;

use crate::cards::{CardCounts, CardKind};
use crate::core::GameRng;

/// Shuffled draw pile. The top of the deck is the back of the vector.
///
/// The pile only ever shrinks. Backed by `im::Vector` so cloning a game
/// for lookahead does not copy the cards.
///
/// ```
/// use jaipur_engine::cards::CardCounts;
/// use jaipur_engine::core::GameRng;
/// use jaipur_engine::zones::Deck;
///
/// let mut rng = GameRng::new(1);
/// let mut deck = Deck::new(&CardCounts::standard_supply(), &mut rng);
///
/// assert_eq!(deck.draw(5).len(), 5);
/// assert_eq!(deck.len(), 50);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<CardKind>,
}

impl Deck {
    /// Build a deck holding every card of `supply`, uniformly shuffled.
    #[must_use]
    pub fn new(supply: &CardCounts, rng: &mut GameRng) -> Self {
        let mut cards = supply.to_cards();
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Deck in exactly the given order; the last card is drawn first.
    #[must_use]
    pub fn stacked(cards: impl IntoIterator<Item = CardKind>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draw up to `n` cards from the top.
    ///
    /// Returns fewer than `n` (possibly none) when the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<CardKind> {
        let mut drawn = Vec::with_capacity(n.min(self.cards.len()));
        for _ in 0..n {
            match self.cards.pop_back() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Draw up to `n` cards that are not `skip`, searching down from the top.
    ///
    /// Skipped cards stay where they were.
    pub fn draw_except(&mut self, skip: CardKind, n: usize) -> Vec<CardKind> {
        let mut drawn = Vec::with_capacity(n);
        let mut passed = Vec::new();
        while drawn.len() < n {
            match self.cards.pop_back() {
                Some(card) if card == skip => passed.push(card),
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        for card in passed.into_iter().rev() {
            self.cards.push_back(card);
        }
        drawn
    }

    /// Pull up to `n` cards of one kind out of the pile, wherever they sit.
    ///
    /// The relative order of the other cards is unchanged.
    pub fn remove_kind(&mut self, kind: CardKind, n: usize) -> Vec<CardKind> {
        let mut removed = Vec::with_capacity(n);
        let mut kept = Vector::new();
        for card in self.cards.iter().copied() {
            if card == kind && removed.len() < n {
                removed.push(card);
            } else {
                kept.push_back(card);
            }
        }
        self.cards = kept;
        removed
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// What is left, without revealing the order.
    #[must_use]
    pub fn composition(&self) -> CardCounts {
        self.cards.iter().copied().collect()
    }
}
