//! Game state: deck, market, hands, turn index and sale counters.
//!
//! `GameState` is plain data. The rules engine is the only code that
//! mutates it during play; everything else reads it through accessors or
//! through the projections in `game::view`.
//!
//! The deck and the action history are `im` persistent structures, so
//! cloning a state (for agent lookahead) is cheap.

use im::Vector;

use super::action::{Action, ActionRecord};
use super::config::JaipurConfig;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardCounts, CardKind};
use crate::zones::{Deck, Hand, Market};

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) deck: Deck,
    pub(crate) market: Market,
    pub(crate) hands: PlayerMap<Hand>,

    /// Successful moves so far; `turn_index % 2` is the seat to move.
    pub(crate) turn_index: u32,

    /// Units sold per good, across both players.
    pub(crate) transactions: CardCounts,

    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Deal a fresh game: shuffle the supply, seed the market, deal hands.
    #[must_use]
    pub fn new(config: &JaipurConfig, rng: &mut GameRng) -> Self {
        let mut deck = Deck::new(&config.supply, rng);
        let market = Market::init(&mut deck, config.market_camels, config.market_size);
        let hands = PlayerMap::new(|_| {
            let mut hand = Hand::new();
            hand.receive(deck.draw(config.hand_size));
            hand
        });
        Self::from_parts(deck, market, hands)
    }

    /// Assemble a state from explicit piles, at turn 0 with nothing sold.
    ///
    /// Useful for setting up specific positions.
    #[must_use]
    pub fn from_parts(deck: Deck, market: Market, hands: PlayerMap<Hand>) -> Self {
        Self {
            deck,
            market,
            hands,
            turn_index: 0,
            transactions: CardCounts::new(),
            history: Vector::new(),
        }
    }

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The market.
    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Both hands.
    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// Number of successful moves so far.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// Seat whose move it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn_index)
    }

    /// Units sold per good, both players combined.
    #[must_use]
    pub fn transactions(&self) -> &CardCounts {
        &self.transactions
    }

    /// Goods whose sales reached `threshold`.
    #[must_use]
    pub fn sold_out_kinds(&self, threshold: u8) -> usize {
        CardKind::GOODS
            .iter()
            .filter(|&&good| self.transactions.get(good) >= threshold)
            .count()
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards still in play: deck, market and both hands.
    ///
    /// Sold goods leave play, so this equals the supply minus units sold.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.market.len()
            + self.hands.iter().map(|(_, h)| h.card_count()).sum::<usize>()
    }

    /// Cards in play plus goods sold. Constant for the whole game.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.cards_in_play() + self.transactions.total()
    }

    /// Record a successful move and pass the turn.
    pub(crate) fn advance_turn(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_index));
        self.turn_index += 1;
    }
}
