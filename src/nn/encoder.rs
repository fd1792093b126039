//! Observation encoding for policy networks.
//!
//! Encoders read a `TurnView`, never the full `GameState`, so an encoded
//! observation can only contain what the acting player is allowed to see.

use crate::cards::{CardCounts, CardKind};
use crate::game::TurnView;
use crate::nn::action_space::ACTION_SPACE_SIZE;
use crate::nn::traits::EncodedState;

/// Length of an observation produced by `ObservationEncoder`.
pub const OBSERVATION_LEN: usize = 25;

const MARKET: usize = 0;
const HAND: usize = MARKET + CardKind::COUNT;
const OWN_CAMELS: usize = HAND + CardKind::COUNT;
const OWN_TOKENS: usize = OWN_CAMELS + 1;
const OPPONENT_CAMELS: usize = OWN_TOKENS + 1;
const OPPONENT_HIDDEN: usize = OPPONENT_CAMELS + 1;
const TRANSACTIONS: usize = OPPONENT_HIDDEN + 1;

/// Turns a player's view into a tensor.
pub trait ViewEncoder: Send + Sync {
    fn encode(&self, view: &TurnView) -> EncodedState;

    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output this encoder is paired with.
    fn action_space_size(&self) -> usize;
}

/// Flat 25-feature encoding.
///
/// Layout:
/// - `0..7`: market count per card kind (camels last)
/// - `7..14`: own goods per kind (camel slot always zero)
/// - `14`: own camels
/// - `15`: own token total
/// - `16`: opponent camels
/// - `17`: opponent hidden goods
/// - `18..25`: units sold per kind
///
/// Counts are divided by `max_cards` and tokens by `max_tokens`, both
/// clamped to `[0, 1]`. Pass `1.0` for both to get raw counts.
#[derive(Clone, Debug)]
pub struct ObservationEncoder {
    max_cards: f32,
    max_tokens: f32,
}

impl Default for ObservationEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationEncoder {
    pub fn new() -> Self {
        Self {
            max_cards: 11.0,
            max_tokens: 100.0,
        }
    }

    /// Raw counts, no scaling or clamping.
    pub fn raw() -> Self {
        Self {
            max_cards: 1.0,
            max_tokens: 1.0,
        }
    }

    pub fn with_max_cards(mut self, max_cards: f32) -> Self {
        self.max_cards = max_cards;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: f32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn scale(value: f32, max: f32) -> f32 {
        if max == 1.0 {
            value
        } else {
            (value / max).clamp(0.0, 1.0)
        }
    }

    fn write_counts(&self, tensor: &mut [f32], offset: usize, counts: &CardCounts) {
        for kind in CardKind::ALL {
            tensor[offset + kind.index()] =
                Self::scale(counts.get(kind) as f32, self.max_cards);
        }
    }
}

impl ViewEncoder for ObservationEncoder {
    fn encode(&self, view: &TurnView) -> EncodedState {
        let mut tensor = vec![0.0f32; OBSERVATION_LEN];

        let mut market = view.market.good_counts;
        market.set(CardKind::Camel, view.market.camel_count);
        self.write_counts(&mut tensor, MARKET, &market);
        self.write_counts(&mut tensor, HAND, &view.me.good_counts.goods_only());

        tensor[OWN_CAMELS] = Self::scale(view.me.camel_count as f32, self.max_cards);
        tensor[OWN_TOKENS] = Self::scale(view.me.token_total as f32, self.max_tokens);
        tensor[OPPONENT_CAMELS] = Self::scale(view.opponent.camel_count as f32, self.max_cards);
        tensor[OPPONENT_HIDDEN] = Self::scale(view.opponent.hidden_goods as f32, self.max_cards);

        self.write_counts(&mut tensor, TRANSACTIONS, &view.transactions);

        EncodedState::new(tensor, vec![OBSERVATION_LEN])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![OBSERVATION_LEN]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PlayerId, PlayerMap};
    use crate::zones::{Deck, Hand, Market};

    fn view() -> TurnView {
        let mut hands = PlayerMap::with_value(Hand::new());
        hands[PlayerId::FIRST].receive([CardKind::Silver, CardKind::Silver, CardKind::Camel]);
        hands[PlayerId::FIRST].push_tokens(&[5, 5]);
        hands[PlayerId::SECOND].receive([CardKind::Diamond, CardKind::Diamond, CardKind::Gold]);
        hands[PlayerId::SECOND].add_camels(4);
        hands[PlayerId::SECOND].push_tokens(&[7, 6, 5]);
        let mut state = GameState::from_parts(
            Deck::stacked([CardKind::Cloth; 10]),
            Market::from_counts(
                [CardKind::Camel, CardKind::Camel, CardKind::Spice, CardKind::Gold, CardKind::Gold]
                    .into_iter()
                    .collect(),
            ),
            hands,
        );
        state.transactions.set(CardKind::Leather, 3);
        TurnView::new(&state, PlayerId::FIRST, ["A", "B"])
    }

    #[test]
    fn test_shape() {
        let encoder = ObservationEncoder::new();
        assert_eq!(encoder.output_shape(), vec![OBSERVATION_LEN]);
        assert_eq!(encoder.action_space_size(), ACTION_SPACE_SIZE);
        assert_eq!(encoder.encode(&view()).len(), OBSERVATION_LEN);
    }

    #[test]
    fn test_raw_layout() {
        let encoded = ObservationEncoder::raw().encode(&view());
        let t = &encoded.tensor;

        assert_eq!(t[MARKET + CardKind::Gold.index()], 2.0);
        assert_eq!(t[MARKET + CardKind::Spice.index()], 1.0);
        assert_eq!(t[MARKET + CardKind::Camel.index()], 2.0);
        assert_eq!(t[HAND + CardKind::Silver.index()], 2.0);
        assert_eq!(t[HAND + CardKind::Camel.index()], 0.0);
        assert_eq!(t[OWN_CAMELS], 1.0);
        assert_eq!(t[OWN_TOKENS], 10.0);
        assert_eq!(t[OPPONENT_CAMELS], 4.0);
        assert_eq!(t[OPPONENT_HIDDEN], 3.0);
        assert_eq!(t[TRANSACTIONS + CardKind::Leather.index()], 3.0);
    }

    #[test]
    fn test_opponent_goods_and_tokens_absent() {
        let encoded = ObservationEncoder::raw().encode(&view());
        // Opponent holds Diamonds and 18 in tokens; neither shows up.
        assert!(encoded.tensor.iter().all(|&v| v != 18.0));
        assert_eq!(encoded.tensor[HAND + CardKind::Diamond.index()], 0.0);
        assert_eq!(encoded.tensor[MARKET + CardKind::Diamond.index()], 0.0);
    }

    #[test]
    fn test_scaling_clamps() {
        let encoder = ObservationEncoder::new().with_max_tokens(5.0).with_max_cards(2.0);
        let encoded = encoder.encode(&view());
        assert_eq!(encoded.tensor[OWN_TOKENS], 1.0);
        assert_eq!(encoded.tensor[OPPONENT_CAMELS], 1.0);
        assert!((encoded.tensor[MARKET + CardKind::Spice.index()] - 0.5).abs() < 1e-6);
    }
}
