//! Agent backed by a policy network.

use crate::core::Action;
use crate::game::TurnView;
use crate::nn::{ActionIndex, ObservationEncoder, PolicyNetwork, ViewEncoder};

/// Plays the legal move its policy scores highest.
///
/// Only moves in the discrete action space are considered, so a learned
/// agent never exchanges and only sells whole stocks. Ties go to the lowest
/// index.
pub struct LearnedAi {
    encoder: Box<dyn ViewEncoder>,
    policy: Box<dyn PolicyNetwork>,
}

impl LearnedAi {
    pub fn new(policy: impl PolicyNetwork + 'static) -> Self {
        Self {
            encoder: Box::new(ObservationEncoder::new()),
            policy: Box::new(policy),
        }
    }

    pub fn with_encoder(mut self, encoder: impl ViewEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    pub fn choose_action(&self, view: &TurnView, legal: &[Action]) -> Option<Action> {
        let encoded = self.encoder.encode(view);
        let scores = self.policy.predict(&encoded);
        let mask = ActionIndex::legal_mask(view, legal);

        let mut best: Option<(usize, f32)> = None;
        for (index, (&score, &allowed)) in scores.iter().zip(mask.iter()).enumerate() {
            if !allowed || score.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        best.and_then(|(index, _)| ActionIndex(index).to_action(view))
    }
}

impl std::fmt::Debug for LearnedAi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LearnedAi")
            .field("output_shape", &self.encoder.output_shape())
            .field("action_space_size", &self.encoder.action_space_size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::core::{GameState, PlayerId, PlayerMap};
    use crate::nn::{FixedPolicy, UniformPolicy, ACTION_SPACE_SIZE};
    use crate::rules::{JaipurRules, RulesEngine};
    use crate::zones::{Deck, Hand, Market};

    fn setup() -> (TurnView, Vec<Action>) {
        let mut hands = PlayerMap::with_value(Hand::new());
        hands[PlayerId::FIRST].receive([CardKind::Spice, CardKind::Spice]);
        let state = GameState::from_parts(
            Deck::stacked([CardKind::Cloth; 8]),
            Market::from_counts(
                [CardKind::Gold, CardKind::Silver, CardKind::Silver, CardKind::Leather, CardKind::Leather]
                    .into_iter()
                    .collect(),
            ),
            hands,
        );
        let legal = JaipurRules::default().legal_actions(&state, PlayerId::FIRST);
        (TurnView::new(&state, PlayerId::FIRST, ["Net", "B"]), legal)
    }

    #[test]
    fn test_plays_highest_legal_score() {
        let (view, legal) = setup();
        let mut scores = vec![0.0; ACTION_SPACE_SIZE];
        scores[ActionIndex::take(CardKind::Diamond).0] = 0.9; // not in market
        scores[ActionIndex::TAKE_CAMELS.0] = 0.8; // no camels
        scores[ActionIndex::sell(CardKind::Spice).0] = 0.5;
        scores[ActionIndex::take(CardKind::Gold).0] = 0.3;

        let agent = LearnedAi::new(FixedPolicy::new(scores));
        assert_eq!(
            agent.choose_action(&view, &legal),
            Some(Action::Sell { good: CardKind::Spice, count: 2 })
        );
    }

    #[test]
    fn test_uniform_policy_picks_first_legal_slot() {
        let (view, legal) = setup();
        let agent = LearnedAi::new(UniformPolicy::new(ACTION_SPACE_SIZE));
        assert_eq!(
            agent.choose_action(&view, &legal),
            Some(Action::TakeGood(CardKind::Gold))
        );
    }

    #[test]
    fn test_empty_policy_output() {
        let (view, legal) = setup();
        let agent = LearnedAi::new(FixedPolicy::default());
        assert_eq!(agent.choose_action(&view, &legal), None);
    }
}
