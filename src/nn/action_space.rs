//! Discrete action space for policy networks.
//!
//! Thirteen slots: taking each good (0-5), taking the camels (6), and
//! selling the whole held stock of each good (7-12). Exchanges and partial
//! sales are not representable here; agents that need them work with
//! `Action` directly.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::Action;
use crate::game::TurnView;

/// Number of discrete actions.
pub const ACTION_SPACE_SIZE: usize = 13;

const TAKE_CAMELS: usize = 6;
const SELL_BASE: usize = 7;

/// Index into the discrete action space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionIndex(pub usize);

impl ActionIndex {
    pub const TAKE_CAMELS: ActionIndex = ActionIndex(TAKE_CAMELS);

    #[must_use]
    pub fn take(good: CardKind) -> Self {
        debug_assert!(good.is_good());
        ActionIndex(good.index())
    }

    #[must_use]
    pub fn sell(good: CardKind) -> Self {
        debug_assert!(good.is_good());
        ActionIndex(SELL_BASE + good.index())
    }

    /// Concrete move for this slot, as seen by the player in `view`.
    ///
    /// Sell slots expand to the full held count, so they decode to `None`
    /// when the player holds none of that good.
    #[must_use]
    pub fn to_action(self, view: &TurnView) -> Option<Action> {
        match self.0 {
            i if i < TAKE_CAMELS => CardKind::from_index(i).map(Action::TakeGood),
            TAKE_CAMELS => Some(Action::TakeCamels),
            i if i < ACTION_SPACE_SIZE => {
                let good = CardKind::from_index(i - SELL_BASE)?;
                let count = view.me.good_counts.get(good);
                (count > 0).then_some(Action::Sell { good, count })
            }
            _ => None,
        }
    }

    /// Slot for a concrete move, if it has one.
    ///
    /// A sale maps to its slot only when it sells everything held.
    #[must_use]
    pub fn from_action(action: &Action, view: &TurnView) -> Option<Self> {
        match action {
            Action::TakeGood(good) if good.is_good() => Some(Self::take(*good)),
            Action::TakeCamels => Some(Self::TAKE_CAMELS),
            Action::Sell { good, count }
                if good.is_good() && *count > 0 && view.me.good_counts.get(*good) == *count =>
            {
                Some(Self::sell(*good))
            }
            _ => None,
        }
    }

    /// `true` for each slot whose decoded move is in `legal`.
    #[must_use]
    pub fn legal_mask(view: &TurnView, legal: &[Action]) -> [bool; ACTION_SPACE_SIZE] {
        let mut mask = [false; ACTION_SPACE_SIZE];
        for action in legal {
            if let Some(ActionIndex(i)) = Self::from_action(action, view) {
                mask[i] = true;
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, PlayerId, PlayerMap};
    use crate::rules::{JaipurRules, RulesEngine};
    use crate::zones::{Deck, Hand, Market};

    fn state() -> GameState {
        let mut hands = PlayerMap::with_value(Hand::new());
        hands[PlayerId::FIRST].receive([CardKind::Cloth, CardKind::Cloth, CardKind::Cloth]);
        GameState::from_parts(
            Deck::stacked([CardKind::Leather; 6]),
            Market::from_counts(
                [CardKind::Gold, CardKind::Gold, CardKind::Spice, CardKind::Camel, CardKind::Silver]
                    .into_iter()
                    .collect(),
            ),
            hands,
        )
    }

    #[test]
    fn test_decode() {
        let view = TurnView::new(&state(), PlayerId::FIRST, ["A", "B"]);
        assert_eq!(
            ActionIndex(1).to_action(&view),
            Some(Action::TakeGood(CardKind::Gold))
        );
        assert_eq!(ActionIndex::TAKE_CAMELS.to_action(&view), Some(Action::TakeCamels));
        assert_eq!(
            ActionIndex::sell(CardKind::Cloth).to_action(&view),
            Some(Action::Sell { good: CardKind::Cloth, count: 3 })
        );
        assert_eq!(ActionIndex::sell(CardKind::Diamond).to_action(&view), None);
        assert_eq!(ActionIndex(ACTION_SPACE_SIZE).to_action(&view), None);
    }

    #[test]
    fn test_encode_matches_decode() {
        let view = TurnView::new(&state(), PlayerId::FIRST, ["A", "B"]);
        for i in 0..ACTION_SPACE_SIZE {
            if let Some(action) = ActionIndex(i).to_action(&view) {
                assert_eq!(ActionIndex::from_action(&action, &view), Some(ActionIndex(i)));
            }
        }
        let partial = Action::Sell { good: CardKind::Cloth, count: 2 };
        assert_eq!(ActionIndex::from_action(&partial, &view), None);
        let swap = Action::exchange(&[(CardKind::Gold, 1)], &[(CardKind::Cloth, 1)]);
        assert_eq!(ActionIndex::from_action(&swap, &view), None);
    }

    #[test]
    fn test_legal_mask() {
        let state = state();
        let rules = JaipurRules::default();
        let view = TurnView::new(&state, PlayerId::FIRST, ["A", "B"]);
        let legal = rules.legal_actions(&state, PlayerId::FIRST);
        let mask = ActionIndex::legal_mask(&view, &legal);

        assert!(mask[ActionIndex::take(CardKind::Gold).0]);
        assert!(mask[ActionIndex::take(CardKind::Silver).0]);
        assert!(!mask[ActionIndex::take(CardKind::Diamond).0]);
        assert!(mask[ActionIndex::TAKE_CAMELS.0]);
        assert!(mask[ActionIndex::sell(CardKind::Cloth).0]);
        assert!(!mask[ActionIndex::sell(CardKind::Gold).0]);
    }
}
