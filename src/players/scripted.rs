//! Rule-of-thumb opponent.

use rustc_hash::FxHashSet;

use crate::cards::CardKind;
use crate::core::{Action, GameRng};
use crate::game::TurnView;

/// Fixed-priority heuristic player.
///
/// In order of preference:
/// 1. sell the whole stock of the first good held three or more times
/// 2. take the camels when the market shows three or more
/// 3. take a market good already held once or twice
/// 4. take a random market good
/// 5. take the camels
/// 6. sell the largest stock the rules allow
/// 7. any legal move
///
/// A candidate is only played if it is in the legal set, so a configured
/// hand limit never makes the agent propose a refused move. The agent only
/// passes when there is no legal move at all.
#[derive(Clone, Debug)]
pub struct ScriptedAi {
    /// Market camel count at which camels beat a good.
    camel_threshold: u8,
    /// Held count at which a good is sold.
    sell_threshold: u8,
}

impl Default for ScriptedAi {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedAi {
    pub fn new() -> Self {
        Self {
            camel_threshold: 3,
            sell_threshold: 3,
        }
    }

    pub fn with_sell_threshold(mut self, threshold: u8) -> Self {
        self.sell_threshold = threshold.max(1);
        self
    }

    pub fn with_camel_threshold(mut self, threshold: u8) -> Self {
        self.camel_threshold = threshold.max(1);
        self
    }

    pub fn choose_action(
        &self,
        view: &TurnView,
        legal: &[Action],
        rng: &mut GameRng,
    ) -> Option<Action> {
        self.scripted_choice(view, legal, rng)
            .or_else(|| Self::fallback(legal))
    }

    fn scripted_choice(
        &self,
        view: &TurnView,
        legal: &[Action],
        rng: &mut GameRng,
    ) -> Option<Action> {
        let legal: FxHashSet<&Action> = legal.iter().collect();
        let allowed = |action: Action| legal.contains(&action).then_some(action);
        let hand = &view.me.good_counts;

        let sell = CardKind::GOODS.iter().find_map(|&good| {
            let count = hand.get(good);
            if count >= self.sell_threshold {
                allowed(Action::Sell { good, count })
            } else {
                None
            }
        });
        if sell.is_some() {
            return sell;
        }

        if view.market.camel_count >= self.camel_threshold {
            if let Some(action) = allowed(Action::TakeCamels) {
                return Some(action);
            }
        }

        let market = &view.market.good_counts;
        let matching = CardKind::GOODS.iter().find_map(|&good| {
            let held = hand.get(good);
            if market.get(good) > 0 && held >= 1 && held < self.sell_threshold {
                allowed(Action::TakeGood(good))
            } else {
                None
            }
        });
        if matching.is_some() {
            return matching;
        }

        let takeable: Vec<Action> = market
            .iter()
            .map(|(good, _)| Action::TakeGood(good))
            .filter(|action| legal.contains(action))
            .collect();
        if let Some(action) = rng.choose(&takeable) {
            return Some(action.clone());
        }

        allowed(Action::TakeCamels)
    }

    /// Largest legal sale, first good on ties; otherwise the first legal move.
    fn fallback(legal: &[Action]) -> Option<Action> {
        let mut best: Option<(&Action, u8)> = None;
        for action in legal {
            if let Action::Sell { count, .. } = action {
                if best.map_or(true, |(_, top)| *count > top) {
                    best = Some((action, *count));
                }
            }
        }
        best.map(|(action, _)| action)
            .or_else(|| legal.first())
            .cloned()
    }
}
