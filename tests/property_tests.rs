//! Property tests over random deals and random legal play.
//!
//! Each case deals a game from a random seed and plays random legal moves,
//! checking the invariants that must hold after every move.

use jaipur_engine::cards::{CardCounts, CardKind};
use jaipur_engine::core::{GameRng, GameState, JaipurConfig, PlayerId};
use jaipur_engine::rules::{JaipurRules, RulesEngine, TokenBank};
use proptest::prelude::*;

fn good() -> impl Strategy<Value = CardKind> {
    prop::sample::select(CardKind::GOODS.to_vec())
}

proptest! {
    /// Every card is always somewhere: deck, market, a hand, or sold.
    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), choices in prop::collection::vec(any::<prop::sample::Index>(), 0..80)) {
        let rules = JaipurRules::default();
        let mut state = GameState::new(rules.config(), &mut GameRng::new(seed));
        prop_assert_eq!(state.card_total(), 55);

        for choice in choices {
            if rules.is_game_over(&state) {
                break;
            }
            let player = state.active_player();
            let legal = rules.legal_actions(&state, player);
            prop_assert!(!legal.is_empty());
            let action = choice.get(&legal).clone();
            rules.apply_action(&mut state, player, &action).unwrap();

            prop_assert_eq!(state.card_total(), 55);
            if !state.deck().is_empty() {
                prop_assert_eq!(state.market().len(), 5);
            }
        }
    }

    /// A refused move never changes the state.
    #[test]
    fn prop_refusal_is_a_no_op(seed in any::<u64>(), good in good(), count in 0u8..8) {
        let rules = JaipurRules::default();
        let state = GameState::new(rules.config(), &mut GameRng::new(seed));
        let player = state.active_player();
        let action = jaipur_engine::core::Action::Sell { good, count };

        let mut scratch = state.clone();
        if rules.apply_action(&mut scratch, player, &action).is_err() {
            prop_assert_eq!(scratch.hands(), state.hands());
            prop_assert_eq!(scratch.market(), state.market());
            prop_assert_eq!(scratch.turn_index(), state.turn_index());
        } else {
            prop_assert!(count >= 1 && count <= state.hand(player).good_count(good));
        }
    }

    /// A sale pays between the cheapest single token and the full ladder
    /// plus the largest bonus.
    #[test]
    fn prop_sale_tokens_bounded(good in good(), count in 1u8..12) {
        let bank = TokenBank::default();
        let grant = bank.sale_tokens(good, count);
        let total: u32 = grant.iter().sum();
        let ladder_total: u32 = bank.ladder(good).iter().sum();

        prop_assert!(total >= bank.price(good, 0));
        prop_assert!(total <= ladder_total + 3);
        prop_assert_eq!(grant.len(), (count as usize).min(5) + usize::from(count >= 3));
    }

    /// Goods subsets of the requested size are distinct and contained.
    #[test]
    fn prop_goods_subsets_contained(counts in prop::array::uniform7(0u8..4), size in 0usize..6) {
        let mut pile = CardCounts::new();
        for (kind, n) in CardKind::ALL.into_iter().zip(counts) {
            pile.set(kind, n);
        }
        let subsets = pile.goods_subsets(size);
        for subset in &subsets {
            prop_assert_eq!(subset.total(), size);
            prop_assert_eq!(subset.get(CardKind::Camel), 0);
            prop_assert!(pile.contains(subset));
        }
        let unique: std::collections::HashSet<_> = subsets.iter().collect();
        prop_assert_eq!(unique.len(), subsets.len());
        if size > pile.goods_total() {
            prop_assert!(subsets.is_empty());
        }
    }

    /// Any valid configuration deals a consistent game.
    #[test]
    fn prop_custom_hand_size_deals(seed in any::<u64>(), hand_size in 1usize..9) {
        let config = JaipurConfig { hand_size, ..JaipurConfig::default() };
        prop_assume!(config.validate().is_ok());
        let state = GameState::new(&config, &mut GameRng::new(seed));
        for player in PlayerId::all() {
            prop_assert_eq!(state.hand(player).card_count(), hand_size);
        }
        prop_assert_eq!(state.deck().len(), 55 - 5 - 2 * hand_size);
    }
}
