//! The four Jaipur moves.
//!
//! Each move is split into `check_*` (pure validation) and the applying
//! function, which validates first and only then mutates. A refused move
//! therefore never leaves a partial change behind.
//!
//! Once validation passes, a failed pile removal means the validation and
//! the piles disagree. That is a bug in the engine, not a game event, so
//! it panics.

use crate::cards::{CardCounts, CardKind};
use crate::core::{Action, GameState, JaipurConfig, MoveError, PlayerId};
use crate::zones::ZoneError;

use super::tokens::{TokenBank, TokenGrant};

/// What an applied move did, beyond the state change itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Cards drawn from the deck to refill the market.
    pub replenished: usize,
    /// Tokens paid to the player.
    pub tokens: TokenGrant,
}

fn integrity(result: Result<(), ZoneError>) {
    if let Err(err) = result {
        panic!("rules integrity violated: {}", err);
    }
}

/// Validate any move for `player` without touching the state.
pub fn check(
    state: &GameState,
    player: PlayerId,
    action: &Action,
    config: &JaipurConfig,
) -> Result<(), MoveError> {
    match action {
        Action::TakeGood(kind) => check_take_good(state, player, *kind, config),
        Action::TakeCamels => check_take_camels(state),
        Action::Sell { good, count } => check_sell(state, player, *good, *count),
        Action::Exchange { take, give } => check_exchange(state, player, take, give),
    }
}

/// Validate and apply any move for `player`.
///
/// Does not advance the turn; the engine does that.
pub fn apply(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    config: &JaipurConfig,
    bank: &TokenBank,
) -> Result<ActionOutcome, MoveError> {
    match action {
        Action::TakeGood(kind) => take_good(state, player, *kind, config),
        Action::TakeCamels => take_camels(state, player),
        Action::Sell { good, count } => sell(state, player, *good, *count, bank),
        Action::Exchange { take, give } => exchange(state, player, take, give),
    }
}

// === Take one good ===

pub fn check_take_good(
    state: &GameState,
    player: PlayerId,
    kind: CardKind,
    config: &JaipurConfig,
) -> Result<(), MoveError> {
    if !kind.is_good() {
        return Err(MoveError::CamelNotTradable);
    }
    if state.market.count(kind) == 0 {
        return Err(MoveError::NotInMarket(kind));
    }
    if let Some(limit) = config.max_hand_goods {
        if state.hands[player].goods_len() >= limit {
            return Err(MoveError::HandLimit { limit });
        }
    }
    Ok(())
}

/// Move one `kind` from the market to the player's goods and refill one card.
pub fn take_good(
    state: &mut GameState,
    player: PlayerId,
    kind: CardKind,
    config: &JaipurConfig,
) -> Result<ActionOutcome, MoveError> {
    check_take_good(state, player, kind, config)?;

    let taken = CardCounts::of(kind, 1);
    integrity(state.market.remove(&taken));
    state.hands[player].add_goods(&taken);

    let refill = state.deck.draw(1);
    let replenished = refill.len();
    state.market.add(refill);

    Ok(ActionOutcome {
        replenished,
        ..ActionOutcome::default()
    })
}

// === Take all camels ===

pub fn check_take_camels(state: &GameState) -> Result<(), MoveError> {
    if state.market.camels() == 0 {
        return Err(MoveError::NoCamelsInMarket);
    }
    Ok(())
}

/// Move every market camel to the player's herd and refill as many cards.
pub fn take_camels(state: &mut GameState, player: PlayerId) -> Result<ActionOutcome, MoveError> {
    check_take_camels(state)?;

    let camels = state.market.camels();
    integrity(state.market.remove(&CardCounts::of(CardKind::Camel, camels)));
    state.hands[player].add_camels(camels);

    let refill = state.deck.draw(camels as usize);
    let replenished = refill.len();
    state.market.add(refill);

    Ok(ActionOutcome {
        replenished,
        ..ActionOutcome::default()
    })
}

// === Sell ===

pub fn check_sell(
    state: &GameState,
    player: PlayerId,
    good: CardKind,
    count: u8,
) -> Result<(), MoveError> {
    if !good.is_good() {
        return Err(MoveError::CamelNotTradable);
    }
    if count == 0 {
        return Err(MoveError::ZeroCount);
    }
    let held = state.hands[player].good_count(good);
    if held < count {
        return Err(MoveError::NotEnoughGoods {
            good,
            held,
            requested: count,
        });
    }
    Ok(())
}

/// Sell `count` units of `good`: discard them, collect tokens, count the sale.
pub fn sell(
    state: &mut GameState,
    player: PlayerId,
    good: CardKind,
    count: u8,
    bank: &TokenBank,
) -> Result<ActionOutcome, MoveError> {
    check_sell(state, player, good, count)?;

    let hand = &mut state.hands[player];
    integrity(hand.remove_goods(&CardCounts::of(good, count)));
    let tokens = bank.sale_tokens(good, count);
    hand.push_tokens(&tokens);
    state.transactions.add(good, count);

    Ok(ActionOutcome {
        replenished: 0,
        tokens,
    })
}

// === Exchange ===

/// An exchange is legal when both sides are non-empty, camel-free, equal in
/// size, and actually present in the market and the hand respectively.
///
/// Taking and giving the same kind is not forbidden.
pub fn check_exchange(
    state: &GameState,
    player: PlayerId,
    take: &CardCounts,
    give: &CardCounts,
) -> Result<(), MoveError> {
    if take.is_empty() || give.is_empty() {
        return Err(MoveError::EmptyExchange);
    }
    if take.get(CardKind::Camel) > 0 || give.get(CardKind::Camel) > 0 {
        return Err(MoveError::CamelNotTradable);
    }
    if take.total() != give.total() {
        return Err(MoveError::UnbalancedExchange {
            take: take.total(),
            give: give.total(),
        });
    }
    if !state.market.cards().contains(take) {
        return Err(MoveError::NotEnoughInMarket);
    }
    if !state.hands[player].goods().contains(give) {
        return Err(MoveError::NotEnoughInHand);
    }
    Ok(())
}

/// Swap `give` from hand for `take` from the market. The deck is not touched.
pub fn exchange(
    state: &mut GameState,
    player: PlayerId,
    take: &CardCounts,
    give: &CardCounts,
) -> Result<ActionOutcome, MoveError> {
    check_exchange(state, player, take, give)?;

    let hand = &mut state.hands[player];
    integrity(state.market.remove(take));
    integrity(hand.remove_goods(give));
    hand.add_goods(take);
    state.market.add(give.to_cards());

    Ok(ActionOutcome::default())
}
