//! Rules engine: turn order, legal moves, game end and final scoring.
//!
//! The `RulesEngine` trait is the seam between the state machine and
//! whatever drives it (the game controller, agents, a future network
//! layer). `JaipurRules` is the standard implementation.
//!
//! ## Implementation Notes
//!
//! - `apply_action` refuses moves from the wrong seat and moves after the
//!   game ended; a refused move leaves the state untouched
//! - `final_score` is a pure function of the state and can be called any
//!   number of times

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::{Action, GameState, JaipurConfig, MoveError, PlayerId, PlayerMap};

use super::actions::{self, ActionOutcome};
use super::tokens::TokenBank;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    GameOver,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal final scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final scoring breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Sum of each player's tokens.
    pub tokens: PlayerMap<u32>,
    /// Camels held at the end.
    pub camels: PlayerMap<u8>,
    /// Player with strictly more camels, if any.
    pub camel_bonus: Option<PlayerId>,
    /// Tokens plus camel bonus.
    pub totals: PlayerMap<u32>,
    pub result: GameResult,
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the rule configuration.
    fn config(&self) -> &JaipurConfig;

    /// In progress or over.
    fn status(&self, state: &GameState) -> GameStatus;

    /// Check a move without applying it.
    fn validate(&self, state: &GameState, player: PlayerId, action: &Action)
        -> Result<(), MoveError>;

    /// Apply a move and pass the turn, or refuse it and change nothing.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, MoveError>;

    /// Every legal move for `player`. Empty if it is not their turn or the
    /// game is over.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Score the state as if the game ended now.
    fn final_score(&self, state: &GameState) -> FinalScore;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_game_over(&self, state: &GameState) -> bool {
        self.status(state) == GameStatus::GameOver
    }

    /// Returns `Some(result)` once the game has ended, `None` while it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        self.is_game_over(state)
            .then(|| self.final_score(state).result)
    }
}

/// The standard Jaipur rules.
#[derive(Clone, Debug, Default)]
pub struct JaipurRules {
    config: JaipurConfig,
    bank: TokenBank,
}

impl JaipurRules {
    #[must_use]
    pub fn new(config: JaipurConfig) -> Self {
        let bank = TokenBank::new(&config);
        Self { config, bank }
    }

    /// The token bank these rules pay from.
    #[must_use]
    pub fn bank(&self) -> &TokenBank {
        &self.bank
    }

    fn check_turn(&self, state: &GameState, player: PlayerId) -> Result<(), MoveError> {
        if self.is_game_over(state) {
            return Err(MoveError::GameOver);
        }
        let expected = state.active_player();
        if player != expected {
            return Err(MoveError::NotYourTurn {
                expected,
                actual: player,
            });
        }
        Ok(())
    }

    fn push_exchanges(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        let market_goods = state.market().goods();
        let hand_goods = *state.hand(player).goods();
        let max = market_goods.total().min(hand_goods.total());
        for size in 1..=max {
            let gives = hand_goods.goods_subsets(size);
            for take in market_goods.goods_subsets(size) {
                for give in &gives {
                    out.push(Action::Exchange { take, give: *give });
                }
            }
        }
    }
}

impl RulesEngine for JaipurRules {
    fn config(&self) -> &JaipurConfig {
        &self.config
    }

    fn status(&self, state: &GameState) -> GameStatus {
        let sold_out = state.sold_out_kinds(self.config.sold_out_threshold);
        if state.deck().is_empty() || sold_out >= self.config.sold_out_kinds_to_end {
            GameStatus::GameOver
        } else {
            GameStatus::InProgress
        }
    }

    fn validate(
        &self,
        state: &GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), MoveError> {
        self.check_turn(state, player)?;
        actions::check(state, player, action, &self.config)
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, MoveError> {
        let applied = self
            .check_turn(state, player)
            .and_then(|()| actions::apply(state, player, action, &self.config, &self.bank));

        match applied {
            Ok(outcome) => {
                debug!(
                    "turn {}: {} played {} (refilled {}, tokens {:?})",
                    state.turn_index(),
                    player,
                    action,
                    outcome.replenished,
                    outcome.tokens.as_slice()
                );
                state.advance_turn(player, action.clone());
                Ok(outcome)
            }
            Err(err) => {
                debug!("turn {}: {} refused {}: {}", state.turn_index(), player, action, err);
                Err(err)
            }
        }
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if self.check_turn(state, player).is_err() {
            return Vec::new();
        }

        let mut legal = Vec::new();

        for good in CardKind::GOODS {
            if actions::check_take_good(state, player, good, &self.config).is_ok() {
                legal.push(Action::TakeGood(good));
            }
        }

        if actions::check_take_camels(state).is_ok() {
            legal.push(Action::TakeCamels);
        }

        let hand = state.hand(player);
        for good in CardKind::GOODS {
            for count in 1..=hand.good_count(good) {
                legal.push(Action::Sell { good, count });
            }
        }

        self.push_exchanges(state, player, &mut legal);

        legal
    }

    fn final_score(&self, state: &GameState) -> FinalScore {
        let tokens = state.hands().map(|_, hand| hand.token_total());
        let camels = state.hands().map(|_, hand| hand.camels());

        let (first, second) = (PlayerId::FIRST, PlayerId::SECOND);
        let camel_bonus = match camels[first].cmp(&camels[second]) {
            std::cmp::Ordering::Greater => Some(first),
            std::cmp::Ordering::Less => Some(second),
            std::cmp::Ordering::Equal => None,
        };

        let totals = tokens.map(|player, &t| {
            if camel_bonus == Some(player) {
                t + self.config.camel_bonus
            } else {
                t
            }
        });

        let result = match totals[first].cmp(&totals[second]) {
            std::cmp::Ordering::Greater => GameResult::Winner(first),
            std::cmp::Ordering::Less => GameResult::Winner(second),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };

        FinalScore {
            tokens,
            camels,
            camel_bonus,
            totals,
            result,
        }
    }
}
