//! Seats driven from outside the engine.

use std::collections::VecDeque;

use crate::core::{Action, MoveError};
use crate::game::TurnView;

/// Input source for a human seat: a terminal prompt, a GUI, a socket.
///
/// Returning `None` means the player chose a non-move (looked at the board,
/// cancelled a menu). The turn is not consumed and the same seat is asked
/// again on the next `play_turn`.
pub trait HumanInput: Send {
    fn choose_action(&mut self, view: &TurnView, legal: &[Action]) -> Option<Action>;

    /// Called when the engine refuses the last proposed move.
    fn on_refused(&mut self, _action: &Action, _error: &MoveError) {}
}

/// Replays a fixed list of moves, one per turn.
#[derive(Clone, Debug, Default)]
pub struct QueuedInput {
    queue: VecDeque<Action>,
    refused: Vec<(Action, MoveError)>,
}

impl QueuedInput {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
            refused: Vec::new(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Moves the engine refused, in order.
    #[must_use]
    pub fn refused(&self) -> &[(Action, MoveError)] {
        &self.refused
    }
}

impl HumanInput for QueuedInput {
    fn choose_action(&mut self, _view: &TurnView, _legal: &[Action]) -> Option<Action> {
        self.queue.pop_front()
    }

    fn on_refused(&mut self, action: &Action, error: &MoveError) {
        self.refused.push((action.clone(), error.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::core::{GameRng, GameState, JaipurConfig, PlayerId};

    #[test]
    fn test_queue_drains_in_order() {
        let state = GameState::new(&JaipurConfig::default(), &mut GameRng::new(5));
        let view = TurnView::new(&state, PlayerId::FIRST, ["A", "B"]);
        let mut input = QueuedInput::new([Action::TakeCamels, Action::TakeGood(CardKind::Gold)]);

        assert_eq!(input.choose_action(&view, &[]), Some(Action::TakeCamels));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.choose_action(&view, &[]), Some(Action::TakeGood(CardKind::Gold)));
        assert_eq!(input.choose_action(&view, &[]), None);
    }

    #[test]
    fn test_refusals_recorded() {
        let mut input = QueuedInput::default();
        input.on_refused(&Action::TakeCamels, &MoveError::NoCamelsInMarket);
        assert_eq!(input.refused(), &[(Action::TakeCamels, MoveError::NoCamelsInMarket)]);
    }
}
