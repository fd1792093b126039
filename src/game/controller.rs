//! Game controller: seats, turn loop and entry points for front ends.
//!
//! `Game` owns the state, the rules and one agent per seat. Front ends
//! either call the per-move entry points (`take_single_good`, `sell`, ...)
//! for a seat they drive themselves, or call `play_turn` and let the seat's
//! agent decide.
//!
//! ## Implementation Notes
//!
//! - A refused move, or an agent choosing no move, leaves the state and the
//!   turn untouched; the same seat is asked again next time
//! - Agent randomness comes from a stream derived from the game seed, so the
//!   deal is the same whatever agents are seated

use log::{debug, info, warn};

use crate::cards::{CardCounts, CardKind};
use crate::core::{Action, ConfigError, GameRng, GameState, JaipurConfig, MoveError, PlayerId, PlayerMap};
use crate::players::{Agent, AgentKind};
use crate::rules::{ActionOutcome, FinalScore, GameResult, GameStatus, JaipurRules, RulesEngine};

use super::view::{MarketView, OpponentView, PlayerView, TurnView};

/// One seat at the table.
#[derive(Debug)]
struct Seat {
    name: String,
    agent: Agent,
}

/// Builder for creating a `Game`.
pub struct GameBuilder {
    config: JaipurConfig,
    names: [String; 2],
    agents: [Option<Agent>; 2],
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: JaipurConfig::default(),
            names: [PlayerId::FIRST.to_string(), PlayerId::SECOND.to_string()],
            agents: [None, None],
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: JaipurConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    /// Seat an agent. Unset seats get a `ScriptedAi`.
    pub fn agent(mut self, player: PlayerId, agent: Agent) -> Self {
        self.agents[player.index()] = Some(agent);
        self
    }

    /// Validate the configuration, deal a game from `seed` and seat the agents.
    pub fn build(self, seed: u64) -> Result<Game, ConfigError> {
        self.config.validate()?;
        let root = GameRng::new(seed);
        let state = GameState::new(&self.config, &mut root.for_context("deal"));
        Ok(self.finish(state, root))
    }

    /// Like `build`, but start from a prepared position instead of a deal.
    pub fn build_with_state(self, state: GameState, seed: u64) -> Result<Game, ConfigError> {
        self.config.validate()?;
        Ok(self.finish(state, GameRng::new(seed)))
    }

    fn finish(self, state: GameState, root: GameRng) -> Game {
        let GameBuilder {
            config,
            names,
            mut agents,
        } = self;
        let [first, second] = names;
        let mut names = [Some(first), Some(second)];

        let seats = PlayerMap::new(|player| Seat {
            name: names[player.index()].take().unwrap_or_default(),
            agent: agents[player.index()].take().unwrap_or_default(),
        });

        let game = Game {
            rules: JaipurRules::new(config),
            state,
            seats,
            agent_rng: root.for_context("agents"),
            seed: root.seed(),
            finished: false,
        };

        info!(
            "game {} started: {} ({}) vs {} ({}), deck {}, market [{}]",
            game.seed,
            game.player_name(PlayerId::FIRST),
            game.agent_kind(PlayerId::FIRST),
            game.player_name(PlayerId::SECOND),
            game.agent_kind(PlayerId::SECOND),
            game.state.deck().len(),
            game.state.market().cards()
        );
        game
    }
}

/// A two-player game of Jaipur.
#[derive(Debug)]
pub struct Game {
    rules: JaipurRules,
    state: GameState,
    seats: PlayerMap<Seat>,
    agent_rng: GameRng,
    seed: u64,
    finished: bool,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &JaipurRules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &JaipurConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.seats[player].name
    }

    #[must_use]
    pub fn agent_kind(&self, player: PlayerId) -> AgentKind {
        self.seats[player].agent.kind()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.rules.status(&self.state)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rules.is_game_over(&self.state)
    }

    /// Final scores, once the game has ended.
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.is_game_over()
            .then(|| self.rules.final_score(&self.state))
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.rules.legal_actions(&self.state, player)
    }

    // === Views ===

    fn names(&self) -> [&str; 2] {
        [
            self.player_name(PlayerId::FIRST),
            self.player_name(PlayerId::SECOND),
        ]
    }

    #[must_use]
    pub fn turn_view(&self, player: PlayerId) -> TurnView {
        TurnView::new(&self.state, player, self.names())
    }

    #[must_use]
    pub fn player_view(&self, player: PlayerId) -> PlayerView {
        PlayerView::new(&self.state, player, self.player_name(player))
    }

    /// What `viewer` may see of the other seat.
    #[must_use]
    pub fn opponent_view(&self, viewer: PlayerId) -> OpponentView {
        let opponent = viewer.opponent();
        OpponentView::new(&self.state, opponent, self.player_name(opponent))
    }

    #[must_use]
    pub fn market_view(&self) -> MarketView {
        MarketView::new(&self.state)
    }

    // === Moves ===

    /// Apply one move for `player`. On success the turn passes.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<ActionOutcome, MoveError> {
        let outcome = self.rules.apply_action(&mut self.state, player, action)?;
        self.log_if_finished();
        Ok(outcome)
    }

    pub fn take_single_good(
        &mut self,
        player: PlayerId,
        good: CardKind,
    ) -> Result<ActionOutcome, MoveError> {
        self.apply(player, &Action::TakeGood(good))
    }

    pub fn take_camels(&mut self, player: PlayerId) -> Result<ActionOutcome, MoveError> {
        self.apply(player, &Action::TakeCamels)
    }

    pub fn sell(
        &mut self,
        player: PlayerId,
        good: CardKind,
        count: u8,
    ) -> Result<ActionOutcome, MoveError> {
        self.apply(player, &Action::Sell { good, count })
    }

    pub fn exchange(
        &mut self,
        player: PlayerId,
        take: CardCounts,
        give: CardCounts,
    ) -> Result<ActionOutcome, MoveError> {
        self.apply(player, &Action::Exchange { take, give })
    }

    /// Ask the active seat's agent for a move and apply it.
    ///
    /// Returns `true` if a move was applied and the turn passed. Returns
    /// `false` when the game is over, the agent chose no move, or the move
    /// was refused.
    pub fn play_turn(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let player = self.state.active_player();
        let legal = self.rules.legal_actions(&self.state, player);
        let view = self.turn_view(player);

        let choice = self.seats[player]
            .agent
            .choose_action(&view, &legal, &mut self.agent_rng);
        let Some(action) = choice else {
            debug!("turn {}: {} made no move", self.state.turn_index(), player);
            return false;
        };

        match self.apply(player, &action) {
            Ok(_) => true,
            Err(err) => {
                let seat = &mut self.seats[player];
                if seat.agent.kind() != AgentKind::Human {
                    warn!(
                        "{} agent for {} proposed illegal move {}: {}",
                        seat.agent.kind(),
                        seat.name,
                        action,
                        err
                    );
                }
                seat.agent.notify_refused(&action, &err);
                false
            }
        }
    }

    /// Run `play_turn` until the game ends or `max_attempts` attempts have
    /// been made, whichever comes first.
    ///
    /// Returns the final score if the game ended.
    pub fn play_to_end(&mut self, max_attempts: usize) -> Option<FinalScore> {
        for _ in 0..max_attempts {
            if self.is_game_over() {
                break;
            }
            self.play_turn();
        }
        self.final_score()
    }

    fn log_if_finished(&mut self) {
        if self.finished || !self.is_game_over() {
            return;
        }
        self.finished = true;
        let score = self.rules.final_score(&self.state);
        let outcome = match score.result {
            GameResult::Winner(player) => format!("{} wins", self.player_name(player)),
            GameResult::Draw => "draw".to_string(),
        };
        info!(
            "game {} over after {} turns: {} ({} to {})",
            self.seed,
            self.state.turn_index(),
            outcome,
            score.totals[PlayerId::FIRST],
            score.totals[PlayerId::SECOND]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::QueuedInput;
    use crate::zones::{Deck, Hand, Market};

    #[test]
    fn test_builder_defaults() {
        let game = GameBuilder::new().build(42).unwrap();
        assert_eq!(game.player_name(PlayerId::FIRST), "Player 1");
        assert_eq!(game.agent_kind(PlayerId::SECOND), AgentKind::Scripted);
        assert_eq!(game.state().deck().len(), 40);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.final_score().is_none());
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let mut config = JaipurConfig::default();
        config.market_camels = 9;
        let err = GameBuilder::new().config(config).build(1).unwrap_err();
        assert!(matches!(err, ConfigError::MarketTooSmall { .. }));
    }

    #[test]
    fn test_same_seed_same_deal_whatever_agents() {
        let a = GameBuilder::new().build(77).unwrap();
        let b = GameBuilder::new()
            .agent(PlayerId::FIRST, Agent::human(QueuedInput::default()))
            .build(77)
            .unwrap();
        assert_eq!(a.state().market(), b.state().market());
        assert_eq!(a.state().hands(), b.state().hands());
        assert_eq!(a.state().deck().composition(), b.state().deck().composition());
    }

    #[test]
    fn test_human_none_does_not_advance() {
        let mut game = GameBuilder::new()
            .agent(PlayerId::FIRST, Agent::human(QueuedInput::default()))
            .build(3)
            .unwrap();
        assert!(!game.play_turn());
        assert_eq!(game.state().turn_index(), 0);
        assert_eq!(game.active_player(), PlayerId::FIRST);
    }

    #[test]
    fn test_refused_move_reported_to_human() {
        let mut hands = PlayerMap::with_value(Hand::new());
        hands[PlayerId::FIRST].receive([CardKind::Gold]);
        let state = GameState::from_parts(
            Deck::stacked([CardKind::Silver; 10]),
            Market::from_counts(CardCounts::of(CardKind::Leather, 5)),
            hands,
        );
        let mut game = GameBuilder::new()
            .agent(
                PlayerId::FIRST,
                Agent::human(QueuedInput::new([Action::TakeCamels, Action::TakeGood(CardKind::Leather)])),
            )
            .build_with_state(state, 0)
            .unwrap();

        assert!(!game.play_turn());
        assert_eq!(game.state().turn_index(), 0);
        assert!(game.play_turn());
        assert_eq!(game.active_player(), PlayerId::SECOND);
        assert_eq!(game.state().hand(PlayerId::FIRST).good_count(CardKind::Leather), 1);
    }

    #[test]
    fn test_entry_points() {
        let mut hands = PlayerMap::with_value(Hand::new());
        hands[PlayerId::FIRST].receive([CardKind::Diamond; 5]);
        hands[PlayerId::SECOND].receive([CardKind::Cloth, CardKind::Spice]);
        let state = GameState::from_parts(
            Deck::stacked([CardKind::Silver; 10]),
            Market::from_counts([CardKind::Camel, CardKind::Camel, CardKind::Gold, CardKind::Gold, CardKind::Leather].into_iter().collect()),
            hands,
        );
        let mut game = GameBuilder::new().build_with_state(state, 0).unwrap();

        let outcome = game.sell(PlayerId::FIRST, CardKind::Diamond, 5).unwrap();
        assert_eq!(outcome.tokens.iter().sum::<u32>(), 30);

        assert_eq!(
            game.take_camels(PlayerId::FIRST).unwrap_err(),
            MoveError::NotYourTurn { expected: PlayerId::SECOND, actual: PlayerId::FIRST }
        );
        game.exchange(
            PlayerId::SECOND,
            CardCounts::of(CardKind::Gold, 2),
            [CardKind::Cloth, CardKind::Spice].into_iter().collect(),
        )
        .unwrap();
        game.take_camels(PlayerId::FIRST).unwrap();
        game.take_single_good(PlayerId::SECOND, CardKind::Silver).unwrap();

        assert_eq!(game.state().hand(PlayerId::FIRST).camels(), 2);
        assert_eq!(game.state().hand(PlayerId::SECOND).good_count(CardKind::Gold), 2);
        assert_eq!(game.state().history().len(), 4);
    }

    #[test]
    fn test_play_to_end_scripted() {
        let mut game = GameBuilder::new()
            .player_names("Ada", "Bo")
            .build(2024)
            .unwrap();
        let score = game.play_to_end(1_000).expect("scripted game should finish");
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(score.result));
        assert!(!game.play_turn());
    }

    #[test]
    fn test_views_respect_perspective() {
        let game = GameBuilder::new().player_names("Ada", "Bo").build(5).unwrap();
        let opp = game.opponent_view(PlayerId::FIRST);
        assert_eq!(opp.name, "Bo");
        assert_eq!(
            opp.hidden_goods,
            game.state().hand(PlayerId::SECOND).goods_len()
        );
        assert_eq!(game.player_view(PlayerId::FIRST).name, "Ada");
        assert_eq!(game.turn_view(PlayerId::FIRST).opponent, opp);
        assert_eq!(game.market_view(), MarketView::new(game.state()));
    }
}
