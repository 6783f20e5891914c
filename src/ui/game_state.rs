//! Game session: the adapter-facing side of the engine

use std::time::{Duration, Instant};

use super::deferred::{AiMove, DeferredMove, DeferredPoll};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::policy::{MovePolicy, RandomPolicy};
use crate::{Board, Engine, MoveReport, Outcome, Pos, Stone};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking(DeferredMove),
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.last_move_duration = Some(self.elapsed());
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One game between the human and the automated player
pub struct GameState {
    engine: Engine,
    config: AppConfig,
    /// `None` while lent to a pending deferred move
    policy: Option<Box<dyn MovePolicy>>,
    ai_state: AiState,
    pub last_report: Option<MoveReport>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: AppConfig) -> Self {
        let policy = Self::fresh_policy(&config);
        Self {
            engine: Engine::new(),
            config,
            policy: Some(policy),
            ai_state: AiState::Idle,
            last_report: None,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    fn fresh_policy(config: &AppConfig) -> Box<dyn MovePolicy> {
        Box::new(RandomPolicy::from_seed(config.seed))
    }

    /// New game with the same settings; a pending automated move is cancelled
    pub fn reset(&mut self) {
        self.cancel_ai();
        self.engine.reset();
        self.policy = Some(Self::fresh_policy(&self.config));
        self.last_report = None;
        self.move_timer = MoveTimer::default();
        self.message = None;
        log::info!("new game, human plays {}", self.config.human_color);
    }

    /// New game with the human on `color`
    pub fn restart_as(&mut self, color: Stone) {
        if color != Stone::Empty {
            self.config.human_color = color;
        }
        self.reset();
    }

    /// Replace the position, e.g. to resume from a prepared board
    pub fn load_position(&mut self, board: Board, to_move: Stone) {
        self.cancel_ai();
        self.engine = Engine::from_position(board, to_move);
        self.last_report = None;
        self.message = None;
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn current_turn(&self) -> Stone {
        self.engine.current_player()
    }

    pub fn human_color(&self) -> Stone {
        self.config.human_color
    }

    pub fn ai_color(&self) -> Stone {
        self.config.ai_color()
    }

    pub fn game_over(&self) -> Option<Outcome> {
        self.engine.outcome()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.engine.last_move()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.engine.is_terminal() && self.current_turn() == self.human_color()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.engine.is_terminal() && self.current_turn() == self.ai_color()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking(_))
    }

    /// Human click at `(x, y)`. Rejections leave the game untouched.
    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<MoveReport, MoveError> {
        let pos = Pos::try_new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;

        if self.engine.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(MoveError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let report = self.engine.apply_move(pos)?;
        self.record(report.clone());
        Ok(report)
    }

    /// Whether a human stone at `(x, y)` would be legal right now
    pub fn preview_hover(&self, x: usize, y: usize) -> bool {
        match Pos::try_new(x, y) {
            Some(pos) => {
                self.is_human_turn()
                    && !self.is_ai_thinking()
                    && self.engine.is_legal(pos, self.human_color())
            }
            None => false,
        }
    }

    fn record(&mut self, report: MoveReport) {
        self.move_timer.stop();

        self.message = match (report.outcome, report.passed) {
            (Some(outcome), _) => Some(format!("Game over: {outcome}")),
            (None, Some(passed)) => Some(format!("{passed} has no legal move and passes")),
            (None, None) => None,
        };

        self.last_report = Some(report);
        if !self.engine.is_terminal() {
            self.move_timer.start();
        }
    }

    /// Schedule the automated move if it is the AI's turn and none is pending
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(policy) = self.policy.take() else {
            return;
        };

        let deferred = DeferredMove::spawn(
            *self.engine.board(),
            self.ai_color(),
            policy,
            self.config.think_time(),
        );
        self.ai_state = AiState::Thinking(deferred);
    }

    /// Apply the automated move once it has been delivered
    pub fn check_ai_result(&mut self) {
        let poll = match &self.ai_state {
            AiState::Thinking(deferred) => deferred.poll(),
            AiState::Idle => return,
        };

        match poll {
            DeferredPoll::Pending => {}
            DeferredPoll::Lost => {
                self.ai_state = AiState::Idle;
                self.policy = Some(Self::fresh_policy(&self.config));
                self.message = Some("AI error".to_string());
                log::error!("automated player stopped without a move");
            }
            DeferredPoll::Ready(ai_move) => {
                self.ai_state = AiState::Idle;
                self.apply_ai_move(ai_move);
            }
        }
    }

    fn apply_ai_move(&mut self, ai_move: AiMove) {
        let AiMove { pos, policy, elapsed } = ai_move;
        self.policy = Some(policy);
        self.move_timer.set_ai_time(elapsed);

        let Some(pos) = pos else {
            self.message = Some("AI could not find a move".to_string());
            log::warn!("{} asked to move without a legal move", self.ai_color());
            return;
        };

        match self.engine.apply_move(pos) {
            Ok(report) => self.record(report),
            Err(err) => {
                self.message = Some(format!("AI move rejected: {err}"));
                log::warn!("AI move {pos} rejected: {err}");
            }
        }
    }

    /// One event-loop tick: collect a delivered move, then schedule the next
    pub fn tick(&mut self) {
        self.check_ai_result();
        self.start_ai_thinking();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking(deferred) => Some(deferred.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Drop a pending move; its policy is lost with the worker, so a fresh one takes its place
    fn cancel_ai(&mut self) {
        if let AiState::Thinking(deferred) = std::mem::replace(&mut self.ai_state, AiState::Idle) {
            deferred.cancel();
            self.policy.get_or_insert_with(|| Self::fresh_policy(&self.config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn config(human: Stone) -> AppConfig {
        AppConfig {
            human_color: human,
            think_time_ms: 0,
            seed: Some(11),
        }
    }

    /// Tick until the AI has moved or the deadline passes
    fn run_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        state.tick();
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(2));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_opening_attempt_move() {
        let mut state = GameState::new(config(Stone::Black));
        let report = state.attempt_move(2, 3).unwrap();
        assert_eq!(report.flipped, vec![Pos::new(3, 3)]);
        assert_eq!(state.board().count(Stone::Black), 4);
        assert_eq!(state.board().count(Stone::White), 1);
        assert!(state.is_ai_turn());
    }

    #[test]
    fn test_illegal_attempt_is_rejected_without_change() {
        let mut state = GameState::new(config(Stone::Black));
        let before = *state.board();

        let err = state.attempt_move(0, 0).unwrap_err();
        assert!(err.is_illegal_move());
        let err = state.attempt_move(3, 3).unwrap_err();
        assert!(err.is_illegal_move());
        assert_eq!(
            state.attempt_move(8, 0),
            Err(MoveError::OutOfBounds { x: 8, y: 0 })
        );

        assert_eq!(*state.board(), before);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_attempt_move_on_ai_turn() {
        let mut state = GameState::new(config(Stone::White));
        assert_eq!(state.attempt_move(2, 4), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_preview_hover() {
        let state = GameState::new(config(Stone::Black));
        assert!(state.preview_hover(2, 3));
        assert!(!state.preview_hover(0, 0));
        assert!(!state.preview_hover(3, 3));
        assert!(!state.preview_hover(9, 9));

        // Black is the automated color here
        let state = GameState::new(config(Stone::White));
        assert!(!state.preview_hover(2, 3));
    }

    #[test]
    fn test_ai_replies_after_human_move() {
        let mut state = GameState::new(config(Stone::Black));
        state.attempt_move(2, 3).unwrap();

        run_ai(&mut state);

        assert!(!state.is_ai_thinking());
        assert_eq!(state.current_turn(), Stone::Black);
        assert_eq!(state.board().stone_count(), 6);
        assert!(state.move_timer.ai_thinking_time.is_some());
    }

    #[test]
    fn test_input_ignored_while_ai_thinking() {
        let mut state = GameState::new(AppConfig {
            think_time_ms: 5_000,
            ..config(Stone::White)
        });
        state.tick();
        assert!(state.is_ai_thinking());
        assert_eq!(state.attempt_move(2, 4), Err(MoveError::AiThinking));
        assert!(!state.preview_hover(2, 4));
        state.reset();
        assert!(!state.is_ai_thinking());
    }

    #[test]
    fn test_reset_cancels_pending_move() {
        let mut state = GameState::new(AppConfig {
            think_time_ms: 5_000,
            ..config(Stone::White)
        });
        state.tick();
        assert!(state.is_ai_thinking());

        state.restart_as(Stone::Black);
        assert!(!state.is_ai_thinking());
        assert_eq!(*state.board(), Board::new());
        assert!(state.is_human_turn());
        state.check_ai_result();
        assert_eq!(state.board().stone_count(), 4);
    }

    #[test]
    fn test_load_position_while_thinking_keeps_ai_alive() {
        let mut state = GameState::new(AppConfig {
            think_time_ms: 5_000,
            ..config(Stone::White)
        });
        state.tick();
        assert!(state.is_ai_thinking());

        state.load_position(Board::new(), Stone::Black);
        assert!(!state.is_ai_thinking());
        assert!(state.is_ai_turn());

        state.tick();
        assert!(state.is_ai_thinking());
    }

    #[test]
    fn test_move_timer_records_human_move() {
        let mut state = GameState::new(config(Stone::Black));
        assert_eq!(state.move_timer.last_move_duration, None);
        state.attempt_move(2, 3).unwrap();
        assert!(state.move_timer.last_move_duration.is_some());
        // Running again for the next turn
        assert!(state.move_timer.start_time.is_some());
    }

    #[test]
    fn test_ai_opens_when_human_is_white() {
        let mut state = GameState::new(config(Stone::White));
        run_ai(&mut state);
        assert_eq!(state.board().stone_count(), 5);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_pass_message() {
        // After Black plays (0, 2) White cannot answer but Black can continue
        let board = Board::from_rows(&[
            "BW.....W",
            "........",
            "........",
            "........",
            "........",
            "........",
            "......W.",
            ".......B",
        ]);
        let mut state = GameState::new(config(Stone::Black));
        state.load_position(board, Stone::Black);

        let report = state.attempt_move(0, 2).unwrap();
        assert_eq!(report.passed, Some(Stone::White));
        assert!(state.is_human_turn());
        assert_eq!(
            state.message.as_deref(),
            Some("White has no legal move and passes")
        );
    }

    #[test]
    fn test_game_over_blocks_input() {
        let mut state = GameState::new(config(Stone::Black));
        state.load_position(Board::from_rows(&["BW......"]), Stone::Black);
        let report = state.attempt_move(0, 2).unwrap();
        assert!(report.outcome.is_some());
        assert_eq!(state.game_over().unwrap().to_string(), "Black won (3 vs 0)");
        assert_eq!(state.attempt_move(5, 5), Err(MoveError::GameOver));
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_full_game_against_ai() {
        let mut state = GameState::new(config(Stone::Black));
        let mut human = RandomPolicy::with_seed(5);

        for _ in 0..200 {
            if state.game_over().is_some() {
                break;
            }
            if state.is_human_turn() {
                let pos = human.select_move(state.board(), Stone::Black).unwrap();
                state.attempt_move(pos.row as usize, pos.col as usize).unwrap();
            } else {
                run_ai(&mut state);
            }
        }

        assert!(state.game_over().is_some());
    }
}
