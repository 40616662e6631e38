//! Game state management for the GUI

use crate::{EngineResult, GameConfig, GameEngine, Mark, Outcome, Pos, SearchResult};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<SearchResult>,
        start_time: Instant,
    },
}

/// State of one game in progress
pub struct GameState {
    pub config: GameConfig,
    pub engine: GameEngine,
    pub current_turn: Mark,
    pub outcome: Outcome,
    pub winning_line: Option<Vec<Pos>>,
    pub last_move: Option<Pos>,
    pub move_count: usize,
    pub last_ai_result: Option<SearchResult>,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let engine = GameEngine::from_config(&config)?;
        info!(
            size = config.size,
            run = config.run,
            depth = %config.depth,
            human = %config.human_mark(),
            "new game"
        );
        Ok(Self {
            config,
            engine,
            current_turn: Mark::X,
            outcome: Outcome::NotOver,
            winning_line: None,
            last_move: None,
            move_count: 0,
            last_ai_result: None,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
        })
    }

    #[inline]
    pub fn human_mark(&self) -> Mark {
        self.config.human_mark()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.human_mark()
    }

    /// Check if it's the engine's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == self.config.engine_mark()
    }

    /// Check if the engine is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Engine is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.engine
            .try_apply_move(pos, self.current_turn)
            .map_err(|e| e.to_string())?;
        self.after_move(pos);
        Ok(())
    }

    /// Book-keeping shared by human and engine moves
    fn after_move(&mut self, pos: Pos) {
        let mark = self.current_turn;
        self.last_move = Some(pos);
        self.move_count += 1;
        self.message = None;

        self.outcome = self.engine.outcome();
        if self.outcome.is_over() {
            self.winning_line = self.outcome.winner().and_then(|m| self.engine.winning_line(m));
            info!(outcome = ?self.outcome, moves = self.move_count, "game over");
            return;
        }

        self.current_turn = mark.opponent();
    }

    /// Start the engine search on a worker thread.
    ///
    /// The worker searches a clone; the UI thread's engine is only touched
    /// again when the result comes back.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let mut engine = self.engine.clone();
        let depth = self.config.depth;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.search(depth);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the engine has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    warn!("engine worker exited without a result");
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((search, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(search);
            self.ai_thinking_time = Some(elapsed);

            match search.best_move {
                Some(pos) => {
                    self.engine.apply_move(pos, self.current_turn);
                    self.after_move(pos);
                }
                None => {
                    warn!("engine returned no move");
                    self.message = Some("Engine could not find a move".to_string());
                }
            }
        }
    }

    /// Engine thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
