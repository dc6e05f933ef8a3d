use crate::error::SessionError;
use crate::log;
use crate::tictactoe::{Board, GameOutcome, Player, choose_move, evaluate};
use super::score::ScoreTally;
use super::settings::{GameMode, SessionSettings};

/// The side the computer plays in [`GameMode::Ai`].
pub const AI_PLAYER: Player = Player::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Finished,
}

/// Result of a state change. When `ai_turn_pending` is set the caller should
/// render, then call [`Session::play_ai_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub outcome: GameOutcome,
    pub ai_turn_pending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board: Board,
    pub outcome: GameOutcome,
    pub turn: Player,
    pub state: SessionState,
    pub mode: GameMode,
    pub scores: ScoreTally,
}

#[derive(Debug)]
pub struct Session {
    board: Board,
    turn: Player,
    state: SessionState,
    settings: SessionSettings,
    outcome: GameOutcome,
    scores: ScoreTally,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_scores(ScoreTally::default())
    }

    pub fn with_scores(scores: ScoreTally) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            state: SessionState::Idle,
            settings: SessionSettings::default(),
            outcome: GameOutcome::InProgress,
            scores,
        }
    }

    /// Starts a fresh board. A game still running is abandoned without scoring.
    pub fn new_game(&mut self, settings: SessionSettings) -> Transition {
        if self.state == SessionState::Running {
            log!("Abandoning running game after {} moves", self.board.filled_count());
        }

        self.board = Board::new();
        self.settings = settings;
        self.turn = settings.first_player;
        self.outcome = GameOutcome::InProgress;
        self.state = SessionState::Running;

        log!("New {} game, {} moves first", settings.mode, settings.first_player);

        self.transition()
    }

    /// Places the current side's mark for a human player.
    pub fn submit_move(&mut self, index: usize) -> Result<Transition, SessionError> {
        if self.state != SessionState::Running {
            log!("Rejected move at {}: game is not running", index);
            return Err(SessionError::NotRunning);
        }

        if self.is_ai_turn() {
            log!("Rejected move at {}: waiting for the AI", index);
            return Err(SessionError::NotYourTurn);
        }

        self.place(index).inspect_err(|e| {
            log!("Player {} failed to place mark at {}: {}", self.turn, index, e);
        })
    }

    /// Lets the engine move for [`AI_PLAYER`].
    pub fn play_ai_turn(&mut self) -> Result<Transition, SessionError> {
        if self.state != SessionState::Running {
            return Err(SessionError::NotRunning);
        }

        if !self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }

        let index = choose_move(&self.board, AI_PLAYER)?;
        log!("AI {} plays {}", AI_PLAYER, index);
        self.place(index)
    }

    /// Zeroes the tally. The board is left alone.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        log!("Scores reset");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            outcome: self.outcome,
            turn: self.turn,
            state: self.state,
            mode: self.settings.mode,
            scores: self.scores,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state == SessionState::Running
            && self.settings.mode == GameMode::Ai
            && self.turn == AI_PLAYER
    }

    fn place(&mut self, index: usize) -> Result<Transition, SessionError> {
        self.board = self.board.apply_move(index, self.turn)?;
        self.outcome = evaluate(&self.board);

        if self.outcome.is_terminal() {
            self.finish();
        } else {
            self.turn = self.turn.opponent();
        }

        Ok(self.transition())
    }

    fn finish(&mut self) {
        self.state = SessionState::Finished;
        self.scores.record(&self.outcome);

        match self.outcome {
            GameOutcome::Win { player, line } => {
                log!("{} wins on {:?}", player, line.cells())
            }
            _ => log!("Game drawn"),
        }
    }

    fn transition(&self) -> Transition {
        Transition {
            outcome: self.outcome,
            ai_turn_pending: self.is_ai_turn(),
        }
    }
}
