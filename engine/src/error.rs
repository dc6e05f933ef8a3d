use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    Occupied,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfRange => write!(f, "index out of range 0-8"),
            IllegalMoveReason::Occupied => write!(f, "cell is already marked"),
        }
    }
}

/// Errors raised by the board and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal move at {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    #[error("no legal move: board is full or the game is already decided")]
    NoLegalMove,
}

impl EngineError {
    pub fn out_of_range(index: usize) -> Self {
        EngineError::IllegalMove {
            index,
            reason: IllegalMoveReason::OutOfRange,
        }
    }

    pub fn occupied(index: usize) -> Self {
        EngineError::IllegalMove {
            index,
            reason: IllegalMoveReason::Occupied,
        }
    }
}

/// Why a session ignored a move or AI request. State is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game is not running")]
    NotRunning,

    #[error("not your turn")]
    NotYourTurn,

    #[error(transparent)]
    Engine(#[from] EngineError),
}
