use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Running totals across games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn new(x: u32, o: u32, draws: u32) -> Self {
        Self { x, o, draws }
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Win {
                player: Player::X, ..
            } => self.x += 1,
            GameOutcome::Win {
                player: Player::O, ..
            } => self.o += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.x + self.o + self.draws
    }
}
