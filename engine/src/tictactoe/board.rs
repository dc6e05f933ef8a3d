use crate::error::EngineError;
use super::types::{Mark, Player};

pub const BOARD_SIZE: usize = 9;
pub const CENTER: usize = 4;

/// The 3x3 grid, indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds any position, including ones unreachable by legal play.
    pub fn from_marks(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Returns a new board with `index` set to `player`'s mark.
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, EngineError> {
        match self.get(index) {
            None => Err(EngineError::out_of_range(index)),
            Some(Mark::Empty) => {
                let mut next = *self;
                next.cells[index] = player.mark();
                Ok(next)
            }
            Some(_) => Err(EngineError::occupied(index)),
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Places `mark` at `index` for the duration of `f`, then restores the
    /// previous value. `index` must be in range.
    pub(crate) fn with_mark<R>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let previous = std::mem::replace(&mut self.cells[index], mark);
        let result = f(self);
        self.cells[index] = previous;
        result
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; BOARD_SIZE];
    for (cell, ch) in cells
        .iter_mut()
        .zip(layout.chars().filter(|c| !c.is_whitespace()))
    {
        *cell = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_marks(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMoveReason;

    #[test]
    fn test_apply_move_sets_only_target_cell() {
        let board = Board::new();
        let next = board.apply_move(7, Player::O).unwrap();

        assert_eq!(next.get(7), Some(Mark::O));
        assert_eq!(next.filled_count(), 1);
        assert!(board.is_blank());
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board = board_from_str("X.. ... ...");
        let result = board.apply_move(0, Player::O);

        assert_eq!(
            result,
            Err(EngineError::IllegalMove {
                index: 0,
                reason: IllegalMoveReason::Occupied
            })
        );
        assert_eq!(board.get(0), Some(Mark::X));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::new();
        for index in [9, 10, usize::MAX] {
            assert_eq!(
                board.apply_move(index, Player::X),
                Err(EngineError::out_of_range(index))
            );
        }
        assert!(board.is_blank());
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board = board_from_str("X.O .X. O..");
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(8));
        assert!(!board.is_valid_move(9));
    }

    #[test]
    fn test_full_and_blank() {
        assert!(Board::new().is_blank());
        assert!(!Board::new().is_full());
        let full = board_from_str("XOX XOO OXX");
        assert!(full.is_full());
        assert_eq!(full.filled_count(), 9);
        assert!(full.available_moves().is_empty());
    }

    #[test]
    fn test_with_mark_restores_previous_value() {
        let mut board = board_from_str("X.. ... ...");
        let seen = board.with_mark(4, Mark::O, |b| b.filled_count());

        assert_eq!(seen, 2);
        assert_eq!(board, board_from_str("X.. ... ..."));
    }
}
