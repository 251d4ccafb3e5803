//! Board state validation logic

use super::{
    board::{BoardState, Side},
    lines::Line,
};

impl BoardState {
    /// Check the board against the rules of play.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`](crate::Error::InvariantViolation) if:
    /// - The piece counts differ by more than one
    /// - The side to move contradicts the piece counts
    /// - Both sides hold a completed line
    /// - One side holds completed lines that no single move could have formed
    pub fn check_invariants(&self) -> crate::Result<()> {
        self.check_piece_counts()?;

        let summary = self.analyze();
        let human_lines: Vec<Line> = summary.completed_lines(Side::Human).collect();
        let computer_lines: Vec<Line> = summary.completed_lines(Side::Computer).collect();

        if !human_lines.is_empty() && !computer_lines.is_empty() {
            return Err(crate::Error::invariant(
                "both sides cannot hold a completed line",
            ));
        }

        for (side, lines) in [(Side::Human, &human_lines), (Side::Computer, &computer_lines)] {
            if !lines_share_cell(lines) {
                return Err(crate::Error::invariant(format!(
                    "the {side} holds completed lines that do not share a cell"
                )));
            }
        }

        Ok(())
    }

    /// Check the piece counts against the side to move.
    ///
    /// These are the only invariants a single placement can break; line
    /// checks would reject legal moves played on an already won board.
    pub(crate) fn check_piece_counts(&self) -> crate::Result<()> {
        let human = self.count(Side::Human);
        let computer = self.count(Side::Computer);

        if human.abs_diff(computer) > 1 {
            return Err(crate::Error::invariant(format!(
                "piece counts must differ by at most 1 (human={human}, computer={computer})"
            )));
        }

        // The side with the extra mark moved last, so the other side is up.
        let expected_turn = if human > computer {
            Some(Side::Computer)
        } else if computer > human {
            Some(Side::Human)
        } else {
            None
        };
        if expected_turn.is_some_and(|expected| expected != self.turn) {
            return Err(crate::Error::invariant(format!(
                "piece counts (human={human}, computer={computer}) are inconsistent with the {} to move",
                self.turn
            )));
        }

        Ok(())
    }

    /// Check if the board state is valid according to the rules of play
    pub fn is_valid(&self) -> bool {
        self.check_invariants().is_ok()
    }
}

/// Check if all lines share at least one cell.
///
/// Several completed lines can only appear at once if the final mark closed
/// all of them.
fn lines_share_cell(lines: &[Line]) -> bool {
    if lines.len() < 2 {
        return true;
    }

    (0..3).any(|row| {
        (0..3).any(|col| {
            lines
                .iter()
                .all(|line| line.coordinates().contains(&(row, col)))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_double_line_sharing_a_cell_is_valid() {
        // X X X
        // X O O
        // X O O   human closed row 0 and column 0 with the corner
        let board = BoardState::from_string("XXXXOOXOO_O");
        assert!(board.is_ok(), "{board:?}");
    }

    #[test]
    fn test_disjoint_double_line_is_invalid() {
        // X X X
        // O O .
        // X X X
        let cells = [
            [Cell::Human; 3],
            [Cell::Computer, Cell::Computer, Cell::Empty],
            [Cell::Human; 3],
        ];
        let board = BoardState {
            cells,
            turn: Side::Computer,
        };
        assert!(!board.is_valid());
        assert!(!lines_share_cell(&[Line::Row(0), Line::Row(2)]));
        assert!(lines_share_cell(&[Line::Row(0), Line::Diagonal]));
    }

    #[test]
    fn test_both_sides_winning_is_invalid() {
        let board = BoardState {
            cells: [
                [Cell::Human; 3],
                [Cell::Computer; 3],
                [Cell::Empty; 3],
            ],
            turn: Side::Human,
        };
        let err = board.check_invariants().unwrap_err();
        assert!(err.to_string().contains("both sides"));
    }

    #[test]
    fn test_turn_mismatch_is_invalid() {
        let board = BoardState {
            cells: [
                [Cell::Human, Cell::Empty, Cell::Empty],
                [Cell::Empty; 3],
                [Cell::Empty; 3],
            ],
            turn: Side::Human,
        };
        let err = board.check_invariants().unwrap_err();
        assert!(err.to_string().contains("inconsistent"));
    }

    #[test]
    fn test_computer_first_positions_are_valid() {
        let board = BoardState::new_with_side(Side::Computer);
        assert!(board.is_valid());
        let board = board
            .apply_move(crate::tictactoe::Move::new(1, 1))
            .unwrap();
        assert_eq!(board.turn, Side::Human);
        assert!(board.is_valid());
    }
}
