//! Line sums and ownership for the eight rows, columns and diagonals

use serde::{Deserialize, Serialize};

use super::board::{Cell, Outcome, Side};

/// One of the eight three-cell lines of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

/// All lines, rows first, then columns, then the two diagonals
pub const LINES: [Line; 8] = [
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Diagonal,
    Line::AntiDiagonal,
];

impl Line {
    /// The `(row, col)` coordinates covered by this line
    pub fn coordinates(self) -> [(usize, usize); 3] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::Diagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

/// Sum and owner of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub line: Line,
    /// Arithmetic total of the signed cell values (-3..=3)
    pub sum: i32,
    /// The side holding every non-empty cell, `None` if empty or contested
    pub owner: Option<Side>,
}

impl LineStats {
    fn compute(cells: &[[Cell; 3]; 3], line: Line) -> Self {
        let mut sum = 0;
        let mut owner: Option<Side> = None;
        let mut contested = false;

        for (r, c) in line.coordinates() {
            let cell = cells[r][c];
            sum += cell.value();
            if let Some(side) = cell.side() {
                match owner {
                    None => owner = Some(side),
                    Some(existing) if existing != side => contested = true,
                    Some(_) => {}
                }
            }
        }

        LineStats {
            line,
            sum,
            owner: if contested { None } else { owner },
        }
    }

    /// The side that filled all three cells, if any
    pub fn completed_by(&self) -> Option<Side> {
        match self.sum {
            3 => Some(Side::Computer),
            -3 => Some(Side::Human),
            _ => None,
        }
    }
}

/// Derived statistics for a whole board, recomputed on every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub lines: [LineStats; 8],
    /// Terminal outcome, `None` while the game is still running
    pub outcome: Option<Outcome>,
}

impl LineSummary {
    /// Compute sums, owners and the terminal outcome.
    ///
    /// A completed line takes precedence over a full board.
    pub fn compute(cells: &[[Cell; 3]; 3]) -> Self {
        let lines = LINES.map(|line| LineStats::compute(cells, line));

        let winner = lines.iter().find_map(LineStats::completed_by);
        let full = cells.iter().flatten().all(|&cell| cell != Cell::Empty);

        let outcome = match winner {
            Some(side) => Some(Outcome::Win(side)),
            None if full => Some(Outcome::Draw),
            None => None,
        };

        LineSummary { lines, outcome }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Number of lines (0..=8) owned exclusively by `side`
    pub fn owned_by(&self, side: Side) -> usize {
        self.lines
            .iter()
            .filter(|stats| stats.owner == Some(side))
            .count()
    }

    /// Whether `side` has two marks in some line with the third cell empty
    pub fn has_open_two(&self, side: Side) -> bool {
        let target = 2 * side.sign();
        self.lines.iter().any(|stats| stats.sum == target)
    }

    /// Lines completed by `side`
    pub fn completed_lines(&self, side: Side) -> impl Iterator<Item = Line> + '_ {
        self.lines
            .iter()
            .filter(move |stats| stats.completed_by() == Some(side))
            .map(|stats| stats.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::BoardState;

    fn summary(s: &str) -> LineSummary {
        BoardState::from_string(s).unwrap().analyze()
    }

    #[test]
    fn test_row_sum_and_owner() {
        // X X .
        // O . .
        // . . .
        let s = summary("XX.O.....");
        assert_eq!(s.lines[0].sum, -2);
        assert_eq!(s.lines[0].owner, Some(Side::Human));
        assert_eq!(s.lines[1].sum, 1);
        assert_eq!(s.lines[1].owner, Some(Side::Computer));
        assert_eq!(s.lines[2].owner, None);
    }

    #[test]
    fn test_contested_line_has_no_owner() {
        let s = summary("XO.......");
        assert_eq!(s.lines[0].sum, 0);
        assert_eq!(s.lines[0].owner, None);
        // Column 0 holds only the X
        assert_eq!(s.lines[3].owner, Some(Side::Human));
    }

    #[test]
    fn test_ownership_counts() {
        // X . .
        // . O .
        // . . .
        let s = summary("X...O....");
        // X owns row 0, column 0; O owns row 1, column 1, anti-diagonal.
        // The main diagonal holds both.
        assert_eq!(s.owned_by(Side::Human), 2);
        assert_eq!(s.owned_by(Side::Computer), 3);
    }

    #[test]
    fn test_open_two() {
        let s = summary("XX.O..O..");
        assert!(s.has_open_two(Side::Human));
        assert!(!s.has_open_two(Side::Computer));
    }

    #[test]
    fn test_diagonal_win() {
        let s = summary("O.X.OX..O_X");
        assert_eq!(s.outcome, Some(Outcome::Win(Side::Computer)));
        assert_eq!(
            s.completed_lines(Side::Computer).collect::<Vec<_>>(),
            vec![Line::Diagonal]
        );
    }

    #[test]
    fn test_anti_diagonal_coordinates() {
        assert_eq!(Line::AntiDiagonal.coordinates(), [(0, 2), (1, 1), (2, 0)]);
    }
}
