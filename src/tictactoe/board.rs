//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineSummary;
use crate::{config::MAX_PLIES, error::MoveRejection};

/// Score magnitude of a decided game, scaled by remaining depth
pub const WIN_SCORE: i32 = 100;

/// Score for the side to move when it holds an unblocked two-in-a-row
pub const THREAT_SCORE: i32 = 90;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Signed value used in line arithmetic: human -1, computer +1
    pub fn sign(self) -> i32 {
        match self {
            Side::Human => -1,
            Side::Computer => 1,
        }
    }

    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Convert side to the mark it places
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// Signed ternary value: human -1, empty 0, computer +1
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Human => -1,
            Cell::Computer => 1,
        }
    }

    pub fn from_value(value: i32) -> Option<Cell> {
        match value {
            -1 => Some(Cell::Human),
            0 => Some(Cell::Empty),
            1 => Some(Cell::Computer),
            _ => None,
        }
    }

    /// The side owning this mark, `None` for an empty cell
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Side::Human),
            Cell::Computer => Some(Side::Computer),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' => Some(Cell::Computer),
            _ => None,
        }
    }
}

/// A move claiming the cell at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major index (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Draw,
}

impl Outcome {
    /// Signed winner: -1 human, 0 draw, +1 computer
    pub fn sign(self) -> i32 {
        match self {
            Outcome::Win(side) => side.sign(),
            Outcome::Draw => 0,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            Outcome::Draw => None,
        }
    }

    /// Swap the winner perspective. Useful when mirroring games.
    pub fn swap_sides(self) -> Self {
        match self {
            Outcome::Win(side) => Outcome::Win(side.opponent()),
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(Side::Human) => write!(f, "human wins"),
            Outcome::Win(Side::Computer) => write!(f, "computer wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Complete board state: cells plus the side to move.
///
/// `Copy` and 10 bytes wide, so successor states are plain values; the search
/// never shares one between sibling branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [[Cell; 3]; 3],
    pub turn: Side,
}

impl BoardState {
    /// Create a new empty board with the human to move
    pub fn new() -> Self {
        Self::new_with_side(Side::Human)
    }

    /// Create a new empty board with `first` to move
    pub fn new_with_side(first: Side) -> Self {
        BoardState {
            cells: [[Cell::Empty; 3]; 3],
            turn: first,
        }
    }

    /// Build a board from rows of signed values (-1 human, 0 empty, +1 computer).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`](crate::Error::InvariantViolation) if
    /// the matrix is not 3x3, a value lies outside {-1, 0, 1}, or the piece
    /// counts do not fit `turn`.
    pub fn from_values<R: AsRef<[i32]>>(rows: &[R], turn: Side) -> crate::Result<Self> {
        if rows.len() != 3 {
            return Err(crate::Error::invariant(format!(
                "board must have 3 rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 3 {
                return Err(crate::Error::invariant(format!(
                    "row {r} must have 3 cells, got {}",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                cells[r][c] = Cell::from_value(value).ok_or_else(|| {
                    crate::Error::invariant(format!(
                        "cell ({r}, {c}) holds {value}, expected -1, 0 or 1"
                    ))
                })?;
            }
        }

        let board = BoardState { cells, turn };
        board.check_invariants()?;
        Ok(board)
    }

    /// Create a board from its text form.
    ///
    /// Nine cell characters in row-major order (`X` human, `O` computer, `.`
    /// empty; whitespace is ignored), optionally followed by `_X` or `_O` to
    /// name the side to move. Without the suffix the human is assumed to have
    /// opened the game.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not have exactly 9 cells
    /// - Any character is not a valid cell (`.`, `X`/`x` or `O`/`o`)
    /// - The turn suffix is not `X` or `O`
    /// - The piece counts are impossible for the side to move
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(suffix)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; 3]; 3];
        for (i, &ch) in chars.iter().enumerate() {
            cells[i / 3][i % 3] =
                Cell::from_char(ch).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: ch,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let turn = match suffix {
            Some("X") | Some("x") => Side::Human,
            Some("O") | Some("o") => Side::Computer,
            Some(other) => {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("unknown side '{other}' in '{s}' (expected X or O)"),
                });
            }
            None => {
                let board = BoardState {
                    cells,
                    turn: Side::Human,
                };
                if board.count(Side::Human) > board.count(Side::Computer) {
                    Side::Computer
                } else {
                    Side::Human
                }
            }
        };

        let board = BoardState { cells, turn };
        board.check_invariants()?;
        Ok(board)
    }

    /// Cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of marks placed by `side`
    pub fn count(&self, side: Side) -> usize {
        let target = side.to_cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// All empty cells in row-major order.
    ///
    /// The order is the search's move order and therefore its tie-break.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(9);
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Place the current side's mark and hand the turn over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) when the
    /// coordinates are out of range or the cell is occupied. In debug builds a
    /// successor whose piece counts disagree with the side to move is reported
    /// as [`Error::InvariantViolation`](crate::Error::InvariantViolation).
    ///
    /// Every cell in [`legal_moves`](Self::legal_moves) is accepted, including
    /// on a board that is already won.
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> crate::Result<BoardState> {
        if !mv.in_range() {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: MoveRejection::OutOfRange,
            });
        }

        if self.cells[mv.row][mv.col] != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
                reason: MoveRejection::Occupied,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.turn.to_cell();
        next.turn = self.turn.opponent();

        #[cfg(debug_assertions)]
        next.check_piece_counts()?;

        Ok(next)
    }

    /// Recompute line sums, owners and the terminal outcome
    pub fn analyze(&self) -> LineSummary {
        LineSummary::compute(&self.cells)
    }

    /// Check if the game is over (a completed line or a full board)
    pub fn is_terminal(&self) -> bool {
        self.analyze().is_terminal()
    }

    /// The outcome if the game is over, `None` while it is still running
    pub fn winner(&self) -> Option<Outcome> {
        self.analyze().outcome
    }

    /// Heuristic score from the perspective of the side to move.
    ///
    /// - Terminal: `WIN_SCORE * turn * winner * (depth_remaining + 1)`, so a
    ///   quicker win (more depth left) outweighs a slower one. Terminal states
    ///   are always lost or drawn for the side to move. Depths beyond
    ///   [`MAX_PLIES`] count as `MAX_PLIES`.
    /// - The side to move holds an open two: `THREAT_SCORE`; the previous
    ///   mover left it unblocked.
    /// - Otherwise the line-ownership differential, signed for the side to
    ///   move (range -8..=8).
    pub fn evaluate(&self, depth_remaining: u32) -> i32 {
        let summary = self.analyze();
        let turn = self.turn.sign();

        if let Some(outcome) = summary.outcome {
            let depth_factor = depth_remaining.min(MAX_PLIES) as i32 + 1;
            return WIN_SCORE * turn * outcome.sign() * depth_factor;
        }

        if summary.has_open_two(self.turn) {
            return THREAT_SCORE;
        }

        let computer = summary.owned_by(Side::Computer) as i32;
        let human = summary.owned_by(Side::Human) as i32;
        (computer - human) * turn
    }

    /// [`evaluate`](Self::evaluate) seen from the computer's fixed point of view
    pub fn absolute_score(&self, depth_remaining: u32) -> i32 {
        self.evaluate(depth_remaining) * self.turn.sign()
    }

    /// Swap every mark and hand the turn to the other side.
    ///
    /// The side to move in the result faces the same position as the side to
    /// move in `self`.
    #[must_use = "swap_sides returns a new board state; the original is unchanged"]
    pub fn swap_sides(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            *cell = match cell {
                Cell::Human => Cell::Computer,
                Cell::Computer => Cell::Human,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped.turn = self.turn.opponent();
        swapped
    }

    /// Get a string representation that [`from_string`](Self::from_string) reads back
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells
                .iter()
                .flatten()
                .map(|&c| c.to_char())
                .collect::<String>(),
            match self.turn {
                Side::Human => 'X',
                Side::Computer => 'O',
            }
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
