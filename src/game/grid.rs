use crate::error::BoardParseError;
use crate::types::{CellState, GRID_SIZE};
use std::fmt;
use std::str::FromStr;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";

/// 10x10 board, row 0 is the north edge and column 0 the west edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Grid::filled(CellState::Empty)
    }

    pub fn filled(state: CellState) -> Self {
        Grid {
            cells: [[state; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse the raw text of a get-board response.
    ///
    /// The board is the first `[[ ... ]]` literal in the text: brackets are
    /// stripped, the rest is split on commas and must yield exactly 100 known
    /// tokens in row-major order. Nothing is returned unless every cell parsed.
    pub fn parse(snapshot: &str) -> Result<Self, BoardParseError> {
        let start = snapshot
            .find(OPEN)
            .ok_or(BoardParseError::MissingDelimiters)?
            + OPEN.len();
        let len = snapshot[start..]
            .find(CLOSE)
            .ok_or(BoardParseError::MissingDelimiters)?;
        let inner: String = snapshot[start..start + len]
            .chars()
            .filter(|&c| c != '[' && c != ']')
            .collect();

        let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
        if tokens.len() != GRID_SIZE * GRID_SIZE {
            return Err(BoardParseError::TokenCount {
                found: tokens.len(),
            });
        }

        let mut cells = [[CellState::Empty; GRID_SIZE]; GRID_SIZE];
        for (position, token) in tokens.iter().enumerate() {
            let state = token
                .parse::<CellState>()
                .map_err(|e| BoardParseError::UnknownToken {
                    position,
                    token: e.0,
                })?;
            cells[position / GRID_SIZE][position % GRID_SIZE] = state;
        }
        Ok(Grid { cells })
    }

    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Row-major flattening
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&c| c == state).count()
    }

    /// Debug function to print the board as a character map
    pub fn debug_print(&self) {
        eprintln!("DEBUG: board");
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    CellState::Empty => '.',
                    CellState::Stone => 'o',
                    CellState::Bomb => '*',
                    CellState::Block => '#',
                })
                .collect();
            eprintln!("  {}", line);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl FromStr for Grid {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

/// Renders the engine's nested-list form, e.g. `[[Empty, Block, ...], ...]`
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", cell)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
