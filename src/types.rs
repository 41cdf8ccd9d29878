use crate::error::UnknownCellState;
use std::fmt;
use std::str::FromStr;

/// Side length of the square board
pub const GRID_SIZE: usize = 10;

/// Number of bombs each player places before the stone phase
pub const BOMBS_PER_PLAYER: usize = 3;

/// Number of stones in one edge run
pub const STONES_PER_RUN: usize = 4;

/// Represents a cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Stone,
    Bomb,
    Block,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Stone,
        CellState::Bomb,
        CellState::Block,
    ];

    /// Token used by the engine's board dump
    pub fn token(self) -> &'static str {
        match self {
            CellState::Empty => "Empty",
            CellState::Stone => "Stone",
            CellState::Bomb => "Bomb",
            CellState::Block => "Block",
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CellState {
    type Err = UnknownCellState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Empty" => Ok(CellState::Empty),
            "Stone" => Ok(CellState::Stone),
            "Bomb" => Ok(CellState::Bomb),
            "Block" => Ok(CellState::Block),
            _ => Err(UnknownCellState(s.to_string())),
        }
    }
}

/// Board edge a stone is dropped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    West,
    East,
    North,
    South,
}

impl Edge {
    /// Stone planning scans the edges in this order
    pub const ALL: [Edge; 4] = [Edge::West, Edge::East, Edge::North, Edge::South];

    pub fn as_str(self) -> &'static str {
        match self {
            Edge::West => "west",
            Edge::East => "east",
            Edge::North => "north",
            Edge::South => "south",
        }
    }

    /// Map a lane index and a depth measured inward from this edge to `(row, col)`.
    ///
    /// West/east lanes are rows, north/south lanes are columns. Depth 0 is the
    /// cell touching the edge, depth `GRID_SIZE - 1` is the far boundary.
    pub fn cell(self, index: usize, depth: usize) -> (usize, usize) {
        let far = GRID_SIZE - 1;
        match self {
            Edge::West => (index, depth),
            Edge::East => (index, far - depth),
            Edge::North => (depth, index),
            Edge::South => (far - depth, index),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bomb dropped on one target cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BombMove {
    pub row: usize,
    pub col: usize,
}

impl BombMove {
    pub fn new(row: usize, col: usize) -> Self {
        BombMove { row, col }
    }

    /// Engine arguments, row then column
    pub fn args(&self) -> [String; 2] {
        [self.row.to_string(), self.col.to_string()]
    }
}

/// One stone pushed in from `edge` along the row or column `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoneMove {
    pub edge: Edge,
    pub index: usize,
}

impl StoneMove {
    pub fn new(edge: Edge, index: usize) -> Self {
        StoneMove { edge, index }
    }

    /// Engine arguments, edge then lane index
    pub fn args(&self) -> [String; 2] {
        [self.edge.as_str().to_string(), self.index.to_string()]
    }

    /// Cells of this lane from the edge inward
    pub fn lane(&self) -> impl Iterator<Item = (usize, usize)> {
        let (edge, index) = (self.edge, self.index);
        (0..GRID_SIZE).map(move |depth| edge.cell(index, depth))
    }
}
