use super::grid::Grid;
use super::plan::Plan;
use crate::error::BoardParseError;
use crate::types::CellState;
use crate::vlog;

/// One planning cycle over one board snapshot.
///
/// The planner owns its working grid. Bomb and stone planning write their
/// anticipated results into it (when asked to) so later steps see the board
/// as it will be once the engine has applied the earlier moves.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) grid: Grid,
}

impl Planner {
    pub fn new(grid: Grid) -> Self {
        Planner { grid }
    }

    /// Parse a get-board response and start a cycle on it
    pub fn from_snapshot(snapshot: &str) -> Result<Self, BoardParseError> {
        let grid = Grid::parse(snapshot)?;
        vlog!(
            "parsed snapshot: {} empty, {} block",
            grid.count(CellState::Empty),
            grid.count(CellState::Block)
        );
        Ok(Planner::new(grid))
    }

    /// Working grid, including any anticipated moves applied so far
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Bombs first, then stones for both players against the updated grid
    pub fn plan(&mut self, player_1: &str, player_2: &str, update_matrix: bool) -> Plan {
        let bombs = self.compute_bomb_orders(update_matrix);
        let stones = self.compute_stone_orders(player_1, player_2, update_matrix);
        Plan { bombs, stones }
    }
}
