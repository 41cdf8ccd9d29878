use super::planner::Planner;
use crate::types::{BombMove, CellState, BOMBS_PER_PLAYER, GRID_SIZE};
use crate::vlog;

impl Planner {
    /// First three empty cells in row-major order.
    ///
    /// With `update_matrix` every target is marked as a bomb in the working
    /// grid. A board with fewer empty cells simply yields fewer bombs.
    pub fn compute_bomb_orders(&mut self, update_matrix: bool) -> Vec<BombMove> {
        let mut bomb_orders = Vec::with_capacity(BOMBS_PER_PLAYER);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.grid.get(row, col) != CellState::Empty {
                    continue;
                }
                bomb_orders.push(BombMove::new(row, col));
                vlog!("bomb target ({}, {})", row, col);
                if update_matrix {
                    self.grid.set(row, col, CellState::Bomb);
                }
                if bomb_orders.len() == BOMBS_PER_PLAYER {
                    return bomb_orders;
                }
            }
        }

        bomb_orders
    }
}
