use super::plan::{StoneAssignment, StonePlan};
use super::planner::Planner;
use crate::types::{CellState, Edge, StoneMove, GRID_SIZE, STONES_PER_RUN};
use crate::vlog;

impl Planner {
    /// Give each of the two players a lane to fill with a run of four stones.
    ///
    /// Edges are scanned west, east, north, south and lanes 0 to 9 within
    /// each edge. The first eligible lane goes to `player_1`, the second to
    /// `player_2`, after which the scan stops. With `update_matrix` the drop
    /// of each assigned run is simulated on the working grid before the next
    /// lane is checked. Fewer than two eligible lanes leave players unassigned.
    pub fn compute_stone_orders(
        &mut self,
        player_1: &str,
        player_2: &str,
        update_matrix: bool,
    ) -> StonePlan {
        let mut plan = StonePlan::new(player_1, player_2);

        for edge in Edge::ALL {
            for index in 0..GRID_SIZE {
                let lane = StoneMove::new(edge, index);
                if !self.is_eligible_lane(lane) {
                    continue;
                }
                let Some((slot, player)) = plan
                    .next_unassigned()
                    .map(|(slot, player)| (slot, player.to_owned()))
                else {
                    return plan;
                };

                vlog!("{} {} assigned to {}", edge, index, player);
                plan.assignments.push(StoneAssignment { slot, player, lane });
                if update_matrix {
                    self.drop_stones(lane);
                }
                if plan.is_complete() {
                    return plan;
                }
            }
        }

        vlog!("only {} of 2 players got a lane", plan.assignments.len());
        plan
    }

    /// A lane can take a run when the four cells nearest its edge are empty
    /// and a block sits somewhere further in, up to and including the far
    /// boundary cell. Lanes with no block at all are open and never eligible.
    pub fn is_eligible_lane(&self, lane: StoneMove) -> bool {
        let cells: Vec<CellState> = lane
            .lane()
            .map(|(row, col)| self.grid.get(row, col))
            .collect();

        cells[..STONES_PER_RUN].iter().all(|cell| cell.is_empty())
            && cells[STONES_PER_RUN - 1..].contains(&CellState::Block)
    }

    /// Simulate pushing stones in from the lane's edge.
    ///
    /// Each stone slides inward until it meets the first occupied cell (or
    /// the far boundary), so the run stacks up from there back toward the
    /// edge. Returns how many stones were placed.
    pub fn drop_stones(&mut self, lane: StoneMove) -> usize {
        let cells: Vec<(usize, usize)> = lane.lane().collect();
        let stop = cells
            .iter()
            .position(|&(row, col)| !self.grid.get(row, col).is_empty())
            .unwrap_or(cells.len());

        let mut placed = 0;
        for &(row, col) in cells[..stop].iter().rev().take(STONES_PER_RUN) {
            self.grid.set(row, col, CellState::Stone);
            placed += 1;
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{Grid, Planner};
    use crate::types::{CellState, Edge, StoneMove};

    fn lane_with(edge: Edge, index: usize, cells: &[(usize, CellState)]) -> Planner {
        let mut grid = Grid::empty();
        for &(depth, state) in cells {
            let (row, col) = edge.cell(index, depth);
            grid.set(row, col, state);
        }
        Planner::new(grid)
    }

    fn eligible(edge: Edge, cells: &[(usize, CellState)]) -> bool {
        lane_with(edge, 3, cells).is_eligible_lane(StoneMove::new(edge, 3))
    }

    fn run(edge: Edge, index: usize) -> Vec<StoneMove> {
        vec![StoneMove::new(edge, index); 4]
    }

    #[test]
    fn eligibility_needs_four_empty_and_a_block_inward() {
        for edge in Edge::ALL {
            assert!(eligible(edge, &[(9, CellState::Block)]));
            assert!(eligible(edge, &[(4, CellState::Block)]));
            assert!(!eligible(edge, &[(3, CellState::Block)]));
            assert!(!eligible(edge, &[]));
            assert!(!eligible(edge, &[(7, CellState::Stone)]));
            assert!(!eligible(
                edge,
                &[(0, CellState::Bomb), (9, CellState::Block)]
            ));
        }
    }

    #[test]
    fn drop_stacks_against_first_obstruction_for_every_edge() {
        for edge in Edge::ALL {
            let lane = StoneMove::new(edge, 6);
            let cells = [(6, CellState::Bomb), (8, CellState::Block)];
            let mut planner = lane_with(edge, 6, &cells);

            assert_eq!(planner.drop_stones(lane), 4);
            for depth in 2..=5 {
                let (row, col) = edge.cell(6, depth);
                let cell = planner.grid().get(row, col);
                assert_eq!(cell, CellState::Stone, "{} depth {}", edge, depth);
            }
            let (row, col) = edge.cell(6, 1);
            assert_eq!(planner.grid().get(row, col), CellState::Empty);
            assert_eq!(planner.grid().count(CellState::Stone), 4);
        }
    }

    #[test]
    fn drop_into_open_lane_lands_at_far_boundary() {
        let lane = StoneMove::new(Edge::North, 0);
        let mut planner = Planner::new(Grid::empty());
        assert_eq!(planner.drop_stones(lane), 4);
        for row in 6..=9 {
            assert_eq!(planner.grid().get(row, 0), CellState::Stone);
        }
    }

    #[test]
    fn drop_places_fewer_stones_in_short_lane() {
        let lane = StoneMove::new(Edge::West, 2);
        let mut planner = lane_with(Edge::West, 2, &[(2, CellState::Block)]);
        assert_eq!(planner.drop_stones(lane), 2);
    }

    #[test]
    fn single_block_in_corner() {
        let mut grid = Grid::empty();
        grid.set(0, 9, CellState::Block);
        let mut planner = Planner::new(grid);

        let plan = planner.compute_stone_orders("p1", "p2", true);
        assert_eq!(plan.orders_for("p1"), run(Edge::West, 0));
        // the same block backs column 9 from the south
        assert_eq!(plan.orders_for("p2"), run(Edge::South, 9));

        let grid = planner.grid();
        for col in 5..=8 {
            assert_eq!(grid.get(0, col), CellState::Stone);
        }
        for row in 1..=4 {
            assert_eq!(grid.get(row, 9), CellState::Stone);
        }
    }

    #[test]
    fn stops_after_two_players() {
        let mut grid = Grid::empty();
        for row in 0..10 {
            grid.set(row, 9, CellState::Block);
        }
        let mut planner = Planner::new(grid);

        let plan = planner.compute_stone_orders("p1", "p2", true);
        assert_eq!(plan.assignments().len(), 2);
        assert_eq!(plan.orders_for("p1"), run(Edge::West, 0));
        assert_eq!(plan.orders_for("p2"), run(Edge::West, 1));
        assert_eq!(planner.grid().count(CellState::Stone), 8);
    }

    #[test]
    fn assignments_record_caller_order() {
        let mut grid = Grid::empty();
        for row in 0..10 {
            grid.set(row, 9, CellState::Block);
        }
        let plan = Planner::new(grid).compute_stone_orders("x", "x", true);

        let slots: Vec<usize> = plan.assignments().iter().map(|a| a.slot).collect();
        assert_eq!(slots, [0, 1]);
        assert_eq!(plan.orders(0), run(Edge::West, 0));
        assert_eq!(plan.orders(1), run(Edge::West, 1));
    }

    #[test]
    fn earlier_drop_closes_later_lane() {
        let mut grid = Grid::empty();
        grid.set(0, 9, CellState::Block);
        grid.set(9, 8, CellState::Block);
        grid.set(9, 0, CellState::Bomb);

        let mut simulated = Planner::new(grid);
        let plan = simulated.compute_stone_orders("p1", "p2", true);
        assert_eq!(plan.orders_for("p1"), run(Edge::West, 0));
        // (0, 8) now holds a stone, so north column 8 is skipped
        assert_eq!(plan.orders_for("p2"), run(Edge::South, 9));

        let mut snapshot_only = Planner::new(grid);
        let plan = snapshot_only.compute_stone_orders("p1", "p2", false);
        assert_eq!(plan.orders_for("p2"), run(Edge::North, 8));
        assert_eq!(snapshot_only.into_grid(), grid);
    }

    #[test]
    fn shortfall_is_not_an_error() {
        let mut planner = Planner::new(Grid::empty());
        let plan = planner.compute_stone_orders("p1", "p2", true);
        assert!(plan.assignments().is_empty());
        assert!(!plan.is_complete());

        let mut grid = Grid::empty();
        grid.set(4, 5, CellState::Block);
        grid.set(0, 5, CellState::Bomb);
        grid.set(9, 5, CellState::Bomb);
        grid.set(4, 0, CellState::Bomb);
        let mut planner = Planner::new(grid);
        let plan = planner.compute_stone_orders("p1", "p2", true);
        assert_eq!(plan.orders_for("p1"), run(Edge::East, 4));
        assert!(plan.orders_for("p2").is_empty());
    }
}
