use crate::types::{BombMove, StoneMove, STONES_PER_RUN};

/// A lane handed to one player for the whole stone run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneAssignment {
    /// Position in the caller's player order, 0 for player 1
    pub slot: usize,
    pub player: String,
    pub lane: StoneMove,
}

impl StoneAssignment {
    /// The engine places one stone per command, so the lane is repeated
    pub fn moves(&self) -> [StoneMove; STONES_PER_RUN] {
        [self.lane; STONES_PER_RUN]
    }
}

/// Stone orders for the two players of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StonePlan {
    pub(crate) players: [String; 2],
    pub(crate) assignments: Vec<StoneAssignment>,
}

impl StonePlan {
    pub(crate) fn new(player_1: &str, player_2: &str) -> Self {
        StonePlan {
            players: [player_1.to_string(), player_2.to_string()],
            assignments: Vec::with_capacity(2),
        }
    }

    pub fn players(&self) -> [&str; 2] {
        [&self.players[0], &self.players[1]]
    }

    /// Assignments in the order they were made, player 1 first
    pub fn assignments(&self) -> &[StoneAssignment] {
        &self.assignments
    }

    /// Four identical moves for the player at `slot`, or nothing if that
    /// player got no lane
    pub fn orders(&self, slot: usize) -> Vec<StoneMove> {
        self.assignments
            .iter()
            .find(|a| a.slot == slot)
            .map(|a| a.moves().to_vec())
            .unwrap_or_default()
    }

    /// Orders looked up by name; with duplicate names only the first
    /// player's lane is reachable here, use [`StonePlan::orders`] instead
    pub fn orders_for(&self, player: &str) -> Vec<StoneMove> {
        self.players
            .iter()
            .position(|p| p == player)
            .map(|slot| self.orders(slot))
            .unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.assignments.len() == self.players.len()
    }

    /// Slot and name of the next player waiting for a lane
    pub(crate) fn next_unassigned(&self) -> Option<(usize, &str)> {
        let slot = self.assignments.len();
        self.players.get(slot).map(|p| (slot, p.as_str()))
    }
}

/// Everything planned from one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Shared by both players
    pub bombs: Vec<BombMove>,
    pub stones: StonePlan,
}
