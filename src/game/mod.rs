// Game module - board model and move planning

pub mod grid;
pub mod planner;
pub mod plan;
pub mod bomb_planning;
pub mod stone_planning;
pub mod command;

// Re-export the planning types for easy access
pub use command::EngineCommand;
pub use grid::Grid;
pub use plan::{Plan, StoneAssignment, StonePlan};
pub use planner::Planner;
