// Board planner library
// Parses engine board snapshots and plans bomb and stone moves

pub mod config;
pub mod error;
pub mod fetch;
pub mod game;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{PlannerConfig, RetryPolicy};
pub use error::{BoardParseError, FetchError, UnknownCellState};
pub use game::{EngineCommand, Grid, Plan, Planner};
pub use types::*;
