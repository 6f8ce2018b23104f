pub mod costing;
pub mod history;
pub mod simulation;

pub use costing::{compare, effective_price, line_cost, total_cost, PriceSource};
pub use history::{Snapshot, SnapshotHistory, MAX_HISTORY};
pub use simulation::{CostSimulationEngine, Edit};
