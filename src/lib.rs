pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use engine::{CostSimulationEngine, Edit, PriceSource};
pub use error::{Result, SimError};
pub use models::{IngredientLine, Recipe};
