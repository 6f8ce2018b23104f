pub mod comparison;
pub mod ingredient;
pub mod recipe;

pub use comparison::{BaselineComparison, CostSummary, LineDelta};
pub use ingredient::{IngredientLine, PULSE_DIVISOR};
pub use recipe::{PriceEntry, Recipe, SimulationResult};
