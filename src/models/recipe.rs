use serde::{Deserialize, Serialize};

use crate::models::IngredientLine;

/// A production recipe as loaded from JSON: the baseline the simulator
/// starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,

    /// Units produced per batch; divides the batch cost into a per-unit
    /// figure. Zero is accepted and handled by the costing policy.
    #[serde(default)]
    pub output_quantity: f64,

    pub lines: Vec<IngredientLine>,
}

/// One entry of the reference price book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub supply_id: u32,

    pub name: String,

    pub unit_price: f64,
}

/// A saved what-if: the working set plus its computed figures, ready to
/// be serialized by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub name: String,

    pub lines: Vec<IngredientLine>,

    pub total_cost: f64,

    pub cost_per_unit: f64,
}
