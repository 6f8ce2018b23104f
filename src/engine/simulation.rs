use crate::engine::costing::{self, PriceSource};
use crate::engine::history::SnapshotHistory;
use crate::error::{Result, SimError};
use crate::models::{BaselineComparison, CostSummary, IngredientLine, PULSE_DIVISOR};

/// One point edit to a working-set line.
///
/// The pulse variants carry the derivation rule with them: either one
/// recomputes `quantity` from `pulses * amount_per_pulse / 1000` once both
/// values are known. `Quantity` bypasses the derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Quantity(f64),
    UnitPrice(Option<f64>),
    Pulses(f64),
    AmountPerPulse(f64),
}

/// Cost what-if simulator for one recipe.
///
/// Owns the mutable working set, the immutable baseline captured at load,
/// and a bounded linear snapshot history. One instance per simulation
/// session; dropping it is cancellation.
pub struct CostSimulationEngine {
    working: Vec<IngredientLine>,
    baseline: Vec<IngredientLine>,
    history: SnapshotHistory,
}

impl CostSimulationEngine {
    /// Start a session from `lines`.
    ///
    /// Both the working set and the baseline are deep copies; the caller's
    /// data can be mutated afterwards without touching the engine.
    pub fn load(lines: &[IngredientLine]) -> Self {
        let snapshot = lines.to_vec();
        Self {
            working: snapshot.clone(),
            baseline: snapshot.clone(),
            history: SnapshotHistory::new(snapshot),
        }
    }

    /// Apply a point edit to the line at `index`.
    ///
    /// An edit that leaves the line unchanged by value records nothing.
    pub fn edit(&mut self, index: usize, edit: Edit) -> Result<()> {
        let line = self
            .working
            .get_mut(index)
            .ok_or(SimError::OutOfRange(index))?;

        match edit {
            Edit::Quantity(q) => line.quantity = q,
            Edit::UnitPrice(p) => line.unit_price = p,
            Edit::Pulses(p) => {
                line.pulses = Some(p);
                if let Some(a) = line.amount_per_pulse {
                    line.quantity = p * a / PULSE_DIVISOR;
                }
            }
            Edit::AmountPerPulse(a) => {
                line.amount_per_pulse = Some(a);
                if let Some(p) = line.pulses {
                    line.quantity = p * a / PULSE_DIVISOR;
                }
            }
        }

        self.history.commit(&self.working);
        Ok(())
    }

    /// Append a new line to the working set.
    ///
    /// A supply already present in the working set or the baseline is
    /// rejected; counting the same material twice would corrupt the
    /// comparison.
    pub fn add(&mut self, line: IngredientLine) -> Result<()> {
        let duplicate = self
            .working
            .iter()
            .chain(self.baseline.iter())
            .any(|l| l.supply_id == line.supply_id);
        if duplicate {
            return Err(SimError::DuplicateIngredient(line.supply_id));
        }

        self.working.push(line);
        self.history.commit(&self.working);
        Ok(())
    }

    /// Remove the line at `index` from the working set.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.working.len() {
            return Err(SimError::OutOfRange(index));
        }

        self.working.remove(index);
        self.history.commit(&self.working);
        Ok(())
    }

    /// Jump back to the first retained history state.
    ///
    /// This is a reset-to-original, not a single-step undo; repeated calls
    /// land on the same state.
    pub fn undo_to_original(&mut self) -> Result<()> {
        let snapshot = self.history.jump_to_first().ok_or(SimError::NothingToUndo)?;
        self.working = snapshot;
        Ok(())
    }

    /// Step forward to the next history state.
    pub fn redo(&mut self) -> Result<()> {
        let snapshot = self.history.redo().ok_or(SimError::NothingToRedo)?;
        self.working = snapshot;
        Ok(())
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn at_original(&self) -> bool {
        self.history.at_first()
    }

    /// Total batch cost of the working set. See [`costing::total_cost`]
    /// for the zero-output policy.
    pub fn total_cost(&self, prices: &dyn PriceSource, output_quantity: f64) -> CostSummary {
        costing::total_cost(&self.working, prices, output_quantity)
    }

    /// Structured diff of the working set against the baseline.
    pub fn compare_to_baseline(&self, prices: &dyn PriceSource) -> Option<BaselineComparison> {
        costing::compare(&self.working, &self.baseline, prices)
    }

    pub fn working_set(&self) -> &[IngredientLine] {
        &self.working
    }

    pub fn baseline(&self) -> &[IngredientLine] {
        &self.baseline
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
