/// Aggregate cost of the working set.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    /// Total batch cost over all lines.
    pub total_cost: f64,

    /// Cost per produced unit. Equals `total_cost` when the batch output
    /// quantity is zero or missing (whole batch treated as one unit).
    pub cost_per_unit: f64,

    /// Set when the per-unit figure fell back to the whole-batch total.
    pub whole_batch: bool,
}

/// Cost delta of one working-set line against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDelta {
    pub supply_id: u32,

    pub working_cost: f64,

    /// Baseline cost of the matching line; zero for added lines.
    pub baseline_cost: f64,

    pub delta: f64,

    /// Delta relative to the baseline cost, in percent. Added lines report
    /// 100; zero-cost baseline lines report 0 with `zero_baseline` set.
    pub percent: f64,

    /// Line has no counterpart in the baseline.
    pub added: bool,

    /// Baseline cost was zero, so the percentage is a guarded fallback.
    pub zero_baseline: bool,
}

/// Structured diff of the working set against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineComparison {
    /// One delta per working-set line, in working-set order.
    pub lines: Vec<LineDelta>,

    /// Baseline lines with no counterpart in the working set.
    pub removed_count: usize,

    /// Supply with the largest absolute cost delta.
    pub biggest_change: Option<u32>,

    /// Supply with the most negative delta, if any delta is negative.
    pub biggest_saving: Option<u32>,

    /// Supply with the most positive delta, if any delta is positive.
    pub biggest_increase: Option<u32>,
}

impl BaselineComparison {
    /// Whether the working set is cost-identical to the baseline.
    pub fn is_unchanged(&self) -> bool {
        self.removed_count == 0 && self.lines.iter().all(|l| l.delta == 0.0 && !l.added)
    }

    /// Net cost delta over all lines.
    pub fn net_delta(&self) -> f64 {
        self.lines.iter().map(|l| l.delta).sum()
    }
}
