use std::collections::HashSet;

use crate::models::{BaselineComparison, CostSummary, IngredientLine, LineDelta};

/// Synchronous lookup into the host's reference price cache.
///
/// The returned price is the current one; two calls for the same supply at
/// different times may differ, which is what line-level overrides exist to
/// freeze out.
pub trait PriceSource {
    fn unit_price(&self, supply_id: u32) -> Option<f64>;
}

/// Price used in cost calculation: the line's override when set, otherwise
/// the live reference price. A supply missing from the source costs zero.
pub fn effective_price(line: &IngredientLine, prices: &dyn PriceSource) -> f64 {
    line.unit_price
        .or_else(|| prices.unit_price(line.supply_id))
        .unwrap_or(0.0)
}

/// Cost contributed by one line.
pub fn line_cost(line: &IngredientLine, prices: &dyn PriceSource) -> f64 {
    line.quantity * effective_price(line, prices)
}

/// Total batch cost and the per-unit figure.
///
/// When `output_quantity` is zero or negative the whole batch counts as one
/// unit: `cost_per_unit` equals `total_cost` and `whole_batch` is set so
/// callers can surface the fallback.
pub fn total_cost(
    lines: &[IngredientLine],
    prices: &dyn PriceSource,
    output_quantity: f64,
) -> CostSummary {
    let total: f64 = lines.iter().map(|l| line_cost(l, prices)).sum();

    if output_quantity > 0.0 {
        CostSummary {
            total_cost: total,
            cost_per_unit: total / output_quantity,
            whole_batch: false,
        }
    } else {
        CostSummary {
            total_cost: total,
            cost_per_unit: total,
            whole_batch: true,
        }
    }
}

/// Diff the working set against the baseline, matching lines by supply.
///
/// Returns None when either side is empty. Lines absent from the baseline
/// count fully as added (100% delta); a zero-cost baseline line reports 0%
/// with its `zero_baseline` flag set instead of dividing by zero.
pub fn compare(
    working: &[IngredientLine],
    baseline: &[IngredientLine],
    prices: &dyn PriceSource,
) -> Option<BaselineComparison> {
    if working.is_empty() || baseline.is_empty() {
        return None;
    }

    let lines: Vec<LineDelta> = working
        .iter()
        .map(|line| {
            let working_cost = line_cost(line, prices);
            let base = baseline.iter().find(|b| b.supply_id == line.supply_id);

            match base {
                None => LineDelta {
                    supply_id: line.supply_id,
                    working_cost,
                    baseline_cost: 0.0,
                    delta: working_cost,
                    percent: 100.0,
                    added: true,
                    zero_baseline: false,
                },
                Some(base) => {
                    let baseline_cost = line_cost(base, prices);
                    let delta = working_cost - baseline_cost;
                    let (percent, zero_baseline) = if baseline_cost == 0.0 {
                        (0.0, true)
                    } else {
                        (delta / baseline_cost * 100.0, false)
                    };

                    LineDelta {
                        supply_id: line.supply_id,
                        working_cost,
                        baseline_cost,
                        delta,
                        percent,
                        added: false,
                        zero_baseline,
                    }
                }
            }
        })
        .collect();

    let working_ids: HashSet<u32> = working.iter().map(|l| l.supply_id).collect();
    let removed_count = baseline
        .iter()
        .filter(|b| !working_ids.contains(&b.supply_id))
        .count();

    let biggest_change = lines
        .iter()
        .max_by(|a, b| {
            a.delta
                .abs()
                .partial_cmp(&b.delta.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|l| l.supply_id);

    let biggest_saving = lines
        .iter()
        .filter(|l| l.delta < 0.0)
        .min_by(|a, b| {
            a.delta
                .partial_cmp(&b.delta)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|l| l.supply_id);

    let biggest_increase = lines
        .iter()
        .filter(|l| l.delta > 0.0)
        .max_by(|a, b| {
            a.delta
                .partial_cmp(&b.delta)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|l| l.supply_id);

    Some(BaselineComparison {
        lines,
        removed_count,
        biggest_change,
        biggest_saving,
        biggest_increase,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FixedPrices(HashMap<u32, f64>);

    impl PriceSource for FixedPrices {
        fn unit_price(&self, supply_id: u32) -> Option<f64> {
            self.0.get(&supply_id).copied()
        }
    }

    fn prices(pairs: &[(u32, f64)]) -> FixedPrices {
        FixedPrices(pairs.iter().copied().collect())
    }

    fn line(supply_id: u32, quantity: f64, unit_price: Option<f64>) -> IngredientLine {
        IngredientLine {
            supply_id,
            quantity,
            unit_price,
            pulses: None,
            amount_per_pulse: None,
        }
    }

    #[test]
    fn test_effective_price_prefers_override() {
        let book = prices(&[(1, 3.0)]);
        assert_eq!(effective_price(&line(1, 1.0, Some(5.0)), &book), 5.0);
        assert_eq!(effective_price(&line(1, 1.0, None), &book), 3.0);
        assert_eq!(effective_price(&line(9, 1.0, None), &book), 0.0);
    }

    #[test]
    fn test_total_cost_per_unit() {
        let book = prices(&[]);
        let lines = vec![line(1, 10.0, Some(5.0)), line(2, 4.0, Some(2.5))];

        let summary = total_cost(&lines, &book, 20.0);
        assert_eq!(summary.total_cost, 60.0);
        assert_eq!(summary.cost_per_unit, 3.0);
        assert!(!summary.whole_batch);
    }

    #[test]
    fn test_total_cost_zero_output_falls_back_to_whole_batch() {
        let book = prices(&[]);
        let lines = vec![line(1, 10.0, Some(5.0))];

        let summary = total_cost(&lines, &book, 0.0);
        assert_eq!(summary.cost_per_unit, summary.total_cost);
        assert!(summary.whole_batch);
    }

    #[test]
    fn test_compare_added_line_is_full_delta() {
        let book = prices(&[]);
        let baseline = vec![line(1, 10.0, Some(5.0))];
        let working = vec![line(1, 10.0, Some(5.0)), line(2, 3.0, Some(2.0))];

        let cmp = compare(&working, &baseline, &book).unwrap();
        let added = &cmp.lines[1];
        assert!(added.added);
        assert_eq!(added.delta, 6.0);
        assert_eq!(added.percent, 100.0);
        assert_eq!(cmp.biggest_increase, Some(2));
    }

    #[test]
    fn test_compare_zero_baseline_guard() {
        let book = prices(&[]);
        let baseline = vec![line(1, 0.0, Some(5.0))];
        let working = vec![line(1, 2.0, Some(5.0))];

        let cmp = compare(&working, &baseline, &book).unwrap();
        assert!(cmp.lines[0].zero_baseline);
        assert_eq!(cmp.lines[0].percent, 0.0);
        assert_eq!(cmp.lines[0].delta, 10.0);
    }

    #[test]
    fn test_compare_removed_count_and_extremes() {
        let book = prices(&[]);
        let baseline = vec![
            line(1, 10.0, Some(5.0)),
            line(2, 4.0, Some(2.0)),
            line(3, 1.0, Some(1.0)),
        ];
        let working = vec![
            line(1, 6.0, Some(5.0)),  // delta -20
            line(2, 10.0, Some(2.0)), // delta +12
        ];

        let cmp = compare(&working, &baseline, &book).unwrap();
        assert_eq!(cmp.removed_count, 1);
        assert_eq!(cmp.biggest_change, Some(1));
        assert_eq!(cmp.biggest_saving, Some(1));
        assert_eq!(cmp.biggest_increase, Some(2));
        assert!(!cmp.is_unchanged());
        assert_eq!(cmp.net_delta(), -8.0);
    }

    #[test]
    fn test_compare_empty_sides() {
        let book = prices(&[]);
        let lines = vec![line(1, 1.0, Some(1.0))];

        assert!(compare(&[], &lines, &book).is_none());
        assert!(compare(&lines, &[], &book).is_none());
    }
}
