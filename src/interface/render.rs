use crate::engine::{effective_price, line_cost};
use crate::models::{BaselineComparison, CostSummary, IngredientLine};
use crate::state::PriceBook;

/// Minimum absolute delta worth printing a percentage tag for.
const DELTA_DISPLAY_THRESHOLD: f64 = 0.005;

/// Display the working set as a numbered table.
pub fn display_working_set(lines: &[IngredientLine], book: &PriceBook) {
    if lines.is_empty() {
        println!("The simulation has no lines.");
        return;
    }

    println!();
    println!("=== Working set ({} lines) ===", lines.len());
    println!();

    let names: Vec<String> = lines.iter().map(|l| book.name_of(l.supply_id)).collect();
    let max_name_len = names.iter().map(|n| n.len()).max().unwrap_or(10);

    for (i, (line, name)) in lines.iter().zip(&names).enumerate() {
        let price = effective_price(line, book);
        let override_tag = if line.has_override() { " [override]" } else { "" };
        let pulse_tag = match (line.pulses, line.amount_per_pulse) {
            (Some(p), Some(a)) => format!("  ({:.0} pulses x {:.0} mg)", p, a),
            _ => String::new(),
        };

        println!(
            "{:>3}. {:<width$} - {:>10.3} x {:>8.4}{} = {:>10.2}{}",
            i + 1,
            name,
            line.quantity,
            price,
            override_tag,
            line_cost(line, book),
            pulse_tag,
            width = max_name_len
        );
    }

    println!();
}

/// Display the cost summary.
pub fn display_summary(summary: &CostSummary) {
    println!();
    println!("--- Totals ---");
    println!("Batch cost: {:.2}", summary.total_cost);
    if summary.whole_batch {
        println!("Cost per unit: {:.2} (no output quantity; whole batch counted as one unit)",
            summary.cost_per_unit);
    } else {
        println!("Cost per unit: {:.4}", summary.cost_per_unit);
    }
    println!();
}

/// Display the comparison against the original recipe.
pub fn display_comparison(comparison: &BaselineComparison, book: &PriceBook) {
    if comparison.is_unchanged() {
        println!("No changes against the original recipe.");
        return;
    }

    println!();
    println!("=== Against the original ===");
    println!();

    for line in &comparison.lines {
        let name = book.name_of(line.supply_id);
        let sign = if line.delta >= 0.0 { "+" } else { "" };

        let tag = if line.added {
            "  [added]".to_string()
        } else if line.zero_baseline {
            "  [original line cost was 0]".to_string()
        } else if line.delta.abs() > DELTA_DISPLAY_THRESHOLD {
            format!("  ({}{:.1}%)", sign, line.percent)
        } else {
            String::new()
        };

        println!(
            "  {} - {:.2} => {:.2} | delta {}{:.2}{}",
            name, line.baseline_cost, line.working_cost, sign, line.delta, tag
        );
    }

    println!();
    if comparison.removed_count > 0 {
        println!("Removed lines: {}", comparison.removed_count);
    }
    if let Some(id) = comparison.biggest_increase {
        println!("Biggest increase: {}", book.name_of(id));
    }
    if let Some(id) = comparison.biggest_saving {
        println!("Biggest saving: {}", book.name_of(id));
    }
    if let Some(id) = comparison.biggest_change {
        println!("Largest swing: {}", book.name_of(id));
    }

    let net = comparison.net_delta();
    let sign = if net >= 0.0 { "+" } else { "" };
    println!("Net batch delta: {}{:.2}", sign, net);
    println!();
}
