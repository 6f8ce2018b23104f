use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{BaselineComparison, PriceEntry, Recipe, SimulationResult};
use crate::state::PriceBook;

/// Load a recipe from a JSON file.
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<Recipe> {
    let content = fs::read_to_string(path)?;
    let recipe: Recipe = serde_json::from_str(&content)?;
    Ok(recipe)
}

/// Load the reference price book from a JSON file.
///
/// Duplicate supply ids collapse inside [`PriceBook::new`], last wins.
pub fn load_price_book<P: AsRef<Path>>(path: P) -> Result<PriceBook> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<PriceEntry> = serde_json::from_str(&content)?;
    Ok(PriceBook::new(entries))
}

/// Save a simulation result to a JSON file.
pub fn save_simulation<P: AsRef<Path>>(path: P, result: &SimulationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a previously saved simulation result.
pub fn load_simulation<P: AsRef<Path>>(path: P) -> Result<SimulationResult> {
    let content = fs::read_to_string(path)?;
    let result: SimulationResult = serde_json::from_str(&content)?;
    Ok(result)
}

/// Write a baseline comparison as CSV, one row per working-set line plus a
/// trailing row counting removed lines.
pub fn export_comparison_csv<P: AsRef<Path>>(
    path: P,
    comparison: &BaselineComparison,
    prices: &PriceBook,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "supplyId",
        "name",
        "workingCost",
        "baselineCost",
        "delta",
        "percent",
        "status",
    ])?;

    for line in &comparison.lines {
        let status = if line.added {
            "added"
        } else if line.zero_baseline {
            "zero-baseline"
        } else {
            "changed"
        };

        writer.write_record([
            line.supply_id.to_string(),
            prices.name_of(line.supply_id),
            format!("{:.4}", line.working_cost),
            format!("{:.4}", line.baseline_cost),
            format!("{:.4}", line.delta),
            format!("{:.2}", line.percent),
            status.to_string(),
        ])?;
    }

    writer.write_record([
        String::new(),
        "removed lines".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        comparison.removed_count.to_string(),
    ])?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::models::{IngredientLine, LineDelta};

    #[test]
    fn test_load_recipe() {
        let json = r#"{
            "name": "Cola Syrup",
            "outputQuantity": 100.0,
            "lines": [
                {"supplyId": 1, "quantity": 10.0, "unitPrice": 5.0},
                {"supplyId": 2, "quantity": 4.0, "pulses": 8.0, "amountPerPulse": 500.0}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let recipe = load_recipe(file.path()).unwrap();
        assert_eq!(recipe.name, "Cola Syrup");
        assert_eq!(recipe.output_quantity, 100.0);
        assert_eq!(recipe.lines.len(), 2);
        assert_eq!(recipe.lines[1].pulses, Some(8.0));
    }

    #[test]
    fn test_load_price_book_dedupes() {
        let json = r#"[
            {"supplyId": 1, "name": "Cane Sugar", "unitPrice": 0.8},
            {"supplyId": 1, "name": "Cane Sugar", "unitPrice": 0.95}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let book = load_price_book(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(1).unwrap().unit_price, 0.95);
    }

    #[test]
    fn test_simulation_roundtrip() {
        let result = SimulationResult {
            name: "cheaper sweetener".to_string(),
            lines: vec![IngredientLine::new(1, 10.0)],
            total_cost: 50.0,
            cost_per_unit: 0.5,
        };

        let file = NamedTempFile::new().unwrap();
        save_simulation(file.path(), &result).unwrap();

        let reloaded = load_simulation(file.path()).unwrap();
        assert_eq!(reloaded.name, "cheaper sweetener");
        assert_eq!(reloaded.lines, result.lines);
        assert_eq!(reloaded.total_cost, 50.0);
    }

    #[test]
    fn test_export_comparison_csv() {
        let comparison = BaselineComparison {
            lines: vec![LineDelta {
                supply_id: 1,
                working_cost: 100.0,
                baseline_cost: 50.0,
                delta: 50.0,
                percent: 100.0,
                added: false,
                zero_baseline: false,
            }],
            removed_count: 1,
            biggest_change: Some(1),
            biggest_saving: None,
            biggest_increase: Some(1),
        };

        let book = PriceBook::new(vec![PriceEntry {
            supply_id: 1,
            name: "Cane Sugar".to_string(),
            unit_price: 5.0,
        }]);

        let file = NamedTempFile::new().unwrap();
        export_comparison_csv(file.path(), &comparison, &book).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("supplyId,name,"));
        assert!(content.contains("Cane Sugar"));
        assert!(content.contains("changed"));
        assert!(content.contains("removed lines"));
    }
}
