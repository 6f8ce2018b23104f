use dialoguer::{Confirm, Input, Select};

use crate::engine::Edit;
use crate::error::{Result, SimError};
use crate::models::IngredientLine;
use crate::state::PriceBook;

/// One round of the interactive simulation menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    EditLine,
    AddIngredient,
    RemoveLine,
    ShowTotals,
    Compare,
    UndoToOriginal,
    Redo,
    SaveSimulation,
    ExportCsv,
    Quit,
}

/// Prompt for the next action in the simulation session.
pub fn prompt_action() -> Result<Action> {
    let options = [
        "Edit a line",
        "Add an ingredient",
        "Remove a line",
        "Show totals",
        "Compare to original",
        "Undo to original",
        "Redo",
        "Save simulation",
        "Export comparison CSV",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Action::EditLine,
        1 => Action::AddIngredient,
        2 => Action::RemoveLine,
        3 => Action::ShowTotals,
        4 => Action::Compare,
        5 => Action::UndoToOriginal,
        6 => Action::Redo,
        7 => Action::SaveSimulation,
        8 => Action::ExportCsv,
        _ => Action::Quit,
    })
}

/// Prompt for a line index, 1-based as displayed, returned 0-based.
pub fn prompt_line_index(line_count: usize) -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(format!("Line number (1-{})", line_count))
        .interact_text()?;

    let number: usize = input
        .parse()
        .map_err(|_| SimError::InvalidInput("Invalid line number".to_string()))?;

    if number == 0 || number > line_count {
        return Err(SimError::OutOfRange(number.saturating_sub(1)));
    }

    Ok(number - 1)
}

/// Prompt for a numeric value.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    input
        .parse()
        .map_err(|_| SimError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for which field of a line to edit and its new value.
pub fn prompt_edit(line: &IngredientLine) -> Result<Edit> {
    let options = [
        "Quantity",
        "Unit price override",
        "Clear price override",
        "Pulses",
        "Amount per pulse",
    ];

    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Edit::Quantity(prompt_number("New quantity", line.quantity)?),
        1 => Edit::UnitPrice(Some(prompt_number(
            "Override unit price",
            line.unit_price.unwrap_or(0.0),
        )?)),
        2 => Edit::UnitPrice(None),
        3 => Edit::Pulses(prompt_number("Pulses", line.pulses.unwrap_or(0.0))?),
        _ => Edit::AmountPerPulse(prompt_number(
            "Amount per pulse (mg)",
            line.amount_per_pulse.unwrap_or(0.0),
        )?),
    })
}

/// Prompt for an ingredient to add, matching names against the price book.
///
/// Tries an exact case-insensitive match first, then Jaro-Winkler fuzzy
/// candidates. Returns None when the user backs out.
pub fn prompt_ingredient(book: &PriceBook) -> Result<Option<IngredientLine>> {
    let input: String = Input::new()
        .with_prompt("Ingredient name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let supply_id = if let Some(entry) = book.find_by_name(input) {
        entry.supply_id
    } else {
        let candidates = book.fuzzy_find(input);

        if candidates.is_empty() {
            return Err(SimError::SupplyNotFound(input.to_string()));
        }

        if candidates.len() == 1 {
            let entry = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", entry.name))
                .default(true)
                .interact()?;

            if !confirm {
                return Ok(None);
            }
            entry.supply_id
        } else {
            let mut options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(e, _)| e.name.clone())
                .collect();
            let real_count = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if selection >= real_count {
                return Ok(None);
            }
            candidates[selection].0.supply_id
        }
    };

    let quantity = prompt_number("Quantity per batch", 0.0)?;
    Ok(Some(IngredientLine::new(supply_id, quantity)))
}

/// Prompt for a name under which to save the simulation.
pub fn prompt_simulation_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Simulation name")
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Err(SimError::InvalidInput(
            "Simulation name cannot be empty".to_string(),
        ));
    }

    Ok(input.to_string())
}

/// Prompt for a file path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
