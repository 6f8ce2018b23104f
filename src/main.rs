use clap::Parser;
use std::path::Path;

use recipe_costsim_rs::cli::{Cli, Command};
use recipe_costsim_rs::engine::{compare, total_cost, CostSimulationEngine};
use recipe_costsim_rs::error::{Result, SimError};
use recipe_costsim_rs::interface::{
    display_comparison, display_summary, display_working_set, prompt_action, prompt_edit,
    prompt_ingredient, prompt_line_index, prompt_path, prompt_simulation_name, prompt_yes_no,
    Action,
};
use recipe_costsim_rs::models::{Recipe, SimulationResult};
use recipe_costsim_rs::state::{
    export_comparison_csv, load_price_book, load_recipe, load_simulation, save_simulation,
    PriceBook,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Simulate => cmd_simulate(&cli.recipe, &cli.prices),
        Command::Report { simulation, csv } => {
            cmd_report(&cli.recipe, &cli.prices, simulation.as_deref(), csv.as_deref())
        }
    }
}

/// Load the recipe and price book, bailing out with a hint when missing.
fn load_inputs(recipe_path: &str, prices_path: &str) -> Result<Option<(Recipe, PriceBook)>> {
    if !Path::new(recipe_path).exists() {
        eprintln!("Recipe file not found: {}", recipe_path);
        eprintln!("Pass --recipe to point at a recipe JSON file.");
        return Ok(None);
    }

    if !Path::new(prices_path).exists() {
        eprintln!("Price book file not found: {}", prices_path);
        eprintln!("Pass --prices to point at a price book JSON file.");
        return Ok(None);
    }

    let recipe = load_recipe(recipe_path)?;
    let book = load_price_book(prices_path)?;
    Ok(Some((recipe, book)))
}

/// Print engine validation outcomes and keep the session alive; anything
/// else propagates.
fn soft(result: Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(
            e @ (SimError::OutOfRange(_)
            | SimError::DuplicateIngredient(_)
            | SimError::NothingToUndo
            | SimError::NothingToRedo
            | SimError::SupplyNotFound(_)
            | SimError::InvalidInput(_)),
        ) => {
            println!("{}", e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Run an interactive what-if session on the recipe.
fn cmd_simulate(recipe_path: &str, prices_path: &str) -> Result<()> {
    let Some((recipe, book)) = load_inputs(recipe_path, prices_path)? else {
        return Ok(());
    };

    if recipe.lines.is_empty() {
        println!("Recipe '{}' has no ingredient lines.", recipe.name);
        return Ok(());
    }

    let mut engine = CostSimulationEngine::load(&recipe.lines);

    println!(
        "Loaded '{}': {} lines, output {} units per batch",
        recipe.name,
        engine.len(),
        recipe.output_quantity
    );
    display_working_set(engine.working_set(), &book);

    loop {
        match prompt_action()? {
            Action::EditLine => {
                if engine.is_empty() {
                    println!("No lines to edit.");
                    continue;
                }
                let changed = match prompt_line_index(engine.len()) {
                    Ok(index) => {
                        let edit = prompt_edit(&engine.working_set()[index])?;
                        soft(engine.edit(index, edit))?
                    }
                    Err(e) => soft(Err(e))?,
                };
                if changed {
                    display_working_set(engine.working_set(), &book);
                }
            }
            Action::AddIngredient => {
                let changed = match prompt_ingredient(&book) {
                    Ok(Some(line)) => soft(engine.add(line))?,
                    Ok(None) => false,
                    Err(e) => soft(Err(e))?,
                };
                if changed {
                    display_working_set(engine.working_set(), &book);
                }
            }
            Action::RemoveLine => {
                if engine.is_empty() {
                    println!("No lines to remove.");
                    continue;
                }
                let changed = match prompt_line_index(engine.len()) {
                    Ok(index) => soft(engine.remove(index))?,
                    Err(e) => soft(Err(e))?,
                };
                if changed {
                    display_working_set(engine.working_set(), &book);
                }
            }
            Action::ShowTotals => {
                display_summary(&engine.total_cost(&book, recipe.output_quantity));
            }
            Action::Compare => match engine.compare_to_baseline(&book) {
                Some(comparison) => display_comparison(&comparison, &book),
                None => println!("Nothing to compare: the working set is empty."),
            },
            Action::UndoToOriginal => {
                if soft(engine.undo_to_original())? {
                    println!("Back to the original recipe.");
                    display_working_set(engine.working_set(), &book);
                }
            }
            Action::Redo => {
                if soft(engine.redo())? {
                    display_working_set(engine.working_set(), &book);
                }
            }
            Action::SaveSimulation => {
                let name = match prompt_simulation_name() {
                    Ok(name) => name,
                    Err(e) => {
                        soft(Err(e))?;
                        continue;
                    }
                };
                let path = prompt_path("Save to", "simulation.json")?;
                let summary = engine.total_cost(&book, recipe.output_quantity);

                let result = SimulationResult {
                    name,
                    lines: engine.working_set().to_vec(),
                    total_cost: summary.total_cost,
                    cost_per_unit: summary.cost_per_unit,
                };
                save_simulation(&path, &result)?;
                println!("Simulation saved to {}.", path);
            }
            Action::ExportCsv => match engine.compare_to_baseline(&book) {
                Some(comparison) => {
                    let path = prompt_path("Export to", "comparison.csv")?;
                    export_comparison_csv(&path, &comparison, &book)?;
                    println!("Comparison exported to {}.", path);
                }
                None => println!("Nothing to export: the working set is empty."),
            },
            Action::Quit => {
                if engine.at_original() || prompt_yes_no("Discard unsaved changes?", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Print the cost breakdown, optionally against a saved simulation.
fn cmd_report(
    recipe_path: &str,
    prices_path: &str,
    simulation_path: Option<&str>,
    csv_path: Option<&str>,
) -> Result<()> {
    let Some((recipe, book)) = load_inputs(recipe_path, prices_path)? else {
        return Ok(());
    };

    let working = match simulation_path {
        Some(path) => {
            let saved = load_simulation(path)?;
            println!("Recipe '{}' vs simulation '{}'", recipe.name, saved.name);
            saved.lines
        }
        None => {
            println!("Recipe '{}'", recipe.name);
            recipe.lines.clone()
        }
    };

    display_working_set(&working, &book);
    display_summary(&total_cost(&working, &book, recipe.output_quantity));

    let comparison = compare(&working, &recipe.lines, &book);

    if simulation_path.is_some() {
        match &comparison {
            Some(comparison) => display_comparison(comparison, &book),
            None => println!("Nothing to compare: one of the line sets is empty."),
        }
    }

    if let Some(path) = csv_path {
        match &comparison {
            Some(comparison) => {
                export_comparison_csv(path, comparison, &book)?;
                println!("Comparison exported to {}.", path);
            }
            None => println!("No comparison to export."),
        }
    }

    Ok(())
}
