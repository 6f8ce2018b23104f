use clap::{Parser, Subcommand};

/// RecipeCostSim — a recipe cost what-if simulator with undo/redo and
/// baseline comparison.
#[derive(Parser, Debug)]
#[command(name = "recipe_costsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe JSON file.
    #[arg(short, long, default_value = "recipe.json")]
    pub recipe: String,

    /// Path to the reference price book JSON file.
    #[arg(short, long, default_value = "price_book.json")]
    pub prices: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive what-if session on the recipe.
    Simulate,

    /// Print the cost breakdown, optionally against a saved simulation.
    Report {
        /// Saved simulation JSON to load as the working set.
        #[arg(long)]
        simulation: Option<String>,

        /// Write the baseline comparison to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Simulate
    }
}
