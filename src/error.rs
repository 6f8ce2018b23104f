use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Line index {0} is out of range")]
    OutOfRange(usize),

    #[error("Supply {0} is already part of the simulation")]
    DuplicateIngredient(u32),

    #[error("Already at the original recipe")]
    NothingToUndo,

    #[error("No later state to redo to")]
    NothingToRedo,

    #[error("Supply not found: {0}")]
    SupplyNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
