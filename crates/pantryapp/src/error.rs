use crate::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Item category mismatch: collection holds {expected}, got {found}")]
    CategoryMismatch { expected: Category, found: Category },
}

pub type Result<T> = std::result::Result<T, PantryError>;
