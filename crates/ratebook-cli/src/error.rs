//! CLI error types.

use ratebook_bonds::BondError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input table lacks a required column.
    #[error("Input table {} has no '{column}' column", path.display())]
    MissingInputColumn {
        /// Column name.
        column: String,
        /// Table path.
        path: PathBuf,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bond construction or pricing failure outside row isolation.
    #[error(transparent)]
    Bond(#[from] BondError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
