//! Error types for loading the workbook and reading its columns.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the one-time dataset load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The workbook file is missing or not a readable spreadsheet
    #[error("failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A required sheet is not present in the workbook
    #[error("workbook {} has no sheet named '{sheet}'", .path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    /// The sheet exists but its cells could not be read
    #[error("failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Errors raised while a renderer reads the columns it needs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    /// The table has no column with this exact name
    #[error("table '{table}' has no column '{column}'")]
    Missing { table: String, column: String },

    /// A cell holds a value the renderer cannot use
    #[error("table '{table}', column '{column}', row {row}: expected {expected}, found '{found}'")]
    InvalidCell {
        table: String,
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },
}
