//! Error types for tabalign operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TabalignError>;

#[derive(Error, Debug)]
pub enum TabalignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data does not have the same number of columns: control has {control}, test has {test}")]
    ColumnCountMismatch { control: usize, test: usize },

    #[error("The following fields were specified as must-match but do not appear in the \
             column headers of the comparison data (double check spelling!): {}",
            .fields.iter().map(|f| format!("'{}'", f)).collect::<Vec<_>>().join(", "))]
    UnknownMustMatch { fields: Vec<String> },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl TabalignError {
    pub fn column_count_mismatch(control: usize, test: usize) -> Self {
        Self::ColumnCountMismatch { control, test }
    }

    pub fn unknown_must_match(fields: Vec<String>) -> Self {
        Self::UnknownMustMatch { fields }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
