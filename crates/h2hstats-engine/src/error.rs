// Engine error type. Only programmer errors surface here; structural model
// problems are caught before the engine runs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("invalid filter `{field}`: {message}")]
    InvalidFilter { field: String, message: String },

    #[error("cannot consolidate an empty matchup group")]
    EmptyMatchupGroup,

    #[error("invalid matchup format: {0}")]
    InvalidMatchupFormat(String),

    #[error("league has no season {0}")]
    UnknownYear(u32),
}

impl StatsError {
    pub(crate) fn filter(field: &str, message: impl Into<String>) -> Self {
        StatsError::InvalidFilter {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
