//! Error type shared by every entry point of the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    /// Bad fractions, mismatched pool sizes, and similar caller errors.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Frequencies of an empty population are undefined.
    #[error("Empty population: {message}")]
    EmptyPopulation { message: String },

    /// Failure while writing a trace out.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub fn empty_population(message: impl Into<String>) -> Self {
        Self::EmptyPopulation {
            message: message.into(),
        }
    }
}
