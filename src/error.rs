//! Error types for scheme conversion.

use thiserror::Error;

/// Errors that can occur while converting a Vim color scheme.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed highlight directive: {0}")]
    MalformedDirective(String),
}

pub type Result<T> = std::result::Result<T, Error>;
