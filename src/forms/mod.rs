//! Form binding between the page fields and customer records.

use thiserror::Error;

pub mod customer;
pub mod search;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument for {0}")]
    MissingArgument(String),

    #[error("failed to encode search query: {0}")]
    QueryEncoding(String),
}
