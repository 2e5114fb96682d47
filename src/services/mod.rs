//! Per-action orchestration of the customer page.

use thiserror::Error;

use crate::forms::FormError;

pub mod customer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(#[from] FormError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
