//! Recorder error types

use crate::store::StoreError;
use shared::FieldError;
use thiserror::Error;

/// Errors from the order and reservation recorders
///
/// A validation rejection carries every failing field so the caller can
/// surface per-field messages; nothing is written to storage on any
/// error path.
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecorderError {
    /// The field-level failures, if this is a validation rejection
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

pub type RecorderResult<T> = Result<T, RecorderError>;
