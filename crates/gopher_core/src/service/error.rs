//! Failures reported across the gopher boundary.

use crate::model::gopher::{GopherId, GopherValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures returned by gopher boundary operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(GopherValidationError),
    NotFound(GopherId),
    /// Every id the store can represent has been handed out.
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "gopher not found: {id}"),
            Self::IdsExhausted => write!(f, "no gopher ids left to assign"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdsExhausted => None,
        }
    }
}

impl From<GopherValidationError> for StoreError {
    fn from(value: GopherValidationError) -> Self {
        Self::Validation(value)
    }
}
