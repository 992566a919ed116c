//! Gopher domain record.
//!
//! # Responsibility
//! - Hold the `id`, `name` and `age` of one gopher.
//! - Validate creation requests and produce read projections.
//!
//! # Invariants
//! - `name` is never empty.
//! - `age` is never negative.
//! - `id` is assigned by the store, never by the caller.

use crate::model::entity::{Translator, Validator};
use crate::service::requests::CreateGopher;
use crate::service::responses::FindGopherResponse;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned gopher identifier.
pub type GopherId = u64;

/// Validation failures for gopher creation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GopherValidationError {
    NegativeAge { age: i64 },
    EmptyName,
}

impl Display for GopherValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAge { .. } => write!(f, "age can't be negative"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl Error for GopherValidationError {}

/// A tiny rodent, as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gopher {
    pub id: GopherId,
    pub name: String,
    pub age: i64,
}

impl Gopher {
    /// Builds a gopher from a creation request after validating it.
    ///
    /// # Errors
    /// - Returns the first failing domain rule; age is checked before name.
    pub fn from_request(
        id: GopherId,
        request: &CreateGopher,
    ) -> Result<Self, GopherValidationError> {
        <Self as Validator<CreateGopher>>::validate(request)?;
        Ok(Self {
            id,
            name: request.name.clone(),
            age: request.age,
        })
    }
}

impl Validator<CreateGopher> for Gopher {
    type Error = GopherValidationError;

    fn validate(request: &CreateGopher) -> Result<(), Self::Error> {
        if request.age < 0 {
            return Err(GopherValidationError::NegativeAge { age: request.age });
        }
        if request.name.is_empty() {
            return Err(GopherValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Read projection of the current fields.
impl Translator<FindGopherResponse> for Gopher {
    fn translate(&self) -> FindGopherResponse {
        FindGopherResponse {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
        }
    }
}
