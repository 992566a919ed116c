//! Response shapes returned by the gopher boundary.

use crate::model::gopher::GopherId;
use serde::{Deserialize, Serialize};

/// Result of a successful create: the id the store assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGopherResponse {
    pub id: GopherId,
}

/// Read projection of one stored gopher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindGopherResponse {
    pub id: GopherId,
    pub name: String,
    pub age: i64,
}
