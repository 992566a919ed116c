//! Request shapes accepted by the gopher boundary.

use crate::model::gopher::GopherId;
use serde::{Deserialize, Serialize};

/// Input for creating a gopher. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGopher {
    pub name: String,
    pub age: i64,
}

impl CreateGopher {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Lookup of one gopher by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindGopher {
    pub id: GopherId,
}

impl FindGopher {
    pub fn new(id: GopherId) -> Self {
        Self { id }
    }
}
