//! Use-case surface of the gopher core.
//!
//! # Responsibility
//! - Define the request/response shapes exchanged with callers.
//! - Define the boundary contract that interactors implement.
//!
//! # Invariants
//! - Request/response values are transient; nothing here holds state.

pub mod boundary;
pub mod error;
pub mod requests;
pub mod responses;
