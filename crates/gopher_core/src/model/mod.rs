//! Domain model for the gopher burrow.
//!
//! # Responsibility
//! - Define the canonical record held by the store.
//! - Own the domain rules that decide whether a request may become a record.
//!
//! # Invariants
//! - Every stored `Gopher` was produced by `Gopher::from_request`.
//! - Records are never mutated once built.

pub mod entity;
pub mod gopher;
