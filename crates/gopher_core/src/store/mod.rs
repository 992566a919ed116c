//! In-memory interactors.
//!
//! # Responsibility
//! - Own domain records for the lifetime of the process.
//! - Implement the boundary contracts from `crate::service`.
//!
//! # Invariants
//! - Writes must pass entity validation before touching stored state.
//! - Lookups return owned projections, never references into the store.

pub mod gopher_store;
