//! Caller-facing API wrapper.
//!
//! Exposes a boundary implementation to entry points (the CLI demo) without
//! adding behavior of its own.

use crate::service::boundary::GopherBoundary;

/// Entry-point handle over any gopher boundary implementation.
pub struct GopherApi<B: GopherBoundary> {
    pub gophers: B,
}

impl<B: GopherBoundary> GopherApi<B> {
    pub fn new(gophers: B) -> Self {
        Self { gophers }
    }
}
