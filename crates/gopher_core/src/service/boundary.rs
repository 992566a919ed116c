//! Boundary contract exposed to gopher callers.
//!
//! # Responsibility
//! - Name the operations a caller may invoke, independent of storage.
//!
//! # Invariants
//! - Implementations return validation and not-found failures as values.
//! - Implementations never mutate state on a failed `create`.

use crate::service::error::StoreResult;
use crate::service::requests::{CreateGopher, FindGopher};
use crate::service::responses::{CreateGopherResponse, FindGopherResponse};
use std::sync::Arc;

/// Capability set every gopher interactor must satisfy.
pub trait GopherBoundary {
    fn create(&self, request: &CreateGopher) -> StoreResult<CreateGopherResponse>;
    fn find(&self, request: &FindGopher) -> StoreResult<FindGopherResponse>;
}

impl<T: GopherBoundary + ?Sized> GopherBoundary for &T {
    fn create(&self, request: &CreateGopher) -> StoreResult<CreateGopherResponse> {
        (**self).create(request)
    }

    fn find(&self, request: &FindGopher) -> StoreResult<FindGopherResponse> {
        (**self).find(request)
    }
}

impl<T: GopherBoundary + ?Sized> GopherBoundary for Arc<T> {
    fn create(&self, request: &CreateGopher) -> StoreResult<CreateGopherResponse> {
        (**self).create(request)
    }

    fn find(&self, request: &FindGopher) -> StoreResult<FindGopherResponse> {
        (**self).find(request)
    }
}
