//! Core domain logic for the gopher burrow.
//! Records, their validation rules and the in-memory interactor live here;
//! entry points only talk to `service::boundary::GopherBoundary`.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use api::GopherApi;
pub use config::LoggingConfig;
pub use logging::{
    default_log_level, init_logging, logging_status, LogDestination, LoggingError,
};
pub use model::entity::{Translator, Validator};
pub use model::gopher::{Gopher, GopherId, GopherValidationError};
pub use service::boundary::GopherBoundary;
pub use service::error::{StoreError, StoreResult};
pub use service::requests::{CreateGopher, FindGopher};
pub use service::responses::{CreateGopherResponse, FindGopherResponse};
pub use store::gopher_store::GopherStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
