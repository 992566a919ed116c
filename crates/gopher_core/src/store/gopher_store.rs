//! Gopher interactor backed by an in-memory map.
//!
//! # Responsibility
//! - Assign ids, validate create requests and hold the resulting records.
//! - Serve lookups as read projections.
//!
//! # Invariants
//! - Ids come from a monotonic counter and are never reused.
//! - The map and the counter are only touched under one lock.
//! - A failed create leaves the map and the counter unchanged.

use crate::model::entity::Translator;
use crate::model::gopher::{Gopher, GopherId};
use crate::service::boundary::GopherBoundary;
use crate::service::error::{StoreError, StoreResult};
use crate::service::requests::{CreateGopher, FindGopher};
use crate::service::responses::{CreateGopherResponse, FindGopherResponse};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

const FIRST_GOPHER_ID: GopherId = 1;

struct Burrow {
    gophers: BTreeMap<GopherId, Gopher>,
    next_id: GopherId,
}

/// The gophers interactor: sole owner of stored gopher records.
pub struct GopherStore {
    burrow: Mutex<Burrow>,
}

impl Default for GopherStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GopherStore {
    /// Creates an empty store whose first assigned id is `1`.
    pub fn new() -> Self {
        Self::starting_at(FIRST_GOPHER_ID)
    }

    fn starting_at(next_id: GopherId) -> Self {
        Self {
            burrow: Mutex::new(Burrow {
                gophers: BTreeMap::new(),
                next_id,
            }),
        }
    }

    /// Validates the request, assigns a fresh id and stores the record.
    ///
    /// # Errors
    /// - `StoreError::Validation` when the request breaks a domain rule.
    /// - `StoreError::IdsExhausted` when the id counter cannot advance.
    pub fn create(&self, request: &CreateGopher) -> StoreResult<CreateGopherResponse> {
        let mut burrow = self.lock();
        let id = burrow.next_id;
        let gopher = match Gopher::from_request(id, request) {
            Ok(gopher) => gopher,
            Err(err) => {
                warn!("event=gopher_create module=store status=rejected reason={err}");
                return Err(err.into());
            }
        };
        let Some(next_id) = id.checked_add(1) else {
            warn!("event=gopher_create module=store status=rejected reason=ids_exhausted");
            return Err(StoreError::IdsExhausted);
        };

        burrow.next_id = next_id;
        burrow.gophers.insert(id, gopher);
        info!("event=gopher_create module=store status=ok id={id}");
        Ok(CreateGopherResponse { id })
    }

    /// Looks up one gopher by id.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has that id.
    pub fn find(&self, request: &FindGopher) -> StoreResult<FindGopherResponse> {
        let burrow = self.lock();
        match burrow.gophers.get(&request.id) {
            Some(gopher) => Ok(gopher.translate()),
            None => {
                debug!(
                    "event=gopher_find module=store status=not_found id={}",
                    request.id
                );
                Err(StoreError::NotFound(request.id))
            }
        }
    }

    /// Projects every stored gopher, in ascending id order.
    pub fn find_all(&self) -> StoreResult<Vec<FindGopherResponse>> {
        let burrow = self.lock();
        Ok(burrow.gophers.values().map(Translator::translate).collect())
    }

    /// Number of stored gophers.
    pub fn len(&self) -> usize {
        self.lock().gophers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().gophers.is_empty()
    }

    // Every mutation is a single insert after validation, so a poisoned
    // burrow is still consistent.
    fn lock(&self) -> MutexGuard<'_, Burrow> {
        self.burrow.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GopherBoundary for GopherStore {
    fn create(&self, request: &CreateGopher) -> StoreResult<CreateGopherResponse> {
        GopherStore::create(self, request)
    }

    fn find(&self, request: &FindGopher) -> StoreResult<FindGopherResponse> {
        GopherStore::find(self, request)
    }
}
