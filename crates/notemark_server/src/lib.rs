//! HTTP API layer for Notemark.
//!
//! # Responsibility
//! - Expose the note service over a JSON REST surface.
//! - Translate typed service outcomes into HTTP status codes.
//!
//! # Invariants
//! - Validation errors and `NotFound` map to 400/404 with stable bodies.
//! - Storage failures are logged and surfaced as generic 500 responses; raw
//!   internal errors never reach the client.

pub mod config;
pub mod controllers;

use notemark_core::{NoteService, NoteStore};
use std::sync::Mutex;

/// Shared application state.
///
/// Handlers run on multiple workers, so the service sits behind a mutex;
/// each request runs to completion before the next one observes the store.
pub struct AppState {
    pub service: Mutex<NoteService<Box<dyn NoteStore + Send>>>,
}

impl AppState {
    pub fn new(store: Box<dyn NoteStore + Send>) -> Self {
        Self {
            service: Mutex::new(NoteService::new(store)),
        }
    }
}
