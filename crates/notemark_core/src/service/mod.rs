//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, store mutation and search into caller-facing
//!   APIs.
//! - Keep HTTP/UI layers decoupled from storage details.

pub mod note_service;
