//! Networking modules for the remote identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the collaborator traits, `api` implements them over
//! HTTP, `platform` supplies ambient identity changes, and `types` / `error`
//! define the wire schema and failure taxonomy.

pub mod api;
pub mod backend;
pub mod error;
pub mod platform;
pub mod types;
