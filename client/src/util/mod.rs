//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate reactive wiring and callback bookkeeping from page
//! and component logic to improve reuse and testability.

pub mod auth;
pub mod listeners;
