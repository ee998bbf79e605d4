//! Route-level views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `content` picks one of the other pages from the resolved `View`; the
//! pages themselves never check roles.

pub mod admin_dashboard;
pub mod content;
pub mod home;
pub mod login;
pub mod user_dashboard;
