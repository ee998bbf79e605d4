//! Application state: the session model, its store, the view resolver and
//! the admin console.

pub mod admin;
pub mod session;
pub mod store;
pub mod view;
