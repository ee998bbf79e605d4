//! Reusable UI components shared by the routed pages.

pub mod header;
pub mod loading;
pub mod modal;
