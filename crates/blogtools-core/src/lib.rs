//! blogtools-core
//!
//! Pure domain types and publish-path conventions.
//! The shared vocabulary of the service. No network access.

pub mod error;
pub mod models;
pub mod paths;
