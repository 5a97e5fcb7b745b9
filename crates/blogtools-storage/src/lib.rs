//! blogtools-storage
//!
//! Where published tools live. A small [`store::ContentStore`] trait hides
//! the hosting repository; [`github`] talks to the GitHub Contents API and
//! [`memory`] keeps files in process.

pub mod error;
pub mod github;
pub mod memory;
pub mod store;
pub mod tools;
