//! Core domain types for userdesk
//!
//! This crate holds everything that works without I/O: the user record model,
//! the declarative form validation rules, and the session-scoped record store
//! with its reconciliation reducer.

pub mod model;
pub mod store;
pub mod validation;

pub use model::{Address, Company, CreateReceipt, User, UserDraft, UserId};
pub use store::{Mutation, RecordStore, derive_username};
