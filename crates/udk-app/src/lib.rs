//! Terminal front end for the remote user collection
//!
//! Wires the record store, validation rules, and HTTP client into an
//! interactive list/detail UI with form and delete-confirmation dialogs and
//! toast notifications. Every view holds an explicit finite state
//! ([`view::ViewState`]) transitioned only by completion of its single owning
//! request.

pub mod app;
pub mod config;
pub mod dialog;
pub mod render;
pub mod route;
pub mod screen;
pub mod toast;
pub mod tracing;
pub mod view;

pub use app::{App, SubmitOutcome};
pub use config::AppConfig;
