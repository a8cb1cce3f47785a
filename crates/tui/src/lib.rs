//! Interactive terminal UI for browsing a pass-compatible secret store.
//!
//! This crate contains the interaction state (search input, password
//! listing, console prompts), the per-mode key dispatch, the rendering
//! pipeline, and the event loop. All external effects go through the
//! [`passage_core::SecretStore`] handle passed in at startup.

mod actions;
mod app;
mod clipboard;
mod components;
mod render;
mod runtime;
pub mod state;

pub use app::{App, Mode};
pub use runtime::run;
