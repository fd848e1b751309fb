//! DeckCraft AI backend API.
//!
//! Library target so the integration tests can drive the router
//! without a listening socket; the binary in `main.rs` is a thin
//! wrapper around [`app::app`].

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod vespa;
