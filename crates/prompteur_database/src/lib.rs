//! PostgreSQL integration for Prompteur.
//!
//! This crate implements the [`SlideStore`](prompteur_interface::SlideStore)
//! seam over Diesel/PostgreSQL: presentations and their slides, per-slot
//! narration writes, and content-hash deduplication at creation time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod fingerprint;
mod models;
pub mod schema;
mod slide_store;

pub use connection::{establish_connection, run_migrations};
pub use fingerprint::deck_fingerprint;
pub use models::{NewPresentationRow, NewSlideRow, PresentationRow, SlideRow};
pub use slide_store::PostgresSlideStore;
