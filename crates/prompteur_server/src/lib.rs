//! HTTP surface for the Prompteur narration service.
//!
//! A small axum API in front of the narration core:
//!
//! - `POST /api/generate-script` — run narration generation over a deck
//!   (auth, then quota, then the orchestrator; catastrophic failures fall
//!   over to the demo fallback content before reporting an error)
//! - `POST /api/presentations` — create a deck (content-hash dedup)
//! - `GET /api/presentations/:id` — fetch a deck with its slides
//! - `DELETE /api/presentations/:id` — owner-scoped delete
//! - `PATCH /api/slides/:id` — manual script edit from the viewer
//! - `GET /health`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod auth;
mod state;

pub use api::{ApiError, router};
pub use auth::AuthenticatedUser;
pub use state::AppState;
