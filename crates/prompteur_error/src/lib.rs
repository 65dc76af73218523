//! Error types for the Prompteur narration service.
//!
//! This crate provides the foundation error types used throughout the
//! Prompteur workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use prompteur_error::{PrompteurResult, ConfigError};
//!
//! fn load_settings() -> PrompteurResult<String> {
//!     Err(ConfigError::new("missing models list"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Got: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod gemini;
mod narration;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{PrompteurError, PrompteurErrorKind, PrompteurResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use narration::{NarrationError, NarrationErrorKind};
