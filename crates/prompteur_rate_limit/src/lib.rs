//! Per-user rate limiting and workspace configuration.
//!
//! The narration endpoint is quota-bound per user: a fixed number of
//! generation runs per sliding time window (five per ten minutes by
//! default). The quota is consulted exactly once per request, before any
//! backend call, never per slide.
//!
//! This crate also hosts [`PrompteurConfig`], the TOML configuration shared
//! across the workspace (bundled defaults merged with user overrides).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod limiter;

pub use config::{
    FallbackEntry, FallbackSection, GenerationSection, PrompteurConfig, RateLimitSection,
};
pub use error::{RateLimitError, RateLimitErrorKind};
pub use limiter::UserRateLimiter;
