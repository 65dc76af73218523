//! Google Gemini API client implementation.
//!
//! A REST client over the `gemini-rust` SDK with per-model client pooling:
//! one generation call can target any model in the cascade, and a pooled
//! client is created lazily for each model name on first use.

mod client;

pub use client::GeminiClient;

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, prompteur_error::GeminiError>;
