//! LLM provider integrations for Prompteur.
//!
//! This crate provides client implementations for narration backends,
//! each behind its own feature flag.
//!
//! # Available Providers
//!
//! - **Gemini** (Google) - Enable with the `gemini` feature (default)
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use prompteur_models::GeminiClient;
//! use prompteur_interface::NarrationDriver;
//! use prompteur_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::new(vec![Message::text(Role::User, "Hello")]);
//! let response = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;
