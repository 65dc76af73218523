//! Narration generation core for Prompteur.
//!
//! This crate turns one slide deck into per-slide spoken narration:
//!
//! - [`PromptLibrary`] assembles the persona, position, length, and image
//!   instructions for one slide.
//! - [`ModelCascade`] tries an ordered list of backend models until one
//!   returns non-empty text.
//! - [`NarrationGenerator`] wraps both and never fails: total backend
//!   failure degrades to a fixed placeholder sentence.
//! - [`DeckOrchestrator`] drives generation across a whole deck, slide by
//!   slide in position order, tolerating per-slide failures, and exposes
//!   the demo fallback path and the single-call batched variant.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod cascade;
mod fallback;
mod generator;
mod in_memory;
mod orchestrator;
mod prompt;

pub use batch::BATCH_SEPARATOR;
pub use cascade::ModelCascade;
pub use fallback::{FallbackScripts, StaticFallbackScripts};
pub use generator::{NarrationGenerator, SlideContext};
pub use in_memory::InMemorySlideStore;
pub use orchestrator::{DeckOrchestrator, PartialFailurePolicy};
pub use prompt::PromptLibrary;
