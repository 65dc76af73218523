//! Trait definitions for the Prompteur narration service.
//!
//! This crate provides the seams between the narration core and its
//! collaborators: the LLM backend driver and the slide store, plus the
//! domain types shared between the orchestrator, the persistence layer,
//! and the HTTP surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{NarrationDriver, SlideStore};
pub use types::{
    GenerationConfig, NarrationSlot, NewDeck, NewSlide, Presentation, RunReport, ScriptLength,
    ScriptStyle, Slide, SlideImage,
};
