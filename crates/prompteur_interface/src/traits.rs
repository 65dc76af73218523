//! Trait definitions for the narration backend and slide store seams.

use crate::{NarrationSlot, NewDeck, Presentation, Slide};
use async_trait::async_trait;
use prompteur_core::{GenerateRequest, GenerateResponse};
use prompteur_error::PrompteurResult;
use uuid::Uuid;

/// Core trait that all narration backends must implement.
///
/// This is the minimal interface for one generation call; the model
/// fallback cascade lives above this seam and drives it once per model.
#[async_trait]
pub trait NarrationDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> PrompteurResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request does not name one.
    fn model_name(&self) -> &str;
}

/// Persistence seam for presentations and their narration slots.
///
/// Missing records surface as
/// [`NarrationErrorKind::PresentationNotFound`](prompteur_error::NarrationErrorKind)
/// or `SlideNotFound`, so callers can map them without knowing the backing
/// store.
#[async_trait]
pub trait SlideStore: Send + Sync {
    /// Fetch a presentation with its slides ordered by ascending position.
    async fn fetch_deck(&self, id: Uuid) -> PrompteurResult<Presentation>;

    /// Create a presentation and its slides.
    ///
    /// If the owner already has a deck with identical content (same
    /// content hash), the existing presentation id is returned and
    /// nothing is created.
    async fn create_deck(&self, deck: &NewDeck) -> PrompteurResult<Uuid>;

    /// Fetch a single slide.
    async fn find_slide(&self, slide_id: Uuid) -> PrompteurResult<Slide>;

    /// Write narration text into one slot of one slide, overwriting any
    /// previous value in that slot only.
    async fn write_script(
        &self,
        slide_id: Uuid,
        slot: NarrationSlot,
        text: &str,
    ) -> PrompteurResult<()>;

    /// Delete a presentation owned by `owner_id`, cascading to its slides.
    async fn delete_deck(&self, id: Uuid, owner_id: &str) -> PrompteurResult<()>;
}
