//! Deck-level orchestration of narration generation.

use crate::generator::{NarrationGenerator, SlideContext};
use crate::{FallbackScripts, batch};
use prompteur_core::{Message, MessageBuilder, Role};
use prompteur_error::{BuilderError, NarrationError, NarrationErrorKind, PrompteurResult};
use prompteur_interface::{GenerationConfig, NarrationDriver, NarrationSlot, RunReport, SlideStore};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// How the orchestrator reacts to a per-slide failure.
///
/// The default tolerates failures: one bad slide never aborts the run.
/// The policy is explicit so the contract is visible and testable
/// independently of the loop mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialFailurePolicy {
    /// Continue to the next slide after a persistence failure.
    pub continue_on_error: bool,
}

impl Default for PartialFailurePolicy {
    fn default() -> Self {
        Self {
            continue_on_error: true,
        }
    }
}

/// Drives narration generation across every slide of one presentation.
///
/// Slides are processed strictly in ascending position order, one at a
/// time — a deliberate serialization that bounds load on both the slide
/// store and the LLM backend. Generation failures are absorbed inside the
/// [`NarrationGenerator`]; persistence failures are governed by the
/// [`PartialFailurePolicy`].
pub struct DeckOrchestrator<D: NarrationDriver> {
    store: Arc<dyn SlideStore>,
    generator: NarrationGenerator<D>,
    policy: PartialFailurePolicy,
}

impl<D: NarrationDriver> DeckOrchestrator<D> {
    /// Create an orchestrator with the default partial-failure policy.
    pub fn new(store: Arc<dyn SlideStore>, generator: NarrationGenerator<D>) -> Self {
        Self {
            store,
            generator,
            policy: PartialFailurePolicy::default(),
        }
    }

    /// Replace the partial-failure policy.
    pub fn with_policy(mut self, policy: PartialFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Access the generator.
    pub fn generator(&self) -> &NarrationGenerator<D> {
        &self.generator
    }

    /// Access the slide store.
    pub fn store(&self) -> &Arc<dyn SlideStore> {
        &self.store
    }

    /// Run narration generation over a whole deck for one configuration.
    ///
    /// Writes each slide's narration into the slot mapped from the
    /// requested style, leaving the two other slots untouched. Returns a
    /// [`RunReport`] once every slide has been attempted.
    ///
    /// # Errors
    ///
    /// Returns an error only for run-level conditions: an unknown
    /// presentation, an empty deck, a store failure while fetching, or —
    /// when `continue_on_error` is disabled — the first per-slide
    /// persistence failure.
    #[instrument(skip(self, config), fields(presentation = %presentation_id, style = %config.style))]
    pub async fn run(
        &self,
        presentation_id: Uuid,
        config: &GenerationConfig,
    ) -> PrompteurResult<RunReport> {
        let deck = self.store.fetch_deck(presentation_id).await?;
        if deck.slides.is_empty() {
            return Err(NarrationError::new(NarrationErrorKind::EmptyDeck).into());
        }

        let total = deck.slides.len();
        let slot = config.slot();
        let mut written = 0;
        let mut failed = 0;

        // One slide at a time: bounds load on the store and the backend.
        for slide in &deck.slides {
            let context = SlideContext {
                text: slide.extracted_text.as_deref(),
                image: slide.image.as_ref(),
                position: slide.position,
                total,
            };
            let script = self.generator.narrate(&context, config).await;

            match self.store.write_script(slide.id, slot, &script).await {
                Ok(()) => written += 1,
                Err(e) => {
                    failed += 1;
                    error!(
                        slide = %slide.id,
                        position = slide.position,
                        error = %e,
                        "Failed to persist narration, continuing with next slide"
                    );
                    if !self.policy.continue_on_error {
                        return Err(e);
                    }
                }
            }
        }

        info!(total, written, failed, "Generation run finished");
        Ok(RunReport {
            total,
            written,
            failed,
        })
    }

    /// Batched variant: one combined API call for the whole deck.
    ///
    /// All slides' (truncated) text and any images go into a single
    /// prompt; the response is split on the separator token and zipped
    /// back onto slides positionally. Short responses fill trailing
    /// slides with a generic line instead of erroring.
    #[instrument(skip(self, config), fields(presentation = %presentation_id, style = %config.style))]
    pub async fn run_batched(
        &self,
        presentation_id: Uuid,
        config: &GenerationConfig,
    ) -> PrompteurResult<RunReport> {
        let deck = self.store.fetch_deck(presentation_id).await?;
        if deck.slides.is_empty() {
            return Err(NarrationError::new(NarrationErrorKind::EmptyDeck).into());
        }

        let total = deck.slides.len();
        let slot = config.slot();
        let prompts = self.generator.prompts();

        let messages = vec![
            Message::text(Role::System, prompts.system_instruction(config.style)),
            MessageBuilder::default()
                .role(Role::User)
                .content(batch::combined_parts(&deck.slides, config, prompts))
                .build()
                .map_err(|e| BuilderError::from(e.to_string()))?,
        ];

        let response = self.generator.complete(messages).await?;
        let segments = batch::split_response(&response, total);

        let mut written = 0;
        let mut failed = 0;
        for (slide, script) in deck.slides.iter().zip(segments.iter()) {
            match self.store.write_script(slide.id, slot, script).await {
                Ok(()) => written += 1,
                Err(e) => {
                    failed += 1;
                    error!(
                        slide = %slide.id,
                        position = slide.position,
                        error = %e,
                        "Failed to persist batched narration"
                    );
                    if !self.policy.continue_on_error {
                        return Err(e);
                    }
                }
            }
        }

        info!(total, written, failed, "Batched generation run finished");
        Ok(RunReport {
            total,
            written,
            failed,
        })
    }

    /// Demo failover: substitute hand-authored content for a whole deck.
    ///
    /// Writes the provider's text for each position into **all three**
    /// narration slots, so the substituted script displays regardless of
    /// which style tier the viewer later reads.
    #[instrument(skip(self, scripts), fields(presentation = %presentation_id))]
    pub async fn apply_fallback(
        &self,
        presentation_id: Uuid,
        scripts: &dyn FallbackScripts,
    ) -> PrompteurResult<RunReport> {
        let deck = self.store.fetch_deck(presentation_id).await?;
        let total = deck.slides.len();
        let mut written = 0;
        let mut failed = 0;

        for slide in &deck.slides {
            let text = scripts.script_for(slide.position);
            let mut slide_ok = true;
            for slot in [
                NarrationSlot::Simple,
                NarrationSlot::Medium,
                NarrationSlot::Pro,
            ] {
                if let Err(e) = self.store.write_script(slide.id, slot, &text).await {
                    slide_ok = false;
                    error!(
                        slide = %slide.id,
                        slot = %slot,
                        error = %e,
                        "Failed to write fallback narration"
                    );
                }
            }
            if slide_ok {
                written += 1;
            } else {
                failed += 1;
            }
        }

        info!(total, written, failed, "Fallback content applied");
        Ok(RunReport {
            total,
            written,
            failed,
        })
    }
}
