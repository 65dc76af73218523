//! Per-slide narration generation.

use crate::{ModelCascade, PromptLibrary};
use prompteur_core::{GenerateRequest, Input, MediaSource, Message, MessageBuilder, Role};
use prompteur_error::{BuilderError, PrompteurResult};
use prompteur_interface::{GenerationConfig, NarrationDriver, SlideImage};
use tracing::error;

/// One slide's inputs to narration generation.
#[derive(Debug, Clone, Copy)]
pub struct SlideContext<'a> {
    /// Extracted slide text (absent or blank for visual-only slides).
    pub text: Option<&'a str>,
    /// Rendered slide image, when present.
    pub image: Option<&'a SlideImage>,
    /// 1-based position within the deck.
    pub position: i32,
    /// Total number of slides in the deck.
    pub total: usize,
}

/// Produces narration text for exactly one slide.
///
/// The generator never surfaces an error to its caller: total backend
/// failure (the whole cascade exhausted) degrades to the fixed apologetic
/// placeholder sentence, so the orchestrator's loop never has to handle a
/// generation exception.
#[derive(derive_getters::Getters)]
pub struct NarrationGenerator<D: NarrationDriver> {
    /// The LLM backend driver.
    driver: D,
    /// Ordered model fallback list.
    cascade: ModelCascade,
    /// Instruction tables for prompt assembly.
    prompts: PromptLibrary,
    /// Sampling temperature passed to the backend.
    temperature: Option<f32>,
    /// Maximum output tokens per narration call.
    max_tokens: Option<u32>,
}

impl<D: NarrationDriver> NarrationGenerator<D> {
    /// Create a generator with the default cascade and prompt tables.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            cascade: ModelCascade::default(),
            prompts: PromptLibrary::default(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Replace the model cascade.
    pub fn with_cascade(mut self, cascade: ModelCascade) -> Self {
        self.cascade = cascade;
        self
    }

    /// Replace the prompt tables.
    pub fn with_prompts(mut self, prompts: PromptLibrary) -> Self {
        self.prompts = prompts;
        self
    }

    /// Set sampling parameters passed to the backend.
    pub fn with_sampling(mut self, temperature: Option<f32>, max_tokens: Option<u32>) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    /// Narrate one slide. Infallible by contract: backend failures are
    /// absorbed into the placeholder sentence.
    pub async fn narrate(&self, slide: &SlideContext<'_>, config: &GenerationConfig) -> String {
        match self.try_narrate(slide, config).await {
            Ok(text) => text,
            Err(e) => {
                error!(
                    position = slide.position,
                    error = %e,
                    "Narration failed for slide, substituting placeholder"
                );
                self.prompts.failure_placeholder.clone()
            }
        }
    }

    async fn try_narrate(
        &self,
        slide: &SlideContext<'_>,
        config: &GenerationConfig,
    ) -> PrompteurResult<String> {
        let text = match slide.text {
            Some(text) if !text.trim().is_empty() => text,
            _ => self.prompts.missing_text_placeholder.as_str(),
        };

        let user_prompt = self.prompts.user_prompt(
            text,
            slide.position,
            slide.total,
            config,
            slide.image.is_some(),
        );

        let mut content = vec![Input::Text(user_prompt)];
        if let Some(image) = slide.image {
            content.push(Input::Image {
                mime: Some(image.mime.clone()),
                source: MediaSource::Base64(image.base64.clone()),
            });
        }

        let messages = vec![
            Message::text(Role::System, self.prompts.system_instruction(config.style)),
            MessageBuilder::default()
                .role(Role::User)
                .content(content)
                .build()
                .map_err(|e| BuilderError::from(e.to_string()))?,
        ];

        let request = GenerateRequest::builder()
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        self.cascade.generate(&self.driver, &request).await
    }

    /// Run an arbitrary message sequence through the cascade with this
    /// generator's sampling settings. Used by the batched deck variant.
    pub(crate) async fn complete(&self, messages: Vec<Message>) -> PrompteurResult<String> {
        let request = GenerateRequest::builder()
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BuilderError::from(e.to_string()))?;

        self.cascade.generate(&self.driver, &request).await
    }
}
