//! Ordered model fallback for one generation call.

use prompteur_core::GenerateRequest;
use prompteur_error::{NarrationError, NarrationErrorKind, PrompteurResult};
use prompteur_interface::NarrationDriver;
use tracing::{info, warn};

/// Ordered list of backend models tried per generation call.
///
/// Strict list order, one attempt per model, no retries, no backoff, no
/// parallel racing: the list itself encodes a curated preference (faster
/// and cheaper models first). The first model returning non-empty text
/// wins; an empty response counts as a failed attempt.
///
/// # Examples
///
/// ```
/// use prompteur_narration::ModelCascade;
///
/// let cascade = ModelCascade::default();
/// assert_eq!(cascade.models()[0], "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCascade {
    models: Vec<String>,
}

impl Default for ModelCascade {
    fn default() -> Self {
        Self {
            models: vec![
                "gemini-2.5-flash".to_string(),
                "gemini-2.5-pro".to_string(),
                "gemini-2.0-flash".to_string(),
            ],
        }
    }
}

impl ModelCascade {
    /// Create a cascade from an ordered model list.
    ///
    /// An empty list falls back to the default cascade.
    pub fn new(models: Vec<String>) -> Self {
        if models.is_empty() {
            Self::default()
        } else {
            Self { models }
        }
    }

    /// The ordered model list.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Run one generation call through the cascade.
    ///
    /// # Errors
    ///
    /// Returns [`NarrationErrorKind::ModelsExhausted`] carrying the last
    /// individual failure once every model in the list has been tried.
    pub async fn generate<D: NarrationDriver>(
        &self,
        driver: &D,
        request: &GenerateRequest,
    ) -> PrompteurResult<String> {
        let mut last_error = "no models attempted".to_string();

        for model in &self.models {
            let attempt = request.with_model(model);
            match driver.generate(&attempt).await {
                Ok(response) => {
                    let text = response.text();
                    if !text.trim().is_empty() {
                        info!(model = %model, "Model attempt succeeded");
                        return Ok(text);
                    }
                    warn!(model = %model, "Model returned empty text");
                    last_error = format!("model '{}' returned empty text", model);
                }
                Err(e) => {
                    warn!(model = %model, error = %e, "Model attempt failed");
                    last_error = e.to_string();
                }
            }
        }

        Err(NarrationError::new(NarrationErrorKind::ModelsExhausted {
            attempts: self.models.len(),
            last_error,
        })
        .into())
    }
}
