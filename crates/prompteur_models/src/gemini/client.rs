//! Google Gemini API implementation.
//!
//! This module provides a client for the Google Gemini API with support for:
//! - Per-request model selection (the fallback cascade targets a different
//!   model on each attempt)
//! - Client pooling with lazy initialization (one client per model)
//! - Multimodal requests (slide text plus an inline base64 image)
//!
//! # Architecture
//!
//! The [`GeminiClient`] maintains a pool of model-specific clients. When a
//! request specifies a model (via `GenerateRequest.model`), the client
//! either retrieves the existing client for that model or creates a new one
//! on demand.

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use prompteur_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use prompteur_error::{GeminiError, GeminiErrorKind, PrompteurResult};
use prompteur_interface::NarrationDriver;

use super::GeminiResult;

/// Default model used when a request does not name one.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Google Gemini API with per-model client pooling.
///
/// # Example
///
/// ```no_run
/// use prompteur_models::GeminiClient;
/// use prompteur_interface::NarrationDriver;
/// use prompteur_core::{GenerateRequest, Message, Role};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
///
/// // Use the default model
/// let request = GenerateRequest::new(vec![Message::text(Role::User, "Hello")]);
/// let response = client.generate(&request).await?;
///
/// // Target a specific model (as the cascade does per attempt)
/// let request = request.with_model("gemini-2.5-flash");
/// let response = client.generate(&request).await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    /// Cache of model-specific REST API clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// API key for creating new clients
    api_key: String,
    /// Default model name when req.model is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().unwrap().len();
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use prompteur_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> PrompteurResult<Self> {
        Self::new_internal(DEFAULT_MODEL).map_err(Into::into)
    }

    /// Create a new Gemini client with a different default model.
    #[instrument(name = "gemini_client_new_with_model")]
    pub fn new_with_model(model_name: &str) -> PrompteurResult<Self> {
        Self::new_internal(model_name).map_err(Into::into)
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(model_name: &str) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            api_key,
            model_name: model_name.to_string(),
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Maps common model name strings to their corresponding Model enum
    /// variants. Uses Model::Custom for unrecognized model names,
    /// automatically adding the "models/" prefix required by the Gemini API.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or lazily create the pooled client for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().unwrap();
        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model_name = req.model.as_deref().unwrap_or(&self.model_name);
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                Role::System => {
                    // Gemini uses a separate system prompt
                    if let Some(text) = msg.content.iter().find_map(extract_text) {
                        system_prompt = Some(text);
                    }
                }
                Role::User => {
                    for input in &msg.content {
                        match input {
                            Input::Text(text) => {
                                builder = builder.with_user_message(text);
                            }
                            Input::Image { mime, source } => match source {
                                MediaSource::Base64(data) => {
                                    let mime =
                                        mime.as_deref().unwrap_or("image/png").to_string();
                                    builder = builder.with_inline_data(data, mime);
                                }
                                MediaSource::Url(url) => {
                                    return Err(GeminiError::new(
                                        GeminiErrorKind::UnsupportedMedia(format!(
                                            "URL image source: {}",
                                            url
                                        )),
                                    ));
                                }
                            },
                        }
                    }
                }
                Role::Assistant => {
                    if let Some(text) = msg.content.iter().find_map(extract_text) {
                        builder = builder.with_model_message(&text);
                    }
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;
        let text = response.text();

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    /// and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

/// Extract text content from an input.
fn extract_text(input: &Input) -> Option<String> {
    match input {
        Input::Text(text) => Some(text.clone()),
        _ => None,
    }
}

#[async_trait]
impl NarrationDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> PrompteurResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_names_map_to_enum_variants() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-pro"),
            Model::Gemini25Pro
        ));
    }

    #[test]
    fn unknown_model_names_get_models_prefix() {
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            other => panic!("expected Custom variant, got {:?}", other),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            other => panic!("expected Custom variant, got {:?}", other),
        }
    }

    #[test]
    fn status_codes_are_extracted_from_error_strings() {
        assert_eq!(
            GeminiClient::extract_status_code(
                "bad response from server; code 503; description: overloaded"
            ),
            Some(503)
        );
        assert_eq!(
            GeminiClient::extract_status_code("connection reset by peer"),
            None
        );
    }
}
