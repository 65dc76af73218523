use async_trait::async_trait;
use prompteur_core::{GenerateRequest, GenerateResponse, Input, Output, Role};
use prompteur_error::{GeminiError, GeminiErrorKind, PrompteurResult};
use prompteur_interface::{GenerationConfig, NarrationDriver, ScriptLength, ScriptStyle, SlideImage};
use prompteur_narration::{ModelCascade, NarrationGenerator, PromptLibrary, SlideContext};
use std::sync::{Arc, Mutex};

/// Mock driver that records every request and echoes a fixed response.
struct RecordingDriver {
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl RecordingDriver {
    fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrationDriver for RecordingDriver {
    async fn generate(&self, req: &GenerateRequest) -> PrompteurResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        Ok(GenerateResponse {
            outputs: vec![Output::Text("Generated narration.".to_string())],
        })
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "recording-v1"
    }
}

/// Mock driver that always fails.
struct FailingDriver;

#[async_trait]
impl NarrationDriver for FailingDriver {
    async fn generate(&self, _req: &GenerateRequest) -> PrompteurResult<GenerateResponse> {
        Err(GeminiError::new(GeminiErrorKind::ApiRequest("always down".to_string())).into())
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-v1"
    }
}

fn config(style: ScriptStyle, length: ScriptLength) -> GenerationConfig {
    GenerationConfig { style, length }
}

fn user_text(request: &GenerateRequest) -> String {
    request
        .messages
        .iter()
        .filter(|m| m.role == Role::User)
        .flat_map(|m| m.content.iter())
        .filter_map(|input| match input {
            Input::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn system_text(request: &GenerateRequest) -> String {
    request
        .messages
        .iter()
        .filter(|m| m.role == Role::System)
        .flat_map(|m| m.content.iter())
        .filter_map(|input| match input {
            Input::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn first_slide_prompt_carries_the_introduction_instruction() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver);

    let slide = SlideContext {
        text: Some("Quarterly results overview"),
        image: None,
        position: 1,
        total: 3,
    };
    let text = generator
        .narrate(&slide, &config(ScriptStyle::Simple, ScriptLength::Court))
        .await;
    assert_eq!(text, "Generated narration.");

    let requests = generator.driver().requests();
    let prompt = user_text(&requests[0]);
    assert!(prompt.contains("slide 1 of 3"));
    assert!(prompt.contains("first slide"));
    assert!(prompt.contains("Quarterly results overview"));
}

#[tokio::test]
async fn last_slide_prompt_carries_the_closing_instruction() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver);

    let slide = SlideContext {
        text: Some("Key takeaways"),
        image: None,
        position: 3,
        total: 3,
    };
    generator
        .narrate(&slide, &config(ScriptStyle::Normal, ScriptLength::Moyen))
        .await;

    let prompt = user_text(&generator.driver().requests()[0]);
    assert!(prompt.contains("last slide"));
    assert!(prompt.contains("thank the audience"));
}

#[tokio::test]
async fn interior_slide_prompt_forbids_greetings_and_requires_a_transition() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver);

    let slide = SlideContext {
        text: Some("Methodology"),
        image: None,
        position: 2,
        total: 3,
    };
    generator
        .narrate(&slide, &config(ScriptStyle::Pro, ScriptLength::Long))
        .await;

    let prompt = user_text(&generator.driver().requests()[0]);
    assert!(prompt.contains("Do NOT open with a greeting"));
    assert!(prompt.contains("transition"));
}

#[tokio::test]
async fn style_tier_selects_the_persona_in_the_system_instruction() {
    for (style, marker) in [
        (ScriptStyle::Simple, "simple, direct"),
        (ScriptStyle::Normal, "conversational"),
        (ScriptStyle::Pro, "sustained vocabulary"),
    ] {
        let driver = RecordingDriver::new();
        let generator = NarrationGenerator::new(driver);
        let slide = SlideContext {
            text: Some("Content"),
            image: None,
            position: 2,
            total: 4,
        };
        generator.narrate(&slide, &config(style, ScriptLength::Moyen)).await;

        let system = system_text(&generator.driver().requests()[0]);
        assert!(
            system.contains(marker),
            "style {style:?} should select persona containing '{marker}'"
        );
        assert!(system.contains("no bullet lists"));
    }
}

#[tokio::test]
async fn blank_text_is_replaced_by_the_visual_slide_placeholder() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver);

    let slide = SlideContext {
        text: Some("   "),
        image: None,
        position: 2,
        total: 3,
    };
    generator
        .narrate(&slide, &config(ScriptStyle::Simple, ScriptLength::Court))
        .await;

    let prompt = user_text(&generator.driver().requests()[0]);
    assert!(prompt.contains("mostly visual and contains no text"));
}

#[tokio::test]
async fn an_attached_image_adds_the_image_part_and_instruction() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver);

    let image = SlideImage {
        mime: "image/png".to_string(),
        base64: "aGVsbG8=".to_string(),
    };
    let slide = SlideContext {
        text: Some("Revenue chart"),
        image: Some(&image),
        position: 2,
        total: 3,
    };
    generator
        .narrate(&slide, &config(ScriptStyle::Normal, ScriptLength::Moyen))
        .await;

    let request = &generator.driver().requests()[0];
    let prompt = user_text(request);
    assert!(prompt.contains("rendered image is attached"));

    let image_parts: Vec<_> = request
        .messages
        .iter()
        .flat_map(|m| m.content.iter())
        .filter(|input| matches!(input, Input::Image { .. }))
        .collect();
    assert_eq!(image_parts.len(), 1);
}

#[tokio::test]
async fn total_backend_failure_degrades_to_the_placeholder_sentence() {
    let generator = NarrationGenerator::new(FailingDriver)
        .with_cascade(ModelCascade::new(vec!["only-model".to_string()]));

    let slide = SlideContext {
        text: Some("Content"),
        image: None,
        position: 1,
        total: 1,
    };
    let text = generator
        .narrate(&slide, &config(ScriptStyle::Simple, ScriptLength::Court))
        .await;

    assert_eq!(text, PromptLibrary::default().failure_placeholder);
}

#[tokio::test]
async fn sampling_settings_reach_the_request() {
    let driver = RecordingDriver::new();
    let generator = NarrationGenerator::new(driver).with_sampling(Some(0.4), Some(512));

    let slide = SlideContext {
        text: Some("Content"),
        image: None,
        position: 1,
        total: 2,
    };
    generator
        .narrate(&slide, &config(ScriptStyle::Simple, ScriptLength::Court))
        .await;

    let request = &generator.driver().requests()[0];
    assert_eq!(request.temperature, Some(0.4));
    assert_eq!(request.max_tokens, Some(512));
}
