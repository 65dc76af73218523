//! Route handlers and error mapping.

use crate::auth::AuthenticatedUser;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use axum::Router;
use prompteur_error::{NarrationErrorKind, PrompteurError, PrompteurErrorKind};
use prompteur_interface::{
    GenerationConfig, NarrationDriver, NarrationSlot, NewDeck, NewSlide, Presentation, Slide,
    SlideImage,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// No authenticated subject on the request (401).
    Unauthorized,
    /// The caller exhausted its generation quota (429).
    RateLimited,
    /// Malformed or missing request data (400).
    BadRequest(String),
    /// The referenced record does not exist (404).
    NotFound(String),
    /// Unrecovered internal failure (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authorized.".to_string()),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests. Please try again later.".to_string(),
            ),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {message}"))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Map an input-class narration failure to its HTTP error, if it is one.
///
/// Run-level failures return `None` so the caller can take the fallback
/// path instead of reporting an error.
fn input_error(err: &PrompteurError) -> Option<ApiError> {
    match err.kind() {
        PrompteurErrorKind::Narration(narration) => match &narration.kind {
            NarrationErrorKind::PresentationNotFound(_) => {
                Some(ApiError::NotFound("Presentation not found.".to_string()))
            }
            NarrationErrorKind::SlideNotFound(_) => {
                Some(ApiError::NotFound("Slide not found.".to_string()))
            }
            NarrationErrorKind::EmptyDeck => {
                Some(ApiError::BadRequest("Presentation has no slides.".to_string()))
            }
            _ => None,
        },
        _ => None,
    }
}

impl From<PrompteurError> for ApiError {
    fn from(err: PrompteurError) -> Self {
        input_error(&err).unwrap_or_else(|| ApiError::Internal(err.to_string()))
    }
}

/// Build the API router over shared state.
pub fn router<D: NarrationDriver + 'static>(state: AppState<D>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate-script", post(generate_script::<D>))
        .route("/api/presentations", post(create_presentation::<D>))
        .route(
            "/api/presentations/:id",
            get(get_presentation::<D>).delete(delete_presentation::<D>),
        )
        .route("/api/slides/:id", patch(update_slide::<D>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateScriptRequest {
    presentation_id: Uuid,
    config: GenerationConfig,
}

/// Run narration generation over a whole deck.
///
/// Auth, then quota, then the orchestrator. Input-class failures surface
/// as 4xx; anything else falls over to the demo fallback content, and only
/// a failing fallback yields a 500.
async fn generate_script<D: NarrationDriver>(
    State(state): State<AppState<D>>,
    user: AuthenticatedUser,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.limiter.try_consume(&user.0) {
        return Err(ApiError::RateLimited);
    }

    let request: GenerateScriptRequest = serde_json::from_value(body).map_err(|_| {
        ApiError::BadRequest("Missing presentationId or config.".to_string())
    })?;

    match state
        .orchestrator
        .run(request.presentation_id, &request.config)
        .await
    {
        Ok(_report) => Ok(Json(json!({ "success": true }))),
        Err(err) => {
            if let Some(api_err) = input_error(&err) {
                return Err(api_err);
            }

            // Run-level catastrophe: substitute the demo fallback content
            // so the caller still gets a displayable deck.
            warn!(
                presentation = %request.presentation_id,
                error = %err,
                "Generation run failed, applying fallback content"
            );
            match state
                .orchestrator
                .apply_fallback(request.presentation_id, state.fallback.as_ref())
                .await
            {
                Ok(_) => Ok(Json(json!({ "success": true }))),
                Err(fallback_err) => Err(ApiError::Internal(fallback_err.to_string())),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewSlideBody {
    #[serde(default)]
    position: Option<i32>,
    #[serde(default)]
    extracted_text: Option<String>,
    #[serde(default)]
    image: Option<SlideImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePresentationRequest {
    file_name: String,
    slides: Vec<NewSlideBody>,
}

/// Create a presentation with its slides.
///
/// Identical content for the same owner resolves to the existing deck.
async fn create_presentation<D: NarrationDriver>(
    State(state): State<AppState<D>>,
    user: AuthenticatedUser,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: CreatePresentationRequest = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Missing fileName or slides.".to_string()))?;

    let deck = NewDeck {
        file_name: request.file_name,
        owner_id: user.0,
        slides: request
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, slide)| NewSlide {
                position: slide.position.unwrap_or(index as i32 + 1),
                extracted_text: slide.extracted_text,
                image: slide.image,
            })
            .collect(),
    };

    let id = state.store.create_deck(&deck).await?;
    Ok(Json(json!({ "presentationId": id })))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SlideResponse {
    id: Uuid,
    position: i32,
    extracted_text: Option<String>,
    image: Option<SlideImage>,
    script_simple: Option<String>,
    script_medium: Option<String>,
    script_pro: Option<String>,
}

impl From<Slide> for SlideResponse {
    fn from(slide: Slide) -> Self {
        Self {
            id: slide.id,
            position: slide.position,
            extracted_text: slide.extracted_text,
            image: slide.image,
            script_simple: slide.script_simple,
            script_medium: slide.script_medium,
            script_pro: slide.script_pro,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresentationResponse {
    id: Uuid,
    file_name: String,
    slides: Vec<SlideResponse>,
}

impl From<Presentation> for PresentationResponse {
    fn from(presentation: Presentation) -> Self {
        Self {
            id: presentation.id,
            file_name: presentation.file_name,
            slides: presentation
                .slides
                .into_iter()
                .map(SlideResponse::from)
                .collect(),
        }
    }
}

/// Fetch a presentation with its slides ordered by position.
async fn get_presentation<D: NarrationDriver>(
    State(state): State<AppState<D>>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PresentationResponse>, ApiError> {
    let presentation = state.store.fetch_deck(id).await?;
    if presentation.owner_id != user.0 {
        // Not distinguishable from a missing deck for other users.
        return Err(ApiError::NotFound("Presentation not found.".to_string()));
    }
    Ok(Json(presentation.into()))
}

/// Delete a presentation owned by the caller.
async fn delete_presentation<D: NarrationDriver>(
    State(state): State<AppState<D>>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.delete_deck(id, &user.0).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSlideRequest {
    new_script: String,
}

/// Manually edit a slide's script from the viewer.
///
/// Writes the most-professional already-populated slot (pro, else simple,
/// else medium), so the edit stays visible in whatever tier the viewer
/// currently displays.
async fn update_slide<D: NarrationDriver>(
    State(state): State<AppState<D>>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: UpdateSlideRequest = serde_json::from_value(body)
        .map_err(|_| ApiError::BadRequest("Missing newScript.".to_string()))?;

    let slide = state.store.find_slide(id).await?;
    let slot = if slide.script_pro.is_some() {
        NarrationSlot::Pro
    } else if slide.script_simple.is_some() {
        NarrationSlot::Simple
    } else {
        NarrationSlot::Medium
    };

    state.store.write_script(id, slot, &request.new_script).await?;
    Ok(Json(json!({ "success": true })))
}
