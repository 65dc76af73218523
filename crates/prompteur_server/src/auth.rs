//! Bearer-subject authentication extraction.
//!
//! Identity is an external collaborator: the server trusts the subject id
//! presented as a bearer token and rejects requests without one. No
//! identity provider is reimplemented here.

use crate::api::ApiError;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The authenticated subject id of the calling user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|subject| !subject.is_empty());

        match subject {
            Some(subject) => Ok(Self(subject.to_string())),
            None => Err(ApiError::Unauthorized),
        }
    }
}
