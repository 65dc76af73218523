//! Media source types for multimodal content.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use prompteur_core::MediaSource;
///
/// let url = MediaSource::Url("https://example.com/slide4.png".to_string());
/// let base64 = MediaSource::Base64("iVBORw0KGgo...".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
}
