//! Message types for generation requests.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A multimodal message in a generation request.
///
/// # Examples
///
/// ```
/// use prompteur_core::{Message, Role, Input};
///
/// let message = Message::new(Role::User, vec![Input::Text("Narrate slide 2".to_string())]);
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The content of the message (can be multimodal)
    pub content: Vec<Input>,
}

impl Message {
    /// Create a message from a role and content parts.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// Create a plain-text message.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self::new(role, vec![Input::Text(text.into())])
    }
}
