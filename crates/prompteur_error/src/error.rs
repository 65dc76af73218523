//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, NarrationError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// The foundation error enum for the Prompteur workspace.
///
/// # Examples
///
/// ```
/// use prompteur_error::{PrompteurError, ConfigError};
///
/// let cfg_err = ConfigError::new("quota must be positive");
/// let err: PrompteurError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PrompteurErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Narration error
    #[from(NarrationError)]
    Narration(NarrationError),
}

/// Prompteur error with kind discrimination.
///
/// # Examples
///
/// ```
/// use prompteur_error::{PrompteurResult, NarrationError, NarrationErrorKind};
///
/// fn might_fail() -> PrompteurResult<()> {
///     Err(NarrationError::new(NarrationErrorKind::EmptyDeck))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Prompteur Error: {}", _0)]
pub struct PrompteurError(Box<PrompteurErrorKind>);

impl PrompteurError {
    /// Create a new error from a kind.
    pub fn new(kind: PrompteurErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PrompteurErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PrompteurErrorKind
impl<T> From<T> for PrompteurError
where
    T: Into<PrompteurErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Prompteur operations.
///
/// # Examples
///
/// ```
/// use prompteur_error::{PrompteurResult, ConfigError};
///
/// fn load_quota() -> PrompteurResult<u32> {
///     Err(ConfigError::new("quota missing"))?
/// }
/// ```
pub type PrompteurResult<T> = std::result::Result<T, PrompteurError>;
