//! Narration error types.

/// Specific error conditions for narration operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NarrationErrorKind {
    /// Presentation does not exist in the slide store
    #[display("Presentation '{}' not found", _0)]
    PresentationNotFound(String),
    /// Slide does not exist in the slide store
    #[display("Slide '{}' not found", _0)]
    SlideNotFound(String),
    /// Presentation has no slides to narrate
    #[display("Presentation has no slides")]
    EmptyDeck,
    /// Every model in the cascade failed for one generation call
    #[display("All {} models failed; last error: {}", attempts, last_error)]
    ModelsExhausted {
        /// Number of models attempted
        attempts: usize,
        /// Message of the last individual failure
        last_error: String,
    },
    /// The model returned something other than text
    #[display("Model produced no text output")]
    NoTextOutput,
    /// Failed to assemble a generation request
    #[display("Failed to build generation request: {}", _0)]
    RequestBuild(String),
    /// Writing a narration slot failed
    #[display("Failed to write narration for slide '{}': {}", slide, message)]
    SlotWrite {
        /// Slide identifier
        slide: String,
        /// Error message
        message: String,
    },
}

/// Error type for narration operations.
///
/// # Examples
///
/// ```
/// use prompteur_error::{NarrationError, NarrationErrorKind};
///
/// let err = NarrationError::new(NarrationErrorKind::EmptyDeck);
/// assert!(format!("{}", err).contains("no slides"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narration Error: {} at line {} in {}", kind, line, file)]
pub struct NarrationError {
    /// The specific error condition
    pub kind: NarrationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl NarrationError {
    /// Create a new NarrationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
