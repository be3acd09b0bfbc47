use crate::{BindError, PromptError};

/// Error type for asking a question sequence.
///
/// Failures coming from the prompt or the answer sink keep their own message;
/// the variant only tells which step of the sequence produced them.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// No answer sink was passed in. Nothing was prompted.
    #[error("Cannot ask questions without a destination to record the answers")]
    NoDestination,

    /// Obtaining an answer failed.
    #[error(transparent)]
    Prompt(PromptError),

    /// Showing a conversion or validation failure to the user failed.
    #[error(transparent)]
    Report(PromptError),

    /// Finalizing the prompt failed (only with `CleanupFailure::Abort`).
    #[error(transparent)]
    Cleanup(PromptError),

    /// Recording the accepted answer failed.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// The answer was rejected as often as the configured attempt limit allows.
    #[error("Gave up on question '{name}' after {attempts} rejected answers")]
    TooManyAttempts { name: String, attempts: usize },
}

impl AskError {
    /// The underlying prompt failure, if the prompt caused the abort.
    pub fn prompt_error(&self) -> Option<&PromptError> {
        match self {
            Self::Prompt(err) | Self::Report(err) | Self::Cleanup(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error represents user interruption.
    pub fn is_interrupted(&self) -> bool {
        self.prompt_error().is_some_and(PromptError::is_interrupted)
    }
}
