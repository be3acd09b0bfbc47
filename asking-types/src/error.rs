/// Error type for prompt operations.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// User interrupted the prompt (Ctrl+C, closed terminal, etc.)
    #[error("Prompt interrupted by user")]
    Interrupted,

    /// Reading from or drawing to the terminal failed.
    #[error("Prompt I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Implementation-specific failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromptError {
    /// Create a prompt error from any error type.
    pub fn other(err: impl Into<anyhow::Error>) -> Self {
        Self::Other(err.into())
    }

    /// Check if this error represents user interruption.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

/// Rejection of an answer by a converter or validator.
///
/// This drives the retry loop: it is reported through the prompt and the user is asked again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidAnswer {
    message: String,
}

impl InvalidAnswer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for InvalidAnswer {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for InvalidAnswer {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Failure to turn an answer value into a concrete Rust type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    #[error("expected {expected}, got {actual}")]
    Incompatible {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{input}' is not a valid {expected}")]
    Parse {
        expected: &'static str,
        input: String,
    },

    #[error("{value} does not fit into {expected}")]
    OutOfRange { expected: &'static str, value: i64 },
}

/// Error type for recording an answer into an answer sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Keyed sinks need a question name to record under.
    #[error("Cannot record an answer without a question name")]
    MissingName,

    /// The sink has no slot for this question name.
    #[error("Could not find a destination for answer '{0}'")]
    UnknownField(String),

    /// The slot exists but the value cannot be stored in it.
    #[error("Cannot record answer '{name}': {source}")]
    Coerce {
        name: String,
        #[source]
        source: CoerceError,
    },
}

impl BindError {
    /// Attach the question name to a coercion failure.
    pub fn coerce(name: &str, source: CoerceError) -> Self {
        Self::Coerce {
            name: name.to_string(),
            source,
        }
    }
}
