use std::fmt;
use std::io::{self, Write};

use asking::{InvalidAnswer, PromptError};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use thiserror::Error;

/// Error type for the Dialoguer prompts.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Formatting a line through the theme failed.
    #[error("Failed to render prompt: {0}")]
    Render(#[from] fmt::Error),

    /// A select prompt was built without options.
    #[error("Select prompt '{0}' has no options")]
    NoOptions(String),

    /// The terminal reported a selection that is not one of the options.
    #[error("Selection {index} is out of range for {len} options")]
    InvalidSelection { index: usize, len: usize },
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted)
}

pub(crate) fn prompt_error(err: dialoguer::Error) -> PromptError {
    if is_cancelled(&err) {
        PromptError::Interrupted
    } else {
        PromptError::other(DialoguerError::from(err))
    }
}

pub(crate) fn theme(colorful: bool) -> Box<dyn Theme> {
    if colorful {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

/// Format one line with the theme and write it to stderr, where dialoguer draws.
pub(crate) fn render_line(
    colorful: bool,
    draw: impl FnOnce(&dyn Theme, &mut String) -> fmt::Result,
) -> Result<(), PromptError> {
    let theme = theme(colorful);
    let mut line = String::new();
    draw(theme.as_ref(), &mut line).map_err(|err| PromptError::other(DialoguerError::from(err)))?;
    writeln!(io::stderr(), "{line}")?;
    Ok(())
}

pub(crate) fn report(colorful: bool, invalid: &InvalidAnswer) -> Result<(), PromptError> {
    render_line(colorful, |theme, line| {
        theme.format_error(line, invalid.message())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_io_is_a_cancellation() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert!(prompt_error(err).is_interrupted());

        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let err = prompt_error(err);
        assert!(!err.is_interrupted());
        assert!(err.to_string().starts_with("Dialoguer error:"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn plain_theme_formats_errors() {
        let mut line = String::new();
        theme(false).format_error(&mut line, "too short").unwrap();
        assert!(line.contains("too short"));
    }
}
