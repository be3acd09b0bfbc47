//! Free-text prompts: single line, password and external editor.

use asking::{AnswerValue, InvalidAnswer, Prompt, PromptError};
use dialoguer::{Editor, Input, Password};

use crate::render::{prompt_error, render_line, report, theme};

/// Single-line text input.
#[derive(Debug, Clone)]
pub struct InputPrompt {
    message: String,
    default: Option<String>,
    initial_text: Option<String>,
    allow_empty: bool,
    colorful: bool,
}

impl InputPrompt {
    /// Create an input prompt with the colorful theme.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            initial_text: None,
            allow_empty: false,
            colorful: true,
        }
    }

    /// Value used when the user just presses enter.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Pre-filled, editable text.
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = Some(text.into());
        self
    }

    /// Accept an empty line as an answer.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for InputPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        let theme = theme(self.colorful);
        let mut input = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(self.message.as_str())
            .allow_empty(self.allow_empty)
            .report(false);

        if let Some(default) = &self.default {
            input = input.default(default.clone());
        }
        if let Some(text) = &self.initial_text {
            input = input.with_initial_text(text.as_str());
        }

        input
            .interact_text()
            .map(AnswerValue::String)
            .map_err(prompt_error)
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        render_line(self.colorful, |theme, line| {
            theme.format_input_prompt_selection(line, &self.message, &answer.to_string())
        })
    }
}

/// Masked input for passwords.
#[derive(Debug, Clone)]
pub struct PasswordPrompt {
    message: String,
    confirmation: Option<String>,
    allow_empty: bool,
    colorful: bool,
}

impl PasswordPrompt {
    /// Create a password prompt with the colorful theme.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            confirmation: None,
            allow_empty: false,
            colorful: true,
        }
    }

    /// Ask for the password twice, re-asking until both entries match.
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirmation = Some(message.into());
        self
    }

    /// Accept an empty password.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for PasswordPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        let theme = theme(self.colorful);
        let mut password = Password::with_theme(theme.as_ref())
            .with_prompt(self.message.as_str())
            .allow_empty_password(self.allow_empty)
            .report(false);

        if let Some(confirmation) = &self.confirmation {
            password = password.with_confirmation(confirmation.as_str(), "Passwords do not match");
        }

        password
            .interact()
            .map(AnswerValue::String)
            .map_err(prompt_error)
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    // Never echo the password itself.
    fn cleanup(&mut self, _answer: &AnswerValue) -> Result<(), PromptError> {
        render_line(self.colorful, |theme, line| {
            theme.format_password_prompt_selection(line, &self.message)
        })
    }
}

/// Multi-line text in the user's `$EDITOR`.
#[derive(Debug, Clone)]
pub struct EditorPrompt {
    message: String,
    extension: String,
    initial_text: String,
    colorful: bool,
}

impl EditorPrompt {
    /// Create an editor prompt with the colorful theme.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extension: ".txt".to_string(),
            initial_text: String::new(),
            colorful: true,
        }
    }

    /// File extension of the temporary file, e.g. `".md"`.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Text the editor opens with.
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for EditorPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        render_line(self.colorful, |theme, line| {
            theme.format_prompt(line, &self.message)
        })?;

        let mut editor = Editor::new();
        editor.extension(&self.extension);

        edited(editor.edit(&self.initial_text))
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        let summary = match answer.as_str() {
            Some(text) if !text.is_empty() => format!("<{} lines>", text.lines().count()),
            _ => "<empty>".to_string(),
        };
        render_line(self.colorful, |theme, line| {
            theme.format_input_prompt_selection(line, &self.message, &summary)
        })
    }
}

// Editor was closed without saving: treat as an empty answer
fn edited(result: dialoguer::Result<Option<String>>) -> Result<AnswerValue, PromptError> {
    let text = result.map_err(prompt_error)?.unwrap_or_default();
    Ok(AnswerValue::String(text))
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn builders_set_options() {
        let input = InputPrompt::new("Name:")
            .default("Ferris")
            .allow_empty(true)
            .plain();
        assert_eq!(input.default.as_deref(), Some("Ferris"));
        assert!(input.allow_empty);
        assert!(!input.colorful);

        let editor = EditorPrompt::new("Bio:").extension(".md");
        assert_eq!(editor.extension, ".md");
        assert!(editor.colorful);
    }

    #[test]
    fn editor_result_maps_like_other_prompts() {
        assert_eq!(
            edited(Ok(Some("line one\nline two".to_string()))).unwrap(),
            AnswerValue::from("line one\nline two")
        );
        assert_eq!(edited(Ok(None)).unwrap(), AnswerValue::from(""));

        let interrupted = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c");
        assert!(edited(Err(dialoguer::Error::IO(interrupted))).unwrap_err().is_interrupted());

        let broken = io::Error::new(io::ErrorKind::NotFound, "no editor");
        let err = edited(Err(dialoguer::Error::IO(broken))).unwrap_err();
        assert!(!err.is_interrupted());
        assert!(err.to_string().contains("no editor"));
    }
}
