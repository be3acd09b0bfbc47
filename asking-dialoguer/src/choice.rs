//! Prompts that pick from fixed answers: yes/no, one option, any options.

use asking::{AnswerValue, InvalidAnswer, Prompt, PromptError};
use dialoguer::{Confirm, MultiSelect, Select};

use crate::DialoguerError;
use crate::render::{prompt_error, render_line, report, theme};

/// Yes/no confirmation. Answers with `AnswerValue::Bool`.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    message: String,
    default: Option<bool>,
    colorful: bool,
}

impl ConfirmPrompt {
    /// Create a confirm prompt with the colorful theme.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            colorful: true,
        }
    }

    /// Answer used when the user just presses enter.
    pub fn default(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for ConfirmPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        let theme = theme(self.colorful);
        let mut confirm = Confirm::with_theme(theme.as_ref())
            .with_prompt(self.message.as_str())
            .report(false);

        if let Some(default) = self.default {
            confirm = confirm.default(default);
        }

        confirm
            .interact()
            .map(AnswerValue::Bool)
            .map_err(prompt_error)
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        render_line(self.colorful, |theme, line| {
            theme.format_confirm_prompt_selection(line, &self.message, answer.as_bool())
        })
    }
}

/// Pick exactly one option. Answers with the option text.
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    message: String,
    options: Vec<String>,
    default: usize,
    colorful: bool,
}

impl SelectPrompt {
    /// Create a select prompt with the colorful theme.
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: 0,
            colorful: true,
        }
    }

    /// Index of the option highlighted initially.
    pub fn default(mut self, index: usize) -> Self {
        self.default = index;
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for SelectPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        if self.options.is_empty() {
            return Err(PromptError::other(DialoguerError::NoOptions(
                self.message.clone(),
            )));
        }

        let theme = theme(self.colorful);
        let index = Select::with_theme(theme.as_ref())
            .with_prompt(self.message.as_str())
            .items(&self.options)
            .default(self.default.min(self.options.len() - 1))
            .report(false)
            .interact()
            .map_err(prompt_error)?;

        let chosen = selected(&self.options, index)?;
        Ok(AnswerValue::String(chosen.clone()))
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        render_line(self.colorful, |theme, line| {
            theme.format_select_prompt_selection(line, &self.message, &answer.to_string())
        })
    }
}

/// Pick any number of options. Answers with `AnswerValue::StringList`.
#[derive(Debug, Clone)]
pub struct MultiSelectPrompt {
    message: String,
    options: Vec<String>,
    checked: Vec<bool>,
    colorful: bool,
}

impl MultiSelectPrompt {
    /// Create a multi-select prompt with the colorful theme and nothing checked.
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            message: message.into(),
            checked: vec![false; options.len()],
            options,
            colorful: true,
        }
    }

    /// Options checked initially, by text. Unknown texts are ignored.
    pub fn defaults<'s>(mut self, checked: impl IntoIterator<Item = &'s str>) -> Self {
        let checked: Vec<&str> = checked.into_iter().collect();
        self.checked = self
            .options
            .iter()
            .map(|option| checked.contains(&option.as_str()))
            .collect();
        self
    }

    /// Use the plain (no color) theme.
    pub fn plain(mut self) -> Self {
        self.colorful = false;
        self
    }
}

impl Prompt for MultiSelectPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        if self.options.is_empty() {
            return Err(PromptError::other(DialoguerError::NoOptions(
                self.message.clone(),
            )));
        }

        let theme = theme(self.colorful);
        let indices = MultiSelect::with_theme(theme.as_ref())
            .with_prompt(self.message.as_str())
            .items(&self.options)
            .defaults(&self.checked)
            .report(false)
            .interact()
            .map_err(prompt_error)?;

        let chosen = indices
            .into_iter()
            .map(|index| selected(&self.options, index).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AnswerValue::StringList(chosen))
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        report(self.colorful, invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        let selections: Vec<&str> = answer
            .as_string_list()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect();
        render_line(self.colorful, |theme, line| {
            theme.format_multi_select_prompt_selection(line, &self.message, &selections)
        })
    }
}

fn selected(options: &[String], index: usize) -> Result<&String, PromptError> {
    options.get(index).ok_or_else(|| {
        PromptError::other(DialoguerError::InvalidSelection {
            index,
            len: options.len(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiselect_defaults_by_text() {
        let prompt = MultiSelectPrompt::new("Languages:", ["rust", "go", "zig"])
            .defaults(["zig", "rust", "cobol"]);
        assert_eq!(prompt.checked, vec![true, false, true]);
    }

    #[test]
    fn empty_select_fails_before_drawing() {
        let mut prompt = SelectPrompt::new("Pick:", Vec::<String>::new());
        let err = prompt.prompt().unwrap_err();
        assert_eq!(err.to_string(), "Select prompt 'Pick:' has no options");
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let options = vec!["a".to_string()];
        assert!(selected(&options, 0).is_ok());
        assert_eq!(
            selected(&options, 3).unwrap_err().to_string(),
            "Selection 3 is out of range for 1 options"
        );
    }
}
