//! Scripted prompt for testing question sequences without user interaction.
//!
//! `ScriptedPrompt` replays pre-defined replies and records every call the
//! sequencer makes, so tests can assert exactly how a question was driven.
//!
//! # Example
//!
//! ```rust
//! use asking::{ScriptedPrompt, ask_one, convert};
//!
//! let mut prompt = ScriptedPrompt::new().answer("eight").answer("8");
//! let mut threads = 0_usize;
//!
//! ask_one(&mut prompt, Some(&mut threads), None, Some(convert::to_int())).unwrap();
//!
//! assert_eq!(threads, 8);
//! assert_eq!(prompt.prompts(), 2);
//! assert_eq!(prompt.reported().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::{AnswerValue, InvalidAnswer, Prompt, PromptError};

/// A prompt that returns pre-configured replies.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    replies: VecDeque<Reply>,
    report_failure: Option<PromptError>,
    cleanup_failure: Option<PromptError>,
    prompts: usize,
    reported: Vec<InvalidAnswer>,
    cleaned_up: Vec<AnswerValue>,
}

#[derive(Debug)]
enum Reply {
    Answer(AnswerValue),
    Fail(PromptError),
}

/// Error type for ScriptedPrompt.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Scripted prompt ran out of replies after {0} prompts")]
    Exhausted(usize),
}

impl ScriptedPrompt {
    /// Create a prompt with no replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer.
    pub fn answer(mut self, value: impl Into<AnswerValue>) -> Self {
        self.replies.push_back(Reply::Answer(value.into()));
        self
    }

    /// Queue several answers.
    pub fn answers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnswerValue>,
    {
        self.replies
            .extend(values.into_iter().map(|value| Reply::Answer(value.into())));
        self
    }

    /// Queue a failure of `prompt()`.
    pub fn fail(mut self, err: impl Into<PromptError>) -> Self {
        self.replies.push_back(Reply::Fail(err.into()));
        self
    }

    /// Make the next call to `error()` fail.
    pub fn fail_report(mut self, err: impl Into<PromptError>) -> Self {
        self.report_failure = Some(err.into());
        self
    }

    /// Make the next call to `cleanup()` fail.
    pub fn fail_cleanup(mut self, err: impl Into<PromptError>) -> Self {
        self.cleanup_failure = Some(err.into());
        self
    }

    /// Number of times `prompt()` was called.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Every rejection passed to `error()`, in order.
    pub fn reported(&self) -> &[InvalidAnswer] {
        &self.reported
    }

    /// Every value passed to `cleanup()`, in order.
    pub fn cleaned_up(&self) -> &[AnswerValue] {
        &self.cleaned_up
    }

    /// Number of replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        self.prompts += 1;
        match self.replies.pop_front() {
            Some(Reply::Answer(value)) => Ok(value),
            Some(Reply::Fail(err)) => Err(err),
            None => Err(PromptError::other(ScriptError::Exhausted(self.prompts - 1))),
        }
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        self.reported.push(invalid.clone());
        match self.report_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        self.cleaned_up.push(answer.clone());
        match self.cleanup_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_runs_dry() {
        let mut prompt = ScriptedPrompt::new().answers(["a", "b"]);

        assert_eq!(prompt.prompt().unwrap(), AnswerValue::from("a"));
        assert_eq!(prompt.prompt().unwrap(), AnswerValue::from("b"));
        let err = prompt.prompt().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Scripted prompt ran out of replies after 2 prompts"
        );
        assert_eq!(prompt.prompts(), 3);
    }

    #[test]
    fn report_failure_fires_once() {
        let mut prompt = ScriptedPrompt::new().fail_report(PromptError::Interrupted);
        let invalid = InvalidAnswer::new("nope");

        assert!(prompt.error(&invalid).unwrap_err().is_interrupted());
        assert!(prompt.error(&invalid).is_ok());
        assert_eq!(prompt.reported().len(), 2);
    }
}
