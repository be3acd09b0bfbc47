use std::fmt;

use crate::{AnswerValue, InvalidAnswer, Prompt};

/// Checks a (converted) answer. Runs after conversion; an `Err` makes the user answer again.
pub type Validator<'a> = Box<dyn FnMut(&AnswerValue) -> Result<(), InvalidAnswer> + 'a>;

/// Maps a raw answer to the value that gets validated and recorded.
pub type Converter<'a> = Box<dyn FnMut(&AnswerValue) -> Result<AnswerValue, InvalidAnswer> + 'a>;

/// A single question in a sequence.
///
/// The prompt is borrowed from the caller for as long as the question lives;
/// validator and converter are optional.
pub struct Question<'a> {
    /// Name the accepted answer is recorded under.
    pub name: String,

    /// The prompt that obtains raw answers.
    pub prompt: &'a mut dyn Prompt,

    /// Optional check applied after conversion.
    pub validate: Option<Validator<'a>>,

    /// Optional conversion applied before validation.
    pub convert: Option<Converter<'a>>,
}

impl<'a> Question<'a> {
    /// Create a question without validation or conversion.
    pub fn new(name: impl Into<String>, prompt: &'a mut dyn Prompt) -> Self {
        Self {
            name: name.into(),
            prompt,
            validate: None,
            convert: None,
        }
    }

    /// Set the validator.
    pub fn with_validator(
        mut self,
        validate: impl FnMut(&AnswerValue) -> Result<(), InvalidAnswer> + 'a,
    ) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Set the converter.
    pub fn with_converter(
        mut self,
        convert: impl FnMut(&AnswerValue) -> Result<AnswerValue, InvalidAnswer> + 'a,
    ) -> Self {
        self.convert = Some(Box::new(convert));
        self
    }

    /// Get the question name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the question has a validator.
    pub fn is_validated(&self) -> bool {
        self.validate.is_some()
    }

    /// Check if the question has a converter.
    pub fn is_converted(&self) -> bool {
        self.convert.is_some()
    }
}

impl fmt::Debug for Question<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("validate", &self.validate.is_some())
            .field("convert", &self.convert.is_some())
            .finish_non_exhaustive()
    }
}
