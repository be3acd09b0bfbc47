//! The question sequencer.

use std::num::NonZeroUsize;

use tracing::{debug, trace, warn};

use crate::{
    AnswerSink, AnswerValue, AskError, Converter, InvalidAnswer, Prompt, Question, Validator,
};

/// What to do when a prompt fails to clean up after an accepted answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanupFailure {
    /// Carry on silently.
    Ignore,

    /// Log the failure at warn level and carry on.
    #[default]
    Warn,

    /// Abort the sequence with `AskError::Cleanup`.
    Abort,
}

/// What a rejected validation does with the answer obtained after re-prompting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Revalidation {
    /// Validate the converted value from before the rejection again; the new raw answer
    /// is only passed to `cleanup`. The validator must be able to change its verdict.
    #[default]
    KeepConverted,

    /// Convert the new raw answer (re-prompting while conversion fails) and validate that.
    Reconvert,
}

/// Runs question sequences.
///
/// `Asker::default()` is what [`ask`](crate::ask) and [`ask_one`](crate::ask_one) use.
///
/// ```rust
/// use asking::{Answers, Asker, CleanupFailure, Question, Revalidation, ScriptedPrompt, validate};
///
/// let mut name = ScriptedPrompt::new().answer("").answer("Ferris");
/// let mut answers = Answers::new();
///
/// Asker::new()
///     .revalidation(Revalidation::Reconvert)
///     .on_cleanup_failure(CleanupFailure::Abort)
///     .max_attempts(3)
///     .ask(
///         &mut [Question::new("name", &mut name).with_validator(validate::required())],
///         Some(&mut answers),
///     )
///     .unwrap();
///
/// assert_eq!(answers.get_string("name").unwrap(), "Ferris");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Asker {
    cleanup: CleanupFailure,
    revalidation: Revalidation,
    max_attempts: Option<NonZeroUsize>,
}

impl Asker {
    /// Create an asker with default settings.
    pub const fn new() -> Self {
        Self {
            cleanup: CleanupFailure::Warn,
            revalidation: Revalidation::KeepConverted,
            max_attempts: None,
        }
    }

    /// Choose how cleanup failures are handled.
    pub const fn on_cleanup_failure(mut self, policy: CleanupFailure) -> Self {
        self.cleanup = policy;
        self
    }

    /// Choose what gets validated after a rejected validation.
    pub const fn revalidation(mut self, revalidation: Revalidation) -> Self {
        self.revalidation = revalidation;
        self
    }

    /// Give up on a question after this many rejected answers. `0` means no limit.
    pub const fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = NonZeroUsize::new(attempts);
        self
    }

    /// Ask every question in order and record each accepted answer into `answers`.
    ///
    /// The first failure aborts the sequence. Answers recorded before the failure stay recorded.
    pub fn ask<S: AnswerSink + ?Sized>(
        &self,
        questions: &mut [Question<'_>],
        answers: Option<&mut S>,
    ) -> Result<(), AskError> {
        let Some(answers) = answers else {
            return Err(AskError::NoDestination);
        };

        for (index, question) in questions.iter_mut().enumerate() {
            debug!(index, question = %question.name, "asking question");
            let answer = self.ask_question(question)?;
            answers.write_answer(&question.name, answer)?;
            debug!(index, question = %question.name, "answer recorded");
        }

        Ok(())
    }

    /// Ask a single unnamed question. Equivalent to [`Asker::ask`] with a one-element list.
    pub fn ask_one<'a, S: AnswerSink + ?Sized>(
        &self,
        prompt: &'a mut dyn Prompt,
        answer: Option<&mut S>,
        validate: Option<Validator<'a>>,
        convert: Option<Converter<'a>>,
    ) -> Result<(), AskError> {
        let mut questions = [Question {
            name: String::new(),
            prompt,
            validate,
            convert,
        }];
        self.ask(&mut questions, answer)
    }

    /// Run one question to its accepted value.
    fn ask_question(&self, question: &mut Question<'_>) -> Result<AnswerValue, AskError> {
        let Question {
            name,
            prompt,
            validate,
            convert,
        } = question;
        let name = name.as_str();
        let mut attempts = Attempts::new(name, self.max_attempts);

        let mut raw = prompt.prompt().map_err(AskError::Prompt)?;
        let mut converted = match convert {
            Some(convert) => {
                convert_until_accepted(&mut **prompt, convert, &mut raw, &mut attempts)?
            }
            None => raw.clone(),
        };

        if let Some(validate) = validate {
            while let Err(invalid) = validate(&converted) {
                debug!(question = %name, %invalid, "validation rejected answer");
                reject(&mut **prompt, &invalid, &mut attempts)?;
                raw = prompt.prompt().map_err(AskError::Prompt)?;

                if self.revalidation == Revalidation::Reconvert {
                    converted = match convert {
                        Some(convert) => convert_until_accepted(
                            &mut **prompt,
                            convert,
                            &mut raw,
                            &mut attempts,
                        )?,
                        None => raw.clone(),
                    };
                }
            }
        }

        if let Err(err) = prompt.cleanup(&raw) {
            match self.cleanup {
                CleanupFailure::Ignore => {
                    trace!(question = %name, error = %err, "prompt cleanup failed");
                }
                CleanupFailure::Warn => {
                    warn!(question = %name, error = %err, "prompt cleanup failed");
                }
                CleanupFailure::Abort => return Err(AskError::Cleanup(err)),
            }
        }

        Ok(converted)
    }
}

/// Convert `raw`, re-prompting until the converter accepts it. `raw` ends up holding the
/// last answer obtained.
fn convert_until_accepted<P: Prompt + ?Sized>(
    prompt: &mut P,
    convert: &mut Converter<'_>,
    raw: &mut AnswerValue,
    attempts: &mut Attempts<'_>,
) -> Result<AnswerValue, AskError> {
    loop {
        match convert(&*raw) {
            Ok(converted) => return Ok(converted),
            Err(invalid) => {
                debug!(question = %attempts.name, %invalid, "conversion rejected answer");
                reject(prompt, &invalid, attempts)?;
                *raw = prompt.prompt().map_err(AskError::Prompt)?;
            }
        }
    }
}

fn reject<P: Prompt + ?Sized>(
    prompt: &mut P,
    invalid: &InvalidAnswer,
    attempts: &mut Attempts<'_>,
) -> Result<(), AskError> {
    prompt.error(invalid).map_err(AskError::Report)?;
    attempts.count_rejection()
}

/// Rejected answers for one question, checked against the optional limit.
struct Attempts<'q> {
    name: &'q str,
    rejected: usize,
    limit: Option<NonZeroUsize>,
}

impl<'q> Attempts<'q> {
    fn new(name: &'q str, limit: Option<NonZeroUsize>) -> Self {
        Self {
            name,
            rejected: 0,
            limit,
        }
    }

    fn count_rejection(&mut self) -> Result<(), AskError> {
        self.rejected += 1;
        match self.limit {
            Some(limit) if self.rejected >= limit.get() => Err(AskError::TooManyAttempts {
                name: self.name.to_string(),
                attempts: self.rejected,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answers, ScriptedPrompt};

    #[test]
    fn attempt_limit_counts_rejections() {
        let mut attempts = Attempts::new("pin", NonZeroUsize::new(2));
        assert!(attempts.count_rejection().is_ok());
        assert!(matches!(
            attempts.count_rejection(),
            Err(AskError::TooManyAttempts { attempts: 2, .. })
        ));
    }

    #[test]
    fn unlimited_by_default() {
        let mut attempts = Attempts::new("pin", None);
        for _ in 0..100 {
            assert!(attempts.count_rejection().is_ok());
        }
    }

    #[test]
    fn zero_attempts_means_no_limit() {
        assert_eq!(Asker::new().max_attempts(0).max_attempts, None);
    }

    #[test]
    fn reconvert_validates_the_new_answer() {
        let mut prompt = ScriptedPrompt::new().answer("3").answer("x").answer("12");
        let mut answers = Answers::new();

        Asker::new()
            .revalidation(Revalidation::Reconvert)
            .ask(
                &mut [Question::new("size", &mut prompt)
                    .with_converter(crate::convert::to_int())
                    .with_validator(|value: &AnswerValue| match value.as_int() {
                        Some(n) if n >= 10 => Ok(()),
                        _ => Err("must be at least 10".into()),
                    })],
                Some(&mut answers),
            )
            .unwrap();

        assert_eq!(answers.get_int("size").unwrap(), 12);
        assert_eq!(prompt.prompts(), 3);
        assert_eq!(
            prompt.reported(),
            &[
                InvalidAnswer::new("must be at least 10"),
                InvalidAnswer::new("'x' is not a whole number"),
            ]
        );
        assert_eq!(prompt.cleaned_up(), &[AnswerValue::from("12")]);
    }
}
