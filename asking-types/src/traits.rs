use crate::{AnswerValue, InvalidAnswer, PromptError};

/// Trait for anything that can obtain answers from a user.
///
/// Implementations render the question, read input and draw feedback. The
/// sequencer only calls these three methods, in this order per question:
/// `prompt` once, then `error` + `prompt` for every rejected answer, then `cleanup` once.
pub trait Prompt {
    /// Obtain one raw answer.
    fn prompt(&mut self) -> Result<AnswerValue, PromptError>;

    /// Show why the last answer was rejected.
    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError>;

    /// Finalize the prompt's visual state with the last raw answer obtained.
    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        (**self).prompt()
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        (**self).error(invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        (**self).cleanup(answer)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn prompt(&mut self) -> Result<AnswerValue, PromptError> {
        (**self).prompt()
    }

    fn error(&mut self, invalid: &InvalidAnswer) -> Result<(), PromptError> {
        (**self).error(invalid)
    }

    fn cleanup(&mut self, answer: &AnswerValue) -> Result<(), PromptError> {
        (**self).cleanup(answer)
    }
}
