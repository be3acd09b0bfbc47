//! # asking
//!
//! Ask a sequence of questions, re-prompting until every answer converts and validates,
//! and record the answers into a destination of your choice. Prompt-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use asking::{AnswerSink, Question, ask, convert, validate};
//! use asking_dialoguer::InputPrompt;
//!
//! #[derive(AnswerSink, Debug, Default)]
//! struct Server {
//!     host: String,
//!     #[answer(rename = "port-number")]
//!     port: u16,
//! }
//!
//! let mut host = InputPrompt::new("Server host:").default("localhost");
//! let mut port = InputPrompt::new("Server port:");
//! let mut server = Server::default();
//!
//! ask(
//!     &mut [
//!         Question::new("host", &mut host).with_validator(validate::required()),
//!         Question::new("port-number", &mut port).with_converter(convert::to_int()),
//!     ],
//!     Some(&mut server),
//! )?;
//! ```
//!
//! ## Per question
//!
//! 1. The prompt is asked for an answer.
//! 2. If there is a converter, it runs on the answer. Rejections are reported through the
//!    prompt and the user is asked again until conversion succeeds.
//! 3. If there is a validator, it runs on the converted answer, again re-prompting on rejection.
//! 4. The prompt cleans up with the last answer obtained.
//! 5. The converted answer is recorded into the destination under the question name.
//!
//! Any prompt, report or record failure aborts the whole sequence.
//!
//! ## Destinations
//!
//! Anything implementing `AnswerSink`:
//! - `Answers`, `HashMap<String, AnswerValue>`, `BTreeMap<String, AnswerValue>` - keyed by name
//! - `String`, `bool`, integers, floats, `Vec<String>`, `Option<T>` - single values for `ask_one`
//! - structs with `#[derive(AnswerSink)]` - fields matched by name or `#[answer(rename = "...")]`
//!
//! ## Prompts
//!
//! Prompts are separate crates that implement `Prompt`:
//! - `asking-dialoguer` - terminal prompts via dialoguer
//! - `ScriptedPrompt` in this crate - replays answers for tests

// Re-export all types from asking-types
pub use asking_types::*;

// Re-export the derive macro
pub use asking_macro::AnswerSink;

mod asker;
pub use asker::{Asker, CleanupFailure, Revalidation};

mod error;
pub use error::AskError;

pub mod convert;
pub mod validate;

// Scripted prompt for testing sequences without user interaction
mod scripted_prompt;
pub use scripted_prompt::{ScriptError, ScriptedPrompt};

/// Ask every question in order, recording each accepted answer into `answers`.
///
/// Fails with `AskError::NoDestination`, before prompting anything, when `answers` is `None`.
/// Uses the default [`Asker`] settings.
pub fn ask<S: AnswerSink + ?Sized>(
    questions: &mut [Question<'_>],
    answers: Option<&mut S>,
) -> Result<(), AskError> {
    Asker::new().ask(questions, answers)
}

/// Ask one unnamed question and record the answer into `answer`.
///
/// Same as [`ask`] with a single question built from the arguments.
pub fn ask_one<'a, S: AnswerSink + ?Sized>(
    prompt: &'a mut dyn Prompt,
    answer: Option<&mut S>,
    validate: Option<Validator<'a>>,
    convert: Option<Converter<'a>>,
) -> Result<(), AskError> {
    Asker::new().ask_one(prompt, answer, validate, convert)
}
