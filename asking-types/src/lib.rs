//! Core types for the asking crate.
//!
//! This crate provides the foundational types for question sequences:
//! - `Question` - A named question with its prompt, validator and converter
//! - `Prompt` - The capability that obtains raw answers from a user
//! - `AnswerValue` and `Answers` - Answer values and a name-keyed container for them
//! - `AnswerSink` and `FromAnswer` - Recording answers into caller-defined destinations

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod question;
pub use question::{Converter, Question, Validator};

mod error;
pub use error::{BindError, CoerceError, InvalidAnswer, PromptError};

mod from_answer;
pub use from_answer::{FromAnswer, parse_bool};

mod sink;
pub use sink::AnswerSink;

mod traits;
pub use traits::Prompt;
