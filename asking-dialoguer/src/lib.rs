//! # asking-dialoguer
//!
//! Dialoguer terminal prompts for asking.
//!
//! This crate provides `Prompt` implementations that draw questions in the terminal
//! using the `dialoguer` library. Each prompt renders its own final answer line on
//! cleanup and prints rejected answers with the theme's error style.
//!
//! ## Example
//!
//! ```rust,ignore
//! use asking::{ask_one, validate};
//! use asking_dialoguer::InputPrompt;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut prompt = InputPrompt::new("What is your name?");
//!     let mut name = String::new();
//!     ask_one(&mut prompt, Some(&mut name), Some(validate::required()), None)?;
//!     println!("Hello, {name}!");
//!     Ok(())
//! }
//! ```

mod choice;
mod render;
mod text;

pub use choice::{ConfirmPrompt, MultiSelectPrompt, SelectPrompt};
pub use render::DialoguerError;
pub use text::{EditorPrompt, InputPrompt, PasswordPrompt};
