//! Simple example for the dialoguer prompts. Run with: cargo run -p asking-dialoguer --example simple

use asking::{ask_one, validate};
use asking_dialoguer::InputPrompt;

fn main() -> anyhow::Result<()> {
    let mut prompt = InputPrompt::new("What is your name?");
    let mut name = String::new();
    ask_one(&mut prompt, Some(&mut name), Some(validate::required()), None)?;
    println!("Hello, {name}!");
    Ok(())
}
