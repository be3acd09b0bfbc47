use anyhow::Context;
use asking::{
    AnswerSink, AnswerValue, Asker, CleanupFailure, InvalidAnswer, Question, convert, validate,
};
use asking_dialoguer::{ConfirmPrompt, InputPrompt, MultiSelectPrompt, SelectPrompt};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fill in a developer profile in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Draw prompts without colors
    #[arg(long)]
    plain: bool,

    /// Give up on a question after this many rejected answers (0 = never)
    #[arg(long, default_value_t = 0)]
    max_attempts: usize,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Default, AnswerSink)]
struct Profile {
    name: String,
    age: u8,
    #[answer(rename = "favourite-language")]
    language: String,
    interests: Vec<String>,
    mentor: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    // Prompts draw on stderr too; keep stdout for the result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let asker = Asker::new()
        .on_cleanup_failure(CleanupFailure::Warn)
        .max_attempts(cli.max_attempts);

    let profile = ask_profile(&asker, cli.plain)?;
    info!(name = %profile.name, "profile complete");

    let mut confirm = ConfirmPrompt::new("Save this profile?").default(true);
    if cli.plain {
        confirm = confirm.plain();
    }
    let mut save = false;
    asker
        .ask_one(&mut confirm, Some(&mut save), None, None)
        .context("Failed to confirm the profile")?;

    if save {
        println!("{profile:#?}");
    } else {
        println!("Discarded.");
    }
    Ok(())
}

fn ask_profile(asker: &Asker, plain: bool) -> anyhow::Result<Profile> {
    let mut name = InputPrompt::new("What is your name?");
    let mut age = InputPrompt::new("How old are you?");
    let mut language = SelectPrompt::new("Favourite language:", ["Rust", "Go", "Zig", "C"]);
    let mut interests =
        MultiSelectPrompt::new("Interests:", ["CLIs", "embedded", "web", "compilers"]);
    let mut mentor = InputPrompt::new("Mentor (optional):").allow_empty(true);

    if plain {
        name = name.plain();
        age = age.plain();
        language = language.plain();
        interests = interests.plain();
        mentor = mentor.plain();
    }

    let mut questions = [
        Question::new("name", &mut name)
            .with_validator(validate::compose(vec![
                validate::required(),
                validate::max_length(40),
            ]))
            .with_converter(convert::trim()),
        Question::new("age", &mut age)
            .with_converter(convert::to_int())
            .with_validator(valid_age),
        Question::new("favourite-language", &mut language),
        Question::new("interests", &mut interests),
        Question::new("mentor", &mut mentor).with_converter(convert::trim()),
    ];

    let mut profile = Profile::default();
    asker
        .ask(&mut questions, Some(&mut profile))
        .context("Failed to fill in the profile")?;
    Ok(profile)
}

/// Ages must fit the `u8` field, so out-of-range answers are asked again.
fn valid_age(value: &AnswerValue) -> Result<(), InvalidAnswer> {
    match value.as_int() {
        Some(age) if u8::try_from(age).is_ok() => Ok(()),
        _ => Err(InvalidAnswer::new("Age must be between 0 and 255")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_outside_u8_is_rejected() {
        assert!(valid_age(&AnswerValue::Int(42)).is_ok());
        assert!(valid_age(&AnswerValue::Int(255)).is_ok());
        assert!(valid_age(&AnswerValue::Int(300)).is_err());
        assert!(valid_age(&AnswerValue::Int(-1)).is_err());
        assert!(valid_age(&AnswerValue::from("42")).is_err());
    }
}
