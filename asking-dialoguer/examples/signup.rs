//! Every dialoguer prompt in one sequence. Run with: cargo run -p asking-dialoguer --example signup

use asking::{Answers, Question, ask, convert, validate};
use asking_dialoguer::{
    ConfirmPrompt, EditorPrompt, InputPrompt, MultiSelectPrompt, PasswordPrompt, SelectPrompt,
};

fn main() -> anyhow::Result<()> {
    let mut username = InputPrompt::new("Username:");
    let mut password = PasswordPrompt::new("Password:").confirm("Repeat password:");
    let mut age = InputPrompt::new("Age:").default("30");
    let mut plan = SelectPrompt::new("Plan:", ["free", "pro", "team"]);
    let mut topics = MultiSelectPrompt::new("Topics:", ["async", "macros", "embedded", "web"])
        .defaults(["async"]);
    let mut bio = EditorPrompt::new("Short bio:").extension(".md");
    let mut newsletter = ConfirmPrompt::new("Subscribe to the newsletter?").default(true);

    let mut questions = [
        Question::new("username", &mut username)
            .with_validator(validate::compose(vec![
                validate::required(),
                validate::min_length(3),
                validate::max_length(16),
            ]))
            .with_converter(convert::lowercase()),
        Question::new("password", &mut password).with_validator(validate::min_length(8)),
        Question::new("age", &mut age).with_converter(convert::to_int()),
        Question::new("plan", &mut plan),
        Question::new("topics", &mut topics),
        Question::new("bio", &mut bio),
        Question::new("newsletter", &mut newsletter),
    ];

    let mut answers = Answers::new();
    ask(&mut questions, Some(&mut answers))?;

    for (name, value) in &answers {
        if name != "password" {
            println!("{name}: {value}");
        }
    }
    Ok(())
}
