//! Basic tests for the AnswerSink derive macro

// We need to create a fake asking module for the macro to work
mod asking {
    pub use asking_types::*;
}

use asking::{AnswerValue, BindError, CoerceError};
use asking::AnswerSink; // Import the trait
use asking_macro::AnswerSink;

#[derive(AnswerSink, Debug, Default, PartialEq)]
struct Signup {
    name: String,
    age: u32,
    newsletter: bool,
    languages: Vec<String>,
    nickname: Option<String>,
}

#[test]
fn test_fields_are_matched_by_name() {
    let mut signup = Signup::default();

    signup.write_answer("name", AnswerValue::from("Alice")).unwrap();
    signup.write_answer("age", AnswerValue::Int(25)).unwrap();
    signup
        .write_answer("newsletter", AnswerValue::Bool(true))
        .unwrap();
    signup
        .write_answer("languages", AnswerValue::from(vec!["rust", "go"]))
        .unwrap();
    signup.write_answer("nickname", AnswerValue::from("")).unwrap();

    assert_eq!(
        signup,
        Signup {
            name: "Alice".to_string(),
            age: 25,
            newsletter: true,
            languages: vec!["rust".to_string(), "go".to_string()],
            nickname: None,
        }
    );
}

#[test]
fn test_name_match_ignores_case() {
    let mut signup = Signup::default();
    signup.write_answer("NewsLetter", AnswerValue::from("yes")).unwrap();
    assert!(signup.newsletter);
}

#[test]
fn test_unknown_name_is_rejected() {
    let mut signup = Signup::default();
    assert_eq!(
        signup.write_answer("email", AnswerValue::from("a@b.c")),
        Err(BindError::UnknownField("email".to_string()))
    );
}

#[test]
fn test_incompatible_value_names_the_question() {
    let mut signup = Signup::default();
    assert_eq!(
        signup.write_answer("age", AnswerValue::Int(-3)),
        Err(BindError::Coerce {
            name: "age".to_string(),
            source: CoerceError::OutOfRange {
                expected: "u32",
                value: -3,
            },
        })
    );
    assert_eq!(signup.age, 0);
}

#[derive(AnswerSink, Debug, Default)]
struct Renamed {
    #[answer(rename = "favourite-colour")]
    colour: String,

    #[answer(rename = "size")]
    width: u16,

    size: u16,

    #[answer(skip)]
    secret: String,

    r#type: String,
}

#[test]
fn test_rename_is_matched_exactly() {
    let mut renamed = Renamed::default();
    renamed
        .write_answer("favourite-colour", AnswerValue::from("teal"))
        .unwrap();
    assert_eq!(renamed.colour, "teal");

    // Field identifiers still match after renames.
    renamed.write_answer("colour", AnswerValue::from("red")).unwrap();
    assert_eq!(renamed.colour, "red");

    assert!(matches!(
        renamed.write_answer("FAVOURITE-COLOUR", AnswerValue::from("x")),
        Err(BindError::UnknownField(_))
    ));
}

#[test]
fn test_rename_wins_over_field_name() {
    let mut renamed = Renamed::default();
    renamed.write_answer("size", AnswerValue::Int(12)).unwrap();
    assert_eq!(renamed.width, 12);
    assert_eq!(renamed.size, 0);
}

#[test]
fn test_skipped_fields_and_raw_identifiers() {
    let mut renamed = Renamed::default();
    assert!(matches!(
        renamed.write_answer("secret", AnswerValue::from("hunter2")),
        Err(BindError::UnknownField(_))
    ));
    assert!(renamed.secret.is_empty());

    renamed.write_answer("type", AnswerValue::from("admin")).unwrap();
    assert_eq!(renamed.r#type, "admin");
}

#[derive(AnswerSink, Default)]
struct Wrapper<T: asking::FromAnswer + Default> {
    inner: T,
}

#[test]
fn test_generic_struct() {
    let mut wrapper = Wrapper::<f64>::default();
    wrapper.write_answer("inner", AnswerValue::from("1.5")).unwrap();
    assert_eq!(wrapper.inner, 1.5);
}
