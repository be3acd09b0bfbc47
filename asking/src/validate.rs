//! Ready-made validators.
//!
//! ```rust
//! use asking::{AnswerValue, validate};
//!
//! let mut check = validate::compose(vec![validate::required(), validate::max_length(8)]);
//! assert!(check(&AnswerValue::from("ferris")).is_ok());
//! assert!(check(&AnswerValue::from("")).is_err());
//! ```

use crate::{AnswerValue, InvalidAnswer, Validator};

/// Reject empty strings and empty selections.
pub fn required() -> Validator<'static> {
    Box::new(|value: &AnswerValue| {
        if value.is_empty() {
            Err(InvalidAnswer::new("Value is required"))
        } else {
            Ok(())
        }
    })
}

/// Reject answers shorter than `min` characters (or selections with fewer than `min` items).
pub fn min_length(min: usize) -> Validator<'static> {
    Box::new(move |value: &AnswerValue| -> Result<(), InvalidAnswer> {
        if length(value)? < min {
            Err(InvalidAnswer::new(format!(
                "Value is too short. Min length is {min}"
            )))
        } else {
            Ok(())
        }
    })
}

/// Reject answers longer than `max` characters (or selections with more than `max` items).
pub fn max_length(max: usize) -> Validator<'static> {
    Box::new(move |value: &AnswerValue| -> Result<(), InvalidAnswer> {
        if length(value)? > max {
            Err(InvalidAnswer::new(format!(
                "Value is too long. Max length is {max}"
            )))
        } else {
            Ok(())
        }
    })
}

/// Accept only string answers equal to one of `options`.
pub fn one_of<I, S>(options: I) -> Validator<'static>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    Box::new(move |value: &AnswerValue| match value.as_str() {
        Some(s) if options.iter().any(|option| option == s) => Ok(()),
        _ => Err(InvalidAnswer::new(format!(
            "Value must be one of: {}",
            options.join(", ")
        ))),
    })
}

/// Run several validators in order; the first rejection wins.
pub fn compose<'a>(mut validators: Vec<Validator<'a>>) -> Validator<'a> {
    Box::new(move |value: &AnswerValue| {
        validators
            .iter_mut()
            .try_for_each(|validate| validate(value))
    })
}

fn length(value: &AnswerValue) -> Result<usize, InvalidAnswer> {
    match value {
        AnswerValue::String(s) => Ok(s.chars().count()),
        AnswerValue::StringList(list) => Ok(list.len()),
        other => Err(InvalidAnswer::new(format!(
            "Cannot check the length of a {} answer",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_accepts_scalars() {
        let mut check = required();
        assert!(check(&AnswerValue::Bool(false)).is_ok());
        assert!(check(&AnswerValue::Int(0)).is_ok());
        assert_eq!(
            check(&AnswerValue::StringList(Vec::new())),
            Err(InvalidAnswer::new("Value is required"))
        );
    }

    #[test]
    fn length_counts_chars_and_items() {
        let mut check = min_length(3);
        assert!(check(&AnswerValue::from("äöü")).is_ok());
        assert!(check(&AnswerValue::from(vec!["a", "b"])).is_err());
        assert!(check(&AnswerValue::Int(100)).is_err());

        let mut check = max_length(2);
        assert_eq!(
            check(&AnswerValue::from("abc")),
            Err(InvalidAnswer::new("Value is too long. Max length is 2"))
        );
    }

    #[test]
    fn one_of_lists_options() {
        let mut check = one_of(["red", "green"]);
        assert!(check(&AnswerValue::from("green")).is_ok());
        assert_eq!(
            check(&AnswerValue::from("blue")),
            Err(InvalidAnswer::new("Value must be one of: red, green"))
        );
    }

    #[test]
    fn compose_stops_at_first_rejection() {
        let mut check = compose(vec![required(), min_length(5)]);
        assert_eq!(
            check(&AnswerValue::from("")),
            Err(InvalidAnswer::new("Value is required"))
        );
        assert_eq!(
            check(&AnswerValue::from("abc")),
            Err(InvalidAnswer::new("Value is too short. Min length is 5"))
        );
    }
}
