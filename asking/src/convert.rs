//! Ready-made converters.
//!
//! Converters turn the raw answer of a prompt into the value that is validated and
//! recorded. A rejected conversion is reported and the user is asked again.

use crate::{AnswerValue, Converter, InvalidAnswer, parse_bool};

/// Strip leading and trailing whitespace.
pub fn trim() -> Converter<'static> {
    Box::new(|value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        Ok(AnswerValue::from(text(value)?.trim()))
    })
}

/// Lowercase the answer.
pub fn lowercase() -> Converter<'static> {
    Box::new(|value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        Ok(AnswerValue::String(text(value)?.to_lowercase()))
    })
}

/// Parse the answer as a whole number.
pub fn to_int() -> Converter<'static> {
    Box::new(|value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        match value {
            AnswerValue::Int(i) => Ok(AnswerValue::Int(*i)),
            other => {
                let input = text(other)?;
                input
                    .trim()
                    .parse::<i64>()
                    .map(AnswerValue::Int)
                    .map_err(|_| InvalidAnswer::new(format!("'{input}' is not a whole number")))
            }
        }
    })
}

/// Parse the answer as a number.
pub fn to_float() -> Converter<'static> {
    Box::new(|value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        match value {
            AnswerValue::Float(f) => Ok(AnswerValue::Float(*f)),
            AnswerValue::Int(i) => Ok(AnswerValue::Float(*i as f64)),
            other => {
                let input = text(other)?;
                input
                    .trim()
                    .parse::<f64>()
                    .map(AnswerValue::Float)
                    .map_err(|_| InvalidAnswer::new(format!("'{input}' is not a number")))
            }
        }
    })
}

/// Parse yes/no style answers.
pub fn to_bool() -> Converter<'static> {
    Box::new(|value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        match value {
            AnswerValue::Bool(b) => Ok(AnswerValue::Bool(*b)),
            other => {
                let input = text(other)?;
                parse_bool(input)
                    .map(AnswerValue::Bool)
                    .ok_or_else(|| InvalidAnswer::new(format!("'{input}' is not yes or no")))
            }
        }
    })
}

/// Split the answer on `separator` into a list, dropping blank items.
pub fn split(separator: &str) -> Converter<'static> {
    let separator = separator.to_string();
    Box::new(move |value: &AnswerValue| -> Result<AnswerValue, InvalidAnswer> {
        let items = text(value)?
            .split(separator.as_str())
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        Ok(AnswerValue::StringList(items))
    })
}

fn text(value: &AnswerValue) -> Result<&str, InvalidAnswer> {
    value.as_str().ok_or_else(|| {
        InvalidAnswer::new(format!("Expected a text answer, got {}", value.type_name()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_int_parses_trimmed_text() {
        let mut convert = to_int();
        assert_eq!(convert(&AnswerValue::from(" 42 ")), Ok(AnswerValue::Int(42)));
        assert_eq!(
            convert(&AnswerValue::from("forty-two")),
            Err(InvalidAnswer::new("'forty-two' is not a whole number"))
        );
    }

    #[test]
    fn to_float_widens_ints() {
        let mut convert = to_float();
        assert_eq!(convert(&AnswerValue::Int(2)), Ok(AnswerValue::Float(2.0)));
        assert_eq!(
            convert(&AnswerValue::from("0.5")),
            Ok(AnswerValue::Float(0.5))
        );
    }

    #[test]
    fn to_bool_understands_yes() {
        let mut convert = to_bool();
        assert_eq!(convert(&AnswerValue::from("YES")), Ok(AnswerValue::Bool(true)));
        assert!(convert(&AnswerValue::from("maybe")).is_err());
    }

    #[test]
    fn split_drops_blanks() {
        let mut convert = split(",");
        assert_eq!(
            convert(&AnswerValue::from("rust, go,, zig ")),
            Ok(AnswerValue::from(vec!["rust", "go", "zig"]))
        );
    }

    #[test]
    fn text_converters_reject_other_kinds() {
        let mut convert = trim();
        assert_eq!(
            convert(&AnswerValue::Bool(true)),
            Err(InvalidAnswer::new("Expected a text answer, got Bool"))
        );
        let mut convert = lowercase();
        assert_eq!(
            convert(&AnswerValue::from("HeLLo")),
            Ok(AnswerValue::from("hello"))
        );
    }
}
