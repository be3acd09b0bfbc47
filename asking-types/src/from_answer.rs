use crate::{AnswerValue, CoerceError};

/// Types that an answer value can be coerced into.
///
/// Matching kinds are copied directly. Strings are parsed into numbers and booleans,
/// integers widen into floats and narrow into smaller integers with a range check.
pub trait FromAnswer: Sized {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError>;
}

fn incompatible(expected: &'static str, value: &AnswerValue) -> CoerceError {
    CoerceError::Incompatible {
        expected,
        actual: value.type_name(),
    }
}

impl FromAnswer for AnswerValue {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
        Ok(value)
    }
}

impl FromAnswer for String {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
        match value {
            AnswerValue::String(s) => Ok(s),
            AnswerValue::StringList(_) => Err(incompatible("String", &value)),
            scalar => Ok(scalar.to_string()),
        }
    }
}

impl FromAnswer for bool {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
        match value {
            AnswerValue::Bool(b) => Ok(b),
            AnswerValue::String(s) => parse_bool(&s).ok_or(CoerceError::Parse {
                expected: "bool",
                input: s,
            }),
            other => Err(incompatible("bool", &other)),
        }
    }
}

/// Parse the yes/no spellings accepted for boolean answers.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => Some(true),
        "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

macro_rules! impl_from_answer_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromAnswer for $ty {
                fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
                    let wide = match value {
                        AnswerValue::Int(i) => i,
                        AnswerValue::String(s) => {
                            s.trim().parse::<i64>().map_err(|_| CoerceError::Parse {
                                expected: stringify!($ty),
                                input: s,
                            })?
                        }
                        other => return Err(incompatible(stringify!($ty), &other)),
                    };
                    <$ty>::try_from(wide).map_err(|_| CoerceError::OutOfRange {
                        expected: stringify!($ty),
                        value: wide,
                    })
                }
            }
        )*
    };
}

impl_from_answer_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_answer_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromAnswer for $ty {
                fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
                    match value {
                        AnswerValue::Float(f) => Ok(f as $ty),
                        AnswerValue::Int(i) => Ok(i as $ty),
                        AnswerValue::String(s) => {
                            s.trim().parse::<$ty>().map_err(|_| CoerceError::Parse {
                                expected: stringify!($ty),
                                input: s,
                            })
                        }
                        other => Err(incompatible(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_from_answer_float!(f32, f64);

impl FromAnswer for Vec<String> {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
        match value {
            AnswerValue::StringList(list) => Ok(list),
            AnswerValue::String(s) => Ok(vec![s]),
            other => Err(incompatible("Vec<String>", &other)),
        }
    }
}

/// Empty answers (blank string, no selections) become `None`.
impl<T: FromAnswer> FromAnswer for Option<T> {
    fn from_answer(value: AnswerValue) -> Result<Self, CoerceError> {
        if value.is_empty() {
            Ok(None)
        } else {
            T::from_answer(value).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_parse_into_numbers() {
        assert_eq!(u16::from_answer(AnswerValue::from(" 443 ")), Ok(443));
        assert_eq!(f64::from_answer(AnswerValue::from("2.5")), Ok(2.5));
        assert_eq!(
            i32::from_answer(AnswerValue::from("many")),
            Err(CoerceError::Parse {
                expected: "i32",
                input: "many".to_string(),
            })
        );
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(
            u8::from_answer(AnswerValue::Int(300)),
            Err(CoerceError::OutOfRange {
                expected: "u8",
                value: 300,
            })
        );
        assert_eq!(u8::from_answer(AnswerValue::Int(255)), Ok(255));
        assert_eq!(f32::from_answer(AnswerValue::Int(3)), Ok(3.0));
    }

    #[test]
    fn booleans_accept_yes_and_no() {
        assert_eq!(bool::from_answer(AnswerValue::from("Yes")), Ok(true));
        assert_eq!(bool::from_answer(AnswerValue::from("n")), Ok(false));
        assert!(bool::from_answer(AnswerValue::Int(1)).is_err());
    }

    #[test]
    fn lists_and_options() {
        assert_eq!(
            Vec::<String>::from_answer(AnswerValue::from("solo")),
            Ok(vec!["solo".to_string()])
        );
        assert_eq!(Option::<u32>::from_answer(AnswerValue::from("")), Ok(None));
        assert_eq!(
            Option::<u32>::from_answer(AnswerValue::from("7")),
            Ok(Some(7))
        );
        assert_eq!(
            String::from_answer(AnswerValue::from(vec!["a"])),
            Err(CoerceError::Incompatible {
                expected: "String",
                actual: "StringList",
            })
        );
    }
}
