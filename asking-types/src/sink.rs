use std::collections::{BTreeMap, HashMap};

use crate::{AnswerValue, Answers, BindError, FromAnswer};

/// A destination that accepted answers are recorded into, by question name.
///
/// Keyed containers store the value under the name. Single-value slots (a `String`,
/// a `u16`, ...) ignore the name and coerce the value into themselves, which is what
/// `ask_one` relies on. Structs get an implementation from `#[derive(AnswerSink)]`.
pub trait AnswerSink {
    /// Record `value` as the answer to the question called `name`.
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError>;
}

impl<S: AnswerSink + ?Sized> AnswerSink for &mut S {
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
        (**self).write_answer(name, value)
    }
}

impl AnswerSink for Answers {
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
        if name.is_empty() {
            return Err(BindError::MissingName);
        }
        self.insert(name, value);
        Ok(())
    }
}

impl AnswerSink for HashMap<String, AnswerValue> {
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
        if name.is_empty() {
            return Err(BindError::MissingName);
        }
        self.insert(name.to_string(), value);
        Ok(())
    }
}

impl AnswerSink for BTreeMap<String, AnswerValue> {
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
        if name.is_empty() {
            return Err(BindError::MissingName);
        }
        self.insert(name.to_string(), value);
        Ok(())
    }
}

macro_rules! impl_slot_sink {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AnswerSink for $ty {
                fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
                    *self = <$ty as FromAnswer>::from_answer(value)
                        .map_err(|source| BindError::coerce(name, source))?;
                    Ok(())
                }
            }
        )*
    };
}

impl_slot_sink!(
    AnswerValue,
    String,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Vec<String>,
);

impl<T: FromAnswer> AnswerSink for Option<T> {
    fn write_answer(&mut self, name: &str, value: AnswerValue) -> Result<(), BindError> {
        *self = <Option<T>>::from_answer(value).map_err(|source| BindError::coerce(name, source))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoerceError;

    #[test]
    fn keyed_sinks_need_a_name() {
        let mut answers = Answers::new();
        assert_eq!(
            answers.write_answer("", AnswerValue::from("x")),
            Err(BindError::MissingName)
        );

        let mut map: HashMap<String, AnswerValue> = HashMap::new();
        map.write_answer("colour", AnswerValue::from("red")).unwrap();
        assert_eq!(map.get("colour"), Some(&AnswerValue::from("red")));
    }

    #[test]
    fn slots_ignore_the_name() {
        let mut port = 0_u16;
        port.write_answer("", AnswerValue::Int(8080)).unwrap();
        assert_eq!(port, 8080);

        let mut nickname: Option<String> = Some("old".to_string());
        nickname.write_answer("nick", AnswerValue::from("")).unwrap();
        assert_eq!(nickname, None);
    }

    #[test]
    fn slot_reports_question_name_on_mismatch() {
        let mut enabled = false;
        let err = enabled
            .write_answer("enabled", AnswerValue::Float(1.5))
            .unwrap_err();
        assert_eq!(
            err,
            BindError::Coerce {
                name: "enabled".to_string(),
                source: CoerceError::Incompatible {
                    expected: "bool",
                    actual: "Float",
                },
            }
        );
        assert!(!enabled);
    }
}
