use crate::{AnswerValue, BindError, FromAnswer};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(String),

    #[error("Type mismatch for answer '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected from a question sequence, keyed by question name.
///
/// Entries keep the order in which questions were first answered. Re-recording
/// an answer for a known name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    entries: Vec<(String, AnswerValue)>,
}

impl Answers {
    /// Create a new empty answers collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an answer, returning the previous value for that name if there was one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Option<AnswerValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Get the answer for the given question name.
    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Check if an answer exists for the given question name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove the answer for the given question name.
    pub fn remove(&mut self, name: &str) -> Option<AnswerValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over name-value pairs in answer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Question names in answer order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode the answer for `name` into any type that can be built from an answer.
    ///
    /// This applies the same coercion rules as binding into a struct field.
    pub fn decode<T: FromAnswer>(&self, name: &str) -> Result<T, BindError> {
        let value = self
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::UnknownField(name.to_string()))?;
        T::from_answer(value).map_err(|source| BindError::coerce(name, source))
    }

    // === Convenience accessors ===

    /// Get a string answer.
    pub fn get_string(&self, name: &str) -> Result<&str, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(mismatch(name, "String", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get an integer answer.
    pub fn get_int(&self, name: &str) -> Result<i64, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Int(i)) => Ok(*i),
            Some(other) => Err(mismatch(name, "Int", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a float answer.
    pub fn get_float(&self, name: &str) -> Result<f64, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Float(f)) => Ok(*f),
            Some(other) => Err(mismatch(name, "Float", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_bool(&self, name: &str) -> Result<bool, AnswerError> {
        match self.get(name) {
            Some(AnswerValue::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(name, "Bool", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }

    /// Get a string list answer.
    pub fn get_string_list(&self, name: &str) -> Result<&[String], AnswerError> {
        match self.get(name) {
            Some(AnswerValue::StringList(list)) => Ok(list),
            Some(other) => Err(mismatch(name, "StringList", other)),
            None => Err(AnswerError::Missing(name.to_string())),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, actual: &AnswerValue) -> AnswerError {
    AnswerError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl IntoIterator for Answers {
    type Item = (String, AnswerValue);
    type IntoIter = std::vec::IntoIter<(String, AnswerValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = &'a (String, AnswerValue);
    type IntoIter = std::slice::Iter<'a, (String, AnswerValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("name", "Alice");
        answers.insert("age", AnswerValue::Int(30));

        assert_eq!(answers.get_string("name").unwrap(), "Alice");
        assert_eq!(answers.get_int("age").unwrap(), 30);
    }

    #[test]
    fn keeps_first_answer_position_on_replace() {
        let mut answers = Answers::new();
        answers.insert("first", 1_i64);
        answers.insert("second", 2_i64);
        let previous = answers.insert("first", 10_i64);

        assert_eq!(previous, Some(AnswerValue::Int(1)));
        assert_eq!(answers.names().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(answers.get_int("first").unwrap(), 10);
    }

    #[test]
    fn type_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("age", AnswerValue::Int(30));

        let result = answers.get_string("age");
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
        assert!(matches!(
            answers.get_bool("missing"),
            Err(AnswerError::Missing(_))
        ));
    }

    #[test]
    fn decode_coerces() {
        let mut answers = Answers::new();
        answers.insert("port", "8080");

        let port: u16 = answers.decode("port").unwrap();
        assert_eq!(port, 8080);
        assert!(matches!(
            answers.decode::<u16>("host"),
            Err(BindError::UnknownField(_))
        ));
    }
}
