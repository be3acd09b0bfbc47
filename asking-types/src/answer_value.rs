use std::fmt;

/// A single answer obtained from a prompt.
///
/// Prompts produce raw values of this type, converters map one value to another,
/// and sinks coerce them into their destination slots.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// A string value (from input, password, editor or select prompts).
    String(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A boolean value (from confirm prompts).
    Bool(bool),

    /// A list of strings (from multi-select prompts).
    StringList(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list of strings.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(list) => Some(list),
            _ => None,
        }
    }

    /// Whether the user effectively gave no answer: an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::StringList(list) => list.is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::StringList(_) => "StringList",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::StringList(list) => f.write_str(&list.join(", ")),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for AnswerValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AnswerValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for AnswerValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for AnswerValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::StringList(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::StringList(list.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness() {
        assert!(AnswerValue::from("").is_empty());
        assert!(AnswerValue::StringList(Vec::new()).is_empty());
        assert!(!AnswerValue::Int(0).is_empty());
        assert!(!AnswerValue::Bool(false).is_empty());
    }

    #[test]
    fn display_joins_lists() {
        let value = AnswerValue::from(vec!["rust", "go"]);
        assert_eq!(value.to_string(), "rust, go");
        assert_eq!(AnswerValue::Int(-4).to_string(), "-4");
    }
}
