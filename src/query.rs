//! Query string parameters.

use std::fmt;

/// A single query string parameter.
///
/// Parameters keep their insertion order and duplicate keys are allowed;
/// the query string `?key=a&key=b` is two distinct parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub key: String,
    pub value: String,
}

impl Parameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Renders as `key=value`, verbatim (no percent-encoding).
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_key_value() {
        let param = Parameter::new("key1", "value1");
        assert_eq!(param.to_string(), "key1=value1");
    }

    #[test]
    fn renders_empty_value() {
        let param = Parameter::new("flag", "");
        assert_eq!(param.to_string(), "flag=");
    }

    #[test]
    fn holds_key_and_value() {
        let param = Parameter::new("a".to_string(), "b".to_string());
        assert_eq!(param.key, "a");
        assert_eq!(param.value, "b");
    }
}
