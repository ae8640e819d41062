//! Path segment type.

use std::fmt;

/// One segment of a URI path.
///
/// A segment is either text or an integer; the sum type makes any other
/// element kind impossible to store. Numeric segments render in base 10.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum PathSegment {
    Text(String),
    Number(i64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Text(text) => f.write_str(text),
            PathSegment::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<String> for PathSegment {
    fn from(text: String) -> Self {
        PathSegment::Text(text)
    }
}

impl From<&str> for PathSegment {
    fn from(text: &str) -> Self {
        PathSegment::Text(text.to_string())
    }
}

impl From<i64> for PathSegment {
    fn from(number: i64) -> Self {
        PathSegment::Number(number)
    }
}
