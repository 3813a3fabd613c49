use core::fmt::{self, Display};
use std::borrow::Cow;

/// Scalar payload of a node.
///
/// Builders accept `impl Into<Text>`, so call sites can pass string
/// literals, numbers, bools, or chars without wrapping them themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Text {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Text {
    /// Returns the string payload, or `None` for non-string variants.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Text::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::String(s) => f.write_str(s),
            Text::Integer(i) => write!(f, "{i}"),
            Text::Float(x) => write!(f, "{x}"),
            Text::Bool(b) => write!(f, "{b}"),
            Text::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::String(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::String(s.to_string())
    }
}

impl From<Cow<'_, str>> for Text {
    fn from(s: Cow<'_, str>) -> Self {
        Text::String(s.into_owned())
    }
}

impl From<bool> for Text {
    fn from(b: bool) -> Self {
        Text::Bool(b)
    }
}

impl From<char> for Text {
    fn from(c: char) -> Self {
        Text::Char(c)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Text {
            fn from(value: $ty) -> Self {
                Text::Integer(value as i64)
            }
        })*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Text {
    fn from(value: f32) -> Self {
        Text::Float(value as f64)
    }
}

impl From<f64> for Text {
    fn from(value: f64) -> Self {
        Text::Float(value)
    }
}
