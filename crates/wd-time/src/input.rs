//! `DateInput`: a raw, not-yet-normalized date value.

/// A raw date value as handed in by a caller.
///
/// Text is parsed by the loose normalizer.  Integers are either epoch
/// milliseconds (when the epoch flag is set) or a digit string such as
/// `20200408`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateInput {
    /// A date string in any recognized shape.
    Text(String),
    /// An integer value.
    Integer(i64),
}

impl std::fmt::Display for DateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateInput::Text(s) => f.write_str(s),
            DateInput::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&DateInput> for DateInput {
    fn from(input: &DateInput) -> Self {
        input.clone()
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        DateInput::Text(s.clone())
    }
}

impl From<i64> for DateInput {
    fn from(n: i64) -> Self {
        DateInput::Integer(n)
    }
}

impl From<i32> for DateInput {
    fn from(n: i32) -> Self {
        DateInput::Integer(i64::from(n))
    }
}

impl From<u32> for DateInput {
    fn from(n: u32) -> Self {
        DateInput::Integer(i64::from(n))
    }
}
