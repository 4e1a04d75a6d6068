//! Errors raised when parsing option names.

use thiserror::Error;

/// An option name did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`, expected one of: {expected}")]
pub struct ParseOptionError {
    /// Which option was being parsed ("color theme", "speed", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma separated list of accepted names.
    pub expected: String,
}

/// Look up `value` case-insensitively among `all` by their names.
pub(crate) fn parse_named<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, ParseOptionError> {
    let wanted = value.trim();
    all.iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseOptionError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", "),
        })
}
