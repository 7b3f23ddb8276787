//! Response formats a command can be asked for.

use std::fmt;
use std::str::FromStr;

/// Requested rendering of a command's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Indented JSON array of records.
    Json,
    /// Chat markup with `*bold*` labels.
    Slack,
}

/// A format suffix that isn't one of [`ResponseFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormat(pub String);

impl FromStr for ResponseFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ResponseFormat::Json),
            "slack" => Ok(ResponseFormat::Slack),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => f.write_str("json"),
            ResponseFormat::Slack => f.write_str("slack"),
        }
    }
}
