//! Positional argument parsing for command text.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Expected {expected} arguments ({usage}), got {found}")]
    Shortfall {
        expected: usize,
        found: usize,
        usage: &'static str,
    },
}

/// Split command text on single spaces, dropping empty fragments.
///
/// Performs no validation; callers decide how many tokens they need.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Take exactly `N` leading tokens from `raw`, ignoring any extras.
pub fn take_positional<const N: usize>(
    raw: &str,
    usage: &'static str,
) -> Result<[String; N], ArgsError> {
    let tokens = parse(raw);
    let found = tokens.len();

    let leading: Vec<String> = tokens.into_iter().take(N).collect();
    leading.try_into().map_err(|_| ArgsError::Shortfall {
        expected: N,
        found,
        usage,
    })
}
