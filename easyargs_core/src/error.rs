use thiserror::Error;

/// The failures raised by `easyargs`.
///
/// All failures are raised at the point of detection; nothing is logged or recovered internally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgError {
    /// An empty (or whitespace only) key was supplied where one is required.
    /// Holds the offending input.
    #[error("Invalid key '{0}'.")]
    InvalidKey(String),

    /// A token consisted of a prefix with nothing after it (ex: `-` or `/`).
    /// Holds the offending token.
    #[error("Invalid argument '{0}': a prefix must be followed by a key.")]
    InvalidArgument(String),

    /// A setting could not be built from a raw key/value pair.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// A presence assertion did not hold.
    /// Holds the caller supplied message, verbatim.
    #[error("{0}")]
    AssertionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ArgError::InvalidKey(" ".to_string()), "Invalid key ' '.")]
    #[case(
        ArgError::InvalidArgument("-".to_string()),
        "Invalid argument '-': a prefix must be followed by a key."
    )]
    #[case(ArgError::InvalidSetting("empty pair".to_string()), "Invalid setting: empty pair")]
    #[case(ArgError::AssertionFailed("missing --in".to_string()), "missing --in")]
    fn display(#[case] error: ArgError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
