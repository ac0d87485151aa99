use thiserror::Error;

/// Fatal outcomes of compiling or matching a pattern.
///
/// A value that merely does not fit a pattern is not an error; matching
/// reports that as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid pattern \"{pattern}\"")]
    InvalidPattern { pattern: String },

    #[error("non unique identifiers: {}", .names.join(", "))]
    DuplicateBinding { names: Vec<String> },

    #[error("non-exhaustive patterns")]
    NonExhaustive,

    #[error("pattern nesting exceeds the limit of {limit}")]
    DepthLimit { limit: usize },

    #[error("pattern text is {len} bytes, over the limit of {limit}")]
    LengthLimit { limit: usize, len: usize },
}

impl MatchError {
    pub(crate) fn invalid(pattern: &str) -> Self {
        MatchError::InvalidPattern {
            pattern: pattern.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("empty field while splitting \"{text}\"")]
    EmptyField { text: String },
}
