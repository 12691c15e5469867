//! Error types for the sieve-spec crate.

use std::borrow::Cow;

use thiserror::Error;

/// Errors raised while constructing specifications or starting a filter.
///
/// Evaluating a well-formed specification never fails, so every variant is
/// produced at construction time, before any item is inspected.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A required argument (child specification, source or spec) was unset.
    #[error("invalid argument: `{argument}` is required")]
    InvalidArgument { argument: Cow<'static, str> },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Operator is not valid for the operand type.
    #[error("operator '{op}' is not valid for {operand} operands")]
    InvalidOperator {
        op: &'static str,
        operand: &'static str,
    },
}

impl SpecError {
    /// Builds an [`SpecError::InvalidArgument`] for the named argument.
    pub fn missing(argument: impl Into<Cow<'static, str>>) -> Self {
        SpecError::InvalidArgument {
            argument: argument.into(),
        }
    }

    /// Returns `true` if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SpecError::InvalidArgument { .. })
    }
}

/// Result type for sieve-spec operations.
pub type Result<T> = std::result::Result<T, SpecError>;

/// Unwraps a required argument, reporting it as missing otherwise.
pub(crate) fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument, "required argument is unset");
        SpecError::missing(argument)
    })
}
