//! Error types for the taxonomy's fallible helpers.

use crate::FailureKind;

/// Errors raised when parsing a kind name or assembling a failure from parts.
///
/// Building a [`Failure`](crate::Failure) through its variant constructors
/// never fails; only the string and parts based entry points return this.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// The input does not name any failure kind.
    #[error("unknown failure kind `{0}`")]
    UnknownKind(String),
    /// A status code was supplied for a kind that only carries context.
    #[error("failure kind `{0}` does not carry a status code")]
    StatusCodeNotApplicable(FailureKind),
}
