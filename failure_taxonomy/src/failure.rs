//! Construction helpers and trait impls for [`Failure`].

use std::fmt;

use crate::{Failure, FailureKind, TaxonomyError};

impl<D> Failure<D> {
    /// Creates a failure of the given kind with its default status code and
    /// no context.
    pub fn from_kind(kind: FailureKind) -> Self {
        Self::assemble(kind, None, None)
    }

    /// Creates a failure from a kind, an optional status code and optional
    /// context. A missing code falls back to the kind's default.
    ///
    /// Codes are not range-checked: `NotFound` with 999 is accepted. The only
    /// error is supplying a code for a kind that has no code field.
    pub fn from_parts(
        kind: FailureKind,
        http_code: Option<u16>,
        additional_data: Option<D>,
    ) -> Result<Self, TaxonomyError> {
        if http_code.is_some() && !kind.is_status_coded() {
            return Err(TaxonomyError::StatusCodeNotApplicable(kind));
        }
        Ok(Self::assemble(kind, http_code, additional_data))
    }

    /// Attaches `data` as context, replacing any existing context.
    pub fn with_additional_data(mut self, data: D) -> Self {
        *self.additional_data_slot() = Some(data);
        self
    }
}

impl<D> From<FailureKind> for Failure<D> {
    fn from(kind: FailureKind) -> Self {
        Self::from_kind(kind)
    }
}

impl<D> fmt::Display for Failure<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().name().replace('-', " ");
        match self.http_code() {
            Some(code) => write!(f, "{} (HTTP {})", label, code),
            None => write!(f, "{} failure", label),
        }
    }
}

impl<D: fmt::Debug> std::error::Error for Failure<D> {}
