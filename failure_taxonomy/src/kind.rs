//! Lookups over [`FailureKind`]: parsing, display and reverse code lookup.

use std::fmt;
use std::str::FromStr;

use crate::{FailureKind, TaxonomyError};

impl FailureKind {
    /// Whether failures of this kind carry an `http_code` field.
    pub const fn is_status_coded(self) -> bool {
        self.default_http_code().is_some()
    }

    /// Finds the kind whose *default* status code is `code`.
    ///
    /// This only consults the default table. A failure constructed with an
    /// overridden code is not reachable through it.
    pub fn from_default_code(code: u16) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.default_http_code() == Some(code))
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FailureKind {
    type Err = TaxonomyError;

    /// Accepts the kebab-case name in any case, with `-`, `_`, spaces or no
    /// separator at all (`not-found`, `NOT_FOUND`, `NotFound`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(TaxonomyError::UnknownKind(s.to_string()));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| TaxonomyError::UnknownKind(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
