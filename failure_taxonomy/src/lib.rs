//! A closed taxonomy of client/server failure outcomes.
//!
//! [`Failure`] has one variant per recognised failure category: a network
//! connection failure, a generic exception, and one variant per relevant
//! HTTP status. Status-coded variants default to the conventional code and
//! every variant carries an optional, uninterpreted context payload.
//!
//! ```
//! use failure_taxonomy::{Failure, FailureKind};
//! use serde_json::json;
//!
//! let failure = Failure::too_many_requests().with_additional_data(json!({"retryAfter": 30}));
//! assert_eq!(failure.kind(), FailureKind::TooManyRequests);
//! assert_eq!(failure.http_code(), Some(429));
//! ```

#[macro_use]
mod macros;

mod errors;
mod failure;
mod kind;
mod taxonomy;

pub use self::errors::TaxonomyError;
pub use self::taxonomy::{Failure, FailureKind};
