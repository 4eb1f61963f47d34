//! Transient error classification for retry strategies.
//!
//! [`TransientError`] tells retry loops whether an error is worth another
//! attempt. Structured errors answer through their class traits: an error is
//! transient when its classifying class carries [`TEMPORARY`] or [`TIMEOUT`].
//!
//! # Examples
//!
//! ```
//! use error_taxon::common::TEMPORARY;
//! use error_taxon::traits::{TransientError, TransientErrorExt};
//! use error_taxon::Namespace;
//!
//! let busy = Namespace::new("pool", &[]).class("busy", &[TEMPORARY.clone()]);
//! let full = Namespace::new("pool", &[]).class("full", &[]);
//!
//! assert!(busy.error("no free connection").is_transient());
//! assert!(full.error("quota exceeded").is_permanent());
//!
//! let attempt: Result<(), _> = Err(busy.error("no free connection"));
//! assert!(attempt.retry_if_transient().is_some());
//! ```

use crate::common::{TEMPORARY, TIMEOUT};
use crate::types::error::Error;
use std::time::Duration;

/// Classification of errors as transient or permanent.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }
}

impl TransientError for Error {
    fn is_transient(&self) -> bool {
        self.has(&TEMPORARY) || self.has(&TIMEOUT)
    }

    /// Read from the [`RETRY_AFTER_MS`] property, in milliseconds.
    fn retry_after_hint(&self) -> Option<Duration> {
        self.property(RETRY_AFTER_MS).bind::<u64>().map(Duration::from_millis)
    }
}

/// Property holding a suggested retry delay in milliseconds.
pub const RETRY_AFTER_MS: &str = "retry_after_ms";

impl TransientError for std::io::Error {
    fn is_transient(&self) -> bool {
        use std::io::ErrorKind;
        matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        )
    }
}

/// Extension methods for working with transient errors.
pub trait TransientErrorExt<T, E: TransientError> {
    /// Converts a transient error to `Some(Err(e))` for retry, or `None` to stop.
    fn retry_if_transient(self) -> Option<Result<T, E>>;
}

impl<T, E: TransientError> TransientErrorExt<T, E> for Result<T, E> {
    fn retry_if_transient(self) -> Option<Result<T, E>> {
        match &self {
            Ok(_) => None,
            Err(e) if e.is_transient() => Some(self),
            Err(_) => None,
        }
    }
}
