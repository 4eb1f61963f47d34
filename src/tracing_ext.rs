//! Tracing integration.
//!
//! [`Error::record`] emits one structured event describing an error, and
//! [`ResultSpanExt`] stamps errors with the name of the span they surfaced in.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-taxon = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_taxon::tracing_ext::ResultSpanExt;
//! use std::io;
//!
//! let span = tracing::info_span!("load_profile");
//! let _guard = span.enter();
//!
//! let failed: Result<(), io::Error> = Err(io::Error::other("refused"));
//! let err = failed.in_current_span().unwrap_err();
//! err.record(tracing::Level::WARN);
//! ```

use crate::common::TRANSPARENT_WRAPPER;
use crate::types::builder::ErrorBuilder;
use crate::types::cause::Cause;
use crate::types::error::Error;
use std::hint::black_box;
use tracing::{Level, Span};

macro_rules! emit {
    ($level:expr, $error:expr) => {{
        let error = $error;
        tracing::event!(
            $level,
            class = %error.class(),
            message = error.message(),
            hint = error.hint(),
            domain = error.domain(),
            owner = error.owner(),
            public = error.public(),
            trace_id = error.trace_id(),
            tags = ?error.tags(),
            error = %error,
            stacktrace = error.stack_trace().map(ToString::to_string),
        )
    }};
}

impl Error {
    /// Emits one event at `level` with the error's classification,
    /// annotations, summary and stack trace as fields.
    pub fn record(&self, level: Level) {
        match level {
            Level::ERROR => emit!(Level::ERROR, self),
            Level::WARN => emit!(Level::WARN, self),
            Level::INFO => emit!(Level::INFO, self),
            Level::DEBUG => emit!(Level::DEBUG, self),
            _ => emit!(Level::TRACE, self),
        }
    }
}

/// Name of `span`, or `None` when it is disabled.
fn span_name(span: &Span) -> Option<&'static str> {
    span.metadata().map(|metadata| metadata.name())
}

/// Extension trait for `Result` types to record the span an error surfaced in.
pub trait ResultSpanExt<T> {
    /// Records the current span's name as the error's span annotation.
    fn in_current_span(self) -> Result<T, Error>;

    /// Records `span`'s name as the error's span annotation.
    fn in_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    #[inline(never)]
    fn in_current_span(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(black_box(with_span(structured(error.into()), &Span::current()))),
        }
    }

    #[inline(never)]
    fn in_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(black_box(with_span(structured(error.into()), span))),
        }
    }
}

/// `cause` itself when structured, otherwise a transparent wrapper around it.
#[inline(never)]
fn structured(cause: Cause) -> Error {
    match cause.downcast_ref::<Error>() {
        Some(error) => error.clone(),
        None => black_box(ErrorBuilder::new(&TRANSPARENT_WRAPPER).cause(cause).create(2)),
    }
}

fn with_span(error: Error, span: &Span) -> Error {
    match span_name(span) {
        Some(name) => error.annotate().span(name).done(),
        None => error,
    }
}
