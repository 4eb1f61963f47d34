//! Free constructors that do not need a class at hand.
//!
//! Every constructor captures its trace starting at its caller. Each one
//! passes its result through `black_box` so its frame is never replaced by a
//! tail call.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{decorate, ensure_trace};
//! use std::io;
//!
//! let err = decorate(io::Error::other("disk full"), "flush failed");
//! assert_eq!(err.summary(), "flush failed, cause: disk full");
//!
//! let traced = ensure_trace(io::Error::other("eof"));
//! assert!(traced.stack_trace().is_some());
//! assert_eq!(traced.summary(), "eof");
//! ```

use crate::common::{ASSERTION_FAILED, GENERIC, STACK_TRACE_WRAPPER, TRANSPARENT_WRAPPER};
use crate::types::builder::ErrorBuilder;
use crate::types::cause::Cause;
use crate::types::error::Error;
use std::hint::black_box;

/// An error of the generic default class.
#[inline(never)]
pub fn new(message: impl Into<String>) -> Error {
    black_box(ErrorBuilder::new(&GENERIC).message(message).create(1))
}

/// A message-less error of the generic default class.
#[inline(never)]
pub fn blank() -> Error {
    black_box(ErrorBuilder::new(&GENERIC).create(1))
}

/// Adds a message to `cause` without changing how it is classified.
#[inline(never)]
pub fn decorate(cause: impl Into<Cause>, message: impl Into<String>) -> Error {
    black_box(ErrorBuilder::new(&TRANSPARENT_WRAPPER).message(message).cause(cause).create(1))
}

/// Like [`decorate`], with a fresh trace linked to the cause's trace.
#[inline(never)]
pub fn enhance(cause: impl Into<Cause>, message: impl Into<String>) -> Error {
    let error = ErrorBuilder::new(&TRANSPARENT_WRAPPER)
        .message(message)
        .cause(cause)
        .enhance_stack_trace()
        .create(1);
    black_box(error)
}

/// Returns `cause` itself when it is a structured error with a trace;
/// otherwise wraps it transparently with a trace starting here.
#[inline(never)]
pub fn ensure_trace(cause: impl Into<Cause>) -> Error {
    let cause = cause.into();
    if let Some(error) = cause.downcast_ref::<Error>() {
        if error.stack_trace().is_some() {
            return error.clone();
        }
    }
    black_box(ErrorBuilder::new(&STACK_TRACE_WRAPPER).cause(cause).enhance_stack_trace().create(1))
}

/// `Ok(())` when `condition` holds, otherwise an `assertion_failed` error.
#[inline(never)]
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), Error> {
    if condition {
        return Ok(());
    }
    Err(black_box(ErrorBuilder::new(&ASSERTION_FAILED).message(message).create(1)))
}
