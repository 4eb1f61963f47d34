//! Extension trait for turning `Result` errors into structured errors.
//!
//! # Examples
//!
//! ```
//! use error_taxon::traits::ResultExt;
//! use error_taxon::Error;
//!
//! fn load_config() -> Result<String, Error> {
//!     std::fs::read_to_string("/definitely/missing/config.toml").decorate("loading configuration")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.summary().starts_with("loading configuration, cause: "));
//! ```

use crate::common::TRANSPARENT_WRAPPER;
use crate::types::builder::ErrorBuilder;
use crate::types::cause::Cause;
use crate::types::class::Class;
use crate::types::error::Error;
use crate::types::property::PropertyValue;
use std::borrow::Cow;
use std::hint::black_box;

/// Structured error conversions on `Result`.
///
/// Every method leaves `Ok` values untouched and captures traces starting at
/// its caller.
pub trait ResultExt<T> {
    /// Adds a message without changing classification.
    fn decorate(self, message: impl Into<String>) -> Result<T, Error>;

    /// Wraps the error in an error of `class`.
    fn wrap_err(self, class: &Class, message: impl Into<String>) -> Result<T, Error>;

    /// Adds a message and a fresh trace linked to the error's own trace.
    fn enhance_err(self, message: impl Into<String>) -> Result<T, Error>;

    /// Attaches a property. A structured error receives it directly; a foreign
    /// error is first wrapped transparently.
    fn with_property<V>(self, key: impl Into<Cow<'static, str>>, value: V) -> Result<T, Error>
    where
        V: PropertyValue;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    #[inline(never)]
    fn decorate(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = ErrorBuilder::new(&TRANSPARENT_WRAPPER).message(message).cause(error).create(1);
                Err(black_box(error))
            },
        }
    }

    #[inline(never)]
    fn wrap_err(self, class: &Class, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(black_box(ErrorBuilder::new(class).message(message).cause(error).create(1))),
        }
    }

    #[inline(never)]
    fn enhance_err(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => {
                let error = ErrorBuilder::new(&TRANSPARENT_WRAPPER)
                    .message(message)
                    .cause(error)
                    .enhance_stack_trace()
                    .create(1);
                Err(black_box(error))
            },
        }
    }

    #[inline(never)]
    fn with_property<V>(self, key: impl Into<Cow<'static, str>>, value: V) -> Result<T, Error>
    where
        V: PropertyValue,
    {
        let cause = match self {
            Ok(value) => return Ok(value),
            Err(error) => error.into(),
        };
        let error = match cause.downcast_ref::<Error>() {
            Some(structured) => structured.clone(),
            None => black_box(ErrorBuilder::new(&TRANSPARENT_WRAPPER).cause(cause).create(1)),
        };
        Err(error.with(key, value))
    }
}
