//! Construction macros with `format!`-style messages.
//!
//! - [`macro@crate::new_error`] - an error of a class, `class.error(format!(..))`
//! - [`macro@crate::wrap_error`] - an error of a class caused by another error
//! - [`macro@crate::decorate`] - a transparent message on top of any error
//!
//! The macros expand at the call site, so traces start where the macro is used.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{decorate, new_error, wrap_error, Namespace};
//!
//! let parse = Namespace::new("cfg", &[]).class("parse", &[]);
//! let line = 12;
//!
//! let err = new_error!(parse, "unexpected token at line {}", line);
//! let wrapped = wrap_error!(parse, err, "loading {}", "app.toml");
//! let decorated = decorate!(wrapped, "starting server on port {}", 8080);
//!
//! assert_eq!(
//!     decorated.summary(),
//!     "starting server on port 8080, cause: cfg.parse: loading app.toml, cause: cfg.parse: unexpected token at line 12"
//! );
//! ```

/// Creates an error of `class` with a formatted message.
///
/// # Examples
///
/// ```
/// use error_taxon::{new_error, common::ILLEGAL_ARGUMENT};
///
/// let err = new_error!(ILLEGAL_ARGUMENT, "port {} out of range", 70000);
/// assert_eq!(err.message(), "port 70000 out of range");
/// ```
#[macro_export]
macro_rules! new_error {
    ($class:expr, $($arg:tt)+) => {
        $class.error(format!($($arg)+))
    };
}

/// Creates an error of `class` caused by `cause`, with a formatted message.
#[macro_export]
macro_rules! wrap_error {
    ($class:expr, $cause:expr, $($arg:tt)+) => {
        $class.wrap($cause, format!($($arg)+))
    };
}

/// Adds a formatted message to `cause` without changing its classification.
///
/// # Examples
///
/// ```
/// use error_taxon::decorate;
/// use std::io;
///
/// let err = decorate!(io::Error::other("disk full"), "flushing {} pages", 3);
/// assert_eq!(err.summary(), "flushing 3 pages, cause: disk full");
/// ```
#[macro_export]
macro_rules! decorate {
    ($cause:expr, $($arg:tt)+) => {
        $crate::decorate($cause, format!($($arg)+))
    };
}
