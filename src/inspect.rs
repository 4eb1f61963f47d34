//! Inspection of arbitrary `std::error::Error` values.
//!
//! These functions accept any error, structured or foreign. A foreign error is
//! looked through with `source()` until a structured [`Error`] is found; when
//! there is none the answer is the explicit "not found" value.
//!
//! # Examples
//!
//! ```
//! use error_taxon::{inspect, Namespace, Trait};
//! use std::io;
//!
//! let timeout = Trait::new("timeout");
//! let net = Namespace::new("net", &[]).class("timeout", &[timeout.clone()]);
//! let err = net.error("dial timed out");
//!
//! assert!(inspect::has(&err, &timeout));
//! assert!(inspect::extends(&err, &net));
//! assert!(!inspect::has(&io::Error::other("plain"), &timeout));
//! ```

use crate::types::class::Class;
use crate::types::error::Error;
use crate::types::property::PropertyResult;
use crate::types::trait_tag::Trait;
use std::error::Error as StdError;
use std::fmt::Write;

/// The first structured error in `error`'s `source()` chain, `error` included.
pub fn find_structured<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    let mut current = Some(error);
    while let Some(error) = current {
        if let Some(typed) = error.downcast_ref::<Error>() {
            return Some(typed);
        }
        current = error.source();
    }
    None
}

/// `error` itself when it is a structured error.
pub fn cast<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    error.downcast_ref::<Error>()
}

/// Whether the structured error in `error` extends `class`.
pub fn extends(error: &(dyn StdError + 'static), class: &Class) -> bool {
    find_structured(error).is_some_and(|typed| typed.extends(class))
}

/// Whether the structured error in `error` carries `t`.
pub fn has(error: &(dyn StdError + 'static), t: &Trait) -> bool {
    find_structured(error).is_some_and(|typed| typed.has(t))
}

/// Property lookup on the structured error in `error`.
pub fn property(error: &(dyn StdError + 'static), key: &str) -> PropertyResult {
    match find_structured(error) {
        Some(typed) => typed.property(key),
        None => PropertyResult::empty(),
    }
}

/// Detailed multi-line rendering for diagnostics.
///
/// Foreign links are printed one per line until the first structured error,
/// which is printed with its summary and causal stack trace.
pub fn inspect(error: &(dyn StdError + 'static)) -> String {
    let mut out = String::new();
    let mut current = Some(error);
    while let Some(error) = current {
        if !out.is_empty() {
            out.push_str("\ncaused by: ");
        }
        if let Some(typed) = error.downcast_ref::<Error>() {
            let _ = write!(out, "{typed:#}");
            break;
        }
        let _ = write!(out, "{error}");
        current = error.source();
    }
    out
}
