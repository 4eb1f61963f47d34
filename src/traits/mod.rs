//! Extension traits for working with structured errors.
//!
//! - [`ResultExt`]: converts the error side of any `Result` into an [`Error`](crate::Error)
//! - [`TransientError`]: retry classification driven by class traits

pub mod result_ext;
pub mod transient;

pub use result_ext::ResultExt;
pub use transient::{TransientError, TransientErrorExt, RETRY_AFTER_MS};
