pub mod macros;
pub mod registry;
#[cfg(feature = "tracing")]
pub mod tracing_ext;
