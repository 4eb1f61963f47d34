//! Serialisable snapshot of an error and its causes.
//!
//! # Examples
//!
//! ```
//! use error_taxon::Namespace;
//!
//! let class = Namespace::new("report_docs", &[]).class("io", &[]);
//! let err = class.wrap(std::io::Error::other("eof"), "read failed").with("bytes", 0);
//!
//! let json = serde_json::to_value(err.report()).unwrap();
//! assert_eq!(json["class"], "report_docs.io");
//! assert_eq!(json["properties"][0]["key"], "bytes");
//! assert_eq!(json["cause"]["message"], "eof");
//! ```

use crate::types::cause::Cause;
use crate::types::error::Error;
use crate::types::property::UNDERLYING;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One property as rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
}

/// Structured view of an error; foreign causes only carry a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub message: String,
    pub transparent: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<PropertyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<ErrorReport>>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub underlying: Vec<ErrorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorReport {
    fn from_cause(cause: &Cause) -> Self {
        match cause.downcast_ref::<Error>() {
            Some(error) => error.report(),
            None => Self { message: cause.to_string(), ..Default::default() },
        }
    }
}

impl Error {
    /// Snapshot of this error, its own properties and annotations, and its
    /// causes.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            class: Some(self.own_class().name().to_owned()),
            message: self.message().to_owned(),
            transparent: self.is_transparent(),
            properties: self
                .properties()
                .unique()
                .into_iter()
                .filter(|(key, _)| *key != UNDERLYING)
                .map(|(key, value)| PropertyEntry { key: key.to_owned(), value: value.to_string() })
                .collect(),
            cause: self.cause().map(|cause| Box::new(ErrorReport::from_cause(cause))),
            underlying: self.underlying().iter().map(ErrorReport::from_cause).collect(),
            hint: self.hint().map(str::to_owned),
            public: self.public().map(str::to_owned),
            owner: self.owner().map(str::to_owned),
            domain: self.domain().map(str::to_owned),
            tags: self.tags(),
            stack_trace: self.stack_trace().map(ToString::to_string),
        }
    }
}
