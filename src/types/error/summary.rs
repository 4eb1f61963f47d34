//! One-line textual summary of an error.
//!
//! Layout: `<class>: <message> {k: v, ...}, cause: <cause> (hidden: <a>, <b>)`.
//! Empty parts are dropped together with their delimiter. The class prefix is
//! left out for transparent errors.

use super::Error;
use crate::types::property::UNDERLYING;
use std::fmt::Write;

impl Error {
    /// The one-line rendering used by `Display`.
    pub fn summary(&self) -> String {
        self.render_summary(true)
    }

    pub(crate) fn render_summary(&self, show_properties: bool) -> String {
        let properties = if show_properties { self.properties_block() } else { String::new() };
        let mut text = join(" ", [self.message(), properties.as_str()]);

        if let Some(cause) = self.cause() {
            text = join(", cause: ", [text.as_str(), cause.to_string().as_str()]);
        }

        let hidden = self.hidden_block();
        let body = join(" ", [text.as_str(), hidden.as_str()]);

        if self.is_transparent() {
            body
        } else {
            join(": ", [self.own_class().name(), body.as_str()])
        }
    }

    fn properties_block(&self) -> String {
        let mut block = String::new();
        for (key, value) in self.properties().unique() {
            if key == UNDERLYING {
                continue;
            }
            block.push_str(if block.is_empty() { "{" } else { ", " });
            let _ = write!(block, "{key}: {value}");
        }
        if !block.is_empty() {
            block.push('}');
        }
        block
    }

    fn hidden_block(&self) -> String {
        let underlying = self.underlying();
        if underlying.is_empty() {
            return String::new();
        }
        let details: Vec<String> = underlying.iter().map(ToString::to_string).collect();
        format!("(hidden: {})", join(", ", details.iter().map(String::as_str)))
    }
}

/// Joins the non-empty `parts` with `delimiter`.
fn join<'a>(delimiter: &str, parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push_str(delimiter);
        }
        out.push_str(part);
    }
    out
}
