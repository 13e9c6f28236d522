//! Core domain types for timeview.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

use serde::Deserialize;
use serde_json::Value;

/// The body returned by the `/api` endpoint.
///
/// The endpoint's only contract is that the body is a JSON object carrying a
/// `time` member whose value is text-renderable. The member is kept as a raw
/// [`Value`] because no validation or coercion is applied before display; an
/// absent member defaults to [`Value::Null`] so the render step degrades to a
/// placeholder instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub time: Value,
}

/// Stringify a JSON value the way a browser does when it is assigned to an
/// element's text content.
///
/// Strings render verbatim (no surrounding quotes); every other value renders
/// as its JSON serialization, so `null` becomes the literal text `null`.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
