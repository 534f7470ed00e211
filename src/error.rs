//! Error types for the typewriter animation
//!
//! A missing host (window/document) or an unresolvable target element are the
//! only ways a run can fail. None of them are retried.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    /// No global `window` (not running in a browser page)
    #[error("No window available")]
    NoWindow,

    /// The window has no document
    #[error("No document available")]
    NoDocument,

    /// The target element id did not resolve
    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    /// The target element cannot carry inline styles
    #[error("Element #{0} is not an HTML element")]
    NotStylable(String),

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The next step could not be scheduled
    #[error("Failed to schedule timer: {0}")]
    Schedule(String),

    /// Options passed from JavaScript were malformed
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl TypewriterError {
    /// Wrap a thrown JS value into a DOM error
    pub fn dom(value: JsValue) -> Self {
        TypewriterError::Dom(describe_js_value(&value))
    }

    /// Wrap a thrown JS value into a scheduling error
    pub fn schedule(value: JsValue) -> Self {
        TypewriterError::Schedule(describe_js_value(&value))
    }
}

impl From<TypewriterError> for JsValue {
    fn from(err: TypewriterError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn describe_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, TypewriterError>;
