//! Shared helpers for the WASM API
//!
//! Conversion of JS arguments into typed settings, with every failure
//! logged before it is handed back to the caller.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::error::TypewriterError;

/// Deserialize a value from JavaScript, logging failures
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, TypewriterError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        TypewriterError::InvalidOptions(msg)
    })
}

/// Validate that an element id can be looked up
pub fn validate_element_id(id: &str) -> Result<(), TypewriterError> {
    if id.trim().is_empty() {
        let msg = "element id must not be empty".to_string();
        log::error!("{}", msg);
        return Err(TypewriterError::InvalidOptions(msg));
    }
    Ok(())
}
