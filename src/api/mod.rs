//! Typewriter WASM API
//!
//! - `helpers`: argument conversion and validation
//! - `core`: `start`, `startWithOptions` and the page-load binding

pub mod core;
pub mod helpers;

pub use self::core::{
    bind_to_page_load, start, start_with_config, start_with_options, PageLoad,
};
