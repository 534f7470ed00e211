//! Typewriter WASM Module
//!
//! Reveals a fixed tagline into a page element one character at a time,
//! rendering each `<br>` marker as a single line break, then leaves a
//! transparent right border where the cursor stood.

pub mod animation;
pub mod api;
pub mod error;
pub mod models;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use animation::Animation;
pub use error::TypewriterError;
pub use models::{AnimatorState, Typewriter, TypewriterConfig, DEFAULT_TEXT, LINE_BREAK_MARKER};
pub use renderers::{DisplayTarget, DomTarget, RecordingTarget};
pub use utils::{BrowserTimer, ManualTimer, Timer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("Typewriter WASM module initialized");

    if let Err(e) = api::bind_to_page_load(TypewriterConfig::default()) {
        log::error!("typewriter not bound to page load: {}", e);
    }
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("failed to initialize logger: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
