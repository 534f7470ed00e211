//! Page entry points
//!
//! `start` is what the page-load hook calls. A page runs at most one
//! animation; later calls are ignored with a warning. A run whose first step
//! fails (no target element yet) does not count, so the host can still start
//! one with its own options.

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::helpers::{deserialize, validate_element_id};
use crate::animation::Animation;
use crate::error::{Result, TypewriterError};
use crate::models::TypewriterConfig;
use crate::renderers::{DisplayTarget, DomTarget};
use crate::utils::{BrowserTimer, Timer};

thread_local! {
    static STARTED: Cell<bool> = Cell::new(false);
}

/// Start the animation with default settings
#[wasm_bindgen]
pub fn start() {
    start_with_config(TypewriterConfig::default());
}

/// Start the animation with settings from a JS object
///
/// Accepts `{ elementId, delayMs, cursorBorder }`; omitted fields keep their
/// defaults and `undefined`/`null` means all defaults.
#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(options: JsValue) -> std::result::Result<bool, JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        TypewriterConfig::default()
    } else {
        deserialize::<TypewriterConfig>(options, "Invalid typewriter options")?
    };
    validate_element_id(&config.element_id)?;
    Ok(start_with_config(config))
}

/// How `bind_to_page_load` handled the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// The page was already loaded; holds whether the run started
    Started(bool),
    /// Waiting for the `load` event
    Deferred,
}

/// Start a run against the page; false if one already runs or the first
/// step failed
pub fn start_with_config(config: TypewriterConfig) -> bool {
    let target = DomTarget::new(config.element_id.as_str());
    launch(&config, target, BrowserTimer)
}

fn launch<D, T>(config: &TypewriterConfig, target: D, timer: T) -> bool
where
    D: DisplayTarget + 'static,
    T: Timer + 'static,
{
    if STARTED.with(|started| started.replace(true)) {
        log::warn!("typewriter already started, ignoring #{}", config.element_id);
        return false;
    }

    let run = Animation::from_config(config, target, timer).start();
    let failed = run.borrow().has_failed();
    if failed {
        STARTED.with(|started| started.set(false));
        return false;
    }
    true
}

/// Run `start_with_config` once the page has loaded
///
/// When the document is already complete the run starts right away, since
/// the `load` event has fired before this module was instantiated.
pub fn bind_to_page_load(config: TypewriterConfig) -> Result<PageLoad> {
    let window = web_sys::window().ok_or(TypewriterError::NoWindow)?;
    let document = window.document().ok_or(TypewriterError::NoDocument)?;

    if document.ready_state() == "complete" {
        return Ok(PageLoad::Started(start_with_config(config)));
    }

    let on_load = Closure::once_into_js(move || {
        start_with_config(config);
    });
    window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(TypewriterError::dom)?;
    Ok(PageLoad::Deferred)
}
