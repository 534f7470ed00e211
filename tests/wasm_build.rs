//! Browser tests
//!
//! Drive the animation against a real element. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use typewriter_wasm::api::{bind_to_page_load, start_with_config, start_with_options, PageLoad};
use typewriter_wasm::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("p").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_dom_target_reveals_text() {
    let element = mount("tw-reveal");
    let timer = ManualTimer::new();
    let _run = Animation::new(
        Typewriter::new("ab<br>c", "2px solid transparent"),
        DomTarget::new("tw-reveal"),
        timer.clone(),
        50,
    )
    .start();

    assert_eq!(element.inner_html(), "a");
    timer.run_until_idle();
    assert_eq!(element.inner_html(), "ab<br>c");
}

#[wasm_bindgen_test]
fn test_dom_target_escapes_literal_characters() {
    let element = mount("tw-escape");
    let mut target = DomTarget::new("tw-escape");
    let mut typewriter = Typewriter::new("a<b", "2px solid transparent");
    while typewriter.advance(&mut target).unwrap() == AnimatorState::Typing {}

    assert_eq!(element.text_content().unwrap(), "a<b");
    assert_eq!(element.inner_html(), "a&lt;b");
}

#[wasm_bindgen_test]
fn test_dom_target_sets_cursor_border() {
    let element = mount("tw-border");
    let mut target = DomTarget::new("tw-border");
    let mut typewriter = Typewriter::new("", "2px solid transparent");

    assert_eq!(typewriter.advance(&mut target).unwrap(), AnimatorState::Done);
    let style = element.get_attribute("style").unwrap();
    assert!(style.contains("border-right"), "style was {:?}", style);
}

#[wasm_bindgen_test]
fn test_missing_element_is_an_error() {
    let mut target = DomTarget::new("tw-does-not-exist");
    let mut typewriter = Typewriter::new("abc", "2px solid transparent");

    let err = typewriter.advance(&mut target).unwrap_err();
    assert_eq!(err, TypewriterError::ElementNotFound("tw-does-not-exist".to_string()));
    assert_eq!(typewriter.position(), 0);
}

// One test owns the page-wide run guard, so the steps are ordered here
#[wasm_bindgen_test]
fn test_page_load_runs_a_single_animation() {
    let missing = TypewriterConfig {
        element_id: "tw-page-missing".to_string(),
        ..TypewriterConfig::default()
    };
    assert!(!start_with_config(missing.clone()));

    let element = mount("tw-page");
    let config = TypewriterConfig {
        element_id: "tw-page".to_string(),
        ..TypewriterConfig::default()
    };
    let document = web_sys::window().unwrap().document().unwrap();

    if document.ready_state() == "complete" {
        assert_eq!(bind_to_page_load(config.clone()).unwrap(), PageLoad::Started(true));
    } else {
        // Listener path: the run waits for `load`, so start it directly
        assert_eq!(bind_to_page_load(config.clone()).unwrap(), PageLoad::Deferred);
        assert!(start_with_config(config.clone()));
    }
    assert_eq!(element.inner_html(), "G");

    assert!(!start_with_config(config));
    assert!(!start_with_config(missing));
}

#[wasm_bindgen_test]
fn test_start_with_options_rejects_bad_options() {
    let options = js_sys::JSON::parse(r#"{"delayMs": "soon"}"#).unwrap();
    assert!(start_with_options(options).is_err());

    let empty_id = js_sys::JSON::parse(r#"{"elementId": ""}"#).unwrap();
    assert!(start_with_options(empty_id).is_err());
}
