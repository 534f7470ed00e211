//! Page element target
//!
//! The element is resolved by id on every call rather than cached, so a
//! target that disappears mid-run surfaces as `ElementNotFound` on the next
//! step instead of writing into a detached node.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::DisplayTarget;
use crate::error::{Result, TypewriterError};

/// Rendered form of the line-break marker
const LINE_BREAK_HTML: &str = "<br>";

/// CSS property that carries the resting cursor
const CURSOR_BORDER_PROPERTY: &str = "border-right";

#[derive(Debug, Clone)]
pub struct DomTarget {
    element_id: String,
}

impl DomTarget {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    fn element(&self) -> Result<Element> {
        let window = web_sys::window().ok_or(TypewriterError::NoWindow)?;
        let document = window.document().ok_or(TypewriterError::NoDocument)?;
        document
            .get_element_by_id(&self.element_id)
            .ok_or_else(|| TypewriterError::ElementNotFound(self.element_id.clone()))
    }
}

impl DisplayTarget for DomTarget {
    fn append_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0u8; 4];
        // Text insertion: a stray '<' or '&' is shown, not parsed
        self.element()?
            .insert_adjacent_text("beforeend", ch.encode_utf8(&mut buf))
            .map_err(TypewriterError::dom)
    }

    fn append_line_break(&mut self) -> Result<()> {
        self.element()?
            .insert_adjacent_html("beforeend", LINE_BREAK_HTML)
            .map_err(TypewriterError::dom)
    }

    fn set_cursor_border(&mut self, style: &str) -> Result<()> {
        let element: HtmlElement = self
            .element()?
            .dyn_into()
            .map_err(|_| TypewriterError::NotStylable(self.element_id.clone()))?;
        element
            .style()
            .set_property(CURSOR_BORDER_PROPERTY, style)
            .map_err(TypewriterError::dom)
    }
}
