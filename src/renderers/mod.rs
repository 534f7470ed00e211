//! Display targets
//!
//! The animator only ever appends to its target and, once finished, sets a
//! single border style. Anything that can do those three things can host
//! the animation.
//!
//! - `dom`: a page element looked up by id on every call
//! - `recording`: an in-memory target for tests and headless use

pub mod dom;
pub mod recording;

pub use dom::DomTarget;
pub use recording::RecordingTarget;

use crate::error::Result;

/// Append-only sink for revealed text
pub trait DisplayTarget {
    /// Append one literal character
    ///
    /// The character is content, not markup: a `<` or `&` is shown as
    /// written rather than parsed as HTML.
    fn append_char(&mut self, ch: char) -> Result<()>;

    /// Append one rendered line break
    fn append_line_break(&mut self) -> Result<()>;

    /// Set the leading-edge border that stands in for a resting cursor
    fn set_cursor_border(&mut self, style: &str) -> Result<()>;
}
