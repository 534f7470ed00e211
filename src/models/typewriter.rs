//! Typewriter state machine
//!
//! Holds the source text and a cursor position that only moves forward.
//! Each call to [`Typewriter::advance`] reveals one display unit: a single
//! character, or the whole `<br>` marker rendered as one line break. Once the
//! text is exhausted the machine applies the cursor border once and stays
//! `Done`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::renderers::DisplayTarget;

/// Four-character marker rendered as a line break
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Text revealed on the default page
pub const DEFAULT_TEXT: &str = "Generate the certificates.<br>Drop the csv file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatorState {
    Typing,
    Done,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: Vec<char>,
    marker: Vec<char>,
    position: usize,
    state: AnimatorState,
    cursor_border: String,
}

impl Typewriter {
    pub fn new(text: &str, cursor_border: impl Into<String>) -> Self {
        Self {
            text: text.chars().collect(),
            marker: LINE_BREAK_MARKER.chars().collect(),
            position: 0,
            state: AnimatorState::Typing,
            cursor_border: cursor_border.into(),
        }
    }

    /// Cursor position, in characters
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == AnimatorState::Done
    }

    /// Number of steps needed to reveal the whole text
    pub fn unit_count(&self) -> usize {
        self.units_from(0)
    }

    /// Steps still needed before the terminal step
    pub fn remaining_units(&self) -> usize {
        self.units_from(self.position)
    }

    fn units_from(&self, mut pos: usize) -> usize {
        let mut count = 0;
        while pos < self.text.len() {
            pos += self.unit_width(pos);
            count += 1;
        }
        count
    }

    fn marker_at(&self, pos: usize) -> bool {
        self.text[pos..].starts_with(&self.marker)
    }

    fn unit_width(&self, pos: usize) -> usize {
        if self.marker_at(pos) {
            self.marker.len()
        } else {
            1
        }
    }

    /// Reveal the next unit into `target`, or finish the run
    ///
    /// Returns `Typing` while another step should be scheduled. The terminal
    /// step sets the cursor border and returns `Done`; any later call is a
    /// no-op. On a target error the cursor does not move.
    pub fn advance<D: DisplayTarget + ?Sized>(&mut self, target: &mut D) -> Result<AnimatorState> {
        if self.is_done() {
            return Ok(AnimatorState::Done);
        }

        if self.position >= self.text.len() {
            target.set_cursor_border(&self.cursor_border)?;
            self.state = AnimatorState::Done;
            return Ok(AnimatorState::Done);
        }

        if self.marker_at(self.position) {
            target.append_line_break()?;
            self.position += self.marker.len();
        } else {
            target.append_char(self.text[self.position])?;
            self.position += 1;
        }

        log::trace!("typewriter advanced to {}/{}", self.position, self.text.len());
        Ok(AnimatorState::Typing)
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT, crate::models::config::DEFAULT_CURSOR_BORDER)
    }
}
