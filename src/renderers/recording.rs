//! In-memory display target
//!
//! Records what a page element would have received. Line breaks are kept as
//! `<br>` so the rendered string reads like the element's HTML body.

use super::DisplayTarget;
use crate::error::Result;

/// One appended display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedUnit {
    Char(char),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingTarget {
    units: Vec<RenderedUnit>,
    cursor_border: Option<String>,
    border_writes: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appended content, with line breaks as `<br>`
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.units.len());
        for unit in &self.units {
            match unit {
                RenderedUnit::Char(ch) => out.push(*ch),
                RenderedUnit::LineBreak => out.push_str("<br>"),
            }
        }
        out
    }

    pub fn units(&self) -> &[RenderedUnit] {
        &self.units
    }

    pub fn line_breaks(&self) -> usize {
        self.units
            .iter()
            .filter(|u| matches!(u, RenderedUnit::LineBreak))
            .count()
    }

    pub fn cursor_border(&self) -> Option<&str> {
        self.cursor_border.as_deref()
    }

    /// How many times the border was set
    pub fn border_writes(&self) -> usize {
        self.border_writes
    }
}

impl DisplayTarget for RecordingTarget {
    fn append_char(&mut self, ch: char) -> Result<()> {
        self.units.push(RenderedUnit::Char(ch));
        Ok(())
    }

    fn append_line_break(&mut self) -> Result<()> {
        self.units.push(RenderedUnit::LineBreak);
        Ok(())
    }

    fn set_cursor_border(&mut self, style: &str) -> Result<()> {
        self.cursor_border = Some(style.to_string());
        self.border_writes += 1;
        Ok(())
    }
}
