//! Data models for the typewriter animation
//!
//! - `typewriter`: the reveal state machine
//! - `config`: animation settings and their defaults

pub mod config;
pub mod typewriter;

pub use config::TypewriterConfig;
pub use typewriter::{AnimatorState, Typewriter, DEFAULT_TEXT, LINE_BREAK_MARKER};
