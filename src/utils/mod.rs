//! Utility modules
//!
//! Timing primitives used to pace the animation.

pub mod timer;

pub use timer::{BrowserTimer, ManualTimer, Task, Timer};
