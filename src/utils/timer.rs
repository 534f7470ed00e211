//! Single-shot timers
//!
//! Each animation step schedules the next one; nothing repeats on its own.
//! `BrowserTimer` defers through `window.setTimeout`. `ManualTimer` queues the
//! callbacks so a caller can fire them one at a time.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::{Result, TypewriterError};

/// Deferred work handed to a timer
pub type Task = Box<dyn FnOnce()>;

pub trait Timer {
    /// Run `task` once, after `delay_ms` milliseconds
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()> {
        let window = web_sys::window().ok_or(TypewriterError::NoWindow)?;
        let callback = Closure::once_into_js(move || task());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);

        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref::<js_sys::Function>(),
                timeout,
            )
            .map(|_handle| ())
            .map_err(TypewriterError::schedule)
    }
}

struct Pending {
    delay_ms: u32,
    task: Task,
}

/// Timer stub driven by hand
///
/// Clones share the same queue, so a test can keep one handle while the
/// animation owns another.
#[derive(Clone, Default)]
pub struct ManualTimer {
    queue: Rc<RefCell<VecDeque<Pending>>>,
    fired: Rc<RefCell<Vec<u32>>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks scheduled but not yet fired
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Delays of every callback fired so far, in order
    pub fn fired_delays(&self) -> Vec<u32> {
        self.fired.borrow().clone()
    }

    /// Fire the oldest pending callback; false when nothing is queued
    pub fn fire_next(&self) -> bool {
        // Released before running: the task may schedule again
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some(Pending { delay_ms, task }) => {
                self.fired.borrow_mut().push(delay_ms);
                task();
                true
            }
            None => false,
        }
    }

    /// Fire callbacks until the queue stays empty; returns how many ran
    pub fn run_until_idle(&self) -> usize {
        let mut count = 0;
        while self.fire_next() {
            count += 1;
        }
        count
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()> {
        self.queue.borrow_mut().push_back(Pending { delay_ms, task });
        Ok(())
    }
}

impl std::fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualTimer")
            .field("pending", &self.pending())
            .field("fired", &self.fired.borrow().len())
            .finish()
    }
}
