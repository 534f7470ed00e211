//! Timer-driven animation run
//!
//! Couples a [`Typewriter`] with a display target and a timer. Every tick
//! performs one step and, while text remains, schedules exactly one more tick.
//! A failed step is logged and ends the run; it never panics into the page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AnimatorState, Typewriter, TypewriterConfig, DEFAULT_TEXT};
use crate::renderers::DisplayTarget;
use crate::utils::Timer;

pub struct Animation<D, T> {
    typewriter: Typewriter,
    target: D,
    timer: T,
    delay_ms: u32,
    failed: bool,
}

impl<D, T> Animation<D, T>
where
    D: DisplayTarget + 'static,
    T: Timer + 'static,
{
    pub fn new(typewriter: Typewriter, target: D, timer: T, delay_ms: u32) -> Self {
        Self {
            typewriter,
            target,
            timer,
            delay_ms,
            failed: false,
        }
    }

    /// Animation of the default text with the given settings
    pub fn from_config(config: &TypewriterConfig, target: D, timer: T) -> Self {
        Self::new(
            Typewriter::new(DEFAULT_TEXT, config.cursor_border.as_str()),
            target,
            timer,
            config.delay_ms,
        )
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// True once a step or a scheduling attempt failed
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Run the first step now; later steps follow on the timer
    pub fn start(self) -> Rc<RefCell<Self>> {
        log::info!(
            "typewriter starting: {} units, {}ms per step",
            self.typewriter.unit_count(),
            self.delay_ms
        );
        let shared = Rc::new(RefCell::new(self));
        Self::tick(&shared);
        shared
    }

    fn tick(shared: &Rc<RefCell<Self>>) {
        let mut animation = shared.borrow_mut();
        let Animation {
            typewriter, target, ..
        } = &mut *animation;

        match typewriter.advance(target) {
            Ok(AnimatorState::Typing) => {
                let next = Rc::clone(shared);
                let scheduled = animation
                    .timer
                    .schedule(animation.delay_ms, Box::new(move || Self::tick(&next)));
                if let Err(e) = scheduled {
                    animation.failed = true;
                    log::error!("typewriter stopped, could not schedule next step: {}", e);
                }
            }
            Ok(AnimatorState::Done) => {
                log::info!(
                    "typewriter finished after {} characters",
                    animation.typewriter.position()
                );
            }
            Err(e) => {
                animation.failed = true;
                log::error!(
                    "typewriter stopped at position {}: {}",
                    animation.typewriter.position(),
                    e
                );
            }
        }
    }
}
