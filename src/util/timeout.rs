//! `gloo-timers` backed debounce scheduler for the masonry coordinator.
//!
//! Each armed timer is a `gloo_timers::callback::Timeout`; dropping it clears
//! the browser timeout, which is exactly the cancel-on-drop contract
//! `masonry::schedule::Scheduler` asks for. Outside the browser timers are
//! inert handles that never fire.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::rc::Rc;

use masonry::schedule::Scheduler;

/// Arms browser timeouts that all invoke the same callback.
#[derive(Clone)]
pub struct TimeoutScheduler {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    on_fire: Rc<dyn Fn()>,
}

impl TimeoutScheduler {
    pub fn new(on_fire: impl Fn() + 'static) -> Self {
        Self { on_fire: Rc::new(on_fire) }
    }
}

/// An armed timeout; dropping it cancels the timeout.
pub struct TimeoutHandle {
    #[cfg(feature = "hydrate")]
    _timeout: gloo_timers::callback::Timeout,
    delay_ms: u32,
}

impl TimeoutHandle {
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32) -> TimeoutHandle {
        #[cfg(feature = "hydrate")]
        {
            let on_fire = Rc::clone(&self.on_fire);
            TimeoutHandle { _timeout: gloo_timers::callback::Timeout::new(delay_ms, move || on_fire()), delay_ms }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            TimeoutHandle { delay_ms }
        }
    }
}
