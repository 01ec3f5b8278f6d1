//! One-shot timer capability used for the redistribution debounce.
//!
//! The coordinator only arms and drops handles. What happens when a timer
//! fires is decided by the host, which routes the callback back into
//! [`crate::coordinator::LayoutCoordinator::settle`].

/// Arms cancelable one-shot timers.
pub trait Scheduler {
    /// An armed timer. Dropping the handle must cancel the timer if it has not
    /// fired yet.
    type Handle;

    /// Arm a timer that fires once after `delay_ms`.
    fn schedule(&self, delay_ms: u32) -> Self::Handle;
}
