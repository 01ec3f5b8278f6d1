//! Resize observation capability and the per-item height reporter.
//!
//! DESIGN
//! ======
//! The layout math never touches the DOM. A [`SizeObserver`] measures a
//! rendered box and notifies on size changes; the browser host implements it
//! with `ResizeObserver`, tests implement it with a plain struct.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

use std::rc::Rc;

/// Measures and watches the height of rendered boxes.
pub trait SizeObserver {
    /// Platform handle for a rendered box.
    type Element;
    /// Live observation. Dropping it disconnects the observer.
    type Subscription;

    /// Current rendered height of `element` in whole pixels.
    fn measure(&self, element: &Self::Element) -> u32;

    /// Invoke `on_change` with the new height whenever `element` resizes.
    fn observe(&self, element: &Self::Element, on_change: Box<dyn Fn(u32)>) -> Self::Subscription;
}

/// Reports one rendered item's height, keyed by its stable key.
///
/// Mounting measures synchronously and reports right away, then forwards
/// every observed change. The subscription is released by [`Self::unmount`]
/// or when the reporter is dropped.
pub struct HeightReporter<S: SizeObserver> {
    subscription: Option<S::Subscription>,
}

impl<S: SizeObserver> HeightReporter<S> {
    /// Start reporting heights of `element` under `key`.
    pub fn mount<K>(observer: &S, element: &S::Element, key: K, report: Rc<dyn Fn(K, u32)>) -> Self
    where
        K: Clone + 'static,
    {
        report(key.clone(), observer.measure(element));
        let on_change = Box::new(move |height: u32| report(key.clone(), height));
        Self { subscription: Some(observer.observe(element, on_change)) }
    }

    /// Disconnect the observer. Idempotent.
    pub fn unmount(&mut self) {
        self.subscription.take();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }
}
