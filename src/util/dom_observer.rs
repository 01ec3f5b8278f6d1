//! `ResizeObserver` backed size observation for rendered masonry cells.
//!
//! Heights are read from `offsetHeight` on every notification rather than
//! from the observer entries, so borders and padding count toward the card
//! height the grid balances on.

use masonry::observe::SizeObserver;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Measures `HtmlElement` boxes and watches them with `ResizeObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSizeObserver;

/// A connected `ResizeObserver`; dropping it disconnects.
pub struct DomSubscription {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>,
}

impl Drop for DomSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Rendered height of `element` in whole CSS pixels.
#[must_use]
pub fn offset_height(element: &web_sys::HtmlElement) -> u32 {
    u32::try_from(element.offset_height()).unwrap_or(0)
}

/// Rendered width of `element` in CSS pixels.
#[must_use]
pub fn offset_width(element: &web_sys::HtmlElement) -> f64 {
    f64::from(element.offset_width())
}

impl SizeObserver for DomSizeObserver {
    type Element = web_sys::HtmlElement;
    type Subscription = Option<DomSubscription>;

    fn measure(&self, element: &web_sys::HtmlElement) -> u32 {
        offset_height(element)
    }

    fn observe(&self, element: &web_sys::HtmlElement, on_change: Box<dyn Fn(u32)>) -> Option<DomSubscription> {
        let target = element.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
                on_change(offset_height(&target));
            },
        );
        let observer = match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("ResizeObserver unavailable: {e:?}");
                return None;
            }
        };
        observer.observe(element);
        Some(DomSubscription { observer, _callback: callback })
    }
}
