use js_sys::Array;
use portfolio_types::classes;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::UiError;
use crate::interop::Dom;

/// One-shot reveal of every element matching a selector.
///
/// Each element gains `visible` the first time the observer reports it
/// intersecting and is unobserved right after, so it never reverts.
/// `threshold` only decides when the browser calls back. The observer is
/// disconnected when this is dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn watch(dom: &Dom, selector: &str, threshold: f64) -> Result<Self, UiError> {
        let on_intersect = move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                if let Err(e) = target.class_list().add_1(classes::VISIBLE) {
                    log::warn!("reveal failed: {:?}", e);
                }
                observer.unobserve(&target);
            }
        };
        let callback =
            Closure::wrap(Box::new(on_intersect) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let targets = dom.query_all(selector)?;
        log::debug!("observing {} `{}` elements", targets.len(), selector);
        for target in &targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
