use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Next "in view" value given the previous one and the latest report.
/// With `trigger_once` the first sighting latches for good.
pub fn next_in_view(previous: bool, intersecting: bool, trigger_once: bool) -> bool {
    if trigger_once && previous {
        return true;
    }
    intersecting
}

/// Watches the element behind the returned `NodeRef` and reports whether at
/// least `threshold` of it is on screen.
#[hook]
pub fn use_in_view(threshold: f64, trigger_once: bool) -> (NodeRef, bool) {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let node = node.clone();
        let setter = in_view.setter();
        use_effect_with_deps(
            move |_| {
                let latched = Rc::new(Cell::new(false));
                let fallback = setter.clone();
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        let next = next_in_view(latched.get(), intersecting, trigger_once);
                        latched.set(next);
                        setter.set(next);
                        if trigger_once && next {
                            observer.disconnect();
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(threshold));

                let observer = match (
                    node.cast::<web_sys::Element>(),
                    IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ),
                ) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (None, _) => None,
                    (_, Err(err)) => {
                        log::warn!("IntersectionObserver unavailable: {:?}", err);
                        None
                    }
                };
                // Without an observer there is nothing to gate on, show the section.
                if observer.is_none() {
                    fallback.set(true);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (node, *in_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_mode_follows_reports() {
        let mut shown = false;
        let mut history = Vec::new();
        for intersecting in [true, false, true, false] {
            shown = next_in_view(shown, intersecting, false);
            history.push(shown);
        }
        assert_eq!(history, vec![true, false, true, false]);
    }

    #[test]
    fn trigger_once_latches_after_first_sighting() {
        let mut shown = false;
        shown = next_in_view(shown, false, true);
        assert!(!shown);
        shown = next_in_view(shown, true, true);
        assert!(shown);
        shown = next_in_view(shown, false, true);
        assert!(shown);
    }
}
