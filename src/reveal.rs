//! Scroll-triggered reveals.
//!
//! Elements tagged for reveal start hidden and rise into place when they
//! cross into the viewport. Policy: one-shot; an element is unobserved
//! after its first reveal and never re-hidden. Card and skill groups
//! reveal as a batch with an inter-element stagger.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;
use crate::motion::{Ease, Motion, Prop, Timing, Transform};

/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_RISE: f64 = 40.0;
const REVEAL_SECS: f64 = 1.2;
const BATCH_SECS: f64 = 1.0;
const BATCH_STAGGER: f64 = 0.15;
const BATCH_SELECTORS: [&str; 2] = [".bento-card", ".skills__category"];

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct RevealController {
    _observers: Vec<IntersectionObserver>,
    _callbacks: Vec<ObserverCallback>,
}

impl RevealController {
    /// Hide the tagged elements and start observing. Without an animation
    /// engine nothing is hidden and nothing is observed: the page simply
    /// shows everything, which is the reduced rendition of this feature.
    pub fn install(document: &Document, motion: &Motion) -> Option<Self> {
        if !motion.is_animated() {
            return None;
        }

        let singles = dom::query_all(document, ".scroll-reveal");
        let batched: Vec<HtmlElement> = BATCH_SELECTORS
            .iter()
            .flat_map(|selector| dom::query_all(document, selector))
            .collect();
        if singles.is_empty() && batched.is_empty() {
            return None;
        }

        for el in singles.iter().chain(batched.iter()) {
            motion.set(
                el,
                &[
                    Prop::Transform(Transform::shift(0.0, REVEAL_RISE)),
                    Prop::Opacity(0.0),
                ],
            );
        }

        let mut observers = Vec::new();
        let mut callbacks = Vec::new();
        observe_group(
            &singles,
            motion,
            Timing::new(REVEAL_SECS, Ease::OutCubic),
            0.0,
            &mut observers,
            &mut callbacks,
        );
        observe_group(
            &batched,
            motion,
            Timing::new(BATCH_SECS, Ease::Out),
            BATCH_STAGGER,
            &mut observers,
            &mut callbacks,
        );

        Some(Self {
            _observers: observers,
            _callbacks: callbacks,
        })
    }
}

fn observe_group(
    els: &[HtmlElement],
    motion: &Motion,
    timing: Timing,
    stagger: f64,
    observers: &mut Vec<IntersectionObserver>,
    callbacks: &mut Vec<ObserverCallback>,
) {
    if els.is_empty() {
        return;
    }

    let engine = motion.clone();
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            // Entries that cross together reveal together, staggered.
            let mut index = 0usize;
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                observer.unobserve(&target);
                engine.to(
                    &target,
                    &[Prop::Transform(Transform::IDENTITY), Prop::Opacity(1.0)],
                    timing.after(stagger * index as f64),
                );
                index += 1;
            }
        });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in els {
                observer.observe(el);
            }
            observers.push(observer);
            callbacks.push(callback);
        }
        Err(_) => {
            // No observer support: never leave content hidden.
            for el in els {
                motion.set(
                    el,
                    &[Prop::Transform(Transform::IDENTITY), Prop::Opacity(1.0)],
                );
            }
        }
    }
}
