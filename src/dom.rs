//! Shared document access and query helpers.

use js_sys::Function;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, if it exists and carries a style.
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attach a listener, ignoring failure.
pub fn listen(target: &EventTarget, event: &str, callback: &Function) {
    let _ = target.add_event_listener_with_callback(event, callback);
}
