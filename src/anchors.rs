//! Offset-corrected smooth scrolling for same-document links.
//!
//! The native jump is suppressed only when the fragment resolves to an
//! element; the scroll destination is corrected for the fixed header and
//! the fragment is pushed onto the session history without navigating.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions};

#[cfg(target_arch = "wasm32")]
use crate::dom;

/// Fragment name of a same-document href. Bare `#` and non-fragment
/// hrefs yield `None`.
pub fn fragment_of(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Document-relative scroll destination: the target's top corrected for
/// a fixed header.
pub fn scroll_target(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

#[cfg(target_arch = "wasm32")]
pub struct AnchorController {
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl AnchorController {
    pub fn install(document: &Document) -> Option<Self> {
        let links = dom::query_all(document, "a[href^=\"#\"]");
        if links.is_empty() {
            return None;
        }

        let document = document.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(link) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(fragment) = fragment_of(&href) else {
                return;
            };
            // Unresolvable fragment: leave the default behavior alone.
            let Some(target) = document.get_element_by_id(fragment) else {
                return;
            };
            event.prevent_default();

            let Some(win) = dom::window() else {
                return;
            };
            let header_height = dom::query(&document, ".header")
                .map(|header| f64::from(header.offset_height()))
                .unwrap_or(0.0);
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                win.page_y_offset().unwrap_or(0.0),
                header_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = win.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }
        });

        for link in &links {
            dom::listen(link, "click", on_click.as_ref().unchecked_ref());
        }

        Some(Self {
            _on_click: on_click,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{fragment_of, scroll_target};

    #[test]
    fn fragment_links_resolve_to_their_name() {
        assert_eq!(fragment_of("#contact"), Some("contact"));
        assert_eq!(fragment_of("#"), None);
        assert_eq!(fragment_of("/about"), None);
        assert_eq!(fragment_of("https://example.com/#x"), None);
    }

    #[test]
    fn header_height_is_subtracted_from_the_destination() {
        // Target 800px down the document, 80px fixed header.
        assert_eq!(scroll_target(300.0, 500.0, 80.0), 720.0);
    }

    #[test]
    fn missing_header_leaves_the_destination_uncorrected() {
        assert_eq!(scroll_target(800.0, 0.0, 0.0), 800.0);
    }
}
