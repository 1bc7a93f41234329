//! Mobile navigation toggle.
//!
//! One owned boolean, mirrored onto presentation classes, the toggle's
//! `aria-expanded` attribute, and a body-level scroll lock whenever it
//! changes. Link clicks, outside clicks, and growing past the desktop
//! breakpoint all force it closed.

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement, MouseEvent, Node};

#[cfg(target_arch = "wasm32")]
use crate::{dom, viewport};
use crate::viewport::{Breakpoint, NAV_BREAKPOINT};

/// Close when a pointer lands outside both the toggle and the menu.
pub fn closes_on_outside_click(open: bool, inside_toggle: bool, inside_menu: bool) -> bool {
    open && !inside_toggle && !inside_menu
}

/// Close when the viewport grows past the collapse breakpoint.
pub fn closes_on_resize(open: bool, width: f64) -> bool {
    open && Breakpoint::classify(width, NAV_BREAKPOINT) == Breakpoint::Desktop
}

#[cfg(target_arch = "wasm32")]
struct NavShared {
    open: Cell<bool>,
    toggle: HtmlElement,
    menu: HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl NavShared {
    fn set_open(&self, open: bool) {
        self.open.set(open);
        let _ = self.menu.class_list().toggle_with_force("active", open);
        let _ = self.toggle.class_list().toggle_with_force("active", open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        if let Some(body) = dom::document().and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force("menu-open", open);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct NavController {
    _on_toggle: Closure<dyn FnMut()>,
    _on_link: Closure<dyn FnMut()>,
    _on_outside: Closure<dyn FnMut(MouseEvent)>,
    _on_resize: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl NavController {
    pub fn install(document: &Document) -> Option<Self> {
        let shared = Rc::new(NavShared {
            open: Cell::new(false),
            toggle: dom::query(document, ".nav__toggle")?,
            menu: dom::query(document, ".nav__menu")?,
        });

        let on_toggle = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut()>::new(move || shared.set_open(!shared.open.get()))
        };
        dom::listen(&shared.toggle, "click", on_toggle.as_ref().unchecked_ref());

        let on_link = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut()>::new(move || shared.set_open(false))
        };
        for link in dom::query_all(document, ".nav__link") {
            dom::listen(&link, "click", on_link.as_ref().unchecked_ref());
        }

        let on_outside = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside_toggle = shared.toggle.contains(target.as_ref());
                let inside_menu = shared.menu.contains(target.as_ref());
                if closes_on_outside_click(shared.open.get(), inside_toggle, inside_menu) {
                    shared.set_open(false);
                }
            })
        };
        dom::listen(document, "click", on_outside.as_ref().unchecked_ref());

        let on_resize = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut()>::new(move || {
                if closes_on_resize(shared.open.get(), viewport::current_width()) {
                    shared.set_open(false);
                }
            })
        };
        if let Some(win) = dom::window() {
            dom::listen(&win, "resize", on_resize.as_ref().unchecked_ref());
        }

        Some(Self {
            _on_toggle: on_toggle,
            _on_link: on_link,
            _on_outside: on_outside,
            _on_resize: on_resize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{closes_on_outside_click, closes_on_resize};

    #[test]
    fn outside_click_only_closes_an_open_menu() {
        assert!(closes_on_outside_click(true, false, false));
        assert!(!closes_on_outside_click(false, false, false));
    }

    #[test]
    fn clicks_inside_toggle_or_menu_keep_it_open() {
        assert!(!closes_on_outside_click(true, true, false));
        assert!(!closes_on_outside_click(true, false, true));
    }

    #[test]
    fn resize_past_the_desktop_breakpoint_closes_it() {
        assert!(closes_on_resize(true, 1200.0));
        assert!(!closes_on_resize(true, 900.0));
        assert!(!closes_on_resize(true, 1024.0));
        assert!(!closes_on_resize(false, 1200.0));
    }
}
