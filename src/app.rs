//! One-shot wiring of every enhancement controller.
//!
//! Runs once when the document is ready. Each controller is an explicit
//! object owning its listener closures; the assembled set is leaked for
//! the page lifetime, so listeners can never be bound twice.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Document;

use crate::motion::Motion;
use crate::{anchors, cards, dom, hero, magnetic, nav, reveal};

struct Enhancements {
    _hero: Option<hero::HeroController>,
    _reveal: Option<reveal::RevealController>,
    _nav: Option<nav::NavController>,
    _anchors: Option<anchors::AnchorController>,
    _magnetic: Option<magnetic::MagneticController>,
    _cards: Option<cards::CardLiftController>,
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let boot = Closure::<dyn FnMut()>::new(|| {
            if let Some(document) = dom::document() {
                init(&document);
            }
        });
        dom::listen(&document, "DOMContentLoaded", boot.as_ref().unchecked_ref());
        boot.forget();
    } else {
        init(&document);
    }
}

fn init(document: &Document) {
    let motion = Motion::detect();

    hero::play_entrance(document, &motion);

    let controllers = Enhancements {
        _hero: hero::HeroController::install(document, &motion),
        _reveal: reveal::RevealController::install(document, &motion),
        _nav: nav::NavController::install(document),
        _anchors: anchors::AnchorController::install(document),
        _magnetic: magnetic::MagneticController::install(document, &motion),
        _cards: cards::CardLiftController::install(document, &motion),
    };

    // Controllers live as long as the page; dropping them would detach
    // the closures behind their listeners.
    std::mem::forget(controllers);
}
