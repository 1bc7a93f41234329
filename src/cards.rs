//! Card hover lift.
//!
//! Bento, AI-workflow, and glass cards rise slightly under the pointer
//! with a deepened shadow, and settle back on leave. The rest shadow is
//! the stylesheet's own `--glass-shadow`, so leaving a card hands the
//! surface back to the theme.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Document;

use crate::dom;
use crate::motion::{Ease, Motion, Prop, Timing, Transform};

const LIFT_SECS: f64 = 0.4;
const LIFT_RISE: f64 = -10.0;
const LIFT_SHADOW: &str = "0 20px 40px -10px rgba(0, 0, 0, 0.08)";
const REST_SHADOW: &str = "var(--glass-shadow)";
const CARD_SELECTOR: &str = ".bento-card, .ai-workflow__card, .glass-card";

pub struct CardLiftController {
    _lifts: Vec<Closure<dyn FnMut()>>,
    _settles: Vec<Closure<dyn FnMut()>>,
}

impl CardLiftController {
    pub fn install(document: &Document, motion: &Motion) -> Option<Self> {
        let cards = dom::query_all(document, CARD_SELECTOR);
        if cards.is_empty() {
            return None;
        }

        let mut lifts = Vec::new();
        let mut settles = Vec::new();
        for card in cards {
            let lift = {
                let card = card.clone();
                let motion = motion.clone();
                Closure::<dyn FnMut()>::new(move || {
                    motion.to(
                        &card,
                        &[
                            Prop::Transform(Transform::shift(0.0, LIFT_RISE)),
                            Prop::Shadow(LIFT_SHADOW),
                        ],
                        Timing::new(LIFT_SECS, Ease::Out),
                    );
                })
            };
            dom::listen(&card, "mouseenter", lift.as_ref().unchecked_ref());

            let settle = {
                let card = card.clone();
                let motion = motion.clone();
                Closure::<dyn FnMut()>::new(move || {
                    motion.to(
                        &card,
                        &[
                            Prop::Transform(Transform::IDENTITY),
                            Prop::Shadow(REST_SHADOW),
                        ],
                        Timing::new(LIFT_SECS, Ease::Out),
                    );
                })
            };
            dom::listen(&card, "mouseleave", settle.as_ref().unchecked_ref());

            lifts.push(lift);
            settles.push(settle);
        }

        Some(Self {
            _lifts: lifts,
            _settles: settles,
        })
    }
}
