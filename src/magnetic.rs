//! Magnetic hover elements.
//!
//! Each registered element follows the pointer with a damped offset from
//! its own center and springs back on leave. Followers are independent;
//! on mobile widths no listeners are attached at all.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::motion::{Ease, Motion, Prop, Timing, Transform};
#[cfg(target_arch = "wasm32")]
use crate::viewport::{Breakpoint, MOBILE_BREAKPOINT};
#[cfg(target_arch = "wasm32")]
use crate::{dom, viewport};

/// Fraction of the pointer's distance from center that the element moves.
pub const DAMPING: f64 = 0.4;

#[cfg(target_arch = "wasm32")]
const FOLLOW_SECS: f64 = 0.3;
#[cfg(target_arch = "wasm32")]
const RELEASE_SECS: f64 = 0.5;

/// Damped offset of the pointer from an element's center along one axis.
pub fn damped_offset(pointer: f64, edge: f64, extent: f64) -> f64 {
    (pointer - edge - extent / 2.0) * DAMPING
}

#[cfg(target_arch = "wasm32")]
pub struct MagneticController {
    _followers: Vec<Closure<dyn FnMut(MouseEvent)>>,
    _releases: Vec<Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl MagneticController {
    pub fn install(document: &Document, motion: &Motion) -> Option<Self> {
        if Breakpoint::classify(viewport::current_width(), MOBILE_BREAKPOINT).is_mobile() {
            return None;
        }

        let elements = dom::query_all(document, ".magnetic");
        if elements.is_empty() {
            return None;
        }

        let mut followers = Vec::new();
        let mut releases = Vec::new();
        for el in elements {
            let follow = {
                let el = el.clone();
                let motion = motion.clone();
                Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    let rect = el.get_bounding_client_rect();
                    let x = damped_offset(f64::from(event.client_x()), rect.left(), rect.width());
                    let y = damped_offset(f64::from(event.client_y()), rect.top(), rect.height());
                    motion.to(
                        &el,
                        &[Prop::Transform(Transform::shift(x, y))],
                        Timing::new(FOLLOW_SECS, Ease::Out),
                    );
                })
            };
            dom::listen(&el, "mousemove", follow.as_ref().unchecked_ref());

            let release = {
                let el = el.clone();
                let motion = motion.clone();
                Closure::<dyn FnMut()>::new(move || {
                    motion.to(
                        &el,
                        &[Prop::Transform(Transform::IDENTITY)],
                        Timing::new(RELEASE_SECS, Ease::OutBack),
                    );
                })
            };
            dom::listen(&el, "mouseleave", release.as_ref().unchecked_ref());

            followers.push(follow);
            releases.push(release);
        }

        Some(Self {
            _followers: followers,
            _releases: releases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::damped_offset;

    #[test]
    fn offset_is_damped_distance_from_center() {
        // Element spans [100, 150], center 125; pointer at 150.
        assert_eq!(damped_offset(150.0, 100.0, 50.0), 10.0);
    }

    #[test]
    fn pointer_at_center_produces_no_offset() {
        assert_eq!(damped_offset(125.0, 100.0, 50.0), 0.0);
    }

    #[test]
    fn offset_is_signed_toward_the_pointer() {
        assert!(damped_offset(100.0, 100.0, 50.0) < 0.0);
    }
}
