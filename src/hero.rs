//! Split designer/coder hero: hover state machine and entrance sequence.
//!
//! Three mutually exclusive presentation states drive five style targets
//! (portrait wrapper, two clipped portrait layers, two text blocks).
//! Every transition applies the full absolute bundle for its state, so
//! rapid hovering between zones retargets cleanly; there is no
//! in-between state to drift from.

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement};

use crate::motion::{ClipX, Prop, Transform};
#[cfg(target_arch = "wasm32")]
use crate::motion::{Ease, Motion, Timing};
use crate::viewport::{Breakpoint, MOBILE_BREAKPOINT};
#[cfg(target_arch = "wasm32")]
use crate::{dom, viewport};

/// Share of the width the designer layer keeps at rest, in percent.
const SPLIT_LEADING_SHARE: f64 = 54.0;
const PORTRAIT_ZOOM: f64 = 1.15;
const PORTRAIT_SLIDE: f64 = 120.0;
const TEXT_SHIFT_NEAR: f64 = 40.0;
const TEXT_SHIFT_FAR: f64 = 100.0;
const TEXT_ZOOM: f64 = 1.05;
#[cfg(target_arch = "wasm32")]
const HOVER_SECS: f64 = 0.6;

const ENTRANCE_SHIFT_MOBILE: f64 = 100.0;
const ENTRANCE_SHIFT_DESKTOP: f64 = 300.0;
#[cfg(target_arch = "wasm32")]
const ENTRANCE_SECS: f64 = 1.4;
#[cfg(target_arch = "wasm32")]
const SNIPPET_RISE: f64 = 20.0;
#[cfg(target_arch = "wasm32")]
const SNIPPET_SECS: f64 = 0.8;
#[cfg(target_arch = "wasm32")]
const SNIPPET_DELAY: f64 = 0.9;
#[cfg(target_arch = "wasm32")]
const SNIPPET_STAGGER: f64 = 0.05;
#[cfg(target_arch = "wasm32")]
const BAR_SECS: f64 = 0.8;
#[cfg(target_arch = "wasm32")]
const BAR_DELAY: f64 = 1.0;
#[cfg(target_arch = "wasm32")]
const BAR_STAGGER: f64 = 0.1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeroState {
    Neutral,
    LeftActive,
    RightActive,
}

/// Absolute emphasis target for one hero text block.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextTargets {
    pub x: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl TextTargets {
    const NEUTRAL: Self = Self {
        x: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

/// The full absolute property bundle for one state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeroTargets {
    pub wrapper: Transform,
    pub designer_layer: ClipX,
    pub coder_layer: ClipX,
    pub designer_text: TextTargets,
    pub coder_text: TextTargets,
}

impl HeroState {
    pub fn targets(self) -> HeroTargets {
        match self {
            Self::Neutral => HeroTargets {
                wrapper: Transform::IDENTITY,
                designer_layer: ClipX {
                    leading: 0.0,
                    trailing: 100.0 - SPLIT_LEADING_SHARE,
                },
                coder_layer: ClipX {
                    leading: SPLIT_LEADING_SHARE,
                    trailing: 0.0,
                },
                designer_text: TextTargets::NEUTRAL,
                coder_text: TextTargets::NEUTRAL,
            },
            Self::LeftActive => HeroTargets {
                wrapper: Transform {
                    x: PORTRAIT_SLIDE,
                    y: 0.0,
                    scale: PORTRAIT_ZOOM,
                },
                designer_layer: ClipX {
                    leading: 0.0,
                    trailing: 0.0,
                },
                coder_layer: ClipX {
                    leading: 100.0,
                    trailing: 0.0,
                },
                designer_text: TextTargets {
                    x: TEXT_SHIFT_NEAR,
                    scale: TEXT_ZOOM,
                    opacity: 1.0,
                },
                coder_text: TextTargets {
                    x: TEXT_SHIFT_FAR,
                    scale: 1.0,
                    opacity: 0.0,
                },
            },
            Self::RightActive => HeroTargets {
                wrapper: Transform {
                    x: -PORTRAIT_SLIDE,
                    y: 0.0,
                    scale: PORTRAIT_ZOOM,
                },
                designer_layer: ClipX {
                    leading: 0.0,
                    trailing: 100.0,
                },
                coder_layer: ClipX {
                    leading: 0.0,
                    trailing: 0.0,
                },
                designer_text: TextTargets {
                    x: -TEXT_SHIFT_FAR,
                    scale: 1.0,
                    opacity: 0.0,
                },
                coder_text: TextTargets {
                    x: -TEXT_SHIFT_NEAR,
                    scale: TEXT_ZOOM,
                    opacity: 1.0,
                },
            },
        }
    }
}

impl HeroTargets {
    /// Invariant: the layers always partition the full width: the
    /// designer layer's visible trailing edge meets the coder layer's
    /// visible leading edge, with no gap and no overlap.
    pub fn layers_partition_width(&self) -> bool {
        self.designer_layer.leading == 0.0
            && self.coder_layer.trailing == 0.0
            && 100.0 - self.designer_layer.trailing == self.coder_layer.leading
    }
}

/// Entrance slide magnitude for the current viewport class.
pub fn entrance_shift(width: f64) -> f64 {
    match Breakpoint::classify(width, MOBILE_BREAKPOINT) {
        Breakpoint::Mobile => ENTRANCE_SHIFT_MOBILE,
        Breakpoint::Desktop => ENTRANCE_SHIFT_DESKTOP,
    }
}

fn text_props(targets: TextTargets) -> [Prop; 2] {
    [
        Prop::Transform(Transform {
            x: targets.x,
            y: 0.0,
            scale: targets.scale,
        }),
        Prop::Opacity(targets.opacity),
    ]
}

#[cfg(target_arch = "wasm32")]
struct HeroStage {
    motion: Motion,
    wrapper: HtmlElement,
    designer_layer: HtmlElement,
    coder_layer: HtmlElement,
    designer_text: HtmlElement,
    coder_text: HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl HeroStage {
    fn apply(&self, state: HeroState) {
        let targets = state.targets();
        let timing = Timing::new(HOVER_SECS, Ease::OutCubic);

        self.motion
            .to(&self.wrapper, &[Prop::Transform(targets.wrapper)], timing);
        self.motion.to(
            &self.designer_layer,
            &[Prop::Clip(targets.designer_layer)],
            timing,
        );
        self.motion
            .to(&self.coder_layer, &[Prop::Clip(targets.coder_layer)], timing);
        self.motion
            .to(&self.designer_text, &text_props(targets.designer_text), timing);
        self.motion
            .to(&self.coder_text, &text_props(targets.coder_text), timing);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct HeroController {
    _enter_left: Closure<dyn FnMut()>,
    _enter_right: Closure<dyn FnMut()>,
    _reset: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl HeroController {
    /// Wire the hover machine. All five style targets must exist;
    /// otherwise nothing is attached and the hero stays static. The two
    /// hover zones are individually optional.
    pub fn install(document: &Document, motion: &Motion) -> Option<Self> {
        let stage = Rc::new(HeroStage {
            motion: motion.clone(),
            wrapper: dom::query(document, ".hero__portrait-wrapper")?,
            designer_layer: dom::query(document, ".hero__portrait-designer")?,
            coder_layer: dom::query(document, ".hero__portrait-coder")?,
            designer_text: dom::query(document, ".hero__designer")?,
            coder_text: dom::query(document, ".hero__coder")?,
        });

        let enter_left = transition(&stage, HeroState::LeftActive);
        let enter_right = transition(&stage, HeroState::RightActive);
        let reset = transition(&stage, HeroState::Neutral);

        if let Some(zone) = dom::query(document, ".hero__hover-zone--left") {
            dom::listen(&zone, "mouseenter", enter_left.as_ref().unchecked_ref());
        }
        if let Some(zone) = dom::query(document, ".hero__hover-zone--right") {
            dom::listen(&zone, "mouseenter", enter_right.as_ref().unchecked_ref());
        }

        dom::listen(
            &stage.designer_text,
            "mouseenter",
            enter_left.as_ref().unchecked_ref(),
        );
        dom::listen(
            &stage.coder_text,
            "mouseenter",
            enter_right.as_ref().unchecked_ref(),
        );

        for leave_target in [&stage.wrapper, &stage.designer_text, &stage.coder_text] {
            dom::listen(leave_target, "mouseleave", reset.as_ref().unchecked_ref());
        }

        Some(Self {
            _enter_left: enter_left,
            _enter_right: enter_right,
            _reset: reset,
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn transition(stage: &Rc<HeroStage>, state: HeroState) -> Closure<dyn FnMut()> {
    let stage = Rc::clone(stage);
    Closure::new(move || stage.apply(state))
}

/// One-shot entrance: the text blocks collide in from the sides, then
/// code snippets and the color bar follow with staggers.
#[cfg(target_arch = "wasm32")]
pub fn play_entrance(document: &Document, motion: &Motion) {
    // Portraits become visible without animation; animating them would
    // fight the clip-path split.
    for selector in [".hero__portrait-designer", ".hero__portrait-coder"] {
        if let Some(layer) = dom::query(document, selector) {
            motion.set(&layer, &[Prop::Opacity(1.0)]);
        }
    }

    let shift = entrance_shift(viewport::current_width());
    let timing = Timing::new(ENTRANCE_SECS, Ease::Out);
    slide_in(motion, dom::query(document, ".hero__designer"), -shift, timing);
    slide_in(motion, dom::query(document, ".hero__coder"), shift, timing);

    let snippets = dom::query_all(document, ".hero__code-snippets span");
    rise_in(
        motion,
        &snippets,
        Timing::new(SNIPPET_SECS, Ease::Out).after(SNIPPET_DELAY),
        SNIPPET_STAGGER,
    );

    let segments = dom::query_all(document, ".color-bar__segment");
    grow_in(
        motion,
        &segments,
        Timing::new(BAR_SECS, Ease::Out).after(BAR_DELAY),
        BAR_STAGGER,
    );
}

#[cfg(target_arch = "wasm32")]
fn slide_in(motion: &Motion, el: Option<HtmlElement>, from_x: f64, timing: Timing) {
    let Some(el) = el else {
        return;
    };
    if motion.is_animated() {
        motion.set(
            &el,
            &[
                Prop::Transform(Transform::shift(from_x, 0.0)),
                Prop::Opacity(0.0),
            ],
        );
    }
    motion.to(
        &el,
        &[Prop::Transform(Transform::IDENTITY), Prop::Opacity(1.0)],
        timing,
    );
}

#[cfg(target_arch = "wasm32")]
fn rise_in(motion: &Motion, els: &[HtmlElement], timing: Timing, stagger: f64) {
    if motion.is_animated() {
        for el in els {
            motion.set(
                el,
                &[
                    Prop::Transform(Transform::shift(0.0, SNIPPET_RISE)),
                    Prop::Opacity(0.0),
                ],
            );
        }
    }
    motion.to_staggered(
        els,
        &[Prop::Transform(Transform::IDENTITY), Prop::Opacity(1.0)],
        timing,
        stagger,
    );
}

#[cfg(target_arch = "wasm32")]
fn grow_in(motion: &Motion, els: &[HtmlElement], timing: Timing, stagger: f64) {
    if motion.is_animated() {
        for el in els {
            let _ = el.style().set_property("transform-origin", "left center");
            motion.set(el, &[Prop::ScaleX(0.0)]);
        }
    }
    motion.to_staggered(els, &[Prop::ScaleX(1.0)], timing, stagger);
}

#[cfg(test)]
mod tests {
    use super::{entrance_shift, text_props, HeroState, TextTargets};
    use crate::motion::{Prop, Transform};

    #[test]
    fn every_state_partitions_the_portrait_width() {
        for state in [
            HeroState::Neutral,
            HeroState::LeftActive,
            HeroState::RightActive,
        ] {
            let targets = state.targets();
            assert!(
                targets.layers_partition_width(),
                "{state:?} leaves a gap or overlap between the portrait layers"
            );
        }
    }

    #[test]
    fn neutral_is_the_documented_rest_state() {
        let targets = HeroState::Neutral.targets();
        assert_eq!(targets.wrapper, Transform::IDENTITY);
        assert_eq!(targets.designer_layer.trailing, 46.0);
        assert_eq!(targets.coder_layer.leading, 54.0);
        assert_eq!(targets.designer_text, TextTargets::NEUTRAL);
        assert_eq!(targets.coder_text, TextTargets::NEUTRAL);
    }

    #[test]
    fn active_states_mirror_each_other() {
        let left = HeroState::LeftActive.targets();
        let right = HeroState::RightActive.targets();

        assert_eq!(left.wrapper.x, -right.wrapper.x);
        assert_eq!(left.wrapper.scale, right.wrapper.scale);
        assert_eq!(left.designer_text.x, -right.coder_text.x);
        assert_eq!(left.coder_text.x, -right.designer_text.x);
        assert_eq!(left.designer_text.opacity, right.coder_text.opacity);
        assert_eq!(left.coder_text.opacity, right.designer_text.opacity);
    }

    #[test]
    fn targets_are_absolute_regardless_of_history() {
        // Entering RightActive directly or via LeftActive must yield the
        // same bundle: the mapping depends only on the state.
        let direct = HeroState::RightActive.targets();
        let _detour = HeroState::LeftActive.targets();
        let after_detour = HeroState::RightActive.targets();
        assert_eq!(direct, after_detour);
    }

    #[test]
    fn suppressed_text_still_receives_a_full_bundle() {
        // Even the faded-out block gets explicit transform and opacity,
        // so an interrupted transition cannot leave a stale scale behind.
        let left = HeroState::LeftActive.targets();
        let props = text_props(left.coder_text);
        assert_eq!(
            props[0],
            Prop::Transform(Transform {
                x: 100.0,
                y: 0.0,
                scale: 1.0
            })
        );
        assert_eq!(props[1], Prop::Opacity(0.0));
    }

    #[test]
    fn entrance_shift_follows_the_mobile_breakpoint() {
        assert_eq!(entrance_shift(500.0), 100.0);
        assert_eq!(entrance_shift(900.0), 300.0);
    }
}
