//! Capability-detected animation engine.
//!
//! The rich path drives the Web Animations API through prototype methods
//! probed once at startup; when the API is missing, or the visitor
//! prefers reduced motion, every transition collapses to an immediate
//! style write. Both paths assign absolute target values for every
//! property they touch, so an interrupted transition retargets from its
//! current position instead of accumulating drift, and re-issuing the
//! same transition is idempotent.

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
use crate::dom;

/// Absolute transform target. Untouched axes carry their identity
/// values, so a transition can never inherit a stale component.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn shift(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0 }
    }

    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

/// Horizontal clip insets in percent: `inset(0 trailing 0 leading)`.
/// `leading` hides from the left edge, `trailing` from the right.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClipX {
    pub leading: f64,
    pub trailing: f64,
}

impl ClipX {
    pub fn css(&self) -> String {
        format!("inset(0 {}% 0 {}%)", self.trailing, self.leading)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Prop {
    Transform(Transform),
    Clip(ClipX),
    Opacity(f64),
    ScaleX(f64),
    Shadow(&'static str),
}

impl Prop {
    /// Inline-style property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Transform(_) | Self::ScaleX(_) => "transform",
            Self::Clip(_) => "clip-path",
            Self::Opacity(_) => "opacity",
            Self::Shadow(_) => "box-shadow",
        }
    }

    /// Keyframe property name.
    pub fn keyframe_name(&self) -> &'static str {
        match self {
            Self::Transform(_) | Self::ScaleX(_) => "transform",
            Self::Clip(_) => "clipPath",
            Self::Opacity(_) => "opacity",
            Self::Shadow(_) => "boxShadow",
        }
    }

    pub fn css_value(&self) -> String {
        match self {
            Self::Transform(transform) => transform.css(),
            Self::Clip(clip) => clip.css(),
            Self::Opacity(value) => value.to_string(),
            Self::ScaleX(value) => format!("scaleX({value})"),
            Self::Shadow(value) => (*value).to_string(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ease {
    /// Quadratic decelerate.
    Out,
    /// Stronger cubic decelerate.
    OutCubic,
    /// Overshoot past the target before settling.
    OutBack,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Self::Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::OutCubic => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::OutBack => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Duration and delay in seconds.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub fn after(self, delay: f64) -> Self {
        Self { delay, ..self }
    }
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct Motion {
    engine: Engine,
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
enum Engine {
    Animated {
        animate: Function,
        get_animations: Function,
    },
    Immediate,
}

#[cfg(target_arch = "wasm32")]
impl Motion {
    /// Probe the animation capability once. Reduced-motion preference or
    /// a missing `Element.animate` selects the immediate path.
    pub fn detect() -> Self {
        if prefers_reduced_motion() {
            return Self {
                engine: Engine::Immediate,
            };
        }

        let Some(probe) = dom::document().and_then(|d| d.body()) else {
            return Self {
                engine: Engine::Immediate,
            };
        };

        let probe: JsValue = probe.into();
        match (method(&probe, "animate"), method(&probe, "getAnimations")) {
            (Some(animate), Some(get_animations)) => Self {
                engine: Engine::Animated {
                    animate,
                    get_animations,
                },
            },
            _ => Self {
                engine: Engine::Immediate,
            },
        }
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.engine, Engine::Animated { .. })
    }

    /// Immediate assignment: absolute values straight into inline style.
    pub fn set(&self, el: &HtmlElement, props: &[Prop]) {
        let style = el.style();
        for prop in props {
            let _ = style.set_property(prop.css_name(), &prop.css_value());
        }
    }

    /// Animated transition to absolute targets. The current computed
    /// values become the from-keyframe, every in-flight animation on the
    /// element is cancelled, and the targets land in inline style before
    /// the animation plays. Last writer wins; queues never grow.
    pub fn to(&self, el: &HtmlElement, props: &[Prop], timing: Timing) {
        match &self.engine {
            Engine::Immediate => self.set(el, props),
            Engine::Animated {
                animate,
                get_animations,
            } => {
                let from = current_frame(el, props);
                cancel_running(el, get_animations);
                self.set(el, props);

                let Some(from) = from else {
                    return;
                };
                let keyframes = Array::of2(&from.into(), &target_frame(props).into());
                let options: JsValue = timing_options(timing).into();
                let _ = animate.call2(el.as_ref(), &keyframes.into(), &options);
            }
        }
    }

    /// The same transition across a sequence, each element's start
    /// delayed by `step` more than the previous one.
    pub fn to_staggered(&self, els: &[HtmlElement], props: &[Prop], timing: Timing, step: f64) {
        for (index, el) in els.iter().enumerate() {
            self.to(el, props, timing.after(timing.delay + step * index as f64));
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn current_frame(el: &HtmlElement, props: &[Prop]) -> Option<Object> {
    let computed = web_sys::window()?.get_computed_style(el).ok().flatten()?;
    let frame = Object::new();
    for prop in props {
        let value = computed.get_property_value(prop.css_name()).ok()?;
        let _ = Reflect::set(
            &frame,
            &JsValue::from_str(prop.keyframe_name()),
            &JsValue::from_str(&value),
        );
    }
    Some(frame)
}

#[cfg(target_arch = "wasm32")]
fn target_frame(props: &[Prop]) -> Object {
    let frame = Object::new();
    for prop in props {
        let _ = Reflect::set(
            &frame,
            &JsValue::from_str(prop.keyframe_name()),
            &JsValue::from_str(&prop.css_value()),
        );
    }
    frame
}

#[cfg(target_arch = "wasm32")]
fn timing_options(timing: Timing) -> Object {
    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(timing.duration * 1000.0),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("delay"),
        &JsValue::from_f64(timing.delay * 1000.0),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("easing"),
        &JsValue::from_str(timing.ease.css()),
    );
    // Backwards fill holds the from-keyframe through a stagger delay.
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("fill"),
        &JsValue::from_str("backwards"),
    );
    options
}

#[cfg(target_arch = "wasm32")]
fn cancel_running(el: &HtmlElement, get_animations: &Function) {
    let Ok(list) = get_animations.call0(el.as_ref()) else {
        return;
    };
    for animation in Array::from(&list).iter() {
        if let Some(cancel) = method(&animation, "cancel") {
            let _ = cancel.call0(&animation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClipX, Ease, Prop, Timing, Transform};

    #[test]
    fn transform_renders_translate_then_scale() {
        let css = Transform {
            x: 120.0,
            y: 0.0,
            scale: 1.15,
        }
        .css();
        assert_eq!(css, "translate(120px, 0px) scale(1.15)");
        assert_eq!(Transform::IDENTITY.css(), "translate(0px, 0px) scale(1)");
    }

    #[test]
    fn clip_renders_horizontal_insets_only() {
        let split = ClipX {
            leading: 0.0,
            trailing: 46.0,
        };
        assert_eq!(split.css(), "inset(0 46% 0 0%)");

        let hidden = ClipX {
            leading: 100.0,
            trailing: 0.0,
        };
        assert_eq!(hidden.css(), "inset(0 0% 0 100%)");
    }

    #[test]
    fn transform_variants_share_the_transform_property() {
        assert_eq!(Prop::Transform(Transform::IDENTITY).css_name(), "transform");
        assert_eq!(Prop::ScaleX(0.0).css_name(), "transform");
        assert_eq!(Prop::ScaleX(0.5).css_value(), "scaleX(0.5)");
    }

    #[test]
    fn keyframe_names_are_camel_cased() {
        let clip = Prop::Clip(ClipX {
            leading: 0.0,
            trailing: 0.0,
        });
        assert_eq!(clip.css_name(), "clip-path");
        assert_eq!(clip.keyframe_name(), "clipPath");
        assert_eq!(Prop::Shadow("none").keyframe_name(), "boxShadow");
    }

    #[test]
    fn delay_does_not_disturb_duration_or_easing() {
        let timing = Timing::new(0.6, Ease::OutCubic).after(0.3);
        assert_eq!(timing.duration, 0.6);
        assert_eq!(timing.delay, 0.3);
        assert_eq!(timing.ease, Ease::OutCubic);
    }
}
