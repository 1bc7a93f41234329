//! Window-width classification for behavior variants.
//!
//! Two independent thresholds: entrance offsets and magnetic hovers key
//! off [`MOBILE_BREAKPOINT`], the collapsible nav off [`NAV_BREAKPOINT`].
//! The width is read on demand, never observed continuously.

/// Below or at this width, entrance offsets shrink and magnetic hover
/// effects are disabled.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Above this width the collapsible nav is forced closed.
pub const NAV_BREAKPOINT: f64 = 1024.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn classify(width: f64, threshold: f64) -> Self {
        if width <= threshold {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_width() -> f64 {
    let Some(win) = web_sys::window() else {
        return 1280.0;
    };

    win.inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, MOBILE_BREAKPOINT, NAV_BREAKPOINT};

    #[test]
    fn narrow_widths_are_mobile_for_both_thresholds() {
        assert_eq!(
            Breakpoint::classify(500.0, MOBILE_BREAKPOINT),
            Breakpoint::Mobile
        );
        assert_eq!(
            Breakpoint::classify(500.0, NAV_BREAKPOINT),
            Breakpoint::Mobile
        );
    }

    #[test]
    fn tablet_widths_split_across_the_thresholds() {
        assert_eq!(
            Breakpoint::classify(900.0, MOBILE_BREAKPOINT),
            Breakpoint::Desktop
        );
        assert_eq!(
            Breakpoint::classify(900.0, NAV_BREAKPOINT),
            Breakpoint::Mobile
        );
    }

    #[test]
    fn threshold_width_itself_counts_as_mobile() {
        assert_eq!(
            Breakpoint::classify(768.0, MOBILE_BREAKPOINT),
            Breakpoint::Mobile
        );
        assert_eq!(
            Breakpoint::classify(1024.0, NAV_BREAKPOINT),
            Breakpoint::Mobile
        );
    }
}
