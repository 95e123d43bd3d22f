//! Easing functions for animations
//!
//! Every easing maps `(start, end, t)` to a value. `t` is not clamped: the
//! scheduler feeds normalized progress straight through, and values outside
//! `[0, 1]` are evaluated on the same formula.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AnimationError;

/// Signature shared by every easing function
pub type EaseFn = fn(f64, f64, f64) -> f64;

/// Easing function reference
#[derive(Clone, Copy, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Freeze at `start`
    Hold,
    OutBounce,
    /// Caller-supplied curve. Code-only, never serialized.
    Custom(EaseFn),
}

impl Easing {
    /// Evaluate between `start` and `end` at progress `t`
    pub fn ease(&self, start: f64, end: f64, t: f64) -> f64 {
        match self {
            Easing::Linear => lerp(start, end, t),
            Easing::Hold => hold(start, end, t),
            Easing::OutBounce => ease_out_bounce(start, end, t),
            Easing::Custom(f) => f(start, end, t),
        }
    }

    /// Configuration name, if the easing has one
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Easing::Linear => Some("linear"),
            Easing::Hold => Some("hold"),
            Easing::OutBounce => Some("out_bounce"),
            Easing::Custom(_) => None,
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str("custom"),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Custom(a), Easing::Custom(b)) => *a as usize == *b as usize,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "lerp" => Ok(Easing::Linear),
            "hold" => Ok(Easing::Hold),
            "out_bounce" | "ease_out_bounce" => Ok(Easing::OutBounce),
            other => Err(AnimationError::UnknownEasing(other.to_string())),
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => Err(serde::ser::Error::custom(
                "custom easing functions cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Linear interpolation
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Always `start`
#[inline]
pub fn hold(start: f64, _end: f64, _t: f64) -> f64 {
    start
}

/// Bounce-out between `start` and `end`
pub fn ease_out_bounce(start: f64, end: f64, t: f64) -> f64 {
    lerp(start, end, bounce_out(t))
}

/// The published bounce-out curve on normalized progress
pub fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn double(start: f64, end: f64, t: f64) -> f64 {
        lerp(start, end, 2.0 * t)
    }

    #[test]
    fn test_degenerate_range() {
        let all = [
            Easing::Linear,
            Easing::Hold,
            Easing::OutBounce,
            Easing::Custom(double),
        ];
        for easing in all {
            for t in [-1.0, 0.0, 0.3, 0.5, 1.0, 2.5] {
                assert_eq!(easing.ease(4.0, 4.0, t), 4.0, "{:?} at t={}", easing, t);
            }
        }
    }

    #[test]
    fn test_linear() {
        let ease = Easing::Linear;
        assert_eq!(ease.ease(0.0, 10.0, 0.5), 5.0);
        assert_eq!(ease.ease(0.0, 10.0, 0.0), 0.0);
        assert_eq!(ease.ease(0.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn test_linear_is_not_clamped() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_hold() {
        assert_eq!(Easing::Hold.ease(3.0, 9.0, 0.0), 3.0);
        assert_eq!(Easing::Hold.ease(3.0, 9.0, 0.75), 3.0);
        assert_eq!(Easing::Hold.ease(3.0, 9.0, 7.0), 3.0);
    }

    #[test]
    fn test_bounce_endpoints() {
        assert!(approx_eq(bounce_out(0.0), 0.0));
        assert!(approx_eq(bounce_out(1.0), 1.0));
        assert!(approx_eq(Easing::OutBounce.ease(0.0, 1.0, 0.0), 0.0));
        assert!(approx_eq(Easing::OutBounce.ease(0.0, 1.0, 1.0), 1.0));
    }

    #[test]
    fn test_bounce_segment_constants() {
        // First arc lands on 1.0 at the first breakpoint
        assert!(approx_eq(bounce_out(1.0 / 2.75), 1.0));
        // Each later arc dips to its offset at the segment midpoint
        assert!(approx_eq(bounce_out(1.5 / 2.75), 0.75));
        assert!(approx_eq(bounce_out(2.25 / 2.75), 0.9375));
        assert!(approx_eq(bounce_out(2.625 / 2.75), 0.984375));
        // Breakpoints are continuous
        assert!(approx_eq(bounce_out(2.0 / 2.75), 1.0));
        assert!(approx_eq(bounce_out(2.5 / 2.75), 1.0));
    }

    #[test]
    fn test_bounce_is_not_monotonic() {
        assert!(bounce_out(1.5 / 2.75) < bounce_out(1.0 / 2.75));
    }

    #[test]
    fn test_custom() {
        let ease = Easing::Custom(double);
        assert_eq!(ease.ease(0.0, 10.0, 0.25), 5.0);
        assert_eq!(ease, Easing::Custom(double));
        assert_ne!(ease, Easing::Linear);
        assert_eq!(ease.name(), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("linear".parse::<Easing>().unwrap(), Easing::Linear);
        assert_eq!("hold".parse::<Easing>().unwrap(), Easing::Hold);
        assert_eq!("out_bounce".parse::<Easing>().unwrap(), Easing::OutBounce);
        assert!(matches!(
            "elastic".parse::<Easing>(),
            Err(AnimationError::UnknownEasing(name)) if name == "elastic"
        ));
    }

    #[test]
    fn test_default() {
        assert_eq!(Easing::default(), Easing::Linear);
    }
}
