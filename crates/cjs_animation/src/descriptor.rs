//! Animation descriptors
//!
//! Construction-time configuration for one animation. Descriptors are plain
//! data: they can be built in code or loaded from TOML, and are validated
//! when turned into a record.
//!
//! ```toml
//! category = "event_driven"
//! duration = 0.25
//! easing = "out_bounce"
//!
//! [triggers]
//! forward = "pointerenter"
//! reverse = "pointerleave"
//!
//! [[keyframes]]
//! weight = 1.0
//! channels = { scaleX = 1.0, scaleY = 1.0 }
//!
//! [[keyframes]]
//! weight = 1.0
//! channels = { scaleX = 1.05, scaleY = 1.05 }
//! ```

use cjs_core::ElementId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use crate::keyframe::Keyframe;
use crate::record::{AnimationCategory, AnimationRecord, Direction, PlaybackState, Triggers};
use crate::timeline::Timeline;

fn default_time_remap() -> f64 {
    1.0
}

/// Keyframe as written in configuration
///
/// Channels are keyed by their camelCase name. Names that do not match a
/// channel are dropped when the keyframe is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyframeDescriptor {
    pub weight: f64,
    #[serde(default)]
    pub channels: IndexMap<String, f64>,
}

impl KeyframeDescriptor {
    pub fn to_keyframe(&self) -> Keyframe {
        Keyframe::from_named(
            self.weight,
            self.channels
                .iter()
                .map(|(name, value)| (name.as_str(), *value)),
        )
    }
}

impl From<Keyframe> for KeyframeDescriptor {
    fn from(keyframe: Keyframe) -> Self {
        Self {
            weight: keyframe.weight,
            channels: keyframe
                .channels()
                .map(|(channel, value)| (channel.name().to_string(), value))
                .collect(),
        }
    }
}

/// Everything needed to construct an animation record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    #[serde(default)]
    pub category: AnimationCategory,
    pub duration: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub triggers: Triggers,
    #[serde(default = "default_time_remap")]
    pub time_remap: f64,
    /// Also write inset, padding, margin and radius channels
    #[serde(default)]
    pub apply_box_channels: bool,
    #[serde(default)]
    pub keyframes: Vec<KeyframeDescriptor>,
}

impl AnimationDescriptor {
    /// Event-driven, linear, pointer enter/leave, no keyframes yet
    pub fn new(duration: f64) -> Self {
        Self {
            category: AnimationCategory::default(),
            duration,
            easing: Easing::default(),
            triggers: Triggers::default(),
            time_remap: default_time_remap(),
            apply_box_channels: false,
            keyframes: Vec::new(),
        }
    }

    /// Parse a descriptor from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn category(mut self, category: AnimationCategory) -> Self {
        self.category = category;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn triggers(mut self, forward: impl Into<String>, reverse: impl Into<String>) -> Self {
        self.triggers = Triggers::new(forward, reverse);
        self
    }

    pub fn time_remap(mut self, multiplier: f64) -> Self {
        self.time_remap = multiplier;
        self
    }

    pub fn box_channels(mut self, enabled: bool) -> Self {
        self.apply_box_channels = enabled;
        self
    }

    /// Append a keyframe
    pub fn keyframe(mut self, keyframe: impl Into<KeyframeDescriptor>) -> Self {
        self.keyframes.push(keyframe.into());
        self
    }

    /// Check everything except the keyframes
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(AnimationError::InvalidDuration(self.duration));
        }
        if !self.time_remap.is_finite() || self.time_remap <= 0.0 {
            return Err(AnimationError::InvalidTimeRemap(self.time_remap));
        }
        if self.category != AnimationCategory::EventDriven {
            return Err(AnimationError::UnsupportedCategory(self.category));
        }
        if self.triggers.forward.is_empty() || self.triggers.reverse.is_empty() {
            return Err(AnimationError::EmptyTrigger);
        }
        Ok(())
    }

    /// Validated timeline built from the keyframe descriptors
    pub fn timeline(&self) -> Result<Timeline> {
        Timeline::new(
            self.keyframes
                .iter()
                .map(KeyframeDescriptor::to_keyframe)
                .collect(),
        )
    }

    /// Validate and build a fresh record for `target`
    pub fn build(&self, target: ElementId, behavior: &str) -> Result<AnimationRecord> {
        if behavior.is_empty() {
            return Err(AnimationError::EmptyBehavior);
        }
        self.validate()?;
        let timeline = self.timeline()?;

        Ok(AnimationRecord {
            target,
            behavior: behavior.to_string(),
            category: self.category,
            duration: self.duration,
            elapsed: 0.0,
            elapsed_eased: 0.0,
            time_remap: self.time_remap,
            easing: self.easing,
            triggers: self.triggers.clone(),
            timeline,
            keyframe_index: 0,
            box_channels: self.apply_box_channels,
            state: PlaybackState::Idle,
            direction: Direction::Forward,
        })
    }
}
