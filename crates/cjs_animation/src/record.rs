//! Animation records
//!
//! Per-(element, behavior) playback state: timing, easing, trigger names,
//! the weighted timeline, and the play/reverse state machine.

use cjs_core::{event_names, ElementId};
use serde::{Deserialize, Serialize};

use crate::easing::{lerp, Easing};
use crate::keyframe::Keyframe;
use crate::timeline::Timeline;

/// What drives an animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationCategory {
    /// Reacts to scroll position. Reserved.
    Capture,
    /// Plays forward and back on discrete trigger events
    #[default]
    EventDriven,
    /// Plays an ordered chain. Reserved.
    Sequence,
}

/// Playback direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    /// Multiplier applied to time deltas
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Effective playback state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Registered, never triggered
    #[default]
    Idle,
    /// Advancing every frame
    Playing,
    /// In the active pool with time frozen
    Paused,
    /// Reached the end for its direction and retired to the inactive pool
    Ended,
}

/// Event names that start playback in each direction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Triggers {
    pub forward: String,
    pub reverse: String,
}

impl Default for Triggers {
    fn default() -> Self {
        Self {
            forward: event_names::POINTER_ENTER.to_string(),
            reverse: event_names::POINTER_LEAVE.to_string(),
        }
    }
}

impl Triggers {
    pub fn new(forward: impl Into<String>, reverse: impl Into<String>) -> Self {
        Self {
            forward: forward.into(),
            reverse: reverse.into(),
        }
    }

    /// Direction bound to `event`, forward taking precedence
    pub fn direction_for(&self, event: &str) -> Option<Direction> {
        if event == self.forward {
            Some(Direction::Forward)
        } else if event == self.reverse {
            Some(Direction::Reverse)
        } else {
            None
        }
    }
}

/// Mutable state of one animation
#[derive(Clone, Debug)]
pub struct AnimationRecord {
    pub(crate) target: ElementId,
    pub(crate) behavior: String,
    pub(crate) category: AnimationCategory,
    pub(crate) duration: f64,
    pub(crate) elapsed: f64,
    pub(crate) elapsed_eased: f64,
    pub(crate) time_remap: f64,
    pub(crate) easing: Easing,
    pub(crate) triggers: Triggers,
    pub(crate) timeline: Timeline,
    pub(crate) keyframe_index: usize,
    pub(crate) box_channels: bool,
    pub(crate) state: PlaybackState,
    pub(crate) direction: Direction,
}

impl AnimationRecord {
    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn behavior(&self) -> &str {
        &self.behavior
    }

    pub fn category(&self) -> AnimationCategory {
        self.category
    }

    /// Total duration, in host time units
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear elapsed time
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Elapsed time after easing, in duration units
    pub fn elapsed_eased(&self) -> f64 {
        self.elapsed_eased
    }

    pub fn time_remap(&self) -> f64 {
        self.time_remap
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn triggers(&self) -> &Triggers {
        &self.triggers
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn keyframe_index(&self) -> usize {
        self.keyframe_index
    }

    /// Keyframe selected by the last resolution
    pub fn current_keyframe(&self) -> Option<&Keyframe> {
        self.timeline.get(self.keyframe_index)
    }

    /// Whether box channels are written alongside the transform
    pub fn applies_box_channels(&self) -> bool {
        self.box_channels
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_ended(&self) -> bool {
        self.state == PlaybackState::Ended
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_reversed(&self) -> bool {
        self.direction == Direction::Reverse
    }

    /// Normalized linear progress. Not clamped.
    pub fn progress(&self) -> f64 {
        self.elapsed / self.duration
    }

    /// Start (or keep) playing in `direction`
    ///
    /// Clears ended and paused. Elapsed time is kept, so a reverse trigger
    /// rewinds from wherever the forward run stopped.
    pub(crate) fn trigger(&mut self, direction: Direction) {
        self.state = PlaybackState::Playing;
        self.direction = direction;
    }

    pub(crate) fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.state = PlaybackState::Paused;
        true
    }

    pub(crate) fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Playing;
        true
    }

    /// Advance time and resolve the active keyframe
    ///
    /// `delta` must already be sanitized (finite, non-negative).
    pub(crate) fn advance(&mut self, delta: f64) {
        self.elapsed += delta * self.time_remap * self.direction.sign();

        let normalized = self.elapsed / self.duration;
        let normalized_eased = self.easing.ease(0.0, 1.0, normalized);
        self.elapsed_eased = lerp(0.0, self.duration, normalized_eased);

        self.keyframe_index = self.timeline.resolve(self.elapsed_eased, self.duration);
    }

    /// End condition for the current direction
    pub(crate) fn has_finished(&self) -> bool {
        match self.direction {
            Direction::Forward => self.elapsed >= self.duration,
            Direction::Reverse => self.elapsed < 0.0,
        }
    }

    pub(crate) fn finish(&mut self) {
        self.state = PlaybackState::Ended;
    }
}
