//! Animation error types

use cjs_core::{CoreError, ElementId};
use thiserror::Error;

use crate::channel::Channel;
use crate::record::AnimationCategory;

/// Configuration errors. Raised while declaring or registering animations,
/// never from the frame loop.
#[derive(Error, Debug)]
pub enum AnimationError {
    /// The (element, behavior) pair already has a record
    #[error("Animation '{behavior}' is already registered on {element:?}")]
    DuplicateAnimation { element: ElementId, behavior: String },

    /// A behavior needs a name
    #[error("Animation behavior name cannot be empty")]
    EmptyBehavior,

    /// No keyframes declared
    #[error("Animation timeline needs at least one keyframe")]
    EmptyTimeline,

    /// Duration must be finite and positive
    #[error("Invalid animation duration: {0}")]
    InvalidDuration(f64),

    /// Keyframe weights must be finite and non-negative
    #[error("Invalid weight {weight} on keyframe {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// Channel values must be finite
    #[error("Invalid value {value} for channel {channel} on keyframe {index}")]
    InvalidChannelValue {
        index: usize,
        channel: Channel,
        value: f64,
    },

    /// All weights were zero
    #[error("Keyframe weights sum to zero")]
    ZeroTotalWeight,

    /// Time remap must be finite and positive
    #[error("Invalid time remap multiplier: {0}")]
    InvalidTimeRemap(f64),

    /// Category declared but not supported yet
    #[error("Animation category {0:?} is not yet supported")]
    UnsupportedCategory(AnimationCategory),

    /// Easing name did not match a known curve
    #[error("Unknown easing function: {0}")]
    UnknownEasing(String),

    /// Trigger bindings need event names
    #[error("Trigger event name cannot be empty")]
    EmptyTrigger,

    /// Id does not refer to a registered record
    #[error("Unknown animation")]
    UnknownAnimation,

    /// Target not present in the host
    #[error("Target element {0:?} is not present in the host")]
    UnknownElement(ElementId),

    /// Descriptor text could not be parsed
    #[error("Failed to parse animation descriptor: {0}")]
    Parse(#[from] toml::de::Error),

    /// Host rejected a listener registration
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
