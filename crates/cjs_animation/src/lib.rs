//! cjs Animation System
//!
//! Event-driven keyframe animations for element presentation state.
//!
//! # Features
//!
//! - **Weighted Keyframes**: segments sized by relative weight, not absolute time
//! - **Easing**: linear, hold, bounce-out, or any custom curve
//! - **Event Triggers**: named host events play an animation forward or in reverse
//! - **Two-Pass Ticks**: every record resolves before any element is written
//!
//! # Example
//!
//! ```rust
//! use cjs_animation::{presets, AnimationScheduler, Direction};
//! use cjs_core::{Document, ElementHost, ManualFrames};
//!
//! let mut doc = Document::new();
//! let button = doc.create("equals", "button").unwrap();
//! let mut frames = ManualFrames::new(0.1);
//!
//! let mut scheduler = AnimationScheduler::new();
//! let id = scheduler
//!     .register(&mut doc, button, "hover", &presets::hover_scale(1.05, 0.2))
//!     .unwrap();
//!
//! scheduler.trigger(id, Direction::Forward).unwrap();
//! scheduler.start(&mut frames);
//! while let Some(now) = frames.next_frame() {
//!     scheduler.tick(&mut doc, &mut frames, now);
//!     if !scheduler.has_active_animations() {
//!         break;
//!     }
//! }
//!
//! assert_eq!(doc.transform(button), Some("scaleX(1.05) scaleY(1.05) "));
//! ```

pub mod channel;
pub mod compose;
pub mod descriptor;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod presets;
pub mod record;
pub mod scheduler;
pub mod timeline;

pub use channel::{Channel, ChannelGroup};
pub use compose::{apply_keyframe, compose_styles, compose_transform};
pub use descriptor::{AnimationDescriptor, KeyframeDescriptor};
pub use easing::{ease_out_bounce, hold, lerp, EaseFn, Easing};
pub use error::{AnimationError, Result};
pub use keyframe::Keyframe;
pub use record::{AnimationCategory, AnimationRecord, Direction, PlaybackState, Triggers};
pub use scheduler::{AnimationId, AnimationScheduler, FrameReport, TriggerSender};
pub use timeline::{resolve_keyframe_index, Timeline};
