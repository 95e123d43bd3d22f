//! cjs Core Runtime
//!
//! The host-facing half of cjs:
//!
//! - **Elements**: opaque handles plus the [`ElementHost`] trait the engine
//!   writes presentation state through
//! - **Events**: named trigger events and the [`EventSink`] they are delivered to
//! - **Frames**: the [`FrameSource`] the engine asks for display refreshes
//!
//! # Example
//!
//! ```rust
//! use cjs_core::{Document, ElementHost};
//!
//! let mut doc = Document::new();
//! let button = doc.create("calculator-button-equals", "button").unwrap();
//!
//! doc.set_transform(button, "scaleX(1.05) ".to_string());
//! assert_eq!(doc.transform(button), Some("scaleX(1.05) "));
//! ```

pub mod element;
pub mod error;
pub mod events;
pub mod frame;

pub use element::{Document, ElementHost, ElementId};
pub use error::{CoreError, Result};
pub use events::{event_names, Event, EventSink};
pub use frame::{FrameSource, ManualFrames};
