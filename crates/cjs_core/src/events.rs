//! Trigger events
//!
//! Hosts deliver named input events to the engine. Names follow the DOM
//! event vocabulary so descriptors can be written the same way a page would
//! bind its listeners.

use crate::element::ElementId;

/// Common event names
pub mod event_names {
    pub const POINTER_ENTER: &str = "pointerenter";
    pub const POINTER_LEAVE: &str = "pointerleave";
    pub const POINTER_DOWN: &str = "pointerdown";
    pub const POINTER_UP: &str = "pointerup";
    pub const CLICK: &str = "click";
    pub const FOCUS: &str = "focus";
    pub const BLUR: &str = "blur";
}

/// A named event aimed at one element
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub name: String,
    pub target: ElementId,
}

impl Event {
    pub fn new(name: impl Into<String>, target: ElementId) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// Receiver for events a host has decided to deliver
pub trait EventSink {
    fn handle_event(&mut self, event: &Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_new() {
        let event = Event::new(event_names::POINTER_LEAVE, ElementId(3));
        assert_eq!(event.name, "pointerleave");
        assert_eq!(event.target, ElementId(3));
    }
}
