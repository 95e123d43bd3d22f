//! Element host abstraction
//!
//! The animation engine never owns elements. It talks to whatever presents
//! them through [`ElementHost`], addressing each target by an opaque
//! [`ElementId`]. [`Document`] is the in-memory host used by headless runs
//! and tests.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{CoreError, Result};
use crate::events::{Event, EventSink};

/// Opaque handle to an element owned by a host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Presentation state the engine is allowed to touch
pub trait ElementHost {
    /// Whether the host knows this element
    fn contains(&self, element: ElementId) -> bool;

    /// Current composed transform value
    fn transform(&self, element: ElementId) -> Option<&str>;

    /// Replace the composed transform value in one assignment
    fn set_transform(&mut self, element: ElementId, value: String);

    /// Read a named style property
    fn style(&self, element: ElementId, property: &str) -> Option<&str>;

    /// Write a named style property
    fn set_style(&mut self, element: ElementId, property: &str, value: String);

    /// Start delivering `event` for `element`
    fn add_listener(&mut self, element: ElementId, event: &str) -> Result<()>;

    /// Stop delivering `event` for `element`. Returns whether a listener was removed.
    fn remove_listener(&mut self, element: ElementId, event: &str) -> bool;
}

#[derive(Debug, Default)]
struct ElementState {
    name: String,
    tag: String,
    transform: String,
    styles: FxHashMap<String, String>,
    listeners: SmallVec<[String; 4]>,
}

/// In-memory element host
///
/// Elements are created once by unique name and are never removed or
/// reparented, so an [`ElementId`] handed out by a document stays valid for
/// the document's lifetime.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<ElementState>,
    names: FxHashMap<String, ElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with a unique name
    pub fn create(&mut self, name: &str, tag: &str) -> Result<ElementId> {
        if self.names.contains_key(name) {
            return Err(CoreError::DuplicateElement(name.to_string()));
        }
        if tag.is_empty() {
            return Err(CoreError::EmptyTagName(name.to_string()));
        }

        let id = ElementId(self.elements.len() as u64);
        self.elements.push(ElementState {
            name: name.to_string(),
            tag: tag.to_string(),
            ..Default::default()
        });
        self.names.insert(name.to_string(), id);

        tracing::trace!("created <{}> '{}' as {:?}", tag, name, id);
        Ok(id)
    }

    /// Look up an element by name
    pub fn id(&self, name: &str) -> Result<ElementId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownName(name.to_string()))
    }

    pub fn name(&self, element: ElementId) -> Option<&str> {
        self.get(element).map(|e| e.name.as_str())
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.get(element).map(|e| e.tag.as_str())
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `element` currently listens for `event`
    pub fn has_listener(&self, element: ElementId, event: &str) -> bool {
        self.get(element)
            .map(|e| e.listeners.iter().any(|l| l == event))
            .unwrap_or(false)
    }

    /// Events `element` currently listens for, in registration order
    pub fn listeners(&self, element: ElementId) -> impl Iterator<Item = &str> {
        self.get(element)
            .into_iter()
            .flat_map(|e| e.listeners.iter().map(String::as_str))
    }

    /// Deliver `event` to `sink` if its target listens for it
    ///
    /// Returns whether the event was delivered.
    pub fn dispatch<S: EventSink + ?Sized>(&self, event: &Event, sink: &mut S) -> bool {
        if !self.has_listener(event.target, &event.name) {
            tracing::trace!("no listener for '{}' on {:?}", event.name, event.target);
            return false;
        }
        sink.handle_event(event);
        true
    }

    fn get(&self, element: ElementId) -> Option<&ElementState> {
        self.elements.get(element.0 as usize)
    }

    fn get_mut(&mut self, element: ElementId) -> Option<&mut ElementState> {
        self.elements.get_mut(element.0 as usize)
    }
}

impl ElementHost for Document {
    fn contains(&self, element: ElementId) -> bool {
        self.get(element).is_some()
    }

    fn transform(&self, element: ElementId) -> Option<&str> {
        self.get(element).map(|e| e.transform.as_str())
    }

    fn set_transform(&mut self, element: ElementId, value: String) {
        if let Some(state) = self.get_mut(element) {
            state.transform = value;
        }
    }

    fn style(&self, element: ElementId, property: &str) -> Option<&str> {
        self.get(element)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    fn set_style(&mut self, element: ElementId, property: &str, value: String) {
        if let Some(state) = self.get_mut(element) {
            state.styles.insert(property.to_string(), value);
        }
    }

    fn add_listener(&mut self, element: ElementId, event: &str) -> Result<()> {
        if event.is_empty() {
            return Err(CoreError::EmptyEventName(element));
        }
        let state = self
            .get_mut(element)
            .ok_or(CoreError::UnknownElement(element))?;
        if !state.listeners.iter().any(|l| l == event) {
            state.listeners.push(event.to_string());
        }
        Ok(())
    }

    fn remove_listener(&mut self, element: ElementId, event: &str) -> bool {
        let Some(state) = self.get_mut(element) else {
            return false;
        };
        let before = state.listeners.len();
        state.listeners.retain(|l| l != event);
        state.listeners.len() != before
    }
}
