//! Core error types

use thiserror::Error;

use crate::element::ElementId;

/// Errors raised while building or querying the element host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An element with this name was already created
    #[error("Element id '{0}' already exists. Choose a unique identifier for this element.")]
    DuplicateElement(String),

    /// Elements need a tag name
    #[error("Cannot use empty string for tag name (element '{0}')")]
    EmptyTagName(String),

    /// Lookup by name failed
    #[error("No element found by id '{0}'")]
    UnknownName(String),

    /// Lookup by handle failed
    #[error("No element registered for {0:?}")]
    UnknownElement(ElementId),

    /// Listeners must be bound to a named event
    #[error("Cannot listen for an event with an empty name on {0:?}")]
    EmptyEventName(ElementId),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
