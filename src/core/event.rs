//! Host events forwarded to the root component.

use crate::core::document::NodeId;

/// Event delivered to a mounted root component through its application handle.
///
/// `name` follows DOM event naming (`"click"`, `"input"`). `target` is the node the
/// host reports the event on, when known. `value` carries the payload of value-bearing
/// events such as text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEvent {
    pub name: String,
    pub target: Option<NodeId>,
    pub value: Option<String>,
}

impl HostEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: None,
            value: None,
        }
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
