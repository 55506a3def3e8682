//! Host document capability.

use std::cell::RefCell;
use std::rc::Rc;

/// Opaque identifier of a node owned by a [`Document`].
///
/// Ids are only meaningful for the document that issued them.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(u64);

impl NodeId {
    /// Returns the raw numeric identifier.
    pub fn raw(self) -> u64 {
        self.0
    }

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Minimal host document interface for mounting.
///
/// Implementations mirror the DOM: nodes are created detached and become part of the
/// document once appended under an attached parent. Mutations that reference unknown
/// nodes are ignored.
pub trait Document {
    /// Look up an attached element by its `id` attribute, in document order.
    fn resolve(&self, id: &str) -> Option<NodeId>;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str, attrs: &[(String, String)]) -> NodeId;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> NodeId;

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Insert `child` before `reference` under `parent`.
    ///
    /// Appends when `reference` is `None` or not a child of `parent`.
    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>);

    /// Detach `child` from `parent`. No-op when `child` is not a child of `parent`.
    fn remove_child(&mut self, parent: NodeId, child: NodeId);

    /// Children of `node` in order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }
}

/// Shared, single-threaded reference to a host document.
pub type DocumentRef = Rc<RefCell<dyn Document>>;
