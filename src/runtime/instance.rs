//! Root component instance bound to a mount target.
//!
//! Invariant: the instance is the only writer of the nodes it inserted under its
//! target. Sibling content (host markup, other instances) is never touched.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::component::Component;
use crate::core::document::{Document, DocumentRef, NodeId};
use crate::core::event::HostEvent;
use crate::core::scope::Scope;
use crate::core::signal::Subscription;
use crate::core::view::View;
use crate::runtime::mount_registry::InstanceId;

/// A resolved mount target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTarget {
    id: String,
    node: NodeId,
}

impl MountTarget {
    pub(crate) fn new(id: &str, node: NodeId) -> Self {
        Self {
            id: id.to_string(),
            node,
        }
    }

    /// The element id the target was resolved from.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InstanceState {
    Mounted,
    Disposed,
}

pub(crate) struct RootInstance {
    id: InstanceId,
    target: MountTarget,
    document: DocumentRef,
    component: Box<dyn Component>,
    nodes: Vec<NodeId>,
    subscriptions: Vec<Subscription>,
    dirty: Rc<Cell<bool>>,
    state: InstanceState,
    /// Self-reference held while mounted; handles may all be dropped without unmounting.
    keep_alive: Option<Rc<RefCell<RootInstance>>>,
}

impl RootInstance {
    /// Run setup, render once and append the result under the target.
    pub(crate) fn mount(
        id: InstanceId,
        target: MountTarget,
        document: DocumentRef,
        mut component: Box<dyn Component>,
    ) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let mut scope = Scope::new(Rc::clone(&dirty));
        component.setup(&mut scope);
        let subscriptions = scope.into_subscriptions();

        let view = component.render();
        let nodes = {
            let mut doc = document.borrow_mut();
            let nodes = materialize_anchored(&mut *doc, &view);
            for node in &nodes {
                doc.append_child(target.node(), *node);
            }
            nodes
        };
        // Setup may have written a watched signal; that state is already rendered.
        dirty.set(false);

        tracing::debug!(
            instance = id.raw(),
            mount_target = target.id(),
            nodes = nodes.len(),
            subscriptions = subscriptions.len(),
            "mounted root instance"
        );

        Self {
            id,
            target,
            document,
            component,
            nodes,
            subscriptions,
            dirty,
            state: InstanceState::Mounted,
            keep_alive: None,
        }
    }

    /// Pin the instance in memory until [`RootInstance::take_keep_alive`].
    pub(crate) fn retain_self(&mut self, this: Rc<RefCell<RootInstance>>) {
        if self.is_mounted() {
            self.keep_alive = Some(this);
        }
    }

    /// Release the self-reference. The caller drops it after ending its borrow.
    pub(crate) fn take_keep_alive(&mut self) -> Option<Rc<RefCell<RootInstance>>> {
        self.keep_alive.take()
    }

    pub(crate) fn id(&self) -> InstanceId {
        self.id
    }

    pub(crate) fn target(&self) -> &MountTarget {
        &self.target
    }

    pub(crate) fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.state == InstanceState::Mounted
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.is_mounted() && self.dirty.get()
    }

    /// Re-render in place if a watched signal changed since the last render.
    pub(crate) fn flush(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.dirty.set(false);

        let view = self.component.render();
        let parent = self.target.node();
        let mut doc = self.document.borrow_mut();
        let fresh = materialize_anchored(&mut *doc, &view);
        let anchor = self.nodes.first().copied();
        for node in &fresh {
            doc.insert_before(parent, *node, anchor);
        }
        for node in self.nodes.drain(..) {
            doc.remove_child(parent, node);
        }
        self.nodes = fresh;

        tracing::debug!(
            instance = self.id.raw(),
            mount_target = self.target.id(),
            nodes = self.nodes.len(),
            "re-rendered root instance"
        );
        true
    }

    pub(crate) fn dispatch(&mut self, event: &HostEvent) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.component.handle_event(event);
        self.flush()
    }

    /// Remove rendered nodes and release subscriptions. Returns `false` if already disposed.
    pub(crate) fn dispose(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.state = InstanceState::Disposed;
        self.subscriptions.clear();
        self.dirty.set(false);

        let parent = self.target.node();
        let mut doc = self.document.borrow_mut();
        for node in self.nodes.drain(..) {
            doc.remove_child(parent, node);
        }

        tracing::debug!(
            instance = self.id.raw(),
            mount_target = self.target.id(),
            "disposed root instance"
        );
        true
    }
}

/// Like [`materialize`], but an empty view yields one empty text node so the instance
/// always owns a node that marks its position under the target.
fn materialize_anchored(doc: &mut dyn Document, view: &View) -> Vec<NodeId> {
    let mut roots = materialize(doc, view);
    if roots.is_empty() {
        roots.push(doc.create_text(""));
    }
    roots
}

/// Create detached nodes for `view`; returns the top-level nodes in order.
fn materialize(doc: &mut dyn Document, view: &View) -> Vec<NodeId> {
    let mut roots = Vec::with_capacity(view.root_count());
    build(doc, view, &mut roots);
    roots
}

fn build(doc: &mut dyn Document, view: &View, out: &mut Vec<NodeId>) {
    match view {
        View::Text(text) => out.push(doc.create_text(text)),
        View::Fragment(children) => {
            for child in children {
                build(doc, child, out);
            }
        }
        View::Element(element) => {
            let node = doc.create_element(&element.tag, &element.attrs);
            let mut children = Vec::new();
            for child in &element.children {
                build(doc, child, &mut children);
            }
            for child in children {
                doc.append_child(node, child);
            }
            out.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{materialize, materialize_anchored};
    use crate::core::document::Document;
    use crate::core::view::View;
    use crate::platform::MemoryDocument;

    #[test]
    fn materialize_flattens_fragments_and_nests_elements() {
        let mut doc = MemoryDocument::new();
        let view = View::fragment([
            View::from(
                View::element("ul").children([
                    View::element("li").child("one"),
                    View::element("li").child(View::fragment(["t", "wo"])),
                ]),
            ),
            View::text("tail"),
        ]);

        let roots = materialize(&mut doc, &view);
        assert_eq!(roots.len(), 2);
        for root in &roots {
            assert!(!doc.is_attached(*root));
        }
        let body = doc.body();
        for root in &roots {
            doc.append_child(body, *root);
        }
        assert_eq!(doc.inner_html(body), "<ul><li>one</li><li>two</li></ul>tail");
    }

    #[test]
    fn empty_view_is_anchored_by_an_empty_text_node() {
        let mut doc = MemoryDocument::new();
        let roots = materialize_anchored(&mut doc, &View::empty());
        assert_eq!(roots.len(), 1);

        let body = doc.body();
        doc.append_child(body, roots[0]);
        assert_eq!(doc.child_count(body), 1);
        assert_eq!(doc.inner_html(body), "");
    }
}
