//! In-memory host document.
//!
//! Arena-backed DOM subset used by tests and headless embeddings. It starts as a
//! document node holding a single `<body>` element.

use crate::core::document::{Document, NodeId};

#[derive(Debug, Clone)]
enum NodeKind {
    Document,
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            body: NodeId::from_raw(0),
        };
        let body = doc.create_element("body", &[]);
        doc.append_child(doc.root(), body);
        doc.body = body;
        doc
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        NodeId::from_raw(0)
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create an element, optionally with an `id`, and append it under `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, id: Option<&str>) -> NodeId {
        let attrs: Vec<(String, String)> = id
            .map(|id| vec![("id".to_string(), id.to_string())])
            .unwrap_or_default();
        let node = self.create_element(tag, &attrs);
        self.append_child(parent, node);
        node
    }

    /// Total nodes ever created, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|data| data.parent)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Whether `node` is reachable from the document node.
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root() {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(data) = self.node(node) {
            for child in &data.children {
                self.write_html(*child, &mut out);
            }
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(usize::try_from(id.raw()).ok()?)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(usize::try_from(id.raw()).ok()?)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u64);
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// True when `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.parent(child) {
            if let Some(data) = self.node_mut(parent) {
                data.children.retain(|id| *id != child);
            }
            if let Some(data) = self.node_mut(child) {
                data.parent = None;
            }
        }
    }

    /// Shared precondition for insertions: both nodes exist, the child is not the
    /// document node and insertion would not create a cycle.
    fn can_insert(&self, parent: NodeId, child: NodeId) -> bool {
        let (Some(parent_data), Some(_)) = (self.node(parent), self.node(child)) else {
            return false;
        };
        !matches!(parent_data.kind, NodeKind::Text(_))
            && child != self.root()
            && !self.is_inclusive_ancestor(child, parent)
    }

    fn find_by_id(&self, node: NodeId, id: &str) -> Option<NodeId> {
        let data = self.node(node)?;
        if let NodeKind::Element { attrs, .. } = &data.kind {
            if attrs.iter().any(|(key, value)| key == "id" && value == id) {
                return Some(node);
            }
        }
        data.children
            .iter()
            .find_map(|child| self.find_by_id(*child, id))
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.node(node) else {
            return;
        };
        if let NodeKind::Text(text) = &data.kind {
            out.push_str(text);
        }
        for child in &data.children {
            self.collect_text(*child, out);
        }
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.node(node) else {
            return;
        };
        match &data.kind {
            NodeKind::Document => {
                for child in &data.children {
                    self.write_html(*child, out);
                }
            }
            NodeKind::Text(text) => escape_into(text, false, out),
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');
                for child in &data.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn resolve(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.root(), id)
    }

    fn create_element(&mut self, tag: &str, attrs: &[(String, String)]) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            attrs: attrs.to_vec(),
        })
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_before(parent, child, None);
    }

    fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        if !self.can_insert(parent, child) || reference == Some(child) {
            return;
        }
        self.detach(child);
        let Some(parent_data) = self.node_mut(parent) else {
            return;
        };
        let index = reference
            .and_then(|reference| parent_data.children.iter().position(|id| *id == reference))
            .unwrap_or(parent_data.children.len());
        parent_data.children.insert(index, child);
        if let Some(child_data) = self.node_mut(child) {
            child_data.parent = Some(parent);
        }
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.parent(child) == Some(parent) {
            self.detach(child);
        }
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.node(node).map(|data| data.children.len()).unwrap_or(0)
    }
}

fn escape_into(text: &str, in_attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryDocument;
    use crate::core::document::Document;

    #[test]
    fn resolve_finds_attached_elements_in_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let first = doc.append_element(body, "div", Some("app"));
        let wrapper = doc.append_element(body, "section", None);
        doc.append_element(wrapper, "div", Some("app"));

        assert_eq!(doc.resolve("app"), Some(first));
        assert_eq!(doc.resolve("missing"), None);
    }

    #[test]
    fn detached_elements_are_not_resolved() {
        let mut doc = MemoryDocument::new();
        doc.create_element("div", &[("id".to_string(), "app".to_string())]);
        assert_eq!(doc.resolve("app"), None);
    }

    #[test]
    fn insert_before_orders_children_and_reparents() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let a = doc.append_element(body, "a", None);
        let b = doc.append_element(body, "b", None);
        let c = doc.create_element("c", &[]);

        doc.insert_before(body, c, Some(b));
        assert_eq!(doc.children(body), vec![a, c, b]);

        let other = doc.append_element(body, "div", None);
        doc.append_child(other, a);
        assert_eq!(doc.children(body), vec![c, b, other]);
        assert_eq!(doc.parent(a), Some(other));
    }

    #[test]
    fn cycles_are_rejected() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let outer = doc.append_element(body, "div", None);
        let inner = doc.append_element(outer, "div", None);

        doc.append_child(inner, outer);
        assert_eq!(doc.parent(outer), Some(body));
        assert!(doc.children(inner).is_empty());
    }

    #[test]
    fn remove_child_only_detaches_direct_children() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let outer = doc.append_element(body, "div", None);
        let inner = doc.append_element(outer, "span", None);

        doc.remove_child(body, inner);
        assert!(doc.is_attached(inner));

        doc.remove_child(outer, inner);
        assert!(!doc.is_attached(inner));
        assert_eq!(doc.child_count(outer), 0);
    }

    #[test]
    fn html_serialization_escapes_content() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let p = doc.create_element("p", &[("title".to_string(), "a \"b\"".to_string())]);
        doc.append_child(body, p);
        let text = doc.create_text("1 < 2 & 3");
        doc.append_child(p, text);

        assert_eq!(
            doc.outer_html(body),
            "<body><p title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3</p></body>"
        );
        assert_eq!(doc.text_content(body), "1 < 2 & 3");
    }
}
