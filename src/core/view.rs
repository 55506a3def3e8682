//! Declarative view trees returned by components.
//!
//! Components never touch the host document. They describe their content as a
//! [`View`] and the mounted instance turns it into document nodes.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Element(ElementView),
    Text(String),
    /// Children inserted flat, without a wrapping node.
    Fragment(Vec<View>),
}

impl View {
    pub fn element(tag: impl Into<String>) -> ElementView {
        ElementView {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn fragment<I, V>(children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        Self::Fragment(children.into_iter().map(Into::into).collect())
    }

    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Number of top-level nodes this view produces when inserted.
    pub fn root_count(&self) -> usize {
        match self {
            Self::Element(_) | Self::Text(_) => 1,
            Self::Fragment(children) => children.iter().map(View::root_count).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<View>,
}

impl ElementView {
    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<ElementView> for View {
    fn from(value: ElementView) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for View {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for View {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
