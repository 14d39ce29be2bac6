use crate::scene::icon::IconRef;
use crate::style::props::Style;

/// What a [`Node`] draws.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Layer that fills its parent (an "absolute fill").
    Fill,
    /// Layout container.
    Box,
    /// Run of text.
    Text(String),
    /// Stroked line icon.
    Icon(IconRef),
    /// Forced line break inside a text block.
    LineBreak,
}

/// Element of the declarative visual tree a scene produces for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Element kind.
    pub kind: NodeKind,
    /// Presentation.
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Children in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn of(kind: NodeKind) -> Self {
        Self {
            kind,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Full-frame layer.
    pub fn fill() -> Self {
        Self::of(NodeKind::Fill)
    }

    /// Layout box.
    pub fn boxed() -> Self {
        Self::of(NodeKind::Box)
    }

    /// Text run.
    pub fn text(content: impl Into<String>) -> Self {
        Self::of(NodeKind::Text(content.into()))
    }

    /// Icon leaf.
    pub fn icon(icon: IconRef) -> Self {
        Self::of(NodeKind::Icon(icon))
    }

    /// `<br/>`.
    pub fn line_break() -> Self {
        Self::of(NodeKind::LineBreak)
    }

    /// Replace the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Transform the current style in place.
    pub fn map_style(mut self, f: impl FnOnce(Style) -> Style) -> Self {
        self.style = f(std::mem::take(&mut self.style));
        self
    }

    /// Append one child.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append a child only when `cond` holds.
    pub fn child_if(self, cond: bool, node: impl FnOnce() -> Node) -> Self {
        if cond { self.child(node()) } else { self }
    }

    /// Append many children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Text content when this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Pre-order traversal of this node and all descendants.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Concatenation of every text run under this node, in document order.
    pub fn text_content(&self) -> String {
        self.iter().filter_map(Node::as_text).collect()
    }

    /// First node (pre-order) whose own text equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        self.iter().find(|n| n.as_text() == Some(needle))
    }
}

/// Pre-order iterator returned by [`Node::iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
