//! Intermediate Document Format (IDF)
//!
//! The in-memory tree every block renderer produces and the composer stitches
//! together. It is deliberately small: elements with ordered attributes and
//! inline styles, text, and raw stylesheet content. Serializing it with
//! [`writer::to_html`] is a pure function of the tree.

pub mod style;
pub mod writer;

pub use style::{Style, pct, px, solid};
pub use writer::{to_html, write_html};

/// A string type for the document.
pub type TextStr = String;

/// The element kinds a rendered document is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Table,
    Colgroup,
    Col,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    Style,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Table => "table",
            Tag::Colgroup => "colgroup",
            Tag::Col => "col",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Style => "style",
        }
    }

    /// Void elements have no closing tag and no children.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Col)
    }
}

/// An element with ordered attributes, an inline style and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(&'static str, TextStr)>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<TextStr>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, name: impl Into<TextStr>) -> Self {
        self.attr("class", name)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets a single style property.
    pub fn css(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<TextStr>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped on output.
    Text(TextStr),
    /// Written verbatim. Only used for stylesheet bodies the engine generates itself.
    Raw(TextStr),
    /// A sequence of siblings without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// Child elements with the given tag, in document order, at any depth.
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: Tag, out: &mut Vec<&'a Element>) {
        match self {
            Node::Element(el) => {
                if el.tag == tag {
                    out.push(el);
                }
                for child in &el.children {
                    child.collect(tag, out);
                }
            }
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.collect(tag, out)),
            Node::Text(_) | Node::Raw(_) => {}
        }
    }

    /// Concatenated text content, ignoring raw nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.push_text(out)),
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.push_text(out)),
            Node::Raw(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

// Shorthands for the common element kinds.

pub fn div() -> Element {
    Element::new(Tag::Div)
}

pub fn span() -> Element {
    Element::new(Tag::Span)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_all_walks_fragments_and_elements() {
        let tree = Node::Fragment(vec![
            div().child(span().text("a")).into(),
            div().child(div().child(span().text("b"))).into(),
        ]);
        assert_eq!(tree.find_all(Tag::Span).len(), 2);
        assert_eq!(tree.find_all(Tag::Div).len(), 3);
        assert_eq!(tree.text_content(), "ab");
    }

    #[test]
    fn css_overrides_in_place() {
        let el = div().css("padding", "4px").css("border", "none").css("padding", "0");
        assert_eq!(el.style.to_css(), "padding:0;border:none");
    }
}
