//! Deterministic HTML serialization of the render tree.
use crate::{Element, Node};

/// Serializes `node` to HTML.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

pub fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_into(text, false, out),
        Node::Raw(raw) => out.push_str(raw),
        Node::Fragment(nodes) => nodes.iter().for_each(|n| write_html(n, out)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let name = el.tag.name();
    out.push('<');
    out.push_str(name);
    for (attr, value) in &el.attrs {
        write_attr(attr, value, out);
    }
    if !el.style.is_empty() {
        write_attr("style", &el.style.to_css(), out);
    }
    out.push('>');

    if el.tag.is_void() {
        return;
    }
    for child in &el.children {
        write_html(child, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

fn escape_into(text: &str, in_attr: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            '\'' if in_attr => out.push_str("&#39;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
