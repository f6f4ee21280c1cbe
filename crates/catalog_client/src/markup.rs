//! Typed markup tree and its serializer.
//!
//! Text and attribute values are escaped when the tree is written out, so
//! catalog content can never smuggle tags or attributes into the page.

use std::fmt;

const DOCTYPE: &str = "<!DOCTYPE html>\n";
const VOID_TAGS: [&str; 5] = ["meta", "link", "br", "img", "input"];

/// Serialized markup. Only produced by writing a [`Node`] tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
    /// Previously serialized markup embedded as-is.
    Raw(Markup),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn to_markup(&self) -> Markup {
        let mut out = String::new();
        self.write_to(&mut out);
        Markup(out)
    }

    /// Serializes a complete document, doctype included.
    pub fn to_document(&self) -> Markup {
        let mut out = String::from(DOCTYPE);
        self.write_to(&mut out);
        out.push('\n');
        Markup(out)
    }

    /// Every element below (and including) this node whose class list
    /// contains `class`, in document order.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        match self {
            Self::Element(element) => {
                if element.has_class(class) {
                    found.push(element);
                }
                for child in &element.children {
                    child.collect_by_class(class, found);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_by_class(class, found);
                }
            }
            Self::Text(_) | Self::Raw(_) => {}
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(value) => out.push_str(value),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.collect_text(out);
                }
            }
            Self::Raw(_) => {}
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_to(out),
            Self::Text(value) => escape_into(value, out),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_to(out);
                }
            }
            Self::Raw(markup) => out.push_str(markup.as_str()),
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Markup> for Node {
    fn from(value: Markup) -> Self {
        Self::Raw(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_into(input, &mut out);
    out
}

fn escape_into(input: &str, out: &mut String) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;
