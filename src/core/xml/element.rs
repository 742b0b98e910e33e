use crate::core::xml::document::{Document, NodeId};
use crate::core::xml::path::{self, Axis, Step};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy)]
struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

/// View over one element of a [`Document`], or over nothing.
///
/// Every query is scoped to the namespace the element was bound with. An
/// absent element answers every query with an empty result, so accessors
/// built on top of it resolve to `None` instead of failing.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    node: Option<NodeRef<'a>>,
    namespace: &'a str,
}

impl<'a> Element<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId, namespace: &'a str) -> Self {
        Self {
            node: Some(NodeRef { doc, id }),
            namespace,
        }
    }

    /// An element that is not there
    pub const fn absent(namespace: &'a str) -> Self {
        Self {
            node: None,
            namespace,
        }
    }

    pub const fn is_present(&self) -> bool {
        self.node.is_some()
    }

    pub const fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Same element, queried within another namespace
    #[must_use]
    pub const fn rebind(self, namespace: &'a str) -> Self {
        Self {
            node: self.node,
            namespace,
        }
    }

    /// Whether the element itself lives in the bound namespace
    pub fn in_namespace(&self) -> bool {
        self.node.is_some_and(|n| {
            n.doc.node(n.id).namespace.as_deref().unwrap_or_default() == self.namespace
        })
    }

    /// Local name of the element
    pub fn name(&self) -> Option<&'a str> {
        self.node.map(|n| n.doc.node(n.id).name.as_str())
    }

    /// Trimmed text content, `None` when absent or blank
    pub fn own_text(&self) -> Option<&'a str> {
        self.node
            .map(|n| n.doc.node(n.id).text.trim())
            .filter(|text| !text.is_empty())
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let n = self.node?;
        n.doc
            .node(n.id)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All elements matching `path`, in document order
    pub fn query(&self, path: &str) -> Vec<Element<'a>> {
        let Some(node) = self.node else {
            return Vec::new();
        };

        let mut current = vec![node.id];
        for step in path::parse(path) {
            let mut next = Vec::new();
            for &id in &current {
                match step.axis {
                    Axis::Child => self.collect_children(node.doc, id, &step, &mut next),
                    Axis::Descendant => self.collect_descendants(node.doc, id, &step, &mut next),
                }
            }
            // ids are assigned in document order
            next.sort_unstable();
            next.dedup();
            if next.is_empty() {
                return Vec::new();
            }
            current = next;
        }

        current
            .into_iter()
            .map(|id| Element::new(node.doc, id, self.namespace))
            .collect()
    }

    /// First element matching `path`, or an absent element
    pub fn first(&self, path: &str) -> Element<'a> {
        self.query(path)
            .into_iter()
            .next()
            .unwrap_or_else(|| Element::absent(self.namespace))
    }

    /// Text of the first element matching `path`
    pub fn text(&self, path: &str) -> Option<&'a str> {
        self.first(path).own_text()
    }

    /// Non-blank texts of every element matching `path`
    pub fn texts(&self, path: &str) -> Vec<&'a str> {
        self.query(path)
            .iter()
            .filter_map(Element::own_text)
            .collect()
    }

    pub fn int(&self, path: &str) -> Option<i64> {
        self.text(path).and_then(parse_number)
    }

    pub fn uint(&self, path: &str) -> Option<u64> {
        self.text(path).and_then(parse_number)
    }

    /// Price-like number, see [`parse_price`]
    pub fn float(&self, path: &str) -> Option<f64> {
        self.text(path).and_then(parse_price)
    }

    /// Flag, see [`parse_flag`]
    pub fn flag(&self, path: &str) -> Option<bool> {
        self.text(path).map(parse_flag)
    }

    fn collect_children(&self, doc: &Document, id: NodeId, step: &Step<'_>, out: &mut Vec<NodeId>) {
        for &child in &doc.node(id).children {
            if self.matches(doc, child, step) {
                out.push(child);
            }
        }
    }

    fn collect_descendants(
        &self,
        doc: &Document,
        id: NodeId,
        step: &Step<'_>,
        out: &mut Vec<NodeId>,
    ) {
        for &child in &doc.node(id).children {
            if self.matches(doc, child, step) {
                out.push(child);
            }
            self.collect_descendants(doc, child, step, out);
        }
    }

    fn matches(&self, doc: &Document, id: NodeId, step: &Step<'_>) -> bool {
        let node = doc.node(id);
        let in_namespace = match node.namespace.as_deref() {
            Some(ns) => ns == self.namespace,
            None => self.namespace.is_empty(),
        };
        if !in_namespace || !step.matches_name(&node.name) {
            return false;
        }
        step.predicate.as_ref().map_or(true, |predicate| {
            node.attributes.iter().any(|(key, value)| {
                key == predicate.attribute && predicate.value.map_or(true, |v| v == value)
            })
        })
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f
                .debug_struct("Element")
                .field("name", &name)
                .field("namespace", &self.namespace)
                .finish(),
            None => f.write_str("Element(absent)"),
        }
    }
}

/// Integer parse of trimmed text; unparsable text is treated as absent
pub fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

/// Parse a pre-formatted price such as `$1,234.56`.
///
/// Everything but ASCII digits and `.` is stripped before parsing, so this is
/// only correct for locales using `.` as the decimal separator. A value with
/// no digits left is absent.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

/// `"1"` or case-insensitive `"true"` is true, any other text is false
pub fn parse_flag(text: &str) -> bool {
    text == "1" || text.eq_ignore_ascii_case("true")
}
