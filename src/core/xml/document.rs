use crate::core::errors::PaapiError;
use crate::core::xml::element::Element;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

pub(crate) type NodeId = usize;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) namespace: Option<String>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) children: Vec<NodeId>,
}

/// Read-only XML tree. Node ids are assigned in document order, the root is `0`.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Parse a complete XML document
    pub fn parse(xml: &[u8]) -> Result<Self, PaapiError> {
        let mut reader = NsReader::from_reader(xml);
        let mut nodes: Vec<Node> = Vec::new();
        let mut open: Vec<NodeId> = Vec::new();

        loop {
            let (resolved, event) = reader.read_resolved_event().map_err(malformed)?;
            let namespace = match resolved {
                ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
                ResolveResult::Unbound => None,
                ResolveResult::Unknown(prefix) => {
                    return Err(PaapiError::MalformedResponse(format!(
                        "undeclared namespace prefix '{}'",
                        String::from_utf8_lossy(&prefix)
                    )));
                }
            };

            match event {
                Event::Start(e) => {
                    let id = Self::open_node(&mut nodes, &open, &e, namespace)?;
                    open.push(id);
                }
                Event::Empty(e) => {
                    Self::open_node(&mut nodes, &open, &e, namespace)?;
                }
                Event::End(_) => {
                    open.pop();
                }
                Event::Text(e) => {
                    let decoded = e.decode().map_err(malformed)?;
                    let text = unescape(&decoded).map_err(malformed)?;
                    push_text(&mut nodes, &open, &text);
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    push_text(&mut nodes, &open, &String::from_utf8_lossy(&raw));
                }
                Event::GeneralRef(e) => {
                    let resolved = if let Some(ch) = e.resolve_char_ref().map_err(malformed)? {
                        ch.to_string()
                    } else {
                        let name = e.decode().map_err(malformed)?;
                        resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                PaapiError::MalformedResponse(format!("unknown entity '&{};'", name))
                            })?
                            .to_string()
                    };
                    push_text(&mut nodes, &open, &resolved);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if nodes.is_empty() {
            return Err(PaapiError::MalformedResponse(
                "document has no root element".to_string(),
            ));
        }
        if !open.is_empty() {
            return Err(PaapiError::MalformedResponse(
                "unexpected end of document".to_string(),
            ));
        }

        Ok(Self { nodes })
    }

    fn open_node(
        nodes: &mut Vec<Node>,
        open: &[NodeId],
        start: &BytesStart<'_>,
        namespace: Option<String>,
    ) -> Result<NodeId, PaapiError> {
        let parent = open.last().copied();
        if parent.is_none() && !nodes.is_empty() {
            return Err(PaapiError::MalformedResponse(
                "more than one root element".to_string(),
            ));
        }

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(malformed)?;
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let raw = std::str::from_utf8(&attr.value).map_err(malformed)?;
            attributes.push((
                String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned(),
                unescape(raw).map_err(malformed)?.into_owned(),
            ));
        }

        let id = nodes.len();
        nodes.push(Node {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            namespace,
            attributes,
            text: String::new(),
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            nodes[parent].children.push(id);
        }
        Ok(id)
    }

    /// Root element, queried within `namespace`
    pub fn root<'a>(&'a self, namespace: &'a str) -> Element<'a> {
        Element::new(self, 0, namespace)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn push_text(nodes: &mut [Node], open: &[NodeId], text: &str) {
    // text outside the root element is ignored
    if let Some(&id) = open.last() {
        nodes[id].text.push_str(text);
    }
}

fn malformed(err: impl std::fmt::Display) -> PaapiError {
    PaapiError::MalformedResponse(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_in_document_order() {
        let doc = Document::parse(
            br#"<?xml version="1.0"?>
            <Root xmlns="urn:main"><A>one</A><B kind="x"/><A>two</A></Root>"#,
        )
        .unwrap();

        assert_eq!(doc.len(), 4);
        let root = doc.node(0);
        assert_eq!(root.name, "Root");
        assert_eq!(root.namespace.as_deref(), Some("urn:main"));
        assert_eq!(root.children, vec![1, 2, 3]);
        assert_eq!(doc.node(1).text, "one");
        assert_eq!(doc.node(2).attributes, vec![("kind".to_string(), "x".to_string())]);
        assert!(doc.node(2).attributes.iter().all(|(k, _)| k != "xmlns"));
    }

    #[test]
    fn test_prefixed_namespaces_resolve() {
        let doc = Document::parse(br#"<a:Root xmlns:a="urn:a"><a:Child>v</a:Child><Other/></a:Root>"#)
            .unwrap();
        assert_eq!(doc.node(0).name, "Root");
        assert_eq!(doc.node(1).namespace.as_deref(), Some("urn:a"));
        assert_eq!(doc.node(2).namespace, None);
    }

    #[test]
    fn test_entities_and_cdata_are_resolved() {
        let doc = Document::parse(
            b"<R><T>Salt &amp; Pepper &#169;</T><C><![CDATA[<b>raw</b>]]></C></R>",
        )
        .unwrap();
        assert_eq!(doc.node(1).text, "Salt & Pepper \u{a9}");
        assert_eq!(doc.node(2).text, "<b>raw</b>");
    }

    #[test]
    fn test_malformed_documents() {
        for input in [
            &b""[..],
            b"not xml at all",
            b"<Root><Open></Root>",
            b"<Root>",
            b"<Root/><Second/>",
            b"<x:Root/>",
        ] {
            let result = Document::parse(input);
            assert!(
                matches!(result, Err(PaapiError::MalformedResponse(_))),
                "expected malformed for {:?}",
                String::from_utf8_lossy(input)
            );
        }
    }
}
