//! Depth-first, document-order traversal of the source tree.
//!
//! The walker materializes one graph entity per element, attribute and
//! text run, wiring parent/child order as it goes. Traversal is
//! iterative over an explicit stack, so arbitrarily deep documents
//! cannot exhaust the call stack.

use std::collections::BTreeMap;

use crate::{
    error::Result,
    ident::UriMinter,
    model::{Attribute, Document, Element, NodeId, Text, XmlNode},
    vocab::XML_NAMESPACE,
};

pub struct TreeWalker<'m> {
    minter: &'m UriMinter,
    ignore_whitespace: bool,
}

impl<'m> TreeWalker<'m> {
    pub fn new(minter: &'m UriMinter, ignore_whitespace: bool) -> Self {
        Self {
            minter,
            ignore_whitespace,
        }
    }

    /// Walks the subtree rooted at `root`, populating the document's
    /// entity list and root reference.
    ///
    /// Entities are registered in visit order: an element, then its
    /// trailing text (owned by the parent's child list), then its
    /// leading text, then its children. Document-order positions are
    /// assigned to elements only and increase strictly.
    pub fn walk(&self, document: &mut Document, root: roxmltree::Node<'_, '_>) -> Result<()> {
        let mut stack: Vec<(roxmltree::Node<'_, '_>, Option<NodeId>)> = vec![(root, None)];
        let mut position: u64 = 0;

        while let Some((xml, parent)) = stack.pop() {
            let element_id = self.materialize_element(document, xml, position)?;
            position += 1;

            match parent {
                Some(parent_id) => attach_child(document, parent_id, element_id),
                None => document.root = Some(element_id),
            }

            // Text following this element's closing tag belongs to the
            // parent's sequence, not to the element it trails.
            if let Some(parent_id) = parent {
                if let Some(tail) = self.text_run(trailing_text(xml)) {
                    let tail_id = self.materialize_text(document, tail)?;
                    attach_child(document, parent_id, tail_id);
                }
            }

            if let Some(text) = self.text_run(leading_text(xml)) {
                let text_id = self.materialize_text(document, text)?;
                attach_child(document, element_id, text_id);
            }

            // LIFO order: the sibling goes on the stack first so the
            // first child is visited next. The traversal root's own
            // siblings stay outside the walk.
            if parent.is_some() {
                if let Some(sibling) = xml.next_sibling_element() {
                    stack.push((sibling, parent));
                }
            }
            if let Some(child) = xml.first_element_child() {
                stack.push((child, Some(element_id)));
            }
        }

        Ok(())
    }

    fn materialize_element(
        &self,
        document: &mut Document,
        xml: roxmltree::Node<'_, '_>,
        position: u64,
    ) -> Result<NodeId> {
        let tag = xml.tag_name();
        let name = tag.name().to_string();
        let namespace = tag.namespace().map(str::to_string);

        let explicit_id = xml.attribute((XML_NAMESPACE, "id"));
        let mut element = Element::new(self.minter.mint(explicit_id)?, name, namespace.clone());
        element.position = Some(position);

        for attr in xml.attributes() {
            // An attribute without its own namespace inherits the
            // element's.
            let attr_namespace = attr
                .namespace()
                .map(str::to_string)
                .or_else(|| namespace.clone());
            element.attributes.push(Attribute {
                uri: self.minter.mint(None)?,
                name: attr.name().to_string(),
                namespace: attr_namespace,
                value: attr.value().to_string(),
            });
        }

        Ok(document.push_node(XmlNode::Element(element)))
    }

    fn materialize_text(&self, document: &mut Document, content: String) -> Result<NodeId> {
        let text = Text {
            uri: self.minter.mint(None)?,
            content,
        };
        Ok(document.push_node(XmlNode::Text(text)))
    }

    /// Applies the whitespace-suppression policy to a raw text run.
    fn text_run(&self, raw: Option<&str>) -> Option<String> {
        let content = raw?;
        if self.ignore_whitespace && content.trim().is_empty() {
            return None;
        }
        Some(content.to_string())
    }
}

/// Evaluates a `.//prefix:local` root-selection expression against the
/// full tree, returning the first match in document order.
///
/// Prefixes resolve through the namespace map extracted at the document
/// root; an unprefixed name matches elements without a namespace. An
/// unsupported expression or an unknown prefix selects nothing, which
/// callers treat as a recoverable miss.
pub fn select_root<'a, 'input>(
    doc: &'a roxmltree::Document<'input>,
    expr: &str,
    ns_map: &BTreeMap<String, String>,
) -> Option<roxmltree::Node<'a, 'input>> {
    let trimmed = expr.trim();
    let rest = trimmed.strip_prefix('.').unwrap_or(trimmed);
    let qname = rest.strip_prefix("//")?;
    if qname.is_empty() || qname.contains('/') {
        return None;
    }

    let (namespace, local) = match qname.split_once(':') {
        Some((prefix, local)) => (Some(ns_map.get(prefix)?.as_str()), local),
        None => (None, qname),
    };

    doc.root().descendants().find(|n| {
        n.is_element() && n.tag_name().name() == local && n.tag_name().namespace() == namespace
    })
}

fn attach_child(document: &mut Document, parent: NodeId, child: NodeId) {
    if let Some(XmlNode::Element(el)) = document.node_mut(parent) {
        el.children.push(child);
    }
}

/// Character data immediately inside the element's start tag.
fn leading_text<'a>(xml: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    xml.first_child().filter(|n| n.is_text()).and_then(|n| n.text())
}

/// Character data immediately after the element's end tag.
fn trailing_text<'a>(xml: roxmltree::Node<'a, '_>) -> Option<&'a str> {
    xml.next_sibling().filter(|n| n.is_text()).and_then(|n| n.text())
}
