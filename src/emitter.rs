//! Statement emission for materialized entities.
//!
//! Each entity contributes its type statement, scalar properties and
//! structural relationships. Shape defects degrade: a missing child
//! only suppresses the statements that depend on it.

use oxrdf::{
    vocab::{rdf, rdfs, xsd},
    Literal, NamedNode, Triple,
};
use tracing::warn;

use crate::{
    graph::TripleSink,
    model::{Attribute, Comment, Document, Element, NodeId, Text, XmlNode},
    namespace::join_local,
    vocab::xmlo,
};

pub struct GraphEmitter<'a> {
    document: &'a Document,
    generate_subclasses: bool,
}

impl<'a> GraphEmitter<'a> {
    pub fn new(document: &'a Document, generate_subclasses: bool) -> Self {
        Self {
            document,
            generate_subclasses,
        }
    }

    /// Emits the document entity's own statements: type, optional
    /// embedded source and the link to the traversal root.
    pub fn emit_document(&self, sink: &mut dyn TripleSink) {
        let doc_uri = &self.document.uri;
        sink.insert(Triple::new(doc_uri.clone(), rdf::TYPE, xmlo::DOCUMENT));
        if let Some(source) = &self.document.xml_source {
            sink.insert(Triple::new(
                doc_uri.clone(),
                xmlo::XML_SOURCE,
                Literal::new_simple_literal(source),
            ));
        }
        if let Some(root) = self.document.root.and_then(|id| self.node_uri(id)) {
            sink.insert(Triple::new(doc_uri.clone(), xmlo::ROOT, root));
        }
    }

    /// Emits all statements for one entity of the document.
    pub fn emit_node(&self, id: NodeId, sink: &mut dyn TripleSink) {
        match self.document.node(id) {
            Some(XmlNode::Element(el)) => self.emit_element(el, sink),
            Some(XmlNode::Text(text)) => self.emit_text(text, sink),
            Some(XmlNode::Comment(comment)) => self.emit_comment(comment, sink),
            None => {}
        }
    }

    fn emit_element(&self, el: &Element, sink: &mut dyn TripleSink) {
        self.emit_part_of(&el.uri, sink);
        sink.insert(Triple::new(
            el.uri.clone(),
            xmlo::NAME,
            Literal::new_simple_literal(&el.name),
        ));
        if let Some(n) = el.position {
            sink.insert(Triple::new(
                el.uri.clone(),
                xmlo::POSITION,
                Literal::new_typed_literal(n.to_string(), xsd::INTEGER),
            ));
        }
        if let Some(ns) = &el.namespace {
            sink.insert(Triple::new(
                el.uri.clone(),
                xmlo::NAMESPACE,
                Literal::new_typed_literal(ns.clone(), xsd::ANY_URI),
            ));
        }

        self.emit_type(el, sink);
        self.emit_child_chain(el, sink);

        for attr in &el.attributes {
            self.emit_attribute(attr, sink);
            sink.insert(Triple::new(
                el.uri.clone(),
                xmlo::HAS_ATTRIBUTE,
                attr.uri.clone(),
            ));
        }
    }

    /// Types an element, deriving a subclass from its namespace and
    /// name when subclass generation is enabled.
    fn emit_type(&self, el: &Element, sink: &mut dyn TripleSink) {
        if self.generate_subclasses {
            if let Some(ns) = &el.namespace {
                match NamedNode::new(join_local(ns, &el.name)) {
                    Ok(class) => {
                        sink.insert(Triple::new(class.clone(), rdfs::SUB_CLASS_OF, xmlo::ELEMENT));
                        sink.insert(Triple::new(el.uri.clone(), rdf::TYPE, class));
                        return;
                    }
                    Err(e) => {
                        warn!(
                            namespace = ns.as_str(),
                            name = el.name.as_str(),
                            "derived class is not a valid IRI, using the generic type: {e}"
                        );
                    }
                }
            }
        }
        sink.insert(Triple::new(el.uri.clone(), rdf::TYPE, xmlo::ELEMENT));
    }

    /// Emits first/last/next-sibling and per-child order statements.
    /// An element without children emits none of these.
    fn emit_child_chain(&self, el: &Element, sink: &mut dyn TripleSink) {
        if let Some(first) = el.children.first().and_then(|id| self.node_uri(*id)) {
            sink.insert(Triple::new(el.uri.clone(), xmlo::FIRST_CHILD, first));
        }
        if let Some(last) = el.children.last().and_then(|id| self.node_uri(*id)) {
            sink.insert(Triple::new(el.uri.clone(), xmlo::LAST_CHILD, last));
        }
        for (i, child_id) in el.children.iter().enumerate() {
            let Some(child) = self.node_uri(*child_id) else {
                continue;
            };
            sink.insert(Triple::new(
                child.clone(),
                xmlo::CHILD_INDEX,
                Literal::new_typed_literal(i.to_string(), xsd::INTEGER),
            ));
            sink.insert(Triple::new(child.clone(), xmlo::PARENT, el.uri.clone()));
            if let Some(next) = el.children.get(i + 1).and_then(|id| self.node_uri(*id)) {
                sink.insert(Triple::new(child, xmlo::NEXT_SIBLING, next));
            }
        }
    }

    fn emit_attribute(&self, attr: &Attribute, sink: &mut dyn TripleSink) {
        sink.insert(Triple::new(attr.uri.clone(), rdf::TYPE, xmlo::ATTRIBUTE));
        sink.insert(Triple::new(
            attr.uri.clone(),
            xmlo::NAME,
            Literal::new_simple_literal(&attr.name),
        ));
        if let Some(ns) = &attr.namespace {
            sink.insert(Triple::new(
                attr.uri.clone(),
                xmlo::NAMESPACE,
                Literal::new_typed_literal(ns.clone(), xsd::ANY_URI),
            ));
        }
        sink.insert(Triple::new(
            attr.uri.clone(),
            xmlo::VALUE,
            Literal::new_simple_literal(&attr.value),
        ));
    }

    fn emit_text(&self, text: &Text, sink: &mut dyn TripleSink) {
        self.emit_part_of(&text.uri, sink);
        sink.insert(Triple::new(text.uri.clone(), rdf::TYPE, xmlo::TEXT));
        sink.insert(Triple::new(
            text.uri.clone(),
            xmlo::CONTENT,
            Literal::new_simple_literal(&text.content),
        ));
    }

    fn emit_comment(&self, comment: &Comment, sink: &mut dyn TripleSink) {
        self.emit_part_of(&comment.uri, sink);
        sink.insert(Triple::new(comment.uri.clone(), rdf::TYPE, xmlo::COMMENT));
        sink.insert(Triple::new(
            comment.uri.clone(),
            xmlo::CONTENT,
            Literal::new_simple_literal(&comment.content),
        ));
    }

    fn emit_part_of(&self, uri: &NamedNode, sink: &mut dyn TripleSink) {
        sink.insert(Triple::new(
            uri.clone(),
            xmlo::PART_OF,
            self.document.uri.clone(),
        ));
    }

    fn node_uri(&self, id: NodeId) -> Option<NamedNode> {
        self.document.node(id).map(|n| n.uri().clone())
    }
}
