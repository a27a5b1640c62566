//! Graph entity model for a converted document.
//!
//! A [`Document`] owns every entity produced by a run in a single list,
//! in traversal order. Elements reference their children by [`NodeId`]
//! into that list; the child list is an ordering view, not an owner.
//! Attributes are owned by their element and do not take part in the
//! sibling chain.

use std::collections::BTreeMap;

use oxrdf::NamedNode;

/// Index of a node in its document's entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One conversion run's worth of graph entities.
#[derive(Debug)]
pub struct Document {
    /// Identifier of the document entity itself
    pub uri: NamedNode,
    /// The effective traversal root
    pub root: Option<NodeId>,
    /// Raw source text, when configured to be embedded
    pub xml_source: Option<String>,
    /// Base IRI for generated instance identifiers
    pub instance_namespace: String,
    /// Prefix bound to the instance namespace in output
    pub instance_namespace_prefix: String,
    /// Prefix to namespace-URI pairs declared in scope at the source root
    pub ns_map_xml: BTreeMap<String, String>,
    /// The same prefixes with namespace values safe for concatenation
    pub ns_map_rdf: BTreeMap<String, String>,
    nodes: Vec<XmlNode>,
}

impl Document {
    pub fn new(
        uri: NamedNode,
        instance_namespace: impl Into<String>,
        instance_namespace_prefix: impl Into<String>,
    ) -> Self {
        Self {
            uri,
            root: None,
            xml_source: None,
            instance_namespace: instance_namespace.into(),
            instance_namespace_prefix: instance_namespace_prefix.into(),
            ns_map_xml: BTreeMap::new(),
            ns_map_rdf: BTreeMap::new(),
            nodes: Vec::new(),
        }
    }

    /// Registers a node in the entity list and returns its id.
    pub fn push_node(&mut self, node: XmlNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&XmlNode> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut XmlNode> {
        self.nodes.get_mut(id.0)
    }

    /// All entities in traversal order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &XmlNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Elements in traversal order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|n| match n {
            XmlNode::Element(el) => Some(el),
            _ => None,
        })
    }
}

/// Any entity that participates in the sibling/parent graph.
#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

impl XmlNode {
    pub fn uri(&self) -> &NamedNode {
        match self {
            Self::Element(el) => &el.uri,
            Self::Text(t) => &t.uri,
            Self::Comment(c) => &c.uri,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// A tagged node of the source tree.
#[derive(Debug, Clone)]
pub struct Element {
    pub uri: NamedNode,
    /// Local name, without any namespace qualification
    pub name: String,
    pub namespace: Option<String>,
    /// Attributes in source order, owned by this element
    pub attributes: Vec<Attribute>,
    /// Ordered view over child entities; entities live in the document
    pub children: Vec<NodeId>,
    /// Document-order position relative to the traversal root
    pub position: Option<u64>,
}

impl Element {
    pub fn new(uri: NamedNode, name: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            uri,
            name: name.into(),
            namespace,
            attributes: Vec::new(),
            children: Vec::new(),
            position: None,
        }
    }
}

/// A contiguous run of character data.
#[derive(Debug, Clone)]
pub struct Text {
    pub uri: NamedNode,
    pub content: String,
}

/// A comment node. Modeled for emission parity; the traversal does not
/// currently produce these.
#[derive(Debug, Clone)]
pub struct Comment {
    pub uri: NamedNode,
    pub content: String,
}

/// A single name/value pair on an element.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub uri: NamedNode,
    pub name: String,
    pub namespace: Option<String>,
    pub value: String,
}
