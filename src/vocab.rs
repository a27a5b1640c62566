//! The fixed XML ontology vocabulary used for emitted statements.

/// Namespace of the XML ontology vocabulary.
pub const XMLO_NS: &str = "https://w3id.org/xml2rdf#";

/// Prefix bound to [`XMLO_NS`] in serialized output.
pub const XMLO_PREFIX: &str = "xmlo";

/// The reserved `xml:` namespace, home of the `xml:id` identifier attribute.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Well-known namespaces bound in every serialized graph.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// XML ontology terms.
pub mod xmlo {
    use oxrdf::NamedNodeRef;

    /// Class of converted documents.
    pub const DOCUMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#Document");
    /// Generic class of converted elements.
    pub const ELEMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#Element");
    /// Class of character-data runs.
    pub const TEXT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#Text");
    /// Class of comment nodes.
    pub const COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#Comment");
    /// Class of name/value attribute pairs.
    pub const ATTRIBUTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#Attribute");

    /// Links any node to the document it belongs to.
    pub const PART_OF: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#partOf");
    /// Links a document to its root element.
    pub const ROOT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#root");
    /// Embedded source text of a document.
    pub const XML_SOURCE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#xmlSource");
    /// Local name of an element or attribute.
    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#name");
    /// Namespace of an element or attribute.
    pub const NAMESPACE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#nameSpace");
    /// Value of an attribute.
    pub const VALUE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#value");
    /// Character content of a text or comment node.
    pub const CONTENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#content");
    /// Document-order position of an element.
    pub const POSITION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#n");
    /// Positional index of a node within its parent's child list.
    pub const CHILD_INDEX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#index");
    /// Links a child node back to its parent element.
    pub const PARENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#parent");
    /// Links a node to the next node in its parent's child list.
    pub const NEXT_SIBLING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#nextSibling");
    /// Links an element to the first node of its child list.
    pub const FIRST_CHILD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#firstChild");
    /// Links an element to the last node of its child list.
    pub const LAST_CHILD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#lastChild");
    /// Links an element to one of its attributes.
    pub const HAS_ATTRIBUTE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://w3id.org/xml2rdf#attribute");
}
