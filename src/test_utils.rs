mod fixtures;
mod helpers;

pub use fixtures::{SIMPLE_DOC, STABLE_DOC, TEI_DOC, WHITESPACE_DOC};
pub use helpers::{convert, element_named, graph_has, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    config::ConvertOptions,
    convert_file, convert_str,
    converter::Converter,
    emitter::GraphEmitter,
    enums::OutputFormat,
    error::{
        ConfigError, ConvertError, ConvertErrorKind, FormatError, IOError, Result, XmlError,
    },
    formatter::{Formatter, NTriplesFormatter, TurtleFormatter},
    graph::{GraphBuffer, TripleSink},
    ident::UriMinter,
    model::{Attribute, Comment, Document, Element, NodeId, Text, XmlNode},
    namespace::{ensure_separator, join_local},
    utils::{document_id, output_path, read_file, write_file},
    vocab::{xmlo, XMLO_NS, XMLO_PREFIX, XML_NAMESPACE},
    walker::{select_root, TreeWalker},
};

// RDF terms used throughout the test suites
pub use oxrdf::{
    vocab::{rdf, rdfs, xsd},
    Literal, NamedNode, NamedNodeRef, Subject, Term, Triple,
};
