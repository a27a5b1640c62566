//! The conversion pipeline: parse, traverse, emit, serialize.

use tracing::{debug, info, instrument, warn};

use crate::{
    config::ConvertOptions,
    emitter::GraphEmitter,
    enums::OutputFormat,
    error::{ConvertError, ConvertErrorKind, Result, XmlError},
    formatter::{Formatter, NTriplesFormatter, TurtleFormatter},
    graph::GraphBuffer,
    ident::UriMinter,
    model::Document,
    namespace,
    vocab::{RDFS_NS, RDF_NS, XMLO_NS, XMLO_PREFIX, XSD_NS},
    walker::{select_root, TreeWalker},
};

/// High-level converter driving the per-document pipeline:
/// namespace resolution, traversal, then statement emission.
pub struct Converter;

impl Converter {
    /// Parses XML source text and materializes the entity graph for it.
    #[instrument(skip(source, options))]
    pub fn xml_to_document(
        source: &str,
        doc_id: &str,
        options: &ConvertOptions,
    ) -> Result<Document> {
        options.validate()?;

        let xml_doc = roxmltree::Document::parse(source).map_err(|e| {
            ConvertError::new(ConvertErrorKind::Xml(XmlError::Malformed(e.to_string())))
                .with_context(format!("parsing document '{}'", doc_id))
        })?;

        let minter = UriMinter::new(&options.instance_namespace, options.id_prefix(doc_id))?;
        let mut document = Document::new(
            minter.mint_document(doc_id)?,
            options.instance_namespace.clone(),
            options.instance_namespace_prefix.clone(),
        );
        if options.include_xml_source {
            document.xml_source = Some(source.to_string());
        }

        // Namespace maps always come from the real document root, even
        // when the traversal is re-rooted below.
        let source_root = xml_doc.root_element();
        document.ns_map_xml = namespace::xml_namespaces(source_root);
        document.ns_map_rdf = namespace::graph_namespaces(&document.ns_map_xml);

        let effective_root = match options.x_path_root.as_deref() {
            Some(expr) => match select_root(&xml_doc, expr, &document.ns_map_xml) {
                Some(node) => node,
                None => {
                    warn!(
                        "root selection '{}' matched nothing, falling back to the document root",
                        expr
                    );
                    source_root
                }
            },
            None => source_root,
        };

        TreeWalker::new(&minter, options.ignore_whitespace).walk(&mut document, effective_root)?;
        debug!(entities = document.len(), "traversal complete");
        Ok(document)
    }

    /// Emits the document's statement set into a fresh graph buffer,
    /// with every prefix bound: the fixed vocabulary, the instance
    /// namespace and each namespace resolved from the source.
    pub fn document_to_graph(document: &Document, generate_subclasses: bool) -> GraphBuffer {
        let mut graph = GraphBuffer::new();
        graph.bind("rdf", RDF_NS);
        graph.bind("rdfs", RDFS_NS);
        graph.bind("xsd", XSD_NS);
        graph.bind(XMLO_PREFIX, XMLO_NS);
        graph.bind(
            document.instance_namespace_prefix.clone(),
            document.instance_namespace.clone(),
        );
        for (prefix, ns) in &document.ns_map_rdf {
            graph.bind(prefix.clone(), ns.clone());
        }

        let emitter = GraphEmitter::new(document, generate_subclasses);
        emitter.emit_document(&mut graph);
        for (i, (id, _)) in document.nodes().enumerate() {
            emitter.emit_node(id, &mut graph);
            if (i + 1) % 5000 == 0 {
                debug!(emitted = i + 1, total = document.len(), "emitting entities");
            }
        }
        info!(statements = graph.len(), "graph emission complete");
        graph
    }

    /// Serializes the document's statement set in the requested format.
    pub fn serialize(
        document: &Document,
        generate_subclasses: bool,
        format: OutputFormat,
    ) -> Result<String> {
        let graph = Self::document_to_graph(document, generate_subclasses);
        match format {
            OutputFormat::Turtle => TurtleFormatter.format(&graph),
            OutputFormat::NTriples => NTriplesFormatter.format(&graph),
        }
    }
}
