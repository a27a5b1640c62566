use std::{env, fs, path::PathBuf};

use oxrdf::{NamedNodeRef, Term, Triple};

use crate::{
    config::ConvertOptions,
    converter::Converter,
    error::Result,
    graph::GraphBuffer,
    model::{Document, Element},
};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("xml2rdf_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Runs the full pipeline on a source string, returning both the
/// materialized document and its emitted statement set.
pub fn convert(source: &str, doc_id: &str, options: &ConvertOptions) -> Result<(Document, GraphBuffer)> {
    let document = Converter::xml_to_document(source, doc_id, options)?;
    let graph = Converter::document_to_graph(&document, options.generate_sub_classes);
    Ok((document, graph))
}

/// First element entity with the given local name, in traversal order.
pub fn element_named<'a>(document: &'a Document, name: &str) -> Option<&'a Element> {
    document.elements().find(|el| el.name == name)
}

/// Whether the graph contains the given statement.
pub fn graph_has(
    graph: &GraphBuffer,
    subject: &oxrdf::NamedNode,
    predicate: NamedNodeRef<'_>,
    object: impl Into<Term>,
) -> bool {
    graph.contains(&Triple::new(subject.clone(), predicate, object))
}
