//! xml2rdf: converts XML documents into an addressable RDF graph
//!
//! This crate provides functionality to:
//! - Traverse an XML tree into graph entities for every element,
//!   attribute and text run
//! - Reconstruct document order, hierarchy and sibling chains as
//!   explicit statements
//! - Optionally derive a type hierarchy from the source namespaces
//! - Serialize the resulting statement set as Turtle or N-Triples
//!
//! # Examples
//! ```no_run
//! use xml2rdf::{convert_str, ConvertOptions, OutputFormat, Result};
//!
//! fn example() -> Result<()> {
//!     let options = ConvertOptions::default();
//!     let turtle = convert_str(
//!         "<doc><p>hi</p></doc>",
//!         "doc1",
//!         &options,
//!         OutputFormat::Turtle,
//!     )?;
//!     println!("{}", turtle);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

pub mod config;
pub mod converter;
pub mod emitter;
pub mod enums;
pub mod error;
pub mod formatter;
pub mod graph;
pub mod ident;
pub mod model;
pub mod namespace;
pub mod test_utils;
pub mod utils;
pub mod vocab;
pub mod walker;

// Re-exports
pub use config::ConvertOptions;
pub use converter::Converter;
pub use enums::OutputFormat;
pub use error::{ConvertError, ConvertErrorKind, Result};
pub use graph::{GraphBuffer, TripleSink};
pub use model::{Document, Element, NodeId, XmlNode};

/// Converts XML source text into a serialized statement set.
#[instrument(skip(source, options))]
pub fn convert_str(
    source: &str,
    doc_id: &str,
    options: &ConvertOptions,
    format: OutputFormat,
) -> Result<String> {
    debug!("starting conversion of document '{}'", doc_id);
    let document = Converter::xml_to_document(source, doc_id, options)?;
    Converter::serialize(&document, options.generate_sub_classes, format)
}

/// Converts one XML file, writing the serialized graph to `output`.
#[instrument(skip(options))]
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    format: OutputFormat,
) -> Result<()> {
    let source = utils::read_file(input)?;
    let doc_id = utils::document_id(input);
    let serialized = convert_str(&source, &doc_id, options, format)?;
    utils::write_file(output, &serialized)?;
    info!("Wrote {}", output.display());
    Ok(())
}
