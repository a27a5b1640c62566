//! Identifier minting for graph entities.

use oxrdf::NamedNode;
use uuid::Uuid;

use crate::error::{
    ConfigError, ConvertError, ConvertErrorKind, IdentifierError, Result,
};

/// Mints instance identifiers under a fixed base namespace.
///
/// An identifier is `namespace + idPrefix + explicitId` when the source
/// carries an explicit identifier, and `namespace + idPrefix + uuid4`
/// otherwise. Explicit identifiers are stable across runs; random ones
/// are unique but not reproducible.
#[derive(Debug, Clone)]
pub struct UriMinter {
    base: String,
    id_prefix: String,
}

impl UriMinter {
    /// Creates a minter for the given instance namespace.
    ///
    /// An empty namespace is a configuration error: minting under a
    /// placeholder authority would poison every generated identifier.
    pub fn new(instance_namespace: &str, id_prefix: impl Into<String>) -> Result<Self> {
        if instance_namespace.is_empty() {
            return Err(ConvertError::new(ConvertErrorKind::Config(
                ConfigError::MissingInstanceNamespace,
            )));
        }
        NamedNode::new(instance_namespace).map_err(|e| {
            ConvertError::new(ConvertErrorKind::Config(
                ConfigError::InvalidInstanceNamespace(instance_namespace.to_string()),
            ))
            .with_source(e)
        })?;
        Ok(Self {
            base: instance_namespace.to_string(),
            id_prefix: id_prefix.into(),
        })
    }

    /// Mints an entity identifier, honoring an explicit identifier when
    /// one is present.
    pub fn mint(&self, explicit_id: Option<&str>) -> Result<NamedNode> {
        let iri = match explicit_id {
            Some(id) => format!("{}{}{}", self.base, self.id_prefix, id),
            None => format!("{}{}{}", self.base, self.id_prefix, Uuid::new_v4()),
        };
        NamedNode::new(&iri).map_err(|e| {
            ConvertError::new(ConvertErrorKind::Identifier(IdentifierError::InvalidIri(
                iri,
            )))
            .with_source(e)
        })
    }

    /// Mints the identifier of the document entity itself. Document
    /// identifiers carry no id prefix, only the document id.
    pub fn mint_document(&self, doc_id: &str) -> Result<NamedNode> {
        let iri = format!("{}{}", self.base, doc_id);
        NamedNode::new(&iri).map_err(|e| {
            ConvertError::new(ConvertErrorKind::Identifier(IdentifierError::InvalidIri(
                iri,
            )))
            .with_source(e)
        })
    }
}
