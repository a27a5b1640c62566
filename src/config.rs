//! Conversion options
//!
//! Options are accepted as a camelCase JSON document on the command line,
//! mirroring the keys the converter has always recognized. Missing keys
//! fall back to their defaults.

use serde::Deserialize;

use crate::error::{ConfigError, ConvertError, ConvertErrorKind, Result};

/// Options controlling a single XML-to-RDF conversion run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Base IRI under which new instance identifiers are minted
    pub instance_namespace: String,
    /// Prefix bound to the instance namespace in the output
    pub instance_namespace_prefix: String,
    /// If true, identifiers are prefixed with `<documentId>#`
    pub use_doc_name_as_xml_id_prefix: bool,
    /// If true, whitespace-only text runs produce no Text entity
    pub ignore_whitespace: bool,
    /// Optional `.//prefix:local` expression selecting the traversal root
    pub x_path_root: Option<String>,
    /// If true, element types are derived from their namespace and name
    pub generate_sub_classes: bool,
    /// If true, the raw source text is embedded on the Document entity
    pub include_xml_source: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            instance_namespace: "http://example.org/".to_string(),
            instance_namespace_prefix: "example".to_string(),
            use_doc_name_as_xml_id_prefix: false,
            ignore_whitespace: false,
            x_path_root: None,
            generate_sub_classes: false,
            include_xml_source: false,
        }
    }
}

impl ConvertOptions {
    /// Parses an options document like
    /// `{"instanceNamespace": "http://ex.org/", "ignoreWhitespace": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConvertError::new(ConvertErrorKind::Config(ConfigError::InvalidOptions(
                e.to_string(),
            )))
        })
    }

    /// Rejects configurations the conversion cannot run under.
    ///
    /// An absent instance namespace must fail the run here rather than
    /// leak a sentinel string into every generated identifier.
    pub fn validate(&self) -> Result<()> {
        if self.instance_namespace.is_empty() {
            return Err(ConvertError::new(ConvertErrorKind::Config(
                ConfigError::MissingInstanceNamespace,
            )));
        }
        Ok(())
    }

    /// Identifier prefix for a document, honoring `useDocNameAsXmlIdPrefix`.
    pub fn id_prefix(&self, doc_id: &str) -> String {
        if self.use_doc_name_as_xml_id_prefix {
            format!("{}#", doc_id)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_missing_keys() {
        let opts = ConvertOptions::from_json("{}").unwrap();
        assert_eq!(opts.instance_namespace, "http://example.org/");
        assert_eq!(opts.instance_namespace_prefix, "example");
        assert!(!opts.ignore_whitespace);
        assert!(!opts.generate_sub_classes);
        assert!(opts.x_path_root.is_none());
    }

    #[test]
    fn accepts_camel_case_keys() {
        let opts = ConvertOptions::from_json(
            r#"{
                "instanceNamespace": "https://data.example.com/text/",
                "instanceNamespacePrefix": "ex",
                "useDocNameAsXmlIdPrefix": true,
                "ignoreWhitespace": true,
                "xPathRoot": ".//tei:text",
                "generateSubClasses": true
            }"#,
        )
        .unwrap();
        assert_eq!(opts.instance_namespace, "https://data.example.com/text/");
        assert!(opts.use_doc_name_as_xml_id_prefix);
        assert_eq!(opts.x_path_root.as_deref(), Some(".//tei:text"));
        assert!(opts.generate_sub_classes);
    }

    #[test]
    fn rejects_malformed_options() {
        assert!(ConvertOptions::from_json("{not json").is_err());
    }

    #[test]
    fn empty_namespace_fails_validation() {
        let mut opts = ConvertOptions::default();
        opts.instance_namespace = String::new();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn id_prefix_follows_doc_name_policy() {
        let mut opts = ConvertOptions::default();
        assert_eq!(opts.id_prefix("doc1"), "");
        opts.use_doc_name_as_xml_id_prefix = true;
        assert_eq!(opts.id_prefix("doc1"), "doc1#");
    }
}
