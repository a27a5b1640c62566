//! Namespace extraction and graph-namespace derivation.
//!
//! XML namespaces have no separator convention of their own, so every
//! namespace that contributes to a generated IRI goes through
//! [`ensure_separator`] exactly once. Both the namespace map used for
//! prefix bindings and derived subclass IRIs share this path.

use std::collections::BTreeMap;

/// Returns the namespace with a guaranteed trailing `#` or `/`.
///
/// A namespace already ending in either separator is used unchanged.
pub fn ensure_separator(ns: &str) -> String {
    if ns.ends_with('/') || ns.ends_with('#') {
        ns.to_string()
    } else {
        format!("{}#", ns)
    }
}

/// Joins a local name onto a namespace, normalizing the separator.
pub fn join_local(ns: &str, local: &str) -> String {
    format!("{}{}", ensure_separator(ns), local)
}

/// Prefix to namespace-URI pairs declared in scope at the given element.
///
/// The default namespace maps from the empty prefix. No ancestor or
/// descendant merging happens here; only declarations visible at the
/// traversal root count.
pub fn xml_namespaces(root: roxmltree::Node<'_, '_>) -> BTreeMap<String, String> {
    root.namespaces()
        .map(|ns| {
            (
                ns.name().unwrap_or_default().to_string(),
                ns.uri().to_string(),
            )
        })
        .collect()
}

/// The same prefixes with values safe to concatenate a local name onto.
pub fn graph_namespaces(ns_map_xml: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    ns_map_xml
        .iter()
        .map(|(prefix, ns)| (prefix.clone(), ensure_separator(ns)))
        .collect()
}
