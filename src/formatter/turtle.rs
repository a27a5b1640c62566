//! Turtle serialization.
//!
//! Statements are written in buffer order, grouped by subject with `;`
//! continuation. IRIs are abbreviated against the bound prefix table
//! when the remainder is a safe local name, otherwise written in full.

use oxrdf::{vocab::rdf, vocab::xsd, Literal, Subject, Term};

use super::{helpers, Formatter};
use crate::{error::Result, graph::GraphBuffer};

pub struct TurtleFormatter;

impl Formatter for TurtleFormatter {
    fn format(&self, graph: &GraphBuffer) -> Result<String> {
        let mut out = String::new();
        for (prefix, ns) in graph.prefixes() {
            out.push_str(&format!("@prefix {}: <{}> .\n", prefix, ns));
        }

        let mut current: Option<&Subject> = None;
        for triple in graph.triples() {
            if current == Some(&triple.subject) {
                out.push_str(" ;\n    ");
            } else {
                if current.is_some() {
                    out.push_str(" .\n");
                }
                out.push('\n');
                out.push_str(&render_subject(&triple.subject, graph));
                out.push(' ');
                current = Some(&triple.subject);
            }
            if triple.predicate.as_ref() == rdf::TYPE {
                out.push('a');
            } else {
                out.push_str(&abbreviate(triple.predicate.as_str(), graph));
            }
            out.push(' ');
            out.push_str(&render_term(&triple.object, graph));
        }
        if current.is_some() {
            out.push_str(" .\n");
        }
        Ok(out)
    }
}

fn render_subject(subject: &Subject, graph: &GraphBuffer) -> String {
    match subject {
        Subject::NamedNode(n) => abbreviate(n.as_str(), graph),
        other => other.to_string(),
    }
}

fn render_term(term: &Term, graph: &GraphBuffer) -> String {
    match term {
        Term::NamedNode(n) => abbreviate(n.as_str(), graph),
        Term::Literal(lit) => render_literal(lit, graph),
        other => other.to_string(),
    }
}

fn render_literal(lit: &Literal, graph: &GraphBuffer) -> String {
    if lit.language().is_some() {
        return lit.to_string();
    }
    let datatype = lit.datatype();
    if datatype == xsd::STRING {
        format!("\"{}\"", helpers::escape_literal(lit.value()))
    } else if datatype == xsd::INTEGER && lit.value().parse::<i64>().is_ok() {
        lit.value().to_string()
    } else {
        format!(
            "\"{}\"^^{}",
            helpers::escape_literal(lit.value()),
            abbreviate(datatype.as_str(), graph)
        )
    }
}

/// Compacts an IRI to `prefix:local` against the longest bound
/// namespace it starts with.
fn abbreviate(iri: &str, graph: &GraphBuffer) -> String {
    let mut best: Option<(&str, &str)> = None;
    let mut best_len = 0;
    for (prefix, ns) in graph.prefixes() {
        if let Some(local) = iri.strip_prefix(ns.as_str()) {
            if ns.len() > best_len && is_local_name(local) {
                best = Some((prefix, local));
                best_len = ns.len();
            }
        }
    }
    match best {
        Some((prefix, local)) => format!("{}:{}", prefix, local),
        None => format!("<{}>", iri),
    }
}

/// Conservative subset of Turtle's `PN_LOCAL`: anything outside it is
/// written as a full IRI instead.
fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            (first.is_ascii_alphanumeric() || first == '_')
                && !local.ends_with('.')
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
    }
}

#[cfg(test)]
mod tests {
    use oxrdf::{NamedNode, Triple};

    use super::*;
    use crate::graph::TripleSink;

    fn graph_with_prefix() -> GraphBuffer {
        let mut g = GraphBuffer::new();
        g.bind("ex", "http://ex.org/ns#");
        g
    }

    #[test]
    fn abbreviates_bound_namespaces() {
        let g = graph_with_prefix();
        assert_eq!(abbreviate("http://ex.org/ns#Thing", &g), "ex:Thing");
        assert_eq!(abbreviate("http://other.org/Thing", &g), "<http://other.org/Thing>");
    }

    #[test]
    fn rejects_unsafe_local_names() {
        let g = graph_with_prefix();
        assert_eq!(
            abbreviate("http://ex.org/ns#a#b", &g),
            "<http://ex.org/ns#a#b>"
        );
    }

    #[test]
    fn groups_statements_by_subject() {
        let mut g = graph_with_prefix();
        let s = NamedNode::new("http://ex.org/ns#s").unwrap();
        g.insert(Triple::new(
            s.clone(),
            NamedNode::new("http://ex.org/ns#p").unwrap(),
            NamedNode::new("http://ex.org/ns#o").unwrap(),
        ));
        g.insert(Triple::new(
            s,
            NamedNode::new("http://ex.org/ns#q").unwrap(),
            oxrdf::Literal::new_simple_literal("v"),
        ));
        let out = TurtleFormatter.format(&g).unwrap();
        assert!(out.starts_with("@prefix ex: <http://ex.org/ns#> .\n"));
        assert!(out.contains("ex:s ex:p ex:o ;\n    ex:q \"v\" .\n"));
    }
}
