//! N-Triples serialization: one canonical statement per line.

use super::Formatter;
use crate::{error::Result, graph::GraphBuffer};

pub struct NTriplesFormatter;

impl Formatter for NTriplesFormatter {
    fn format(&self, graph: &GraphBuffer) -> Result<String> {
        let mut out = String::new();
        for triple in graph.triples() {
            out.push_str(&format!(
                "{} {} {} .\n",
                triple.subject, triple.predicate, triple.object
            ));
        }
        Ok(out)
    }
}
