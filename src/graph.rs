//! Statement buffer that conversion output is emitted into.

use std::collections::HashSet;

use oxrdf::Triple;

/// Destination for emitted statements.
pub trait TripleSink {
    fn insert(&mut self, triple: Triple);
}

/// In-memory, insertion-ordered statement set with a prefix table.
///
/// The buffer behaves as a set: a statement emitted twice (repeated
/// subclass declarations, for instance) is kept once, at its first
/// position. Binding order of prefixes is preserved for serialization.
#[derive(Debug, Default)]
pub struct GraphBuffer {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    prefixes: Vec<(String, String)>,
}

impl GraphBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a prefix to a namespace. Rebinding a prefix replaces the
    /// earlier namespace, keeping the original binding position.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if let Some(slot) = self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            slot.1 = namespace;
        } else {
            self.prefixes.push((prefix, namespace));
        }
    }

    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }
}

impl TripleSink for GraphBuffer {
    fn insert(&mut self, triple: Triple) {
        if self.seen.insert(triple.clone()) {
            self.triples.push(triple);
        }
    }
}
