mod ntriples;
mod turtle;

pub use self::{ntriples::NTriplesFormatter, turtle::TurtleFormatter};
use crate::{error::Result, graph::GraphBuffer};

/// Trait for serializing a statement buffer as text.
pub trait Formatter {
    fn format(&self, graph: &GraphBuffer) -> Result<String>;
}

/// Helper functions shared between output formats
pub mod helpers {
    /// Escapes the characters Turtle and N-Triples quote inside
    /// string literals.
    pub fn escape_literal(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::helpers::escape_literal;

    #[test]
    fn escapes_quotes_and_control_characters() {
        assert_eq!(escape_literal(r#"a "b" c"#), r#"a \"b\" c"#);
        assert_eq!(escape_literal("line\nbreak\ttab"), "line\\nbreak\\ttab");
        assert_eq!(escape_literal("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_literal("plain text"), "plain text");
    }
}
