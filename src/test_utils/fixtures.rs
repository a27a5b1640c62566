//! Shared XML fixtures for the test suites.

/// Minimal document exercising child order, trailing text and an
/// ordinary (non-identifier) attribute.
pub const SIMPLE_DOC: &str = r#"<root xmlns="http://ex/"><a id="1">hi</a>tail</root>"#;

/// TEI-flavored document with a default namespace, an explicit prefix
/// for root selection, `xml:id` identifiers and mixed content.
pub const TEI_DOC: &str = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0" xmlns:tei="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc n="fd"/>
  </teiHeader>
  <text xml:id="t1">
    <body xml:id="b1">
      <p xml:id="p1">First <hi rend="bold">bold</hi> tail text.</p>
      <p xml:id="p2">Second</p>
    </body>
  </text>
</TEI>"#;

/// Document where every element carries an explicit identifier, for
/// reproducibility checks.
pub const STABLE_DOC: &str = r#"<root xmlns="http://s/" xml:id="r"><a xml:id="a1"/><b xml:id="b1"><c xml:id="c1"/></b></root>"#;

/// Document whose only text runs are whitespace apart from one word.
pub const WHITESPACE_DOC: &str = "<root>\n  <a>keep</a>\n  <b/>\n</root>";
