#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use xml2rdf::test_utils::*;

fn options_ignoring_whitespace() -> ConvertOptions {
    let mut options = ConvertOptions::default();
    options.ignore_whitespace = true;
    options
}

fn has_predicate_from(graph: &GraphBuffer, subject: &NamedNode, predicate: NamedNodeRef<'_>) -> bool {
    let subject = Subject::from(subject.clone());
    let predicate = predicate.into_owned();
    graph
        .triples()
        .iter()
        .any(|t| t.subject == subject && t.predicate == predicate)
}

#[test]
fn every_node_is_part_of_the_document() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    for (_, node) in doc.nodes() {
        assert!(
            graph_has(&graph, node.uri(), xmlo::PART_OF, doc.uri.clone()),
            "node {} lacks its partOf statement",
            node.uri()
        );
    }
    Ok(())
}

#[test]
fn sibling_chain_statements_are_complete() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    let p1 = element_named(&doc, "p").expect("p element");
    let uris: Vec<NamedNode> = p1
        .children
        .iter()
        .map(|id| doc.node(*id).unwrap().uri().clone())
        .collect();
    assert_eq!(uris.len(), 3);

    assert!(graph_has(&graph, &p1.uri, xmlo::FIRST_CHILD, uris[0].clone()));
    assert!(graph_has(&graph, &p1.uri, xmlo::LAST_CHILD, uris[2].clone()));
    assert!(graph_has(&graph, &uris[0], xmlo::NEXT_SIBLING, uris[1].clone()));
    assert!(graph_has(&graph, &uris[1], xmlo::NEXT_SIBLING, uris[2].clone()));
    assert!(
        !has_predicate_from(&graph, &uris[2], xmlo::NEXT_SIBLING),
        "the last child must not point at a next sibling"
    );

    for (i, uri) in uris.iter().enumerate() {
        assert!(graph_has(
            &graph,
            uri,
            xmlo::CHILD_INDEX,
            Literal::new_typed_literal(i.to_string(), xsd::INTEGER)
        ));
        assert!(graph_has(&graph, uri, xmlo::PARENT, p1.uri.clone()));
    }
    Ok(())
}

#[test]
fn childless_elements_emit_no_chain() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    let file_desc = element_named(&doc, "fileDesc").expect("fileDesc element");
    assert!(file_desc.children.is_empty());
    assert!(!has_predicate_from(&graph, &file_desc.uri, xmlo::FIRST_CHILD));
    assert!(!has_predicate_from(&graph, &file_desc.uri, xmlo::LAST_CHILD));
    Ok(())
}

#[test]
fn element_scalars_are_emitted() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    let p1 = element_named(&doc, "p").expect("p element");
    assert!(graph_has(
        &graph,
        &p1.uri,
        xmlo::NAME,
        Literal::new_simple_literal("p")
    ));
    assert!(graph_has(
        &graph,
        &p1.uri,
        xmlo::POSITION,
        Literal::new_typed_literal("5", xsd::INTEGER)
    ));
    assert!(graph_has(
        &graph,
        &p1.uri,
        xmlo::NAMESPACE,
        Literal::new_typed_literal("http://www.tei-c.org/ns/1.0", xsd::ANY_URI)
    ));
    Ok(())
}

#[test]
fn attributes_are_linked_from_their_element() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    let file_desc = element_named(&doc, "fileDesc").expect("fileDesc element");
    let attr = &file_desc.attributes[0];

    assert!(graph_has(&graph, &attr.uri, rdf::TYPE, xmlo::ATTRIBUTE));
    assert!(graph_has(
        &graph,
        &attr.uri,
        xmlo::NAME,
        Literal::new_simple_literal("n")
    ));
    assert!(graph_has(
        &graph,
        &attr.uri,
        xmlo::VALUE,
        Literal::new_simple_literal("fd")
    ));
    assert!(graph_has(
        &graph,
        &attr.uri,
        xmlo::NAMESPACE,
        Literal::new_typed_literal("http://www.tei-c.org/ns/1.0", xsd::ANY_URI)
    ));
    assert!(graph_has(&graph, &file_desc.uri, xmlo::HAS_ATTRIBUTE, attr.uri.clone()));
    Ok(())
}

#[test]
fn subclass_generation_derives_types() -> Result<()> {
    let mut options = options_ignoring_whitespace();
    options.generate_sub_classes = true;
    let (doc, graph) = convert(TEI_DOC, "doc1", &options)?;

    let p1 = element_named(&doc, "p").expect("p element");
    let class = NamedNode::new("http://www.tei-c.org/ns/1.0#p").unwrap();
    assert!(graph_has(&graph, &class, rdfs::SUB_CLASS_OF, xmlo::ELEMENT));
    assert!(graph_has(&graph, &p1.uri, rdf::TYPE, class.clone()));
    assert!(
        !graph_has(&graph, &p1.uri, rdf::TYPE, xmlo::ELEMENT),
        "a derived type replaces the generic one"
    );

    // Two p elements share one deduplicated subclass declaration.
    let class_subject = Subject::from(class);
    let declarations = graph
        .triples()
        .iter()
        .filter(|t| t.subject == class_subject && t.predicate == rdfs::SUB_CLASS_OF.into_owned())
        .count();
    assert_eq!(declarations, 1);
    Ok(())
}

#[test]
fn subclass_generation_off_types_generically() -> Result<()> {
    let (doc, graph) = convert(TEI_DOC, "doc1", &options_ignoring_whitespace())?;
    let p1 = element_named(&doc, "p").expect("p element");
    assert!(graph_has(&graph, &p1.uri, rdf::TYPE, xmlo::ELEMENT));
    let subclass_count = graph
        .triples()
        .iter()
        .filter(|t| t.predicate == rdfs::SUB_CLASS_OF.into_owned())
        .count();
    assert_eq!(subclass_count, 0);
    Ok(())
}

#[test]
fn derived_class_uris_keep_existing_separators() -> Result<()> {
    // A namespace ending in '/' already carries its separator; one
    // without gets '#'.
    let mut options = ConvertOptions::default();
    options.generate_sub_classes = true;

    let (_, graph) = convert(r#"<r xmlns="http://ex/"/>"#, "d1", &options)?;
    let slash_class = NamedNode::new("http://ex/r").unwrap();
    assert!(graph_has(&graph, &slash_class, rdfs::SUB_CLASS_OF, xmlo::ELEMENT));

    let (_, graph) = convert(r#"<r xmlns="http://ex"/>"#, "d2", &options)?;
    let hash_class = NamedNode::new("http://ex#r").unwrap();
    assert!(graph_has(&graph, &hash_class, rdfs::SUB_CLASS_OF, xmlo::ELEMENT));
    Ok(())
}

#[test]
fn namespaceless_elements_stay_generic_under_subclass_generation() -> Result<()> {
    let mut options = ConvertOptions::default();
    options.generate_sub_classes = true;
    let (doc, graph) = convert("<plain/>", "d1", &options)?;
    let plain = element_named(&doc, "plain").expect("plain element");
    assert!(graph_has(&graph, &plain.uri, rdf::TYPE, xmlo::ELEMENT));
    Ok(())
}

#[test]
fn comment_entities_emit_type_and_content() -> Result<()> {
    let minter = UriMinter::new("http://example.org/", "")?;
    let mut doc = Document::new(
        minter.mint_document("doc1")?,
        "http://example.org/",
        "example",
    );
    let comment = Comment {
        uri: minter.mint(None)?,
        content: "editorial note".to_string(),
    };
    let id = doc.push_node(XmlNode::Comment(comment.clone()));

    let mut graph = GraphBuffer::new();
    GraphEmitter::new(&doc, false).emit_node(id, &mut graph);

    assert!(graph_has(&graph, &comment.uri, rdf::TYPE, xmlo::COMMENT));
    assert!(graph_has(
        &graph,
        &comment.uri,
        xmlo::CONTENT,
        Literal::new_simple_literal("editorial note")
    ));
    assert!(graph_has(&graph, &comment.uri, xmlo::PART_OF, doc.uri.clone()));
    Ok(())
}

#[test]
fn text_entities_emit_their_content() -> Result<()> {
    let (doc, graph) = convert(SIMPLE_DOC, "doc1", &options_ignoring_whitespace())?;
    let texts: Vec<_> = doc
        .nodes()
        .filter_map(|(_, n)| match n {
            XmlNode::Text(t) => Some(t.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 2);
    for text in texts {
        assert!(graph_has(&graph, &text.uri, rdf::TYPE, xmlo::TEXT));
        assert!(graph_has(
            &graph,
            &text.uri,
            xmlo::CONTENT,
            Literal::new_simple_literal(text.content.clone())
        ));
    }
    Ok(())
}
