#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic_in_result_fn)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xml2rdf::test_utils::*;

/// Builds a balanced synthetic document with mixed content.
fn synthetic_doc(depth: usize, breadth: usize) -> String {
    fn node(out: &mut String, depth: usize, breadth: usize, id: &mut usize) {
        out.push_str(&format!("<div n=\"{}\">lead", id));
        *id += 1;
        if depth > 0 {
            for _ in 0..breadth {
                node(out, depth - 1, breadth, id);
                out.push_str("tail");
            }
        }
        out.push_str("</div>");
    }
    let mut out = String::from("<doc xmlns=\"http://bench.example.org/ns\">");
    let mut id = 0;
    node(&mut out, depth, breadth, &mut id);
    out.push_str("</doc>");
    out
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Walker");

    let inputs = [
        ("small", synthetic_doc(3, 3)),
        ("medium", synthetic_doc(5, 4)),
        ("large", synthetic_doc(6, 5)),
    ];

    for (size, input) in &inputs {
        group.bench_with_input(BenchmarkId::new("walk", size), input, |b, input| {
            b.iter(|| {
                Converter::xml_to_document(black_box(input), "bench", &ConvertOptions::default())
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Emitter");

    let input = synthetic_doc(5, 4);
    let document =
        Converter::xml_to_document(&input, "bench", &ConvertOptions::default()).unwrap();

    group.bench_function("emit", |b| {
        b.iter(|| Converter::document_to_graph(black_box(&document), false));
    });
    group.bench_function("emit_with_subclasses", |b| {
        b.iter(|| Converter::document_to_graph(black_box(&document), true));
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Serialization");

    let input = synthetic_doc(5, 4);
    let document =
        Converter::xml_to_document(&input, "bench", &ConvertOptions::default()).unwrap();

    group.bench_function("turtle", |b| {
        b.iter(|| Converter::serialize(black_box(&document), false, OutputFormat::Turtle).unwrap());
    });
    group.bench_function("ntriples", |b| {
        b.iter(|| {
            Converter::serialize(black_box(&document), false, OutputFormat::NTriples).unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_traversal, bench_emission, bench_serialization);
criterion_main!(benches);
