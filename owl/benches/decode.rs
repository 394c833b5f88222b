//! Benchmarks for decoding throughput.
//!
//! Measures plain and compacted decoding over synthetic GO-shaped documents of
//! increasing size, and over the bundled GO-slim sample.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gogo_owl::Decoder;

const ROOT_OPEN: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:obo="http://purl.obolibrary.org/obo/"
     xmlns:owl="http://www.w3.org/2002/07/owl#"
     xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:oboInOwl="http://www.geneontology.org/formats/oboInOwl#">
"#;

const SAMPLE: &str = include_str!("../tests/data/goslim_sample.owl");

// ============================================================================
// Document generation
// ============================================================================

/// Builds `n` classes, each with a label, an id, a direct parent, a
/// part_of restriction and one annotated synonym.
fn document(n: usize) -> String {
    let mut doc = String::from(ROOT_OPEN);
    for i in 0..n {
        let parent = i / 2;
        doc.push_str(&format!(
            r#"<owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_{i:07}">
    <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_{parent:07}"/>
    <rdfs:subClassOf>
        <owl:Restriction>
            <owl:onProperty rdf:resource="http://purl.obolibrary.org/obo/BFO_0000050"/>
            <owl:someValuesFrom rdf:resource="http://purl.obolibrary.org/obo/GO_{parent:07}"/>
        </owl:Restriction>
    </rdfs:subClassOf>
    <oboInOwl:hasExactSynonym rdf:datatype="http://www.w3.org/2001/XMLSchema#string">term {i}</oboInOwl:hasExactSynonym>
    <oboInOwl:id rdf:datatype="http://www.w3.org/2001/XMLSchema#string">GO:{i:07}</oboInOwl:id>
    <rdfs:label rdf:datatype="http://www.w3.org/2001/XMLSchema#string">process {i}</rdfs:label>
</owl:Class>
<owl:Axiom>
    <owl:annotatedSource rdf:resource="http://purl.obolibrary.org/obo/GO_{i:07}"/>
    <owl:annotatedProperty rdf:resource="http://www.geneontology.org/formats/oboInOwl#hasExactSynonym"/>
    <owl:annotatedTarget rdf:datatype="http://www.w3.org/2001/XMLSchema#string">term {i}</owl:annotatedTarget>
    <oboInOwl:hasDbXref rdf:datatype="http://www.w3.org/2001/XMLSchema#string">GOC:bench</oboInOwl:hasDbXref>
</owl:Axiom>
"#
        ));
    }
    doc.push_str("</rdf:RDF>\n");
    doc
}

fn count(doc: &str) -> usize {
    match Decoder::new(doc.as_bytes()) {
        Ok(decoder) => decoder.filter_map(Result::ok).count(),
        Err(_) => 0,
    }
}

fn count_compacted(doc: &str) -> usize {
    match Decoder::new(doc.as_bytes()) {
        Ok(mut decoder) => decoder.compacted().filter_map(Result::ok).count(),
        Err(_) => 0,
    }
}

// ============================================================================
// Benchmark: decode throughput
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for n in [100usize, 1_000, 10_000] {
        let doc = document(n);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("plain", n), &doc, |b, doc| {
            b.iter(|| count(black_box(doc)));
        });
        group.bench_with_input(BenchmarkId::new("compacted", n), &doc, |b, doc| {
            b.iter(|| count_compacted(black_box(doc)));
        });
    }
    group.finish();
}

// ============================================================================
// Benchmark: GO-slim sample
// ============================================================================

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("goslim_sample");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));
    group.bench_function("plain", |b| b.iter(|| count(black_box(SAMPLE))));
    group.finish();
}

criterion_group!(benches, bench_decode, bench_sample);
criterion_main!(benches);
