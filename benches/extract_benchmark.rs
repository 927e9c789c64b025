//! Benchmarks for taxpub parsing and extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic TaxPub articles of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic article with the given number of treatments and
/// references.
fn create_test_article(size: usize) -> Vec<u8> {
    let mut content = String::new();

    content.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    content.push_str(
        "<article xmlns:tp=\"http://www.plazi.org/taxpub\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" article-type=\"research-article\">\n",
    );

    // Front matter
    content.push_str("<front><article-meta>\n");
    content.push_str("<article-id pub-id-type=\"doi\">10.3897/zookeys.686.11711</article-id>\n");
    content.push_str("<title-group><article-title>Benchmark article</article-title></title-group>\n");
    content.push_str("<contrib-group>\n");
    for i in 0..size.min(20) {
        content.push_str(&format!(
            "<contrib contrib-type=\"author\"><name><surname>Author{}</surname><given-names>Given</given-names></name><xref ref-type=\"aff\" rid=\"A{}\">{}</xref></contrib>\n",
            i,
            i % 3,
            i % 3
        ));
    }
    content.push_str("</contrib-group>\n");
    for i in 0..3 {
        content.push_str(&format!(
            "<aff id=\"A{}\"><addr-line>Institute {}, City, Country</addr-line></aff>\n",
            i, i
        ));
    }
    content.push_str("<kwd-group><kwd>taxonomy</kwd><kwd>benchmark</kwd></kwd-group>\n");
    content.push_str("</article-meta></front>\n");

    // Treatments with names, material and figures
    content.push_str("<body>\n");
    for i in 0..size {
        content.push_str(&format!(
            "<sec><p><tp:taxon-name><tp:taxon-name-part taxon-name-part-type=\"genus\">Genus{}</tp:taxon-name-part> <tp:taxon-name-part taxon-name-part-type=\"species\">species{}</tp:taxon-name-part></tp:taxon-name></p>\n",
            i % 10,
            i
        ));
        content.push_str("<list list-content=\"occurrences\"><list-item><p>");
        content.push_str(&format!(
            "<named-content content-type=\"dwc:catalogNumber\">CAT{}</named-content>; <named-content content-type=\"dwc:country\">Costa Rica</named-content>",
            i
        ));
        content.push_str("</p></list-item></list>\n");
        content.push_str(&format!(
            "<fig id=\"F{}\"><label>Figure {}.</label><caption><p>Habitus of specimen {}.</p></caption><graphic xlink:href=\"g{}.jpg\" id=\"oo_{}.jpg\"/></fig></sec>\n",
            i, i, i, i, i
        ));
    }
    content.push_str("</body>\n");

    // Reference list
    content.push_str("<back><ref-list>\n");
    for i in 0..size {
        content.push_str(&format!(
            "<ref id=\"B{}\"><element-citation><person-group><name><surname>Smith</surname><given-names>J</given-names></name></person-group><year>2017</year><article-title>Paper {}.</article-title><source>ZooKeys</source><volume>{}</volume><fpage>1</fpage><lpage>10</lpage><pub-id pub-id-type=\"doi\">10.3897/zookeys.{}.1</pub-id></element-citation></ref>\n",
            i, i, i, i
        ));
    }
    content.push_str("</ref-list></back>\n</article>\n");

    content.into_bytes()
}

/// Benchmark XML format detection.
fn bench_format_detection(c: &mut Criterion) {
    let xml_data = create_test_article(1);
    let non_xml_data = b"Not an XML file at all, just random text content";

    c.bench_function("detect_valid_xml", |b| {
        b.iter(|| taxpub::detect_format_from_bytes(black_box(&xml_data)).unwrap());
    });

    c.bench_function("detect_non_xml", |b| {
        b.iter(|| taxpub::detect_format_from_bytes(black_box(non_xml_data)).is_err());
    });
}

/// Benchmark document parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for size in [10, 100, 500].iter() {
        let data = create_test_article(*size);

        group.bench_function(format!("{}_treatments", size), |b| {
            b.iter(|| taxpub::parse_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark full extraction, parallel against sequential.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let doc = taxpub::parse_bytes(&create_test_article(500)).unwrap();

    group.bench_function("article_parallel", |b| {
        let options = taxpub::ExtractOptions::new();
        b.iter(|| taxpub::extract::article(black_box(&doc), &options).unwrap());
    });

    group.bench_function("article_sequential", |b| {
        let options = taxpub::ExtractOptions::new().sequential();
        b.iter(|| taxpub::extract::article(black_box(&doc), &options).unwrap());
    });

    group.bench_function("references", |b| {
        b.iter(|| taxpub::extract::references(black_box(&doc)).unwrap());
    });

    group.finish();
}

/// Benchmark text normalization.
fn bench_clean_text(c: &mut Criterion) {
    let text = "  A new species of\n      Longicoelotes\t(Araneae,\u{00A0}Agelenidae)\u{200B} from China,  ".repeat(20);

    c.bench_function("clean_text", |b| {
        b.iter(|| taxpub::clean_text(black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_parsing,
    bench_extraction,
    bench_clean_text,
);
criterion_main!(benches);
