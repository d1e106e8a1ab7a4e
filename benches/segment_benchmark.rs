use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undocx::build_sentence_placeholders;

fn mixed_prose(paragraphs: usize) -> String {
    let sample = "Rust is a systems language. It compiles ahead of time! \
                  短句。这是一个足够长的中文句子，用来测试分段！Is it fast? Yes; very. ";
    sample.repeat(paragraphs)
}

fn benchmark_segmentation(c: &mut Criterion) {
    let short = mixed_prose(1);
    let medium = mixed_prose(50);
    let long = mixed_prose(2000);

    let mut group = c.benchmark_group("sentence_placeholders");
    group.bench_function("short_paragraph", |b| {
        b.iter(|| build_sentence_placeholders(black_box(&short)))
    });
    group.bench_function("medium_document", |b| {
        b.iter(|| build_sentence_placeholders(black_box(&medium)))
    });
    group.bench_function("long_document", |b| {
        b.iter(|| build_sentence_placeholders(black_box(&long)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_segmentation);
criterion_main!(benches);
