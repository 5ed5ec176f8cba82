use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use itty_codec::{decode, Encoder, MAX_RAW_SIZE};

fn markdown(len: usize) -> String {
    let para = "## Section\n\nLorem ipsum dolor sit amet, consectetur adipiscing elit. \
                Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.\n\n";
    let mut doc = String::with_capacity(len);
    while doc.len() + para.len() <= len {
        doc.push_str(para);
    }
    doc
}

fn encode_decode(c: &mut Criterion) {
    let encoder = Encoder::default();
    let mut group = c.benchmark_group("codec");
    for size in [1024, 4096, MAX_RAW_SIZE] {
        let doc = markdown(size);
        let url = encoder.encode(&doc, "Bench").unwrap().url;
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &doc, |b, doc| {
            b.iter(|| encoder.encode(black_box(doc), "Bench").unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &url, |b, url| {
            b.iter(|| decode(black_box(url)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, encode_decode);
criterion_main!(benches);
