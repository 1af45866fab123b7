use canonical::{tokenize, Language};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const SNIPPET: &str = "\
def area(w, h):
    \"\"\"Rectangle area.\"\"\"
    return w * h  # simple
";

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for copies in [1usize, 16, 128, 1024].iter() {
        let text = SNIPPET.repeat(*copies);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("python_x{copies}"), |b| {
            b.iter(|| tokenize(black_box(&text), black_box(Language::Python)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
