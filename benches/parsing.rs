//! Performance benchmarks for fixture-handbook
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use fixture_handbook::{parse, render_document, to_html, HtmlWriter, Registry};

mod samples {
    pub const TINY: &str = "Değer $x+1$ olur.";

    pub const SMALL: &str = r#"## Başlık

Metin ve $F_c$ ile $k$ katsayısı.

* Birinci
* İkinci
* Üçüncü

![Şema](etiket)
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Bölüm Başlığı

Bu paragraf $\delta = \frac{F}{k}$ gibi satır içi formüller ve düz metin içerir.

* **Hassasiyet:** Parçayı tolerans dahilinde konumlandırma.
* **Rijitlik:** Kuvvetlere karşı deformasyon göstermeme.

$$\mathbf{F}_{\mathbf{c}} \geq \mathbf{k} \cdot \mathbf{F} / \mu$$

### Alt Başlık

Daha uzun bir paragraf, 5$ gibi tekil işaretler ve < > & karakterleri.

"#;
        section.repeat(200)
    }

    /// Dense `$` markers
    pub fn pathological_dollars() -> String {
        "$ a ".repeat(5000)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| b.iter(|| to_html(black_box(samples::TINY))));

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| b.iter(|| to_html(black_box(samples::SMALL))));

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| b.iter(|| to_html(black_box(&large))));
    group.bench_function("large_parse_only", |b| b.iter(|| parse(black_box(&large))));

    group.finish();
}

fn bench_handbook(c: &mut Criterion) {
    let mut group = c.benchmark_group("handbook");
    let registry = Registry::builtin();

    for section in registry.sections() {
        group.throughput(Throughput::Bytes(section.content.len() as u64));
        group.bench_function(section.id.as_str(), |b| {
            b.iter(|| to_html(black_box(&section.content)))
        });
    }

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = "Fikstür tasarımı özel karakter içermeyen düz metin. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(plain.len());
            fixture_handbook::escape::escape_text_into(&mut out, black_box(&plain));
            out
        })
    });

    let html_heavy = "<script>alert('x')</script> & F < k > 0 ".repeat(100);
    group.throughput(Throughput::Bytes(html_heavy.len() as u64));
    group.bench_function("html_heavy", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(html_heavy.len() * 2);
            fixture_handbook::escape::escape_text_into(&mut out, black_box(&html_heavy));
            out
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let dollars = samples::pathological_dollars();
    group.throughput(Throughput::Bytes(dollars.len() as u64));
    group.bench_function("dense_dollars", |b| {
        b.iter(|| to_html(black_box(&dollars)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::large();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| b.iter(|| to_html(black_box(&input))));

    group.bench_function("with_reuse", |b| {
        let doc = parse(&input);
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        b.iter(|| {
            writer.clear();
            render_document(black_box(&doc), &mut writer);
            black_box(writer.len());
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_handbook,
    bench_escaping,
    bench_pathological,
    bench_buffer_reuse
);
criterion_main!(benches);
