use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emoji_core::candidates::{match_suggestions, DEFAULT_MAX_SUGGESTIONS};
use emoji_core::dict::{Dictionary, SymbolDictionary, SymbolEntry};
use emoji_core::fragment::extract;
use emoji_core::unicode::OffsetEncoding;

fn large_dict() -> SymbolDictionary {
    let base = SymbolDictionary::default_emoji();
    let entries = (0..20).flat_map(|round| {
        base.entries()
            .iter()
            .map(move |e| SymbolEntry::new(format!("{}_{round}", e.keyword), e.value.clone()))
    });
    SymbolDictionary::from_entries(entries)
}

fn bench_match(c: &mut Criterion) {
    let small = SymbolDictionary::default_emoji();
    let large = large_dict();
    let mut group = c.benchmark_group("match_suggestions");
    for term in ["s", "smile", "heart", "zzz"] {
        group.bench_with_input(BenchmarkId::new("default", term), term, |b, term| {
            b.iter(|| match_suggestions(term, small.entries(), DEFAULT_MAX_SUGGESTIONS))
        });
        group.bench_with_input(BenchmarkId::new("x20", term), term, |b, term| {
            b.iter(|| match_suggestions(term, large.entries(), DEFAULT_MAX_SUGGESTIONS))
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut buffer = "lorem ipsum dolor sit amet ".repeat(400);
    buffer.push_str(":smi");
    let caret = OffsetEncoding::Utf16.len_of(&buffer);
    let mut group = c.benchmark_group("extract");
    for enc in [
        OffsetEncoding::Utf8,
        OffsetEncoding::Utf16,
        OffsetEncoding::Utf32,
    ] {
        group.bench_function(enc.name(), |b| b.iter(|| extract(&buffer, caret, enc)));
    }
    group.finish();
}

criterion_group!(benches, bench_match, bench_extract);
criterion_main!(benches);
