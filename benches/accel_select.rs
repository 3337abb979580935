//! Benchmark for acceleration strategy selection.
//!
//! Covers each decision path:
//! 1. red tape (no stops)
//! 2. vermicelli / caseless vermicelli
//! 3. double-byte strategies
//! 4. shufti and truffle fallbacks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stopscan::{
    build_accel, AccelInfo, ByteSet, BytePairSet, DoubleShuftiMasks, MaskBuilder, ShuftiMasks,
    TruffleMasks,
};

/// Shufti succeeds for up to 8 bytes.
struct BenchMasks;

impl MaskBuilder for BenchMasks {
    fn shufti_masks(&self, stops: &ByteSet) -> Option<ShuftiMasks> {
        (stops.count() <= 8).then(ShuftiMasks::default)
    }

    fn double_shufti_masks(&self, _: &ByteSet, _: &BytePairSet) -> DoubleShuftiMasks {
        DoubleShuftiMasks::default()
    }

    fn truffle_masks(&self, _: &ByteSet) -> TruffleMasks {
        TruffleMasks::default()
    }
}

fn cases() -> Vec<(&'static str, AccelInfo)> {
    let set = |b: &[u8]| b.iter().copied().collect::<ByteSet>();
    let pairs = |p: &[(u8, u8)]| p.iter().copied().collect::<BytePairSet>();

    vec![
        ("red_tape", AccelInfo::new()),
        ("verm", AccelInfo::new().with_single(set(b"\n"), 0)),
        ("verm_nocase", AccelInfo::new().with_single(set(b"Ss"), 0)),
        (
            "dverm",
            AccelInfo::new()
                .with_single(set(b"\r"), 0)
                .with_double(ByteSet::new(), pairs(&[(b'\r', b'\n')]), 0),
        ),
        (
            "dshufti",
            AccelInfo::new().with_single(set(b"abc"), 0).with_double(
                set(b"z"),
                pairs(&[(b'a', b'b'), (b'c', b'd'), (b'e', b'f')]),
                1,
            ),
        ),
        ("shufti", AccelInfo::new().with_single(set(b"<>&\"'"), 0)),
        (
            "truffle",
            AccelInfo::new().with_single(ByteSet::from_range(0x80..=0xFF), 0),
        ),
        ("none", AccelInfo::new().with_single(ByteSet::full(), 0)),
    ]
}

fn bench_build_accel(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_accel");

    for (name, info) in cases() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &info, |b, info| {
            b.iter(|| build_accel(black_box(info), &BenchMasks))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_accel);
criterion_main!(benches);
