use criterion::{criterion_group, criterion_main, Criterion};
use hangeul_jamo::{compose_hcj, compose_jamo, decompose_hcj, decompose_jamo};

mod group;

group!(
    bench_decompose_hcj,
    "decompose",
    "hcj",
    str::to_owned,
    decompose_hcj
);

group!(
    bench_decompose_jamo,
    "decompose",
    "jamo",
    str::to_owned,
    decompose_jamo
);

group!(bench_compose_hcj, "compose", "hcj", decompose_hcj, compose_hcj);

group!(
    bench_compose_jamo,
    "compose",
    "jamo",
    decompose_jamo,
    compose_jamo
);

criterion_group!(
    benches,
    bench_decompose_hcj,
    bench_decompose_jamo,
    bench_compose_hcj,
    bench_compose_jamo
);
criterion_main!(benches);
