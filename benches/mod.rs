use criterion::{criterion_group, criterion_main};

mod shell;

criterion_group!(
    benches,
    shell::bench_input_bulk,
    shell::bench_input_bytewise,
    shell::bench_dispatch_quoted,
    shell::bench_lookup_last_static
);
criterion_main!(benches);
