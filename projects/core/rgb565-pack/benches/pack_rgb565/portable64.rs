use criterion::{black_box, BenchmarkId};
use rgb565_pack::bench::portable64::*;
use safe_allocator_api::RawAlloc;

fn bench_unroll_8_straight(b: &mut criterion::Bencher, input: &RawAlloc, output: &mut RawAlloc) {
    b.iter(|| unsafe {
        unroll_8_straight(
            black_box(input.as_ptr()),
            black_box(output.as_mut_ptr()),
            black_box(input.len()),
        )
    });
}

fn bench_unroll_8_swapped(b: &mut criterion::Bencher, input: &RawAlloc, output: &mut RawAlloc) {
    b.iter(|| unsafe {
        unroll_8_swapped(
            black_box(input.as_ptr()),
            black_box(output.as_mut_ptr()),
            black_box(input.len()),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    input: &RawAlloc,
    output: &mut RawAlloc,
    size: usize,
    important_benches_only: bool,
) {
    group.bench_with_input(
        BenchmarkId::new("portable64 unroll-8 straight", size),
        &size,
        |b, _| bench_unroll_8_straight(b, input, output),
    );

    if !important_benches_only {
        group.bench_with_input(
            BenchmarkId::new("portable64 unroll-8 swapped", size),
            &size,
            |b, _| bench_unroll_8_swapped(b, input, output),
        );
    }
}
