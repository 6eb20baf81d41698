use criterion::{black_box, BenchmarkId};
use rgb565_pack::bench::portable32::*;
use safe_allocator_api::RawAlloc;

fn bench_pixel_straight(b: &mut criterion::Bencher, input: &RawAlloc, output: &mut RawAlloc) {
    b.iter(|| unsafe {
        pixel_straight(
            black_box(input.as_ptr()),
            black_box(output.as_mut_ptr()),
            black_box(input.len()),
        )
    });
}

fn bench_pixel_swapped(b: &mut criterion::Bencher, input: &RawAlloc, output: &mut RawAlloc) {
    b.iter(|| unsafe {
        pixel_swapped(
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
        BenchmarkId::new("portable32 pixel straight", size),
        &size,
        |b, _| bench_pixel_straight(b, input, output),
    );

    if !important_benches_only {
        group.bench_with_input(
            BenchmarkId::new("portable32 pixel swapped", size),
            &size,
            |b, _| bench_pixel_swapped(b, input, output),
        );
    }
}
