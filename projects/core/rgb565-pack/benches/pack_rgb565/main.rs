use core::{alloc::Layout, time::Duration};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rgb565_pack::{pack_rgb565, packed_len, ChannelOrder, Rgb565PackSettings};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

mod portable32;
mod portable64;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn bench_dispatched(
    b: &mut criterion::Bencher,
    input: &RawAlloc,
    output: &mut RawAlloc,
    settings: Rgb565PackSettings,
) {
    b.iter(|| unsafe {
        pack_rgb565(
            black_box(input.as_ptr()),
            black_box(output.as_mut_ptr()),
            black_box(input.len()),
            black_box(settings),
        )
    });
}

#[cfg(feature = "multithreaded")]
fn bench_parallel(
    b: &mut criterion::Bencher,
    input: &RawAlloc,
    output: &mut RawAlloc,
    settings: Rgb565PackSettings,
) {
    b.iter(|| {
        rgb565_pack::pack_rgb565_parallel(
            black_box(input.as_slice()),
            black_box(output.as_mut_slice()),
            black_box(settings),
        )
        .unwrap()
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RGB565 Pack");
    let size = 320 * 240 * 3 * 32; // 32 frames of a 320x240 RGB888 panel.
    let mut input = allocate_align_64(size);
    let mut output = allocate_align_64(packed_len(size));
    let important_benches_only = false; // Set to false to enable extra benches, unrolls, etc.

    for (x, byte) in input.as_mut_slice().iter_mut().enumerate() {
        *byte = x as u8;
    }

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    for (name, settings) in [
        (
            "dispatch rgb->rgb",
            Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Rgb),
        ),
        (
            "dispatch rgb->bgr",
            Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Bgr),
        ),
    ] {
        group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
            bench_dispatched(b, &input, &mut output, settings)
        });
    }

    #[cfg(feature = "multithreaded")]
    group.bench_with_input(BenchmarkId::new("parallel rgb->bgr", size), &size, |b, _| {
        bench_parallel(
            b,
            &input,
            &mut output,
            Rgb565PackSettings::new(ChannelOrder::Rgb, ChannelOrder::Bgr),
        )
    });

    portable32::run_benchmarks(
        &mut group,
        &input,
        &mut output,
        size,
        important_benches_only,
    );
    portable64::run_benchmarks(
        &mut group,
        &input,
        &mut output,
        size,
        important_benches_only,
    );

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
