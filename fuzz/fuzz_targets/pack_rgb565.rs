#![no_main]

// This fuzz test compares every packing kernel against a per-pixel Color565 reference.

use libfuzzer_sys::{arbitrary, fuzz_target};
use rgb565_pack::bench::{portable32, portable64};
use rgb565_pack::{
    pack_rgb565_parallel, pack_rgb565_with_settings, packed_len, AlignmentRequirement,
    ChannelOrder, Rgb565PackSettings, Rgb565ValidationError,
};
use rgb565_pack_common::color_565::Color565;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct PackInput {
    pub data: Vec<u8>,
    pub source_bgr: bool,
    pub target_bgr: bool,
    pub strict: bool,
}

type PackFn = unsafe fn(*const u8, *mut u8, usize);

fuzz_target!(|input: PackInput| {
    let settings = Rgb565PackSettings {
        source_order: order(input.source_bgr),
        target_order: order(input.target_bgr),
        alignment: match input.strict {
            true => AlignmentRequirement::Strict,
            false => AlignmentRequirement::Pixel,
        },
    };

    let data = input.data.as_slice();
    let mut output = vec![0u8; packed_len(data.len())];
    let result = pack_rgb565_with_settings(data, &mut output, settings);

    if data.len() % settings.alignment.required_multiple() != 0 {
        assert!(matches!(
            result,
            Err(Rgb565ValidationError::MalformedInput { .. })
        ));
        assert!(
            pack_rgb565_parallel(data, &mut output, settings).is_err(),
            "parallel accepted malformed input"
        );
        return;
    }
    result.unwrap();

    let expected = reference_pack(data, settings);
    assert_eq!(output, expected, "dispatched kernel doesn't match reference");

    let mut parallel = vec![0u8; expected.len()];
    pack_rgb565_parallel(data, &mut parallel, settings).unwrap();
    assert_eq!(parallel, expected, "parallel driver doesn't match reference");

    let kernels: [(PackFn, &str); 2] = match settings.swaps_outer_channels() {
        true => [
            (portable32::pixel_swapped, "portable32 swapped"),
            (portable64::unroll_8_swapped, "portable64 swapped"),
        ],
        false => [
            (portable32::pixel_straight, "portable32 straight"),
            (portable64::unroll_8_straight, "portable64 straight"),
        ],
    };
    for (kernel, name) in kernels {
        let mut kernel_output = vec![0u8; expected.len()];
        unsafe { kernel(data.as_ptr(), kernel_output.as_mut_ptr(), data.len()) };
        assert_eq!(kernel_output, expected, "{name} doesn't match reference");
    }
});

fn order(bgr: bool) -> ChannelOrder {
    match bgr {
        true => ChannelOrder::Bgr,
        false => ChannelOrder::Rgb,
    }
}

/// Packs each pixel on its own through Color565.
fn reference_pack(data: &[u8], settings: Rgb565PackSettings) -> Vec<u8> {
    data.chunks_exact(3)
        .flat_map(|record| {
            let (r, g, b) = match settings.source_order {
                ChannelOrder::Rgb => (record[0], record[1], record[2]),
                ChannelOrder::Bgr => (record[2], record[1], record[0]),
            };
            Color565::from_channels(r, g, b, settings.target_order).to_be_bytes()
        })
        .collect()
}
