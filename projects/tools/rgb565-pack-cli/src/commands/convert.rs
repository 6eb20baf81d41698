use crate::util::{convert_file, pack_builder_from_flags, Throughput};
use argh::FromArgs;
use bytesize::ByteSize;
use rgb565_pack_api::ChannelOrder;
use std::{path::PathBuf, time::Instant};

#[derive(FromArgs, Debug)]
/// Pack a single raw RGB888/BGR888 file into RGB565/BGR565
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input file path
    #[argh(option)]
    pub input: PathBuf,

    /// output file path
    #[argh(option)]
    pub output: PathBuf,

    /// channel order of the input pixels: rgb, bgr [default: rgb]
    #[argh(option)]
    pub source: Option<ChannelOrder>,

    /// channel layout of the output samples: rgb, bgr [default: rgb]
    #[argh(option)]
    pub target: Option<ChannelOrder>,

    /// one channel order for both input and output: rgb, bgr
    #[argh(option)]
    pub colorspace: Option<ChannelOrder>,

    /// reject inputs that are not a multiple of 8 pixels
    #[argh(switch)]
    pub strict: bool,
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<(), Box<dyn std::error::Error>> {
    let builder = pack_builder_from_flags(cmd.source, cmd.target, cmd.colorspace, cmd.strict)?;
    let start = Instant::now();

    if let Some(parent) = cmd.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let bytes = convert_file(&cmd.input, &cmd.output, &builder)
        .map_err(|e| e.in_file(cmd.input.clone()))?;

    let elapsed = start.elapsed();
    println!(
        "Packed {} in {elapsed:.2?} ({})",
        ByteSize(bytes),
        Throughput::from_elapsed(bytes, elapsed)
    );
    Ok(())
}
