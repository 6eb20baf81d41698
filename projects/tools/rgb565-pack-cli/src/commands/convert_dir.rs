use crate::error::CliError;
use crate::util::{
    canonicalize_cli_path, convert_file, find_all_files, handle_process_entry_error,
    pack_builder_from_flags, Throughput,
};
use argh::FromArgs;
use bytesize::ByteSize;
use log::info;
use rgb565_pack_api::{ChannelOrder, Rgb565PackBuilder};
use std::{
    fs::DirEntry,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
    time::Instant,
};

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

#[derive(FromArgs, Debug)]
/// Pack every file under a directory, mirroring the tree into the output directory
#[argh(subcommand, name = "convert-dir")]
pub struct ConvertDirCmd {
    /// input directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
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

pub fn handle_convert_dir_command(cmd: ConvertDirCmd) -> Result<(), Box<dyn std::error::Error>> {
    let builder = pack_builder_from_flags(cmd.source, cmd.target, cmd.colorspace, cmd.strict)?;
    info!("Packing with {:?}", builder.build());

    // Both paths are canonical; converting in place would truncate every input.
    if cmd.input == cmd.output {
        return Err(CliError::OutputOverwritesInput(cmd.output).into());
    }

    let mut entries = Vec::new();
    find_all_files(&cmd.input, &mut entries)?;

    if entries.is_empty() {
        println!("No files found in input directory.");
        return Ok(());
    }

    println!("Found {} files to convert", entries.len());

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let failures = AtomicUsize::new(0);

    let process = |entry: &DirEntry| {
        let result = process_dir_entry(entry, &cmd.input, &cmd.output, &builder);
        if let Ok(bytes) = &result {
            bytes_processed.fetch_add(*bytes, Ordering::Relaxed);
        }
        if !handle_process_entry_error(result) {
            failures.fetch_add(1, Ordering::Relaxed);
        }
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let elapsed = start.elapsed();
    let total_bytes = bytes_processed.load(Ordering::Relaxed);
    println!("Convert completed in {elapsed:.2?}");
    println!("Data processed: {}", ByteSize(total_bytes));
    println!("Throughput: {}", Throughput::from_elapsed(total_bytes, elapsed));

    let failed = failures.load(Ordering::Relaxed);
    if failed > 0 {
        return Err(CliError::FilesFailed {
            failed,
            total: entries.len(),
        }
        .into());
    }

    Ok(())
}

/// Packs one directory entry into the mirrored location under `output_dir`.
pub fn process_dir_entry(
    entry: &DirEntry,
    input_dir: &Path,
    output_dir: &Path,
    builder: &Rgb565PackBuilder,
) -> Result<u64, CliError> {
    let path = entry.path();
    let target_path = match path.strip_prefix(input_dir) {
        Ok(relative) => output_dir.join(relative),
        Err(_) => output_dir.join(entry.file_name()),
    };

    if let Some(parent) = target_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    convert_file(&path, &target_path, builder).map_err(|e| e.in_file(path))
}
