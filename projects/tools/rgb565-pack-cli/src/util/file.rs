use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use log::debug;
use rgb565_pack_api::{packed_len, Rgb565PackBuilder};
use std::fs;
use std::path::Path;

/// Packs one raw pixel file into another.
///
/// The input is memory-mapped; the output is preallocated to its final size and written
/// through a read-write mapping. Returns the number of input bytes consumed.
///
/// The input length is validated before the output file is created, so a malformed
/// input leaves nothing behind. An output path that resolves to the input file is refused.
pub fn convert_file(
    input_path: &Path,
    output_path: &Path,
    builder: &Rgb565PackBuilder,
) -> Result<u64, CliError> {
    ensure_distinct_paths(input_path, output_path)?;
    let input_handle = ReadOnlyFileHandle::open(input_path).map_err(mmap_error)?;
    let input_size = input_handle.size().map_err(mmap_error)? as usize;
    builder.validate_input_len(input_size)?;

    let output_size = packed_len(input_size);
    debug!(
        "{} ({input_size} bytes) -> {} ({output_size} bytes)",
        input_path.display(),
        output_path.display()
    );

    // Zero-length mappings are not allowed; an empty frame packs to an empty file.
    if input_size == 0 {
        fs::File::create(output_path)?;
        return Ok(0);
    }

    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size).map_err(mmap_error)?;
    let output_handle = ReadWriteFileHandle::create_preallocated(output_path, output_size as i64)
        .map_err(mmap_error)?;
    let mut output_mapping =
        ReadWriteMmap::new(&output_handle, 0, output_size).map_err(mmap_error)?;

    builder.pack_slice(input_mapping.as_slice(), output_mapping.as_mut_slice())?;
    Ok(input_size as u64)
}

/// Fails if `output_path` names the same file as `input_path`.
///
/// Creating the output truncates it, which would destroy a mapped input.
pub fn ensure_distinct_paths(input_path: &Path, output_path: &Path) -> Result<(), CliError> {
    let input = fs::canonicalize(input_path)?;
    match fs::canonicalize(output_path) {
        Ok(output) if output == input => Err(CliError::OutputOverwritesInput(output)),
        _ => Ok(()),
    }
}

fn mmap_error(e: impl core::fmt::Display) -> CliError {
    CliError::MmapError(e.to_string())
}
