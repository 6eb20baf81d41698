use crate::error::CliError;
use rgb565_pack_api::{AlignmentRequirement, ChannelOrder, Rgb565PackBuilder};
use std::fs;
use std::path::*;

/// Recursively visits directories and collects entries.
///
/// Directories or entries that cannot be read are skipped; the traversal continues
/// with the remaining entries.
///
/// # Arguments
///
/// * `dir`: The directory to start the traversal from.
/// * `entries`: A mutable reference to the vector of entries to populate.
pub fn find_all_files(dir: &Path, entries: &mut Vec<fs::DirEntry>) -> std::io::Result<()> {
    // Gracefully handle cases where the directory cannot be read
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(entry);
        }
    }
    Ok(())
}

/// Prints a failed file to stderr. Returns whether the entry succeeded.
pub fn handle_process_entry_error<T>(result: Result<T, CliError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}

/// Canonicalizes a CLI directory argument, creating the directory if it doesn't exist.
pub fn canonicalize_cli_path(value: &str) -> Result<PathBuf, String> {
    let path = Path::new(value);

    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    fs::canonicalize(path).map_err(|e| format!("Invalid path: {e}"))
}

/// Builds the packer configuration from the shared command line flags.
///
/// `colorspace` is the single-tag form and excludes `source` and `target`.
pub fn pack_builder_from_flags(
    source: Option<ChannelOrder>,
    target: Option<ChannelOrder>,
    colorspace: Option<ChannelOrder>,
    strict: bool,
) -> Result<Rgb565PackBuilder, CliError> {
    let mut builder = Rgb565PackBuilder::new();
    builder = match (colorspace, source, target) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            return Err(CliError::ConflictingChannelOrders)
        }
        (Some(colorspace), None, None) => builder.colorspace(colorspace),
        (None, source, target) => builder
            .source_order(source.unwrap_or_default())
            .target_order(target.unwrap_or_default()),
    };

    if strict {
        builder = builder.alignment(AlignmentRequirement::Strict);
    }

    Ok(builder)
}
