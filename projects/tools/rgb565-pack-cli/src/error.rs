use rgb565_pack_api::Rgb565Error;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    MmapError(String),
    #[error(transparent)]
    Pack(#[from] Rgb565Error),
    #[error("--colorspace cannot be combined with --source or --target")]
    ConflictingChannelOrders,
    #[error("{}: output would overwrite the input", .0.display())]
    OutputOverwritesInput(PathBuf),
    #[error("{} of {} files failed", .failed, .total)]
    FilesFailed { failed: usize, total: usize },
    #[error("{}: {}", .path.display(), .source)]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Attaches the path of the file being processed.
    pub fn in_file(self, path: PathBuf) -> Self {
        CliError::InFile {
            path,
            source: Box::new(self),
        }
    }
}
