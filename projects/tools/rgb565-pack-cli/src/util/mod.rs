mod common;
mod file;
mod throughput;

pub use common::*;
pub use file::*;
pub use throughput::*;
