pub mod convert;
pub mod convert_dir;
