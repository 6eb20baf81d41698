#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub(crate) mod transform;

#[cfg(feature = "bench")]
pub mod bench;

// Re-export main types and functions from transform module
pub use transform::*;

// Re-export ChannelOrder for convenience
pub use rgb565_pack_common::channel_order::ChannelOrder;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
