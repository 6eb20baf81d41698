//! Channel order tags.
//!
//! A [`ChannelOrder`] describes two independent things depending on where it is used:
//!
//! - **Source order**: how the 3 bytes of an input pixel record map to red, green and blue.
//!   [`ChannelOrder::Rgb`] reads `R, G, B`; [`ChannelOrder::Bgr`] reads `B, G, R`.
//! - **Target order**: which channel lands in the top 5-bit field of the packed sample.
//!   [`ChannelOrder::Rgb`] gives `R(15-11) | G(10-5) | B(4-0)`;
//!   [`ChannelOrder::Bgr`] gives `B(15-11) | G(10-5) | R(4-0)`.
//!
//! Tags arrive from adapters as text (`"rgb"`, `"bgr"`), and parse case-insensitively.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Order of the red, green and blue channels within a pixel.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum ChannelOrder {
    /// Red first, blue last.
    Rgb = 0,
    /// Blue first, red last.
    Bgr = 1,
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self::Rgb
    }
}

impl ChannelOrder {
    /// Returns the lowercase tag for this order, as accepted by [`ChannelOrder::from_tag`].
    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelOrder::Rgb => "rgb",
            ChannelOrder::Bgr => "bgr",
        }
    }

    /// Parses a textual tag (`"rgb"` or `"bgr"`, any ASCII case).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidChannelOrderError`] for any other tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgb565_pack_common::channel_order::ChannelOrder;
    ///
    /// assert_eq!(ChannelOrder::from_tag("BGR").unwrap(), ChannelOrder::Bgr);
    /// assert!(ChannelOrder::from_tag("rgba").is_err());
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, InvalidChannelOrderError> {
        if tag.eq_ignore_ascii_case("rgb") {
            Ok(ChannelOrder::Rgb)
        } else if tag.eq_ignore_ascii_case("bgr") {
            Ok(ChannelOrder::Bgr)
        } else {
            Err(InvalidChannelOrderError(tag.to_string()))
        }
    }
}

impl FromStr for ChannelOrder {
    type Err = InvalidChannelOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl TryFrom<&str> for ChannelOrder {
    type Error = InvalidChannelOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_tag(value)
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A channel order tag was neither `rgb` nor `bgr`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid channel order: '{0}'. Valid channel orders are: rgb, bgr")]
pub struct InvalidChannelOrderError(pub String);
