//! 8-bit channel triples, the representation colors have in images and on
//! the command line.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A full range BT.601 YCbCr color with 8-bit channels. Neutral chroma is
/// 128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YCbCr8 {
    /// Luma channel.
    pub y: u8,
    /// Blue-difference chroma channel.
    pub cb: u8,
    /// Red-difference chroma channel.
    pub cr: u8,
}

impl Rgb8 {
    /// Create a new color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl YCbCr8 {
    /// Create a new color from its channels.
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }

    /// The channels as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.y, self.cb, self.cr]
    }
}

impl Default for YCbCr8 {
    /// Black.
    fn default() -> Self {
        Self::new(0, 128, 128)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for YCbCr8 {
    fn from([y, cb, cr]: [u8; 3]) -> Self {
        Self::new(y, cb, cr)
    }
}

/// Parse three channel values separated by commas and/or whitespace.
pub fn parse_channels(s: &str) -> Result<[u8; 3]> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<u8>().map_err(|source| Error::InvalidChannel {
                value: v.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    <[u8; 3]>::try_from(values.as_slice()).map_err(|_| Error::ChannelCount {
        found: values.len(),
    })
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_channels(s).map(Self::from)
    }
}

impl FromStr for YCbCr8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_channels(s).map(Self::from)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for YCbCr8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.y, self.cb, self.cr)
    }
}
