//! Error types for the ycbcr crate.

use std::num::ParseIntError;

use thiserror::Error;

use crate::color::Space;

/// Result type alias for ycbcr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the crate. The conversions themselves are
/// total.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A channel triple did not contain exactly three values.
    #[error("expected 3 channels, found {found}")]
    ChannelCount {
        /// Number of values that were found.
        found: usize,
    },

    /// A channel value is not an integer in `0..=255`.
    #[error("invalid channel value {value:?}")]
    InvalidChannel {
        /// The offending text.
        value: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },

    /// A component could not be quantized because it is NaN.
    #[error("component {index} of {space:?} color is not a number")]
    NotANumber {
        /// Index of the component.
        index: usize,
        /// Space of the color being quantized.
        space: Space,
    },
}
