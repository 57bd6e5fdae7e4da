//! ycbcr converts colors between RGB and full range ITU-R BT.601 YCbCr, the
//! form used by JPEG/JFIF.
//!
//! ```rust
//! use ycbcr::{Rgb8, YCbCr8};
//! let ycbcr = Rgb8::new(0, 0, 3).to_ycbcr();
//! assert_eq!(ycbcr, YCbCr8::new(0, 130, 128));
//! assert_eq!(ycbcr.to_rgb(), Rgb8::new(0, 0, 3));
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
pub mod models;
mod pixel;


pub use color::{Clamped, Color, Component, Components, HasSpace, Space};
pub use convert::{rgb_to_ycbcr, ycbcr_to_rgb};
pub use error::{Error, Result};
pub use pixel::{parse_channels, Rgb8, YCbCr8};
