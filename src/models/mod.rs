//! Floating point color models. Each model is bound to a single [`Space`]
//! and can be converted to and from a generic [`Color`].
//!
//! [`Space`]: crate::Space

use crate::color::Color;

mod rgb;
mod ycbcr;

pub use rgb::Rgb;
pub use ycbcr::YCbCr;

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`].
    fn to_color(&self) -> Color;

    /// Convert a generic [`Color`] to a model.
    fn to_model(color: &Color) -> Self;
}
