//! Model a color in the full range ITU-R BT.601 YCbCr color space.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform, Vector},
    models::Rgb,
};

ycbcr_macros::gen_model! {
    /// A color specified with luma and two chroma components, all in
    /// `0.0..=1.0`. Neutral colors have both chroma components at 0.5.
    pub struct YCbCr {
        /// The luma component of the color.
        y: Component,
        /// The blue-difference chroma component of the color.
        cb: Component,
        /// The red-difference chroma component of the color.
        cr: Component,
    }
}

impl HasSpace for YCbCr {
    const SPACE: Space = Space::YCbCr;
}

impl YCbCr {
    /// Convert this color to RGB. The result is not clamped; colors outside
    /// of the RGB gamut have components outside of `0.0..=1.0`.
    pub fn to_rgb(&self) -> Rgb {
        #[rustfmt::skip]
        const TO_RGB: Transform = transform_3x3(
            1.0,    1.0,      1.0,
            0.0,   -0.344136, 1.772,
            1.402, -0.714136, 0.0,
        );

        // Removes the 0.5 chroma offset.
        const OFFSET: Vector = Vector::new(-0.701, 0.529136, -0.886);

        transform(&TO_RGB, OFFSET, self.to_components()).into()
    }
}

impl From<Rgb> for YCbCr {
    fn from(value: Rgb) -> Self {
        value.to_ycbcr()
    }
}
