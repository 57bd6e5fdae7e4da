//! Model a color with gamma encoded RGB components.

use crate::{
    color::{Component, HasSpace, Space},
    math::{transform, transform_3x3, Transform, Vector},
    models::YCbCr,
};

ycbcr_macros::gen_model! {
    /// A color specified with red, green and blue components in `0.0..=1.0`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl Rgb {
    /// Convert this color to full range BT.601 YCbCr.
    pub fn to_ycbcr(&self) -> YCbCr {
        #[rustfmt::skip]
        const TO_YCBCR: Transform = transform_3x3(
            0.299, -0.168736,  0.5,
            0.587, -0.331264, -0.418688,
            0.114,  0.5,      -0.081312,
        );

        transform(&TO_YCBCR, Vector::new(0.0, 0.5, 0.5), self.to_components()).into()
    }
}

impl From<YCbCr> for Rgb {
    fn from(value: YCbCr) -> Self {
        value.to_rgb()
    }
}
