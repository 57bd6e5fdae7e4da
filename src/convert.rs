//! Conversions between RGB and full range ITU-R BT.601 YCbCr.
//!
//! There are two paths:
//!
//! - 8-bit channels go through 16.16 fixed-point arithmetic, rounding half up
//!   on the way to YCbCr. This is bit exact with what JPEG codecs commonly
//!   produce.
//! - [`Color`] and the float [`models`](crate::models) apply the BT.601
//!   matrices directly. Quantizing those results agrees with the fixed-point
//!   path to within one code value.
//!
//! ```rust
//! use ycbcr::{rgb_to_ycbcr, Rgb8};
//! assert_eq!(rgb_to_ycbcr(0, 0, 3), (0, 130, 128));
//! assert_eq!(Rgb8::new(0, 0, 3).to_ycbcr().to_string(), "0 130 128");
//! ```

use crate::{
    color::{Clamped, Color, Space},
    math::{clamped_flags, fixed_to_u16, fixed_to_u8},
    models::{Model, Rgb, YCbCr},
    pixel::{Rgb8, YCbCr8},
};

/// Rounding bias for luma.
const HALF: i32 = 1 << 15;

/// Chroma offset of 128 plus the rounding bias.
const CHROMA_BIAS: i32 = 257 << 15;

/// Convert an RGB triple to a Y'CbCr triple.
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let r = i32::from(r);
    let g = i32::from(g);
    let b = i32::from(b);

    // The luma coefficients sum to 65536 so the result never leaves 0..=255.
    let y = (19595 * r + 38470 * g + 7471 * b + HALF) >> 16;
    let (cb, _) = fixed_to_u8(-11056 * r - 21712 * g + 32768 * b + CHROMA_BIAS);
    let (cr, _) = fixed_to_u8(32768 * r - 27440 * g - 5328 * b + CHROMA_BIAS);

    (y as u8, cb, cr)
}

/// Raw fixed-point RGB values for a YCbCr triple, before clamping.
fn ycbcr_to_fixed(y: u8, cb: u8, cr: u8) -> [i32; 3] {
    // 0x10101 spreads y over 24 bits so that 255 maps to 0xffffff.
    let y = i32::from(y) * 0x10101;
    let cb = i32::from(cb) - 128;
    let cr = i32::from(cr) - 128;

    [
        y + 91881 * cr,
        y - 22554 * cb - 46802 * cr,
        y + 116130 * cb,
    ]
}

/// Convert a Y'CbCr triple to an RGB triple. Colors outside of the RGB gamut
/// are clamped.
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> (u8, u8, u8) {
    let [r, g, b] = ycbcr_to_fixed(y, cb, cr).map(|v| fixed_to_u8(v).0);
    (r, g, b)
}

impl Rgb8 {
    /// Convert this color to YCbCr using fixed-point arithmetic.
    pub fn to_ycbcr(self) -> YCbCr8 {
        let (y, cb, cr) = rgb_to_ycbcr(self.r, self.g, self.b);
        YCbCr8::new(y, cb, cr)
    }

    /// Convert this color to YCbCr through the floating point model.
    pub fn to_ycbcr_reference(self) -> YCbCr8 {
        let color = Color::from_u8(Space::Rgb, self.to_array()).to_space(Space::YCbCr);
        let (channels, _) = quantize(color);
        YCbCr8::from(channels)
    }
}

impl YCbCr8 {
    /// Convert this color to RGB using fixed-point arithmetic.
    pub fn to_rgb(self) -> Rgb8 {
        self.to_rgb_clamped().0
    }

    /// Convert this color to RGB, also returning which channels were clamped
    /// because the color is outside of the RGB gamut.
    pub fn to_rgb_clamped(self) -> (Rgb8, Clamped) {
        let fixed = ycbcr_to_fixed(self.y, self.cb, self.cr);
        let [(r, r_clamped), (g, g_clamped), (b, b_clamped)] = fixed.map(fixed_to_u8);
        let clamped = clamped_flags([r_clamped, g_clamped, b_clamped]);

        if !clamped.is_empty() {
            tracing::debug!(ycbcr = %self, ?clamped, "color is outside of the RGB gamut");
        }

        (Rgb8::new(r, g, b), clamped)
    }

    /// Convert this color to RGB through the floating point model. Out of
    /// gamut colors are clamped.
    pub fn to_rgb_reference(self) -> Rgb8 {
        let color = Color::from_u8(Space::YCbCr, self.to_array()).to_space(Space::Rgb);
        let (channels, _) = quantize(color);
        Rgb8::from(channels)
    }

    /// Convert this color to RGB with 16 bits per channel. Keeps 8 bits of
    /// the fixed-point fraction that [`YCbCr8::to_rgb`] drops.
    pub fn to_rgb16(self) -> [u16; 3] {
        ycbcr_to_fixed(self.y, self.cb, self.cr).map(|v| fixed_to_u16(v).0)
    }

    /// Convert an RGB color with 16 bits per channel. Only the high byte of
    /// each channel is used.
    pub fn from_rgb16(rgb: [u16; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| (c >> 8) as u8);
        Rgb8::new(r, g, b).to_ycbcr()
    }
}

impl From<Rgb8> for YCbCr8 {
    fn from(value: Rgb8) -> Self {
        value.to_ycbcr()
    }
}

impl From<YCbCr8> for Rgb8 {
    fn from(value: YCbCr8) -> Self {
        value.to_rgb()
    }
}

/// Quantize a color produced by the float models. Components derived from
/// 8-bit input are never NaN.
fn quantize(color: Color) -> ([u8; 3], Clamped) {
    color
        .to_u8()
        .unwrap_or(([0; 3], Clamped::all()))
}

impl Color {
    /// Convert this color from its current color space to the specified
    /// color space.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        tracing::trace!(from = ?self.space, to = ?space, "converting color");

        match (self.space, space) {
            (S::Rgb, S::Rgb) | (S::YCbCr, S::YCbCr) => *self,
            (S::Rgb, S::YCbCr) => Rgb::to_model(self).to_ycbcr().to_color(),
            (S::YCbCr, S::Rgb) => YCbCr::to_model(self).to_rgb().to_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn almost_black_blue() {
        assert_eq!(rgb_to_ycbcr(0, 0, 3), (0, 130, 128));
        assert_eq!(Rgb8::new(0, 0, 3).to_ycbcr(), YCbCr8::new(0, 130, 128));
    }

    #[test]
    fn known_rgb_to_ycbcr() {
        assert_eq!(rgb_to_ycbcr(0, 0, 0), (0, 128, 128));
        assert_eq!(rgb_to_ycbcr(255, 255, 255), (255, 128, 128));
        assert_eq!(rgb_to_ycbcr(255, 0, 0), (76, 85, 255));
        assert_eq!(rgb_to_ycbcr(0, 255, 0), (150, 44, 21));
        assert_eq!(rgb_to_ycbcr(0, 0, 255), (29, 255, 107));
    }

    #[test]
    fn known_ycbcr_to_rgb() {
        assert_eq!(ycbcr_to_rgb(0, 130, 128), (0, 0, 3));
        assert_eq!(ycbcr_to_rgb(0, 128, 128), (0, 0, 0));
        assert_eq!(ycbcr_to_rgb(255, 128, 128), (255, 255, 255));
        assert_eq!(ycbcr_to_rgb(76, 85, 255), (254, 0, 0));
    }

    #[test]
    fn grays_round_trip() {
        for v in 0..=255_u8 {
            let ycbcr = Rgb8::new(v, v, v).to_ycbcr();
            assert_eq!(ycbcr, YCbCr8::new(v, 128, 128));
            assert_eq!(ycbcr.to_rgb(), Rgb8::new(v, v, v));
        }
    }

    #[test]
    fn clamping_is_reported() {
        let (rgb, clamped) = YCbCr8::new(255, 255, 255).to_rgb_clamped();
        assert_eq!(rgb, Rgb8::new(255, 121, 255));
        assert_eq!(clamped, Clamped::C0 | Clamped::C2);

        let (rgb, clamped) = YCbCr8::new(0, 0, 0).to_rgb_clamped();
        assert_eq!(rgb, Rgb8::new(0, 135, 0));
        assert_eq!(clamped, Clamped::C0 | Clamped::C2);

        let (_, clamped) = YCbCr8::new(0, 128, 128).to_rgb_clamped();
        assert!(clamped.is_empty());
    }

    #[test]
    fn rgb16_expansion() {
        assert_eq!(YCbCr8::new(255, 128, 128).to_rgb16(), [0xffff; 3]);
        assert_eq!(YCbCr8::new(0, 128, 128).to_rgb16(), [0; 3]);
        assert_eq!(YCbCr8::new(0, 130, 128).to_rgb16(), [0, 0, 907]);
        assert_eq!(YCbCr8::new(255, 255, 255).to_rgb16(), [0xffff, 31128, 0xffff]);
    }

    #[test]
    fn from_rgb16_uses_high_byte() {
        assert_eq!(YCbCr8::from_rgb16([0x00ff, 0x00ff, 0x03ff]), YCbCr8::new(0, 130, 128));
        assert_eq!(YCbCr8::from_rgb16([0xffff; 3]), YCbCr8::new(255, 128, 128));
    }

    #[test]
    fn fixed_point_agrees_with_reference() {
        for r in (0..=255_u8).step_by(15) {
            for g in (0..=255_u8).step_by(15) {
                for b in (0..=255_u8).step_by(15) {
                    let rgb = Rgb8::new(r, g, b);
                    let fixed = rgb.to_ycbcr().to_array();
                    let reference = rgb.to_ycbcr_reference().to_array();
                    for (f, x) in fixed.into_iter().zip(reference) {
                        assert!(f.abs_diff(x) <= 1, "{rgb:?}: {fixed:?} vs {reference:?}");
                    }

                    let ycbcr = YCbCr8::new(r, g, b);
                    let fixed = ycbcr.to_rgb().to_array();
                    let reference = ycbcr.to_rgb_reference().to_array();
                    for (f, x) in fixed.into_iter().zip(reference) {
                        assert!(f.abs_diff(x) <= 1, "{ycbcr:?}: {fixed:?} vs {reference:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn reference_grays_match_fixed_point() {
        for v in 0..=255_u8 {
            let rgb = Rgb8::new(v, v, v);
            assert_eq!(rgb.to_ycbcr_reference(), rgb.to_ycbcr());
            assert_eq!(rgb.to_ycbcr().to_rgb_reference(), rgb);
        }
    }

    #[test]
    fn to_space_same_space_is_identity() {
        let color = Color::new(Space::YCbCr, 0.1, 0.2, 0.3);
        assert_eq!(color.to_space(Space::YCbCr), color);
    }

    #[test]
    fn to_space_round_trip() {
        let color = Color::new(Space::Rgb, 0.8235, 0.4118, 0.11765);
        let ycbcr = color.to_space(Space::YCbCr);
        assert_eq!(ycbcr.space, Space::YCbCr);

        let back = ycbcr.to_space(Space::Rgb);
        assert_eq!(back.space, Space::Rgb);
        assert_component_eq!(back.components.0, color.components.0);
        assert_component_eq!(back.components.1, color.components.1);
        assert_component_eq!(back.components.2, color.components.2);
    }
}
