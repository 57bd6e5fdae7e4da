//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces, with components normalized to the range `0.0..=1.0`.

use bitflags::bitflags;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

bitflags! {
    /// Flags to mark the channels that had to be clamped into range during a
    /// conversion.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Clamped : u8 {
        /// Set when the first channel was clamped.
        const C0 = 1 << 0;
        /// Set when the second channel was clamped.
        const C1 = 1 << 1;
        /// Set when the third channel was clamped.
        const C2 = 1 << 2;
    }
}

impl Clamped {
    /// The flag for the channel at `index` (0, 1 or 2).
    pub(crate) fn channel(index: usize) -> Self {
        Self::from_bits_truncate(1 << index)
    }
}

/// The color spaces a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded RGB, as stored in 8-bit images.
    Rgb = 0,
    /// Full range ITU-R BT.601 YCbCr, as used by JPEG/JFIF. Chroma components
    /// are offset so that a neutral color has Cb and Cr of 0.5.
    YCbCr = 1,
}

impl Space {
    /// The normalized value of a component that carries no signal.
    fn neutral(self, index: usize) -> Component {
        match (self, index) {
            (Space::YCbCr, 1 | 2) => 0.5,
            _ => 0.0,
        }
    }

    /// The 8-bit code value matching [`Space::neutral`].
    fn code_offset(self, index: usize) -> Component {
        match (self, index) {
            (Space::YCbCr, 1 | 2) => 128.0,
            _ => 0.0,
        }
    }
}

/// Implemented by models that are bound to a single [`Space`].
pub trait HasSpace {
    /// The color space of the model.
    const SPACE: Space;
}

/// Struct that can hold a color of any color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// The three components that make up any color.
    pub components: Components,
    /// The color space in which the components are set.
    pub space: Space,
}

impl Color {
    /// Create a new [`Color`] in the given color space.
    /// ```rust
    /// use ycbcr::{Color, Space};
    /// let c = Color::new(Space::YCbCr, 1.0, 0.5, 0.5);
    /// ```
    pub fn new(space: Space, c0: Component, c1: Component, c2: Component) -> Self {
        Self {
            components: Components(c0, c1, c2),
            space,
        }
    }

    /// Create a [`Color`] from 8-bit channel values. YCbCr chroma channels
    /// are centered on 128.
    pub fn from_u8(space: Space, channels: [u8; 3]) -> Self {
        let [c0, c1, c2] = channels;
        let from_code = |index: usize, c: u8| {
            (Component::from(c) - space.code_offset(index)) / 255.0 + space.neutral(index)
        };
        Self::new(space, from_code(0, c0), from_code(1, c1), from_code(2, c2))
    }

    /// Quantize the components of this color to 8-bit channel values,
    /// rounding half away from zero. Components outside of `0.0..=1.0` are
    /// clamped and reported in the returned flags.
    pub fn to_u8(&self) -> Result<([u8; 3], Clamped)> {
        let Components(c0, c1, c2) = self.components;
        let mut clamped = Clamped::empty();
        let mut channels = [0_u8; 3];

        for (index, (value, channel)) in [c0, c1, c2].into_iter().zip(&mut channels).enumerate() {
            if value.is_nan() {
                return Err(Error::NotANumber {
                    index,
                    space: self.space,
                });
            }

            let scaled =
                ((value - self.space.neutral(index)) * 255.0 + self.space.code_offset(index)).round();
            *channel = match scaled.to_u8() {
                Some(v) => v,
                None => {
                    clamped |= Clamped::channel(index);
                    if scaled < 0.0 {
                        u8::MIN
                    } else {
                        u8::MAX
                    }
                }
            };
        }

        if !clamped.is_empty() {
            tracing::debug!(?clamped, space = ?self.space, "clamped components while quantizing");
        }

        Ok((channels, clamped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Rgb, 0.1, 0.2, 0.3);
        assert_eq!(c.components, Components(0.1, 0.2, 0.3));
        assert_eq!(c.space, Space::Rgb);

        let c = Color::from_u8(Space::Rgb, [255, 0, 51]);
        assert_eq!(c.components, Components(1.0, 0.0, 0.2));
        assert_eq!(c.space, Space::Rgb);
    }

    #[test]
    fn ycbcr_chroma_is_centered_on_128() {
        let c = Color::from_u8(Space::YCbCr, [0, 128, 128]);
        assert_eq!(c.components, Components(0.0, 0.5, 0.5));

        let c = Color::new(Space::YCbCr, 1.0, 0.5, 0.5);
        assert_eq!(c.to_u8().unwrap(), ([255, 128, 128], Clamped::empty()));

        let c = Color::new(Space::YCbCr, 0.0, -0.1, 1.1);
        assert_eq!(c.to_u8().unwrap(), ([0, 0, 255], Clamped::C1 | Clamped::C2));
    }

    #[test]
    fn quantize_rounds_to_nearest() {
        let c = Color::new(Space::Rgb, 0.6 / 255.0, 1.4 / 255.0, 254.6 / 255.0);
        assert_eq!(c.to_u8().unwrap(), ([1, 1, 255], Clamped::empty()));
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        let c = Color::new(Space::Rgb, -0.2, 0.5, 1.3);
        let (channels, clamped) = c.to_u8().unwrap();
        assert_eq!(channels, [0, 128, 255]);
        assert_eq!(clamped, Clamped::C0 | Clamped::C2);
    }

    #[test]
    fn quantize_rejects_nan() {
        let c = Color::new(Space::YCbCr, 0.0, Component::NAN, 0.0);
        match c.to_u8() {
            Err(Error::NotANumber { index, space }) => {
                assert_eq!(index, 1);
                assert_eq!(space, Space::YCbCr);
            }
            other => panic!("expected NotANumber, got {other:?}"),
        }
    }

    #[test]
    fn from_u8_then_to_u8_is_lossless() {
        for space in [Space::Rgb, Space::YCbCr] {
            for v in 0..=255_u8 {
                let c = Color::from_u8(space, [v, 255 - v, v / 2]);
                assert_eq!(c.to_u8().unwrap().0, [v, 255 - v, v / 2]);
            }
        }
    }
}
