//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::color::{Clamped, Component, Components};

pub type Transform = Transform3D<Component>;

pub type Vector = Vector3D<Component>;

/// Build a linear transform from a 3x3 matrix. Each row holds the
/// contribution of one input component to the three outputs.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform3D::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components, then add
/// `offset`.
pub fn transform(transform: &Transform, offset: Vector, from: Components) -> Components {
    let Components(x, y, z) = from;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z)) + offset;
    Components(x, y, z)
}

/// Number of fractional bits in the fixed-point conversions.
pub const FIX_SHIFT: u32 = 16;

/// Take the integer part of a 16.16 fixed-point value, clamping it to a
/// channel value. Returns `None` for the value when it had to be clamped.
///
/// Values in `0..1 << 24` fit after the shift. Anything else is either
/// negative (clamped to 0) or too large (clamped to all ones).
#[inline]
pub fn fixed_to_u8(value: i32) -> (u8, bool) {
    if (value as u32) & 0xff00_0000 == 0 {
        ((value >> FIX_SHIFT) as u8, false)
    } else {
        ((!(value >> 31)) as u8, true)
    }
}

/// Like [`fixed_to_u8`] but keeps 8 fractional bits, giving a 16-bit channel.
#[inline]
pub fn fixed_to_u16(value: i32) -> (u16, bool) {
    if (value as u32) & 0xff00_0000 == 0 {
        ((value >> 8) as u16, false)
    } else {
        ((!(value >> 31) & 0xffff) as u16, true)
    }
}

/// Collect clamping results for three channels into [`Clamped`] flags.
pub fn clamped_flags(clamped: [bool; 3]) -> Clamped {
    clamped
        .into_iter()
        .enumerate()
        .filter(|(_, c)| *c)
        .fold(Clamped::empty(), |flags, (index, _)| {
            flags | Clamped::channel(index)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_clamping() {
        assert_eq!(fixed_to_u8(130 << 16), (130, false));
        assert_eq!(fixed_to_u8((1 << 24) - 1), (255, false));
        assert_eq!(fixed_to_u8(1 << 24), (255, true));
        assert_eq!(fixed_to_u8(-1), (0, true));
        assert_eq!(fixed_to_u8(i32::MIN), (0, true));

        assert_eq!(fixed_to_u16((1 << 24) - 1), (0xffff, false));
        assert_eq!(fixed_to_u16(1 << 24), (0xffff, true));
        assert_eq!(fixed_to_u16(-45108), (0, true));
    }

    #[test]
    fn flags_from_channels() {
        assert_eq!(clamped_flags([false, false, false]), Clamped::empty());
        assert_eq!(clamped_flags([true, false, true]), Clamped::C0 | Clamped::C2);
    }

    #[test]
    fn transform_with_offset() {
        const SWAP: Transform = transform_3x3(
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 2.0,
        );
        let out = transform(&SWAP, Vector::new(0.5, 0.0, 0.0), Components(1.0, 2.0, 3.0));
        assert_eq!(out, Components(2.5, 1.0, 6.0));
    }
}
