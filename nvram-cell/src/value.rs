//! Compile-time classification of the types that can live in a cell.
//!
//! Two facts are resolved per value type:
//!
//! - its width, which picks the access strategy through [`CellValue::Access`]:
//!   [`SingleCell`] for one-byte types, [`Ranged`] for everything wider;
//! - whether it is a fundamental type, which decides which operations
//!   [`NvCell`](crate::NvCell) offers on top of plain read/write: [`Arithmetic`],
//!   [`Logic`] and [`Bitwise`].
//!
//! A type that only implements [`CellValue`] (`char`, byte arrays, user structs)
//! can still be stored, read back and compared, but gets no synthesized operations.

use core::marker::PhantomData;
use core::mem::size_of;

use crate::access::{Access, Ranged, SingleCell};

/// A value that can be stored in persistent cells.
///
/// `encode` must return the native in-memory byte image of the value and `decode`
/// must rebuild the value from such an image. The access strategy takes care of
/// the order in which those bytes hit the storage device.
pub trait CellValue: Copy + PartialEq {
    /// Number of persistent bytes occupied by a value.
    ///
    /// Defaults to the size of the byte image. An impl overriding it with a different
    /// value is rejected at build time as soon as a cell of that type is used.
    const WIDTH: usize = size_of::<Self::Bytes>();

    /// Byte image of a value, `WIDTH` bytes long.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy;

    /// Zero-filled byte image, used as the destination of reads.
    const BLANK: Self::Bytes;

    /// How the value is moved to and from the storage device.
    type Access: Access<Self>;

    /// Native byte image of `self`.
    fn encode(self) -> Self::Bytes;

    /// Rebuild a value from its native byte image, `None` if the image is not a valid value.
    fn decode(bytes: Self::Bytes) -> Option<Self>;
}

/// Width of `T`, checked against the size of its byte image.
pub(crate) struct Width<T>(PhantomData<T>);

impl<T: CellValue> Width<T> {
    pub(crate) const CHECKED: usize = {
        assert!(
            T::WIDTH == size_of::<T::Bytes>(),
            "CellValue::WIDTH differs from the size of CellValue::Bytes"
        );
        T::WIDTH
    };
}

/// Marker for numeric and boolean types.
pub trait Fundamental: CellValue {}

/// Arithmetic of fundamental numeric types.
///
/// Integer operations wrap around, as the fixed-width storage does.
pub trait Arithmetic: Fundamental {
    /// The unit used by increments and decrements.
    const ONE: Self;

    /// `self + rhs`
    fn plus(self, rhs: Self) -> Self;
    /// `self - rhs`
    fn minus(self, rhs: Self) -> Self;
    /// `self * rhs`
    fn times(self, rhs: Self) -> Self;
    /// `self / rhs`, `None` on integer division by zero.
    fn divided(self, rhs: Self) -> Option<Self>;
    /// `self % rhs`, `None` on integer division by zero.
    fn remainder(self, rhs: Self) -> Option<Self>;
}

/// Bitwise or logical combination of fundamental types.
pub trait Logic: Fundamental {
    /// `self | rhs`
    fn or(self, rhs: Self) -> Self;
    /// `self & rhs`
    fn and(self, rhs: Self) -> Self;
    /// `self ^ rhs`
    fn xor(self, rhs: Self) -> Self;
}

/// Shifts of fundamental integer types.
///
/// The shift amount is masked to the bit width of the type.
pub trait Bitwise: Logic {
    /// `self << bits`
    fn shifted_left(self, bits: u32) -> Self;
    /// `self >> bits`
    fn shifted_right(self, bits: u32) -> Self;
}

macro_rules! integer_cell {
    ($access:ty, $width:literal => $($t:ty),+) => {$(
        impl CellValue for $t {
            type Bytes = [u8; $width];
            const BLANK: Self::Bytes = [0; $width];
            type Access = $access;

            #[inline]
            fn encode(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline]
            fn decode(bytes: Self::Bytes) -> Option<Self> {
                Some(<$t>::from_ne_bytes(bytes))
            }
        }

        impl Fundamental for $t {}

        impl Arithmetic for $t {
            const ONE: Self = 1;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            #[inline]
            fn times(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            #[inline]
            fn divided(self, rhs: Self) -> Option<Self> {
                (rhs != 0).then(|| self.wrapping_div(rhs))
            }
            #[inline]
            fn remainder(self, rhs: Self) -> Option<Self> {
                (rhs != 0).then(|| self.wrapping_rem(rhs))
            }
        }

        impl Logic for $t {
            #[inline]
            fn or(self, rhs: Self) -> Self {
                self | rhs
            }
            #[inline]
            fn and(self, rhs: Self) -> Self {
                self & rhs
            }
            #[inline]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }
        }

        impl Bitwise for $t {
            #[inline]
            fn shifted_left(self, bits: u32) -> Self {
                self.wrapping_shl(bits)
            }
            #[inline]
            fn shifted_right(self, bits: u32) -> Self {
                self.wrapping_shr(bits)
            }
        }
    )+};
}

integer_cell!(SingleCell, 1 => u8, i8);
integer_cell!(Ranged, 2 => u16, i16);
integer_cell!(Ranged, 4 => u32, i32);
integer_cell!(Ranged, 8 => u64, i64);
integer_cell!(Ranged, 16 => u128, i128);

macro_rules! float_cell {
    ($width:literal => $($t:ty),+) => {$(
        impl CellValue for $t {
            type Bytes = [u8; $width];
            const BLANK: Self::Bytes = [0; $width];
            type Access = Ranged;

            #[inline]
            fn encode(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline]
            fn decode(bytes: Self::Bytes) -> Option<Self> {
                Some(<$t>::from_ne_bytes(bytes))
            }
        }

        impl Fundamental for $t {}

        impl Arithmetic for $t {
            const ONE: Self = 1.0;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn times(self, rhs: Self) -> Self {
                self * rhs
            }
            #[inline]
            fn divided(self, rhs: Self) -> Option<Self> {
                Some(self / rhs)
            }
            #[inline]
            fn remainder(self, rhs: Self) -> Option<Self> {
                Some(self % rhs)
            }
        }
    )+};
}

float_cell!(4 => f32);
float_cell!(8 => f64);

impl CellValue for bool {
    type Bytes = [u8; 1];
    const BLANK: Self::Bytes = [0];
    type Access = SingleCell;

    #[inline]
    fn encode(self) -> Self::Bytes {
        [u8::from(self)]
    }

    /// Any non-zero byte reads as `true`.
    #[inline]
    fn decode(bytes: Self::Bytes) -> Option<Self> {
        Some(bytes[0] != 0)
    }
}

impl Fundamental for bool {}

impl Logic for bool {
    #[inline]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }
    #[inline]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }
    #[inline]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }
}

impl CellValue for char {
    type Bytes = [u8; 4];
    const BLANK: Self::Bytes = [0; 4];
    type Access = Ranged;

    #[inline]
    fn encode(self) -> Self::Bytes {
        u32::from(self).to_ne_bytes()
    }

    #[inline]
    fn decode(bytes: Self::Bytes) -> Option<Self> {
        char::from_u32(u32::from_ne_bytes(bytes))
    }
}

/// Byte strings of any length. `[u8; 1]` is moved with the single-cell access like
/// any other one-byte value.
impl<const N: usize> CellValue for [u8; N] {
    type Bytes = [u8; N];
    const BLANK: Self::Bytes = [0; N];
    type Access = Ranged;

    #[inline]
    fn encode(self) -> Self::Bytes {
        self
    }

    #[inline]
    fn decode(bytes: Self::Bytes) -> Option<Self> {
        Some(bytes)
    }
}
