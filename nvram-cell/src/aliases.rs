//! Short names for cells of the standard types.

use crate::NvCell;

/// Persistent `u8`.
pub type NvU8 = NvCell<u8>;
/// Persistent `i8`.
pub type NvI8 = NvCell<i8>;
/// Persistent `u16`.
pub type NvU16 = NvCell<u16>;
/// Persistent `i16`.
pub type NvI16 = NvCell<i16>;
/// Persistent `u32`.
pub type NvU32 = NvCell<u32>;
/// Persistent `i32`.
pub type NvI32 = NvCell<i32>;
/// Persistent `u64`.
pub type NvU64 = NvCell<u64>;
/// Persistent `i64`.
pub type NvI64 = NvCell<i64>;
/// Persistent `u128`.
pub type NvU128 = NvCell<u128>;
/// Persistent `i128`.
pub type NvI128 = NvCell<i128>;
/// Persistent `bool`.
pub type NvBool = NvCell<bool>;
/// Persistent `f32`.
pub type NvF32 = NvCell<f32>;
/// Persistent `f64`.
pub type NvF64 = NvCell<f64>;
/// Persistent `char`.
pub type NvChar = NvCell<char>;
