#![cfg_attr(not(test), no_std)]

//! Typed variables stored in EEPROM/NVRAM cells.
//!
//! An [`NvCell<T>`] is a handle over the bytes of a [`ByteStorage`] device that hold a
//! value of type `T`. Reads and writes go to the device every time, and writes skip
//! the bytes that already hold the right value.

pub use storage_bus::{self, Address, ByteStorage};

mod error;
pub use error::Error;

/// Classification of the types that can be stored.
mod value;
pub use value::{Arithmetic, Bitwise, CellValue, Fundamental, Logic};

/// Single-byte and multi-byte access strategies.
mod access;
pub use access::{Access, Ranged, SingleCell};

mod cell;
pub use cell::NvCell;

/// Operations synthesized for fundamental types.
mod ops;

mod array;
pub use array::NvArray;

/// Traits for NVRAM (Non-Volatile Random Access Memory) storage and management.
mod nvram;
pub use nvram::{CellRef, Nvram, NvramStorage};

mod layout;

pub mod aliases;
pub use aliases::*;
