#![cfg_attr(not(test), no_std)]

//! Interfaces to byte-addressable persistent storage.

/// Byte offset into the address space of a storage device.
pub type Address = usize;

/// Storage bus error traits.
mod error;
pub use error::{Error, ErrorKind, ErrorType};

/// The byte-level storage trait.
mod storage;
pub use storage::ByteStorage;

/// RAM-backed emulated EEPROM.
mod mem;
pub use mem::{MemStorage, ERASED};

/// Serial EEPROM on an I2C bus.
pub mod i2c;
pub use i2c::I2cEeprom;
