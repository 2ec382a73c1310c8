//! Byte-addressable persistent storage.

use crate::{Address, ErrorKind, ErrorType};

/// Byte-addressable persistent storage device (EEPROM, FRAM, emulated NVRAM...).
///
/// Addresses run from `0` to `capacity() - 1`, each one identifying a single byte.
/// Implementations report accesses outside of that range with an error of kind
/// [`ErrorKind::OutOfRange`].
///
/// Typed accesses built on top of this trait always go through
/// [`update_byte`](ByteStorage::update_byte), so a byte is only physically written
/// when its stored value differs from the new one. Devices whose hardware already
/// skips unchanged bytes may override `update_byte` to avoid the extra read.
pub trait ByteStorage: ErrorType {
    /// Total number of addressable bytes.
    fn capacity(&self) -> usize;

    /// Read the byte stored at `address`.
    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error>;

    /// Unconditionally write `value` at `address`.
    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), Self::Error>;

    /// Write `value` at `address` only if it differs from the stored byte.
    ///
    /// Returns `true` when a physical write was issued.
    fn update_byte(&mut self, address: Address, value: u8) -> Result<bool, Self::Error> {
        if self.read_byte(address)? == value {
            return Ok(false);
        }
        self.write_byte(address, value)?;
        Ok(true)
    }

    /// Check that `len` bytes starting at `address` fit in the device.
    fn check_span(&self, address: Address, len: usize) -> Result<(), ErrorKind> {
        address
            .checked_add(len)
            .filter(|end| *end <= self.capacity())
            .map(|_| ())
            .ok_or(ErrorKind::OutOfRange)
    }
}

impl<T: ByteStorage + ?Sized> ByteStorage for &mut T {
    #[inline]
    fn capacity(&self) -> usize {
        T::capacity(self)
    }

    #[inline]
    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error> {
        T::read_byte(self, address)
    }

    #[inline]
    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, address, value)
    }

    #[inline]
    fn update_byte(&mut self, address: Address, value: u8) -> Result<bool, Self::Error> {
        T::update_byte(self, address, value)
    }
}
