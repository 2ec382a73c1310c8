//! RAM-backed emulation of an EEPROM.

use crate::{Address, ByteStorage, ErrorKind, ErrorType};

/// Value of an erased EEPROM byte.
pub const ERASED: u8 = 0xFF;

/// `N` bytes of emulated persistent storage held in RAM.
///
/// Every physical byte access is counted, which makes this type useful both for
/// host-side simulation and for checking write-wear behavior of code built on top
/// of [`ByteStorage`]. A fresh device reads back as [`ERASED`] everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemStorage<const N: usize> {
    data: [u8; N],
    reads: usize,
    writes: usize,
}

impl<const N: usize> MemStorage<N> {
    /// Create an erased device.
    pub const fn new() -> Self {
        Self::from_bytes([ERASED; N])
    }

    /// Create a device preloaded with `data`.
    pub const fn from_bytes(data: [u8; N]) -> Self {
        Self {
            data,
            reads: 0,
            writes: 0,
        }
    }

    /// Raw content of the device, in address order.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Modify a byte behind the back of the access counters, as another bus master would.
    pub fn poke(&mut self, address: Address, value: u8) -> Result<(), ErrorKind> {
        let byte = self.data.get_mut(address).ok_or(ErrorKind::OutOfRange)?;
        *byte = value;
        Ok(())
    }

    /// Number of physical byte reads since creation or the last reset.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of physical byte writes since creation or the last reset.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Reset both access counters.
    pub fn reset_counters(&mut self) {
        self.reads = 0;
        self.writes = 0;
    }
}

impl<const N: usize> Default for MemStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ErrorType for MemStorage<N> {
    type Error = ErrorKind;
}

impl<const N: usize> ByteStorage for MemStorage<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error> {
        let value = *self.data.get(address).ok_or(ErrorKind::OutOfRange)?;
        self.reads += 1;
        Ok(value)
    }

    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), Self::Error> {
        let byte = self.data.get_mut(address).ok_or(ErrorKind::OutOfRange)?;
        *byte = value;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_device_is_erased() {
        let mut storage = MemStorage::<4>::default();
        for address in 0..4 {
            assert_eq!(storage.read_byte(address), Ok(ERASED));
        }
        assert_eq!(storage.reads(), 4);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut storage = MemStorage::<4>::new();
        assert_eq!(storage.read_byte(4), Err(ErrorKind::OutOfRange));
        assert_eq!(storage.write_byte(4, 0), Err(ErrorKind::OutOfRange));
        assert_eq!(storage.poke(4, 0), Err(ErrorKind::OutOfRange));
        assert_eq!(storage.reads(), 0);
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_poke_is_not_counted() {
        let mut storage = MemStorage::<4>::from_bytes([0, 1, 2, 3]);
        storage.poke(2, 0xAA).unwrap();
        assert_eq!(storage.as_bytes(), &[0, 1, 0xAA, 3]);
        assert_eq!(storage.writes(), 0);

        storage.write_byte(0, 7).unwrap();
        storage.reset_counters();
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.as_bytes()[0], 7);
    }
}
