//! Serial EEPROM (24Cxx family) on a blocking I2C bus.

use embedded_hal::i2c::{Error as I2cError, ErrorKind as I2cErrorKind, I2c, Operation, SevenBitAddress};

use crate::{Address, ByteStorage, ErrorKind, ErrorType};

/// Largest memory array reachable with two address bytes.
pub const MAX_CAPACITY: usize = 0x1_0000;

/// 24Cxx-style EEPROM with a two byte, big-endian memory address.
///
/// Each byte write starts an internal write cycle during which the device does not
/// acknowledge its address. The driver waits for the end of that cycle by
/// acknowledge polling, giving up after `max_polls` attempts with
/// [`ErrorKind::Timeout`].
#[derive(Debug)]
pub struct I2cEeprom<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
    capacity: usize,
    max_polls: u32,
}

impl<I2C: I2c> I2cEeprom<I2C> {
    /// Default number of acknowledge polls after a write.
    pub const MAX_POLLS: u32 = 1_000;

    /// Create a driver for the device at 7-bit `address` holding `capacity` bytes.
    ///
    /// `capacity` is clamped to [`MAX_CAPACITY`].
    pub fn new(i2c: I2C, address: SevenBitAddress, capacity: usize) -> Self {
        Self {
            i2c,
            address,
            capacity: capacity.min(MAX_CAPACITY),
            max_polls: Self::MAX_POLLS,
        }
    }

    /// Override the number of acknowledge polls performed after each write.
    ///
    /// At least one poll is always made, so a device that is ready right after the
    /// write never reports [`ErrorKind::Timeout`].
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls.max(1);
        self
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn memory_address(&self, address: Address) -> Result<[u8; 2], ErrorKind> {
        if address >= self.capacity {
            return Err(ErrorKind::OutOfRange);
        }
        let address = u16::try_from(address).map_err(|_| ErrorKind::OutOfRange)?;
        Ok(address.to_be_bytes())
    }

    fn wait_write_cycle(&mut self) -> Result<(), ErrorKind> {
        for _ in 0..self.max_polls {
            match self.i2c.write(self.address, &[]) {
                Ok(()) => return Ok(()),
                Err(e) if matches!(e.kind(), I2cErrorKind::NoAcknowledge(_)) => continue,
                Err(e) => return Err(e.kind().into()),
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("EEPROM 0x{=u8:x} still busy after {=u32} polls", self.address, self.max_polls);
        Err(ErrorKind::Timeout)
    }
}

impl<I2C: I2c> ErrorType for I2cEeprom<I2C> {
    type Error = ErrorKind;
}

impl<I2C: I2c> ByteStorage for I2cEeprom<I2C> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn read_byte(&mut self, address: Address) -> Result<u8, Self::Error> {
        let memory_address = self.memory_address(address)?;
        let mut value = [0u8];
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&memory_address), Operation::Read(&mut value)],
            )
            .map_err(|i2c_err| i2c_err.kind())?;
        Ok(value[0])
    }

    fn write_byte(&mut self, address: Address, value: u8) -> Result<(), Self::Error> {
        let [high, low] = self.memory_address(address)?;
        self.i2c
            .write(self.address, &[high, low, value])
            .map_err(|i2c_err| i2c_err.kind())?;
        self.wait_write_cycle()
    }
}
