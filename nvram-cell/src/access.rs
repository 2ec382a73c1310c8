//! Strategies moving a value between its byte image and the storage device.

use storage_bus::{Address, ByteStorage};

use crate::value::Width;
use crate::{CellValue, Error};

/// Moves values of type `T` to and from persistent storage.
///
/// Writes go through [`ByteStorage::update_byte`], so bytes that already hold the
/// right value are never physically rewritten.
pub trait Access<T: CellValue> {
    /// Read the value stored at `address`.
    fn read<S: ByteStorage>(storage: &mut S, address: Address) -> Result<T, Error<S::Error>>;

    /// Store `value` at `address`, returning the number of bytes physically written.
    fn write<S: ByteStorage>(storage: &mut S, address: Address, value: T) -> Result<usize, Error<S::Error>>;
}

/// Direct access for one-byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleCell {}

/// Byte-by-byte block access for values wider than one byte.
///
/// The persisted byte order is the reverse of the in-memory order: the first
/// address holds the last byte of the native image. Both directions apply the
/// same convention, so the layout on the device does not depend on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranged {}

fn check_span<T: CellValue, S: ByteStorage>(storage: &S, address: Address) -> Result<(), Error<S::Error>> {
    let span = Width::<T>::CHECKED;
    storage
        .check_span(address, span)
        .map_err(|_| Error::OutOfRange { address, span })
}

fn read_one<S: ByteStorage>(storage: &mut S, address: Address) -> Result<u8, Error<S::Error>> {
    storage.read_byte(address).map_err(Error::Storage)
}

fn write_one<S: ByteStorage>(storage: &mut S, address: Address, byte: u8) -> Result<usize, Error<S::Error>> {
    let written = storage.update_byte(address, byte).map_err(Error::Storage)?;

    #[cfg(feature = "defmt")]
    {
        if written {
            defmt::trace!("cell {=usize:#x} <- {=u8:#x}", address, byte);
        }
    }
    Ok(usize::from(written))
}

impl<T: CellValue<Bytes = [u8; 1]>> Access<T> for SingleCell {
    fn read<S: ByteStorage>(storage: &mut S, address: Address) -> Result<T, Error<S::Error>> {
        check_span::<T, S>(storage, address)?;
        let byte = read_one(storage, address)?;
        T::decode([byte]).ok_or(Error::InvalidValue { address })
    }

    fn write<S: ByteStorage>(storage: &mut S, address: Address, value: T) -> Result<usize, Error<S::Error>> {
        check_span::<T, S>(storage, address)?;
        let [byte] = value.encode();
        write_one(storage, address, byte)
    }
}

/// One-byte values reaching this strategy are moved exactly like [`SingleCell`] does.
impl<T: CellValue> Access<T> for Ranged {
    fn read<S: ByteStorage>(storage: &mut S, address: Address) -> Result<T, Error<S::Error>> {
        check_span::<T, S>(storage, address)?;
        let mut bytes = T::BLANK;
        for (offset, byte) in bytes.as_mut().iter_mut().rev().enumerate() {
            *byte = read_one(storage, address + offset)?;
        }
        T::decode(bytes).ok_or(Error::InvalidValue { address })
    }

    fn write<S: ByteStorage>(storage: &mut S, address: Address, value: T) -> Result<usize, Error<S::Error>> {
        check_span::<T, S>(storage, address)?;
        let bytes = value.encode();
        if let [byte] = bytes.as_ref() {
            return write_one(storage, address, *byte);
        }

        let mut written = 0;
        for (offset, byte) in bytes.as_ref().iter().rev().enumerate() {
            if storage.update_byte(address + offset, *byte).map_err(Error::Storage)? {
                written += 1;
            }
        }

        #[cfg(feature = "defmt")]
        {
            if written > 0 {
                defmt::trace!(
                    "cells {=usize:#x}..{=usize:#x}: {=usize} bytes rewritten",
                    address,
                    address + Width::<T>::CHECKED,
                    written
                );
            }
        }
        Ok(written)
    }
}
