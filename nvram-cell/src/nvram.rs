//! Traits for NVRAM (Non-Volatile Random Access Memory) storage and management.

use storage_bus::{Address, ByteStorage, ErrorType};

use crate::array::cell_address;
use crate::{CellValue, Error, NvArray, NvCell};

/// An individual NVRAM storage cell.
pub trait NvramStorage<T>: ErrorType {
    /// Reads the value from the NVRAM storage cell.
    fn read(&mut self) -> Result<T, Self::Error>;

    /// Writes a value to the NVRAM storage cell.
    fn write(&mut self, value: T) -> Result<(), Self::Error>;
}

/// Trait for a collection of individually-addressable NVRAM storage cells.
pub trait Nvram<StoredType: CellValue, const CELL_COUNT: usize> {
    /// Returns the storage cells, in address order.
    fn storage(&self) -> [NvCell<StoredType>; CELL_COUNT];
}

/// A cell bound to the device it lives in.
///
/// Obtained with [`NvCell::bind`]; lets code written against [`NvramStorage`]
/// work on a persistent cell without carrying the device around separately.
#[derive(Debug)]
pub struct CellRef<'s, T, S> {
    cell: NvCell<T>,
    storage: &'s mut S,
}

impl<'s, T: CellValue, S: ByteStorage> CellRef<'s, T, S> {
    pub(crate) fn new(cell: NvCell<T>, storage: &'s mut S) -> Self {
        Self { cell, storage }
    }

    /// The underlying cell.
    pub fn cell(&self) -> NvCell<T> {
        self.cell
    }

    /// Give the device back.
    pub fn release(self) -> &'s mut S {
        self.storage
    }
}

impl<T: CellValue, S: ByteStorage> ErrorType for CellRef<'_, T, S> {
    type Error = Error<S::Error>;
}

impl<T: CellValue, S: ByteStorage> NvramStorage<T> for CellRef<'_, T, S> {
    fn read(&mut self) -> Result<T, Self::Error> {
        self.cell.read(&mut *self.storage)
    }

    fn write(&mut self, value: T) -> Result<(), Self::Error> {
        self.cell.write(&mut *self.storage, value).map(|_| ())
    }
}

/// Cells that would start past the end of the address space are pinned to
/// `Address::MAX`, where every access fails with [`Error::OutOfRange`].
impl<T: CellValue, const N: usize> Nvram<T, N> for NvArray<T, N> {
    fn storage(&self) -> [NvCell<T>; N] {
        core::array::from_fn(|index| {
            NvCell::new(cell_address(self.address(), index, NvCell::<T>::SPAN).unwrap_or(Address::MAX))
        })
    }
}
