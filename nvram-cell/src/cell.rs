//! Typed handle over persistent cells.

use core::marker::PhantomData;

use storage_bus::{Address, ByteStorage};

use crate::access::Access;
use crate::nvram::CellRef;
use crate::value::Width;
use crate::{CellValue, Error};

/// A value of type `T` living at a fixed address of a persistent storage device.
///
/// The handle holds no copy of the value: every [`read`](NvCell::read) is a fresh
/// access to the device and every [`write`](NvCell::write) goes straight to it,
/// skipping the bytes that already hold the new value. The cell covers
/// [`SPAN`](NvCell::SPAN) consecutive addresses, so cells declared back to back
/// (see [`nv_layout!`](crate::nv_layout)) tile the device without gaps.
///
/// Cells are plain constants and are meant to be declared as `const` or `static`
/// items, the way the persistent layout of a firmware is fixed at build time:
///
/// ```ignore
/// use nvram_cell::NvU32;
///
/// const BOOT_COUNT: NvU32 = NvU32::new(0x10);
///
/// fn on_boot<S: ByteStorage>(eeprom: &mut S) -> Result<u32, Error<S::Error>> {
///     BOOT_COUNT.increment(eeprom)
/// }
/// ```
pub struct NvCell<T> {
    address: Address,
    value: PhantomData<fn() -> T>,
}

impl<T> Clone for NvCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NvCell<T> {}

impl<T> PartialEq for NvCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl<T> Eq for NvCell<T> {}

impl<T> core::fmt::Debug for NvCell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NvCell")
            .field("address", &self.address)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T: CellValue> NvCell<T> {
    /// Number of persistent bytes covered by the cell.
    pub const SPAN: usize = Width::<T>::CHECKED;

    /// Place a cell at `address`.
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            value: PhantomData,
        }
    }

    /// First address of the cell.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Number of persistent bytes covered by the cell.
    pub const fn span(&self) -> usize {
        Self::SPAN
    }

    /// First address after the cell, `None` if the cell runs past the address space.
    pub const fn end(&self) -> Option<Address> {
        self.address.checked_add(Self::SPAN)
    }

    /// Cell of another type placed right after this one.
    pub const fn next<U: CellValue>(&self) -> Option<NvCell<U>> {
        match self.end() {
            Some(end) => Some(NvCell::new(end)),
            None => None,
        }
    }

    /// Read the stored value.
    pub fn read<S: ByteStorage>(&self, storage: &mut S) -> Result<T, Error<S::Error>> {
        <T::Access as Access<T>>::read(storage, self.address)
    }

    /// Store `value`. Bytes that already hold the right value are not rewritten.
    pub fn write<S: ByteStorage>(&self, storage: &mut S, value: T) -> Result<&Self, Error<S::Error>> {
        <T::Access as Access<T>>::write(storage, self.address, value)?;
        Ok(self)
    }

    /// Compare the stored value with `value`.
    pub fn eq_stored<S: ByteStorage>(&self, storage: &mut S, value: &T) -> Result<bool, Error<S::Error>> {
        Ok(self.read(storage)? == *value)
    }

    /// Borrow `storage` for accesses to this cell only.
    pub fn bind<'s, S: ByteStorage>(&self, storage: &'s mut S) -> CellRef<'s, T, S> {
        CellRef::new(*self, storage)
    }

    /// Read, transform and store back, as one read and one write.
    pub(crate) fn modify<S, F>(&self, storage: &mut S, f: F) -> Result<T, Error<S::Error>>
    where
        S: ByteStorage,
        F: FnOnce(T) -> Result<T, Error<S::Error>>,
    {
        let value = f(self.read(storage)?)?;
        self.write(storage, value)?;
        Ok(value)
    }
}
