//! Fixed-size runs of identical cells.

use core::marker::PhantomData;

use storage_bus::{Address, ByteStorage};

use crate::value::Width;
use crate::{CellValue, Error, NvCell};

/// `N` cells of type `T` laid out back to back from a base address.
pub struct NvArray<T, const N: usize> {
    address: Address,
    value: PhantomData<fn() -> T>,
}

impl<T, const N: usize> Clone for NvArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for NvArray<T, N> {}

impl<T, const N: usize> core::fmt::Debug for NvArray<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NvArray")
            .field("address", &self.address)
            .field("len", &N)
            .field("type", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T: CellValue, const N: usize> NvArray<T, N> {
    /// Number of persistent bytes covered by the array.
    pub const SPAN: usize = Width::<T>::CHECKED * N;

    /// Place the array at `address`.
    pub const fn new(address: Address) -> Self {
        Self {
            address,
            value: PhantomData,
        }
    }

    /// First address of the array.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// First address after the array, `None` if the array runs past the address space.
    pub const fn end(&self) -> Option<Address> {
        self.address.checked_add(Self::SPAN)
    }

    /// Number of cells.
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` if the array holds no cell.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The cell at `index`, `None` past the last cell or past the address space.
    pub const fn get(&self, index: usize) -> Option<NvCell<T>> {
        if index >= N {
            return None;
        }
        match cell_address(self.address, index, Width::<T>::CHECKED) {
            Some(address) => Some(NvCell::new(address)),
            None => None,
        }
    }

    /// All cells, in address order. Stops early at the end of the address space.
    pub fn iter(&self) -> impl Iterator<Item = NvCell<T>> {
        let address = self.address;
        (0..N).map_while(move |index| cell_address(address, index, Width::<T>::CHECKED).map(NvCell::new))
    }

    /// Store `value` in every cell.
    pub fn fill<S: ByteStorage>(&self, storage: &mut S, value: T) -> Result<(), Error<S::Error>> {
        self.iter().try_for_each(|cell| cell.write(storage, value).map(|_| ()))
    }

    /// Index of the first cell holding `value`.
    pub fn position<S: ByteStorage>(&self, storage: &mut S, value: &T) -> Result<Option<usize>, Error<S::Error>> {
        for (index, cell) in self.iter().enumerate() {
            if cell.eq_stored(storage, value)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

/// Address of cell `index` in a run starting at `base`.
pub(crate) const fn cell_address(base: Address, index: usize, width: usize) -> Option<Address> {
    match index.checked_mul(width) {
        Some(offset) => base.checked_add(offset),
        None => None,
    }
}
