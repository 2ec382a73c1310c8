//! Compound assignments and increments for cells of fundamental types.
//!
//! Every operation performs exactly one read and one write of the device, with no
//! value kept in RAM between calls. A change made to the cell through another path
//! is therefore seen by the next operation. Nothing makes the read-modify-write
//! sequence atomic.

use storage_bus::ByteStorage;

use crate::{Arithmetic, Bitwise, Error, Logic, NvCell};

impl<T: Arithmetic> NvCell<T> {
    /// `cell += rhs`
    pub fn add_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.plus(rhs)))?;
        Ok(self)
    }

    /// `cell -= rhs`
    pub fn sub_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.minus(rhs)))?;
        Ok(self)
    }

    /// `cell *= rhs`
    pub fn mul_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.times(rhs)))?;
        Ok(self)
    }

    /// `cell /= rhs`
    pub fn div_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| value.divided(rhs).ok_or(Error::DivisionByZero))?;
        Ok(self)
    }

    /// `cell %= rhs`
    pub fn rem_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| value.remainder(rhs).ok_or(Error::DivisionByZero))?;
        Ok(self)
    }

    /// `++cell`: returns the incremented value.
    pub fn increment<S: ByteStorage>(&self, storage: &mut S) -> Result<T, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.plus(T::ONE)))
    }

    /// `--cell`: returns the decremented value.
    pub fn decrement<S: ByteStorage>(&self, storage: &mut S) -> Result<T, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.minus(T::ONE)))
    }

    /// `cell++`: returns the value held before the increment.
    pub fn post_increment<S: ByteStorage>(&self, storage: &mut S) -> Result<T, Error<S::Error>> {
        let previous = self.read(storage)?;
        self.write(storage, previous.plus(T::ONE))?;
        Ok(previous)
    }

    /// `cell--`: returns the value held before the decrement.
    pub fn post_decrement<S: ByteStorage>(&self, storage: &mut S) -> Result<T, Error<S::Error>> {
        let previous = self.read(storage)?;
        self.write(storage, previous.minus(T::ONE))?;
        Ok(previous)
    }
}

impl<T: Logic> NvCell<T> {
    /// `cell |= rhs`
    pub fn bitor_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.or(rhs)))?;
        Ok(self)
    }

    /// `cell &= rhs`
    pub fn bitand_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.and(rhs)))?;
        Ok(self)
    }

    /// `cell ^= rhs`
    pub fn bitxor_assign<S: ByteStorage>(&self, storage: &mut S, rhs: T) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.xor(rhs)))?;
        Ok(self)
    }
}

impl<T: Bitwise> NvCell<T> {
    /// `cell <<= bits`
    pub fn shl_assign<S: ByteStorage>(&self, storage: &mut S, bits: u32) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.shifted_left(bits)))?;
        Ok(self)
    }

    /// `cell >>= bits`
    pub fn shr_assign<S: ByteStorage>(&self, storage: &mut S, bits: u32) -> Result<&Self, Error<S::Error>> {
        self.modify(storage, |value| Ok(value.shifted_right(bits)))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storage_bus::{ErrorKind, MemStorage};

    type Storage = MemStorage<32>;

    fn cell_holding<T: crate::CellValue>(storage: &mut Storage, address: usize, value: T) -> NvCell<T> {
        let cell = NvCell::new(address);
        cell.write(storage, value).unwrap();
        storage.reset_counters();
        cell
    }

    #[test]
    fn test_u8_add_wraps_with_one_write() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 5, 200u8);
        cell.add_assign(&mut storage, 100).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(44));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_unchanged_result_is_not_written() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, 0x1234_5678u32);
        cell.add_assign(&mut storage, 0).unwrap();
        cell.mul_assign(&mut storage, 1).unwrap();
        cell.bitor_assign(&mut storage, 0).unwrap();
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.reads(), 3 * 4 * 2);
    }

    #[test]
    fn test_compound_chain() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 8, 10i32);
        cell.sub_assign(&mut storage, 15)
            .and_then(|cell| cell.mul_assign(&mut storage, 3))
            .and_then(|cell| cell.rem_assign(&mut storage, 4))
            .unwrap();
        assert_eq!(cell.read(&mut storage), Ok(-3));
    }

    #[test]
    fn test_increments() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, 41u16);
        assert_eq!(cell.increment(&mut storage), Ok(42));
        assert_eq!(cell.post_increment(&mut storage), Ok(42));
        assert_eq!(cell.read(&mut storage), Ok(43));
        assert_eq!(cell.decrement(&mut storage), Ok(42));
        assert_eq!(cell.post_decrement(&mut storage), Ok(42));
        assert_eq!(cell.read(&mut storage), Ok(41));
    }

    #[test]
    fn test_increment_wraps() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, u8::MAX);
        assert_eq!(cell.post_increment(&mut storage), Ok(u8::MAX));
        assert_eq!(cell.read(&mut storage), Ok(0));
        assert_eq!(cell.decrement(&mut storage), Ok(u8::MAX));
    }

    #[test]
    fn test_division_by_zero_leaves_cell_untouched() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, 9u32);
        assert_eq!(
            cell.div_assign(&mut storage, 0).map(|_| ()),
            Err(Error::<ErrorKind>::DivisionByZero)
        );
        assert_eq!(
            cell.rem_assign(&mut storage, 0).map(|_| ()),
            Err(Error::<ErrorKind>::DivisionByZero)
        );
        assert_eq!(storage.writes(), 0);
        assert_eq!(cell.read(&mut storage), Ok(9));
    }

    #[test]
    fn test_float_operations() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 4, 1.5f32);
        cell.mul_assign(&mut storage, 4.0).unwrap();
        cell.sub_assign(&mut storage, 0.5).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(5.5));
        assert_eq!(cell.post_increment(&mut storage), Ok(5.5));
        cell.div_assign(&mut storage, 0.0).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(f32::INFINITY));
    }

    #[test]
    fn test_bool_logic() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, false);
        cell.bitor_assign(&mut storage, true).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(true));
        cell.bitxor_assign(&mut storage, true).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(false));
        cell.bitand_assign(&mut storage, true).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(false));
    }

    #[test]
    fn test_shifts() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, 0x0Fu16);
        cell.shl_assign(&mut storage, 4).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(0xF0));
        cell.shr_assign(&mut storage, 6).unwrap();
        assert_eq!(cell.read(&mut storage), Ok(0x03));
    }

    #[test]
    fn test_operations_see_external_changes() {
        let mut storage = Storage::new();
        let cell = cell_holding(&mut storage, 0, 1u8);
        storage.poke(0, 10).unwrap();
        assert_eq!(cell.increment(&mut storage), Ok(11));
    }

    proptest! {
        #[test]
        fn prop_compound_matches_direct(v in any::<i32>(), x in any::<i32>(), bits in 0u32..64) {
            let mut storage = Storage::new();
            let cell = NvCell::<i32>::new(0);

            let cases: [(fn(&NvCell<i32>, &mut Storage, i32) -> Result<(), Error<ErrorKind>>, Option<i32>); 7] = [
                (|c, s, x| c.add_assign(s, x).map(|_| ()), Some(v.wrapping_add(x))),
                (|c, s, x| c.sub_assign(s, x).map(|_| ()), Some(v.wrapping_sub(x))),
                (|c, s, x| c.mul_assign(s, x).map(|_| ()), Some(v.wrapping_mul(x))),
                (|c, s, x| c.div_assign(s, x).map(|_| ()), (x != 0).then(|| v.wrapping_div(x))),
                (|c, s, x| c.bitor_assign(s, x).map(|_| ()), Some(v | x)),
                (|c, s, x| c.bitand_assign(s, x).map(|_| ()), Some(v & x)),
                (|c, s, x| c.bitxor_assign(s, x).map(|_| ()), Some(v ^ x)),
            ];
            for (operation, expected) in cases {
                cell.write(&mut storage, v).unwrap();
                let outcome = operation(&cell, &mut storage, x);
                match expected {
                    Some(expected) => {
                        prop_assert_eq!(outcome, Ok(()));
                        prop_assert_eq!(cell.read(&mut storage), Ok(expected));
                    }
                    None => {
                        prop_assert_eq!(outcome, Err(Error::DivisionByZero));
                    }
                }
            }

            cell.write(&mut storage, v).unwrap();
            cell.rem_assign(&mut storage, x | 1).unwrap();
            prop_assert_eq!(cell.read(&mut storage), Ok(v.wrapping_rem(x | 1)));

            cell.write(&mut storage, v).unwrap();
            cell.shl_assign(&mut storage, bits).unwrap();
            prop_assert_eq!(cell.read(&mut storage), Ok(v.wrapping_shl(bits)));

            cell.write(&mut storage, v).unwrap();
            cell.shr_assign(&mut storage, bits).unwrap();
            prop_assert_eq!(cell.read(&mut storage), Ok(v.wrapping_shr(bits)));
        }

        #[test]
        fn prop_increment_forms(v in any::<u64>()) {
            let mut storage = Storage::new();
            let cell = NvCell::<u64>::new(16);

            cell.write(&mut storage, v).unwrap();
            prop_assert_eq!(cell.increment(&mut storage), Ok(v.wrapping_add(1)));
            prop_assert_eq!(cell.read(&mut storage), Ok(v.wrapping_add(1)));

            cell.write(&mut storage, v).unwrap();
            prop_assert_eq!(cell.post_increment(&mut storage), Ok(v));
            prop_assert_eq!(cell.read(&mut storage), Ok(v.wrapping_add(1)));
        }

        #[test]
        fn prop_u8_one_write_per_operation(v in any::<u8>(), x in any::<u8>()) {
            let mut storage = Storage::new();
            let cell = cell_holding(&mut storage, 0, v);
            cell.add_assign(&mut storage, x).unwrap();
            prop_assert_eq!(storage.reads(), 2);
            prop_assert_eq!(storage.writes(), usize::from(x != 0));
        }
    }
}
