//! Errors raised by typed cell accesses.

use storage_bus::{Address, ErrorKind};

/// Error of a typed cell access over a storage device whose own error type is `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The storage device failed.
    Storage(E),
    /// The cell does not fit in the device. Nothing was accessed.
    OutOfRange {
        /// First address of the cell.
        address: Address,
        /// Number of bytes covered by the cell.
        span: usize,
    },
    /// The stored bytes are not a valid value of the cell type.
    InvalidValue {
        /// First address of the cell.
        address: Address,
    },
    /// Integer division or remainder by zero. The stored value is left untouched.
    DivisionByZero,
}

impl<E: storage_bus::Error> storage_bus::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Storage(e) => e.kind(),
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidValue { .. } | Self::DivisionByZero => ErrorKind::Other,
        }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {e}"),
            Self::OutOfRange { address, span } => write!(
                f,
                "Cell of {span} bytes at address {address:#x} does not fit in the device"
            ),
            Self::InvalidValue { address } => {
                write!(f, "Bytes stored at address {address:#x} are not a valid value")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}
