//! Storage bus error traits.

/// Storage bus error.
pub trait Error: core::fmt::Debug {
    /// Convert error to a generic storage error kind.
    ///
    /// By using this method, storage errors freely defined by HAL implementations
    /// can be converted to a set of generic storage errors upon which generic
    /// code can act.
    fn kind(&self) -> ErrorKind;
}

impl Error for core::convert::Infallible {
    #[inline]
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

/// Storage bus error kind.
///
/// This represents a common set of persistent storage errors. HAL implementations are
/// free to define more specific or additional error types. However, by providing
/// a mapping to these common errors, generic code can still react to them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The access touches an address beyond the capacity of the device.
    OutOfRange,
    /// The device did not finish its internal write cycle in time.
    Timeout,
    /// Error raised by the underlying I2C bus.
    I2c(embedded_hal::i2c::ErrorKind),
    /// A different error occurred. The original error may contain more information.
    Other,
}

impl From<embedded_hal::i2c::ErrorKind> for ErrorKind {
    fn from(value: embedded_hal::i2c::ErrorKind) -> Self {
        Self::I2c(value)
    }
}

impl Error for ErrorKind {
    #[inline]
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl core::fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "Address is outside of the storage capacity"),
            Self::Timeout => write!(f, "Device did not acknowledge after its write cycle"),
            Self::I2c(e) => e.fmt(f),
            Self::Other => write!(
                f,
                "A different error occurred. The original error may contain more information"
            ),
        }
    }
}

/// Storage error type trait.
///
/// This just defines the error type, to be used by the other traits.
pub trait ErrorType {
    /// Error type
    type Error: Error;
}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}
