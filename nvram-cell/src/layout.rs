//! Declaration of persistent layouts.

/// Declare a group of cells placed back to back from a base address.
///
/// Each field becomes an associated constant of the generated type, located right
/// after the previous one. Fields are declared with a cell type: [`NvCell`](crate::NvCell),
/// one of its [aliases](crate::aliases) or [`NvArray`](crate::NvArray). The generated
/// type also carries `BASE`, `END` and `SPAN` constants, so layouts can be chained.
///
/// A layout that does not fit in the address space is rejected when its constants
/// are evaluated at build time.
///
/// # Example
///
/// ```ignore
/// use nvram_cell::{nv_layout, NvArray, NvBool, NvU32, NvU8};
///
/// nv_layout! {
///     /// Settings kept across resets.
///     pub struct Settings(0x10) {
///         BOOT_COUNT: NvU32,
///         BRIGHTNESS: NvU8,
///         MUTED: NvBool,
///         HISTORY: NvArray<u16, 8>,
///     }
/// }
///
/// nv_layout! {
///     pub struct Calibration(Settings::END) {
///         GAIN: nvram_cell::NvF32,
///     }
/// }
///
/// Settings::BOOT_COUNT.increment(&mut eeprom)?;
/// ```
#[macro_export]
macro_rules! nv_layout {
    (@fields ($offset:expr)) => {
        /// First address after the layout.
        pub const END: $crate::Address = $offset;
    };

    (@fields ($offset:expr)
        $(#[$field_meta:meta])*
        $field:ident : $ty:ty
        $(, $($rest:tt)*)?
    ) => {
        $(#[$field_meta])*
        pub const $field: $ty = <$ty>::new($offset);

        $crate::nv_layout!(@fields (
            match Self::$field.end() {
                Some(end) => end,
                None => panic!("persistent layout runs past the end of the address space"),
            }
        ) $($($rest)*)?);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($base:expr) {
            $($fields:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name;

        #[allow(dead_code)]
        impl $name {
            /// First address of the layout.
            pub const BASE: $crate::Address = $base;

            $crate::nv_layout!(@fields (Self::BASE) $($fields)*);

            /// Number of persistent bytes covered by the layout.
            pub const SPAN: usize = Self::END - Self::BASE;
        }
    };
}
