//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` because
//! the loader hands out raw integers from its input rows; callers should
//! otherwise treat these as opaque.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer id, for log keys and display.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> Self {
                Self(n)
            }
        }
    };
}

typed_id! {
    /// Identifier of one package, unique for the whole operating day.
    pub struct PackageId(u32);
}

typed_id! {
    /// Identifier of one delivery truck.
    pub struct TruckId(u32);
}

typed_id! {
    /// Identifier of a delivery group.  All packages sharing a `GroupId`
    /// must board the same truck in the same loading pass.
    pub struct GroupId(u32);
}
