//! Street-address value type.
//!
//! Two locations are the same delivery stop iff every field matches, so
//! `Eq`/`Hash`/`Ord` are derived over the full tuple.  `Ord` additionally
//! gives the loading policy a cheap "cluster same-address drops" sort key.

use std::fmt;

/// An immutable street address: the key type of the distance map and the
/// destination of every package.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub street: String,
    pub city:   String,
    pub state:  String,
    pub postal: String,
}

impl Location {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city:   city.into(),
            state:  state.into(),
            postal: postal.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.postal
        )
    }
}
