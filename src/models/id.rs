//! Identifier newtypes
//!
//! Players, stations and both token kinds are all numbered from 1 in the
//! authored data. Wrapping them keeps a wagon ID from being looked up in the
//! locomotive index and vice versa.
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Player identifier
    PlayerId
);
define_id!(
    /// Station identifier
    StationId
);
define_id!(
    /// Locomotive token identifier
    LocomotiveId
);
define_id!(
    /// Wagon token identifier
    WagonId
);
