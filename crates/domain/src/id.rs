//! Typed identifier newtypes backed by database integer keys.
//!
//! Identifiers are assigned by the database (`INTEGER PRIMARY KEY
//! AUTOINCREMENT`); an id only exists once a row does, so there is no
//! client-side generation here.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing database key.
            #[must_use]
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer key.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

define_id!(
    /// Unique identifier for a [`Game`](crate::game::Game).
    GameId
);

define_id!(
    /// Unique identifier for a [`Review`](crate::review::Review).
    ReviewId
);

define_id!(
    /// Unique identifier for a [`Bakery`](crate::bakery::Bakery).
    BakeryId
);

define_id!(
    /// Unique identifier for a [`BakedGood`](crate::baked_good::BakedGood).
    BakedGoodId
);
