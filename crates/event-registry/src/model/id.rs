//! Typed identifiers.
//!
//! Every store hands out random v4 UUIDs, wrapped in one newtype per entity so that
//! a [`UserId`] can never be passed where an [`EventId`] is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](crate::model::User).
    UserId
);
entity_id!(
    /// Identifier of an [`Event`](crate::model::Event).
    EventId
);
entity_id!(
    /// Identifier of a [`Speaker`](crate::model::Speaker).
    SpeakerId
);
entity_id!(
    /// Identifier of a [`Registration`](crate::model::Registration).
    RegistrationId
);
