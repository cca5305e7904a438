//! Identifier types for the task domain.
//!
//! Every entity a task touches is addressed by an opaque UUID newtype so that
//! a tag identifier can never be passed where an event identifier is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a task.
    TaskId
);

uuid_identifier!(
    /// Unique identifier for a checklist item owned by a task.
    TaskItemId
);

uuid_identifier!(
    /// Identifier of the user owning a task.
    UserId
);

uuid_identifier!(
    /// Identifier of the tag a task is filed under.
    TagId
);

uuid_identifier!(
    /// Identifier of the calendar event a task belongs to.
    EventId
);

uuid_identifier!(
    /// Identifier of a hashtag attached to a task.
    HashtagId
);
