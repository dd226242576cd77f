// ABOUTME: Newtype identifiers for containers and networks.
// ABOUTME: Keeps the two ID spaces distinct in the snapshot trait signatures.

use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[must_use = "IDs reference resources and should not be ignored"]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Runtime-assigned container identifier.
    ContainerId
}

define_id! {
    /// Runtime-assigned network identifier.
    NetworkId
}
