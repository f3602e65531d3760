use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Author identity, resolved by the authentication provider
define_id!(UserId);

/// Deterministic identity for a promo code.
///
/// Derived from the normalized (service name, code) pair rather than a random
/// value, so the same pair always resolves to the same identity. The backend
/// relies on this for deduplication of resubmitted codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoCodeId(String);

impl PromoCodeId {
    /// Derive the identity from a service name and a code.
    ///
    /// Both parts are lowercased and stripped of all whitespace, then joined
    /// with an underscore: `("Netflix", "SAVE20")` derives `netflix_save20`.
    pub fn derive(service_name: &str, code: &str) -> Self {
        Self(format!("{}_{}", normalize(service_name), normalize(code)))
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PromoCodeId> for String {
    fn from(id: PromoCodeId) -> String {
        id.0
    }
}

fn normalize(value: &str) -> String {
    value.to_lowercase().split_whitespace().collect()
}
