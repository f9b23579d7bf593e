//! Strongly-typed identifiers for synthesized orders.
//!
//! These prevent mixing up the client order ID with the venue order ID,
//! which appear side by side in every execution report.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a UUID v4 identifier from the given random source.
            ///
            /// Drawing from a caller-owned RNG keeps generation reproducible
            /// under a fixed seed.
            #[must_use]
            pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let bytes: [u8; 16] = rng.random();
                Self(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(ClientOrderId, "Client-assigned order identifier (FIX tag 11).");
define_id!(OrderId, "Venue-assigned order identifier (FIX tag 37).");
define_id!(
    ExecutionId,
    "Identifier of a single execution report (FIX tag 17)."
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_ids_are_uuid_v4() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = ClientOrderId::generate(&mut rng);
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn generated_ids_are_unique_per_draw() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = OrderId::generate(&mut rng);
        let second = OrderId::generate(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn same_seed_reproduces_ids() {
        let a = ExecutionId::generate(&mut StdRng::seed_from_u64(99));
        let b = ExecutionId::generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn display_matches_inner_value() {
        let id = OrderId::new("ord-123");
        assert_eq!(format!("{id}"), "ord-123");
        assert_eq!(id.as_ref(), "ord-123");
        let from: OrderId = "ord-123".into();
        assert_eq!(from, id);
    }
}
