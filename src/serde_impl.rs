//! Serde support for rescue strategies (feature-gated)
//!
//! This module provides `Serialize` and `Deserialize` implementations for
//! [`Rescue`] when the `serde` feature is enabled, so applications can pick
//! a rescue strategy from configuration. A strategy serializes as its
//! lowercase name; anything else fails deserialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use rite::Rescue;
//!
//! let strategy: Rescue = serde_json::from_str(r#""wrapping""#).unwrap();
//! assert_eq!(strategy, Rescue::Wrapping);
//!
//! let bad: Result<Rescue, _> = serde_json::from_str(r#""retrying""#);
//! assert!(bad.is_err());
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::rescue::Rescue;

const VARIANTS: &[&str] = &["reraising", "ignoring", "wrapping"];

impl Serialize for Rescue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Rescue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RescueVisitor;

        impl de::Visitor<'_> for RescueVisitor {
            type Value = Rescue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "one of `reraising`, `ignoring` or `wrapping`")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(|_| E::unknown_variant(v, VARIANTS))
            }
        }

        deserializer.deserialize_str(RescueVisitor)
    }
}
