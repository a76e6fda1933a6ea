//! Strongly-typed ID wrappers for expenses and their owners
//!
//! Expense and owner IDs are both UUIDs; the newtypes keep them from being
//! swapped at call sites. The text form carries a type prefix
//! (`exp-<uuid>`, `usr-<uuid>`) and parses back to the same ID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Prefix plus the first eight hex digits, for messages
            pub fn short(&self) -> String {
                format!("{}{}", $prefix, &self.0.simple().to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        /// Accepts the `Display` form or a bare UUID
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(UserId, "usr-");

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }

    #[test]
    fn test_display_is_prefixed_full_uuid() {
        let id: ExpenseId = RAW.parse().unwrap();
        assert_eq!(id.to_string(), format!("exp-{}", RAW));
        assert_eq!(id.short(), "exp-550e8400");
    }

    #[test]
    fn test_display_parses_back() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        let expense = ExpenseId::new();
        assert_eq!(expense.to_string().parse::<ExpenseId>().unwrap(), expense);
    }

    #[test]
    fn test_bare_uuid_parses() {
        let plain: ExpenseId = RAW.parse().unwrap();
        let prefixed: ExpenseId = format!("exp-{}", RAW).parse().unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_other_type_prefix_is_rejected() {
        assert!(format!("usr-{}", RAW).parse::<ExpenseId>().is_err());
        assert!(format!("exp-{}", RAW).parse::<UserId>().is_err());
        assert!("exp-550e8400".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id: UserId = RAW.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", RAW));
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
