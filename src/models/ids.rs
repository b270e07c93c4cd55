//! Strongly-typed ID wrappers for person roles
//!
//! Student and instructor IDs live in independent numeric spaces. Wrapping
//! them in distinct newtypes keeps the two from being mixed at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CcrmError;

/// Macro to generate positive numeric ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $entity:literal, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// Create an ID, rejecting zero, negative and out-of-range values
            pub fn new(value: i64) -> Result<Self, CcrmError> {
                if value <= 0 {
                    return Err(CcrmError::InvalidArgument(format!(
                        "{} ID must be positive, got {}",
                        $entity, value
                    )));
                }
                u32::try_from(value).map(Self).map_err(|_| {
                    CcrmError::InvalidArgument(format!("{} ID out of range: {}", $entity, value))
                })
            }

            /// The first ID handed out in an empty collection
            pub fn first() -> Self {
                Self(1)
            }

            /// The ID following this one; fails once the ID space is used up
            pub fn next(self) -> Result<Self, CcrmError> {
                self.0.checked_add(1).map(Self).ok_or_else(|| {
                    CcrmError::InvalidArgument(format!("No {} IDs left after {}", $entity, self.0))
                })
            }

            /// Get the underlying number
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = CcrmError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = CcrmError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                // An optional role prefix is accepted, e.g. "S-3"
                let digits = s
                    .strip_prefix($display_prefix)
                    .unwrap_or(s);
                let value: i64 = digits.parse().map_err(|_| {
                    CcrmError::InvalidArgument(format!("Invalid {} ID: '{}'", $entity, s))
                })?;
                Self::new(value)
            }
        }
    };
}

define_id!(StudentId, "Student", "S-");
define_id!(InstructorId, "Instructor", "I-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ids_only() {
        assert!(StudentId::new(1).is_ok());
        assert!(StudentId::new(0).unwrap_err().is_invalid_argument());
        assert!(InstructorId::new(-4).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_next_is_monotonic() {
        let id = StudentId::first();
        assert_eq!(id.value(), 1);
        assert_eq!(id.next().unwrap().value(), 2);
        assert!(id.next().unwrap() > id);
    }

    #[test]
    fn test_parse() {
        assert_eq!("7".parse::<StudentId>().unwrap().value(), 7);
        assert_eq!("S-7".parse::<StudentId>().unwrap().value(), 7);
        assert_eq!(" I-2 ".parse::<InstructorId>().unwrap().value(), 2);
        assert!("seven".parse::<StudentId>().is_err());
        assert!("-1".parse::<StudentId>().is_err());
    }

    #[test]
    fn test_serde_rejects_non_positive() {
        let id: StudentId = serde_json::from_str("12").unwrap();
        assert_eq!(id.value(), 12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        assert!(serde_json::from_str::<StudentId>("0").is_err());
    }
}
