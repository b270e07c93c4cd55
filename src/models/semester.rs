//! Academic semester
//!
//! Declaration order is calendar order, which is also transcript order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CcrmError;

/// A semester within the academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// All semesters in transcript order
    pub const ALL: [Semester; 3] = [Semester::Spring, Semester::Summer, Semester::Fall];

    /// Interchange token for this semester
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Semester {
    type Err = CcrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sem| sem.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                CcrmError::InvalidArgument(format!(
                    "Unknown semester '{}'. Valid semesters: SPRING, SUMMER, FALL",
                    token
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_order() {
        assert!(Semester::Spring < Semester::Summer);
        assert!(Semester::Summer < Semester::Fall);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("fall".parse::<Semester>().unwrap(), Semester::Fall);
        assert_eq!(Semester::Summer.to_string(), "SUMMER");
        assert!("WINTER".parse::<Semester>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&Semester::Spring).unwrap(), "\"SPRING\"");
    }
}
