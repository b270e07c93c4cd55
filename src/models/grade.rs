//! Letter grades and their GPA point values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CcrmError;

/// A letter grade, ordered from best (S) to worst (F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    /// Fail
    F,
}

impl Grade {
    /// All grades, best first
    pub const ALL: [Grade; 7] = [
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
    ];

    /// Point value used for GPA weighting
    pub fn points(&self) -> u32 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::F => 0,
        }
    }

    /// Everything except F is a pass
    pub fn is_passing(&self) -> bool {
        !matches!(self, Self::F)
    }

    /// Interchange token for this grade
    pub fn name(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Grade {
    type Err = CcrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                CcrmError::InvalidArgument(format!(
                    "Unknown grade '{}'. Valid grades: S, A, B, C, D, E, F",
                    token
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        let points: Vec<u32> = Grade::ALL.iter().map(Grade::points).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5, 0]);
    }

    #[test]
    fn test_fail_sentinel() {
        assert!(!Grade::F.is_passing());
        assert!(Grade::E.is_passing());
    }

    #[test]
    fn test_parse() {
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" s ".parse::<Grade>().unwrap(), Grade::S);
        assert!("G".parse::<Grade>().unwrap_err().is_invalid_argument());
        assert!("".parse::<Grade>().is_err());
    }
}
