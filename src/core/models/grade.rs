//! Letter-grade model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Point value of the best grade (`A+`) on the 4.5-point scale.
pub const MAX_GRADE_POINTS: f64 = 4.5;

/// A letter grade on the 4.5-point scale.
///
/// The symbol-to-points mapping is total and constant: grades step down
/// from `A+` (4.5) to `D0` (1.0) in 0.5 increments, and `F` is 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (4.5 points)
    #[default]
    #[serde(rename = "A+")]
    APlus,
    /// A0 (4.0 points)
    #[serde(rename = "A0")]
    A0,
    /// B+ (3.5 points)
    #[serde(rename = "B+")]
    BPlus,
    /// B0 (3.0 points)
    #[serde(rename = "B0")]
    B0,
    /// C+ (2.5 points)
    #[serde(rename = "C+")]
    CPlus,
    /// C0 (2.0 points)
    #[serde(rename = "C0")]
    C0,
    /// D+ (1.5 points)
    #[serde(rename = "D+")]
    DPlus,
    /// D0 (1.0 points)
    #[serde(rename = "D0")]
    D0,
    /// F (0.0 points)
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// All grades, best first. Useful for building selection lists.
    pub const ALL: [Self; 9] = [
        Self::APlus,
        Self::A0,
        Self::BPlus,
        Self::B0,
        Self::CPlus,
        Self::C0,
        Self::DPlus,
        Self::D0,
        Self::F,
    ];

    /// Numeric point value of this grade.
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::APlus => 4.5,
            Self::A0 => 4.0,
            Self::BPlus => 3.5,
            Self::B0 => 3.0,
            Self::CPlus => 2.5,
            Self::C0 => 2.0,
            Self::DPlus => 1.5,
            Self::D0 => 1.0,
            Self::F => 0.0,
        }
    }

    /// Whether this grade counts as low for recommendation purposes
    /// (C+ and below).
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(
            self,
            Self::CPlus | Self::C0 | Self::DPlus | Self::D0 | Self::F
        )
    }

    /// The grade symbol as displayed to the user (e.g., "A+", "C0").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A0 => "A0",
            Self::BPlus => "B+",
            Self::B0 => "B0",
            Self::CPlus => "C+",
            Self::C0 => "C0",
            Self::DPlus => "D+",
            Self::D0 => "D0",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(Self::APlus),
            "A0" => Ok(Self::A0),
            "B+" => Ok(Self::BPlus),
            "B0" => Ok(Self::B0),
            "C+" => Ok(Self::CPlus),
            "C0" => Ok(Self::C0),
            "D+" => Ok(Self::DPlus),
            "D0" => Ok(Self::D0),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown grade symbol: '{other}'")),
        }
    }
}
