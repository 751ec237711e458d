//! Valuation range parsing
//!
//! Ranges are entered as `min-max` strings (e.g. `18.67-20.67`) and kept as
//! plain bounds once parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, ValidationError};

/// Closed interval an initial valuation is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ValuationRange {
    pub min: f64,
    pub max: f64,
}

impl ValuationRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds positive and finite, `min <= max`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.min) || !positive(self.max) {
            return Err(ValidationError::NonPositiveValuation {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(ValidationError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for ValuationRange {
    fn default() -> Self {
        Self {
            min: 18.67,
            max: 20.67,
        }
    }
}

impl FromStr for ValuationRange {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FormatError::ValuationRange(s.to_string());

        let mut parts = s.split('-');
        let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let min = min.trim().parse::<f64>().map_err(|_| malformed())?;
        let max = max.trim().parse::<f64>().map_err(|_| malformed())?;

        Ok(Self { min, max })
    }
}

impl fmt::Display for ValuationRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<String> for ValuationRange {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ValuationRange> for String {
    fn from(range: ValuationRange) -> Self {
        range.to_string()
    }
}
