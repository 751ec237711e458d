use std::fmt;

/// Errors raised while parsing user-supplied parameter strings
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Valuation range was not of the form `min-max`
    ValuationRange(String),
    /// A numeric field could not be parsed
    Number { field: &'static str, value: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ValuationRange(input) => {
                write!(f, "valuation range {input:?} is not of the form min-max")
            }
            FormatError::Number { field, value } => {
                write!(f, "{field} {value:?} is not a valid number")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised when parsed parameters are outside their domain
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NoTokens,
    NonPositiveValuation { min: f64, max: f64 },
    InvertedRange { min: f64, max: f64 },
    NegativeGap(f64),
    SellPercentageOutOfRange(f64),
    /// `max + gap` leaves the representable range, so the sell window has no upper bound
    ValuationOverflow { max: f64, gap: f64 },
    TooManyIterations { requested: i64, limit: i64 },
    TooManyRuns { requested: usize, limit: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoTokens => write!(f, "token count must be greater than zero"),
            ValidationError::NonPositiveValuation { min, max } => {
                write!(
                    f,
                    "valuation range bounds must be positive and finite (min={min}, max={max})"
                )
            }
            ValidationError::InvertedRange { min, max } => {
                write!(f, "valuation range minimum {min} exceeds maximum {max}")
            }
            ValidationError::NegativeGap(gap) => {
                write!(f, "sell gap must be a non-negative number (got {gap})")
            }
            ValidationError::SellPercentageOutOfRange(pct) => {
                write!(f, "sell percentage must lie between 0 and 1 (got {pct})")
            }
            ValidationError::ValuationOverflow { max, gap } => {
                write!(f, "valuation {max} plus sell gap {gap} is too large")
            }
            ValidationError::TooManyIterations { requested, limit } => {
                write!(f, "max calculations {requested} exceeds the limit of {limit}")
            }
            ValidationError::TooManyRuns { requested, limit } => {
                write!(f, "run count {requested} exceeds the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Any error that prevents a simulation from starting
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Format(FormatError),
    Validation(ValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Format(e) => write!(f, "{e}"),
            ConfigError::Validation(e) => write!(f, "{e}"),
        }
    }
}

// Display already carries the inner message, so there is no separate source
impl std::error::Error for ConfigError {}

impl From<FormatError> for ConfigError {
    fn from(err: FormatError) -> Self {
        ConfigError::Format(err)
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_message_appears_once() {
        let err = ConfigError::from(FormatError::ValuationRange("abc".to_string()));
        assert_eq!(
            err.to_string(),
            "valuation range \"abc\" is not of the form min-max"
        );
        assert!(err.source().is_none());

        let err = ConfigError::from(ValidationError::NoTokens);
        assert_eq!(err.to_string(), "token count must be greater than zero");
        assert!(err.source().is_none());
    }
}
