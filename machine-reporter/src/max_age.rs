use std::fmt;
use std::str::FromStr;

const NANOS_PER_DAY: f64 = 86_400.0 * 1_000_000_000.0;

#[derive(Debug, thiserror::Error)]
pub enum MaxAgeError {
    #[error("max age must be a finite, non-negative number of days, got {0}")]
    OutOfRange(f64),
    #[error("invalid number of days {0:?}")]
    Days(String),
    #[error("invalid duration {duration:?}: {reason}")]
    Duration { duration: String, reason: String },
}

/// Age threshold in fractional days. Machines strictly older are stale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MaxAge {
    days: f64,
}

impl MaxAge {
    pub const DEFAULT_DAYS: f64 = 28.0;

    pub fn from_days(days: f64) -> Result<Self, MaxAgeError> {
        if days.is_finite() && days >= 0.0 {
            Ok(Self { days })
        } else {
            Err(MaxAgeError::OutOfRange(days))
        }
    }

    /// Parse a Go style duration such as `672h` or `1h30m`.
    pub fn from_duration(duration: &str) -> Result<Self, MaxAgeError> {
        let nanos = go_parse_duration::parse_duration(duration).map_err(|err| {
            MaxAgeError::Duration {
                duration: duration.to_string(),
                reason: format!("{err:?}"),
            }
        })?;
        Self::from_days(nanos as f64 / NANOS_PER_DAY)
    }

    pub fn days(&self) -> f64 {
        self.days
    }
}

impl Default for MaxAge {
    fn default() -> Self {
        Self {
            days: Self::DEFAULT_DAYS,
        }
    }
}

impl FromStr for MaxAge {
    type Err = MaxAgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .trim()
            .parse::<f64>()
            .map_err(|_| MaxAgeError::Days(s.to_string()))?;
        Self::from_days(days)
    }
}

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days)
    }
}
