//! Calendar month used to scope groups, students, lessons and score titles.
//!
//! Months are plain numbers `1..=12`. Month 1 has no predecessor, which is
//! what makes month propagation a no-op for January.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const FIRST_MONTH: i64 = 1;
pub const LAST_MONTH: i64 = 12;

/// A validated month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Month(i64);

impl Month {
    /// Validate a raw month number.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (FIRST_MONTH..=LAST_MONTH).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "month must be between {FIRST_MONTH} and {LAST_MONTH}, got {value}"
            )))
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// The month data is copied from when advancing to `self`.
    ///
    /// `None` for the first month.
    pub fn previous(self) -> Option<Self> {
        if self.0 > FIRST_MONTH {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_full_range() {
        for m in FIRST_MONTH..=LAST_MONTH {
            assert_eq!(Month::new(m).unwrap().get(), m);
        }
    }

    #[test]
    fn rejects_zero_and_thirteen() {
        assert_matches!(Month::new(0), Err(CoreError::Validation(_)));
        assert_matches!(Month::new(13), Err(CoreError::Validation(_)));
        assert_matches!(Month::new(-4), Err(CoreError::Validation(_)));
    }

    #[test]
    fn first_month_has_no_previous() {
        assert_eq!(Month::new(1).unwrap().previous(), None);
    }

    #[test]
    fn previous_steps_back_one() {
        let march = Month::new(3).unwrap();
        assert_eq!(march.previous(), Some(Month::new(2).unwrap()));
    }

    #[test]
    fn deserializes_from_number_and_rejects_out_of_range() {
        let m: Month = serde_json::from_str("7").unwrap();
        assert_eq!(m.get(), 7);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Month::new(11).unwrap()).unwrap();
        assert_eq!(json, "11");
    }
}
