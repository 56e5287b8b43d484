//! Continuous day-count time scale anchored at J2000.0.
//!
//! A "Julian time" here is the signed, fractional number of days elapsed
//! since the J2000.0 reference instant. Calendar instants are milliseconds
//! since 1970-01-01T00:00:00Z, the same representation
//! [`crate::parse_timestamp`] produces.

use crate::error::TimeError;
use crate::timestamp::parse_timestamp;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// The J2000.0 epoch, `2000-01-01T11:58:55.816Z`, in milliseconds since
/// 1970-01-01T00:00:00Z.
pub const REFERENCE_EPOCH_MS: i64 = 946_727_935_816;

/// Julian time (days past the reference epoch) for a calendar instant.
///
/// `jt = (epoch_ms - REFERENCE_EPOCH_MS) / MS_PER_DAY`
///
/// Total over `i64`: the difference is taken in `i128`.
pub fn from_calendar(epoch_ms: i64) -> f64 {
    (i128::from(epoch_ms) - i128::from(REFERENCE_EPOCH_MS)) as f64 / MS_PER_DAY as f64
}

/// Calendar instant for a Julian time, rounded to the nearest millisecond.
///
/// `epoch_ms = round(jt · MS_PER_DAY) + REFERENCE_EPOCH_MS`
///
/// Results beyond the `i64` range saturate at `i64::MIN`/`i64::MAX`; NaN
/// maps to the reference epoch.
///
/// `to_calendar(from_calendar(ms)) == ms` holds exactly while
/// `|ms - REFERENCE_EPOCH_MS| < 2^51` (about ±71 000 years around J2000).
/// Past that the day count no longer resolves single milliseconds and the
/// round trip can be off by one.
pub fn to_calendar(jt: f64) -> i64 {
    let offset = (jt * MS_PER_DAY as f64).round() as i128;
    let ms = offset + i128::from(REFERENCE_EPOCH_MS);
    ms.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Largest distance from the reference epoch, in milliseconds, for which
/// the calendar round trip is exact.
pub const EXACT_ROUNDTRIP_SPAN_MS: i64 = (1 << 51) - 1;

/// A point on the continuous time scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayNumber {
    days: f64,
}

impl DayNumber {
    /// The reference epoch itself.
    pub const EPOCH: DayNumber = DayNumber { days: 0.0 };

    /// Create from days past the reference epoch.
    pub fn from_days(days: f64) -> Self {
        Self { days }
    }

    /// Create from milliseconds since 1970-01-01T00:00:00Z.
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self {
            days: from_calendar(epoch_ms),
        }
    }

    /// Parse a timestamp such as `2019-06-21T11:49:03+0200`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        Ok(Self::from_epoch_ms(parse_timestamp(s)?))
    }

    /// Days past the reference epoch.
    pub fn days(self) -> f64 {
        self.days
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub fn as_epoch_ms(self) -> i64 {
        to_calendar(self.days)
    }

    /// Shift by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self {
            days: self.days + days,
        }
    }
}

impl From<f64> for DayNumber {
    fn from(days: f64) -> Self {
        Self::from_days(days)
    }
}

impl std::fmt::Display for DayNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "J2000{:+.9}", self.days)
    }
}
