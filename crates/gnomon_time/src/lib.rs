//! Time representations for the solar pipeline.
//!
//! This crate provides:
//! - Timestamp parsing (`YYYY-MM-DDTHH:mm:SS±HHMM`) to milliseconds since 1970
//! - The continuous day-count scale anchored at J2000.0 and its inverse
//! - Greenwich and local mean sidereal angle
//!
//! No leap seconds, no timezone database: an explicit numeric offset is the
//! only zone information a timestamp carries.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod timestamp;

pub use civil::{civil_from_days, days_from_civil, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{
    DayNumber, EXACT_ROUNDTRIP_SPAN_MS, MS_PER_DAY, REFERENCE_EPOCH_MS, from_calendar, to_calendar,
};
pub use sidereal::{
    GMST0, GMST1, greenwich_sidereal_angle, local_sidereal_angle, local_sidereal_hours,
};
pub use timestamp::{Timestamp, parse_timestamp};
