//! Calendar timestamps with an explicit numeric UTC offset.
//!
//! The canonical text form is `YYYY-MM-DDTHH:mm:SS±HHMM`. The parser also
//! accepts a trailing `Z`, an offset written `±HH:MM`, a missing seconds
//! field and up to three fractional-second digits, which covers every
//! instant literal the solar fixtures use. Leap seconds and timezone names
//! are not supported.

use std::str::FromStr;

use log::debug;

use crate::civil::{civil_from_days, days_from_civil, days_in_month};
use crate::error::TimeError;
use crate::julian::MS_PER_DAY;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// A civil timestamp as written by a clock at a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    /// Offset east of UTC in minutes (`-0500` is `-300`).
    pub offset_minutes: i32,
}

impl Timestamp {
    /// Build a UTC timestamp with whole seconds.
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: 0,
            offset_minutes: 0,
        }
    }

    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub fn to_epoch_ms(&self) -> i64 {
        let days = days_from_civil(i64::from(self.year), self.month, self.day);
        let within_day = i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
            - i64::from(self.offset_minutes) * MS_PER_MINUTE;
        days.saturating_mul(MS_PER_DAY).saturating_add(within_day)
    }

    /// The wall-clock reading at `offset_minutes` for an instant given in
    /// milliseconds since 1970-01-01T00:00:00Z.
    pub fn from_epoch_ms(epoch_ms: i64, offset_minutes: i32) -> Self {
        let local = epoch_ms.saturating_add(i64::from(offset_minutes) * MS_PER_MINUTE);
        let days = local.div_euclid(MS_PER_DAY);
        let ms_of_day = local.rem_euclid(MS_PER_DAY);
        let (year, month, day) = civil_from_days(days);
        Self {
            year: year as i32,
            month,
            day,
            hour: (ms_of_day / MS_PER_HOUR) as u32,
            minute: (ms_of_day % MS_PER_HOUR / MS_PER_MINUTE) as u32,
            second: (ms_of_day % MS_PER_MINUTE / MS_PER_SECOND) as u32,
            millisecond: (ms_of_day % MS_PER_SECOND) as u32,
            offset_minutes,
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.millisecond != 0 {
            write!(f, ".{:03}", self.millisecond)?;
        }
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let off = self.offset_minutes.unsigned_abs();
        write!(f, "{sign}{:02}{:02}", off / 60, off % 60)
    }
}

impl FromStr for Timestamp {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ts = Parser::new(s).timestamp()?;
        debug!("parsed timestamp {s} -> {} ms", ts.to_epoch_ms());
        Ok(ts)
    }
}

/// Parse a timestamp string into milliseconds since 1970-01-01T00:00:00Z.
pub fn parse_timestamp(s: &str) -> Result<i64, TimeError> {
    Ok(s.parse::<Timestamp>()?.to_epoch_ms())
}

/// Byte cursor over the fixed-width timestamp grammar.
struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn err(&self, reason: &'static str) -> TimeError {
        TimeError::format(self.input, reason)
    }

    fn literal(&mut self, expected: u8, reason: &'static str) -> Result<(), TimeError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.err(reason))
        }
    }

    fn digits(&mut self, count: usize, reason: &'static str) -> Result<u32, TimeError> {
        let bytes = self.bytes;
        let end = self.pos + count;
        let field = bytes.get(self.pos..end).ok_or_else(|| self.err(reason))?;
        if !field.iter().all(u8::is_ascii_digit) {
            return Err(self.err(reason));
        }
        self.pos = end;
        Ok(field.iter().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
    }

    fn timestamp(mut self) -> Result<Timestamp, TimeError> {
        let year = self.digits(4, "expected four-digit year")?;
        self.literal(b'-', "expected '-' after year")?;
        let month = self.digits(2, "expected two-digit month")?;
        self.literal(b'-', "expected '-' after month")?;
        let day = self.digits(2, "expected two-digit day")?;
        self.literal(b'T', "expected 'T' between date and time")?;
        let hour = self.digits(2, "expected two-digit hour")?;
        self.literal(b':', "expected ':' after hour")?;
        let minute = self.digits(2, "expected two-digit minute")?;

        let mut second = 0;
        let mut millisecond = 0;
        if self.peek() == Some(b':') {
            self.pos += 1;
            second = self.digits(2, "expected two-digit second")?;
            if self.peek() == Some(b'.') {
                self.pos += 1;
                millisecond = self.fraction()?;
            }
        }

        let offset_minutes = self.offset()?;
        if self.pos != self.bytes.len() {
            return Err(self.err("unexpected trailing characters"));
        }

        check_range("month", month, 1, 12)?;
        check_range("day", day, 1, days_in_month(i64::from(year), month))?;
        check_range("hour", hour, 0, 23)?;
        check_range("minute", minute, 0, 59)?;
        check_range("second", second, 0, 59)?;

        Ok(Timestamp {
            year: year as i32,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            offset_minutes,
        })
    }

    /// One to three fractional-second digits, scaled to milliseconds.
    fn fraction(&mut self) -> Result<u32, TimeError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let len = self.pos - start;
        if len == 0 || len > 3 {
            return Err(self.err("expected one to three fractional-second digits"));
        }
        let value = self.bytes[start..self.pos]
            .iter()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'));
        Ok(value * 10u32.pow((3 - len) as u32))
    }

    fn offset(&mut self) -> Result<i32, TimeError> {
        let sign = match self.peek() {
            Some(b'Z') => {
                self.pos += 1;
                return Ok(0);
            }
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Err(self.err("expected UTC offset (Z or ±HHMM)")),
        };
        self.pos += 1;
        let hours = self.digits(2, "expected two-digit offset hours")?;
        if self.peek() == Some(b':') {
            self.pos += 1;
        }
        let minutes = self.digits(2, "expected two-digit offset minutes")?;
        check_range("offset hours", hours, 0, 23)?;
        check_range("offset minutes", minutes, 0, 59)?;
        Ok(sign * (hours * 60 + minutes) as i32)
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), TimeError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TimeError::FieldOutOfRange {
            field,
            value: i64::from(value),
        })
    }
}
