//! Sampling the solar position at regular intervals.
//!
//! Each sample is independent of the others, so the series is a plain map
//! over instants.

use gnomon_time::{REFERENCE_EPOCH_MS, from_calendar};
use log::debug;

use crate::error::SolarError;
use crate::location::GeoLocation;
use crate::model::SolarModel;

/// Ten minutes in milliseconds.
pub const TEN_MINUTES_MS: i64 = 600_000;

/// Sampling parameters for [`elevation_series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesConfig {
    /// First instant, milliseconds since 1970-01-01T00:00:00Z.
    pub start_ms: i64,
    /// Spacing between samples in milliseconds. Must be positive.
    pub step_ms: i64,
    /// Number of samples. Must be non-zero.
    pub count: usize,
}

impl Default for SeriesConfig {
    /// One day of ten-minute samples starting at the reference epoch.
    fn default() -> Self {
        Self {
            start_ms: REFERENCE_EPOCH_MS,
            step_ms: TEN_MINUTES_MS,
            count: 144,
        }
    }
}

impl SeriesConfig {
    /// `count` samples spaced ten minutes apart from `start_ms`.
    pub fn ten_minute(start_ms: i64, count: usize) -> Self {
        Self {
            start_ms,
            step_ms: TEN_MINUTES_MS,
            count,
        }
    }

    fn validate(&self) -> Result<(), SolarError> {
        if self.step_ms <= 0 {
            return Err(SolarError::InvalidSeries("step must be positive"));
        }
        if self.count == 0 {
            return Err(SolarError::InvalidSeries("count must be non-zero"));
        }
        i64::try_from(self.count - 1)
            .ok()
            .and_then(|n| self.step_ms.checked_mul(n))
            .and_then(|span| self.start_ms.checked_add(span))
            .ok_or(SolarError::InvalidSeries("last sample overflows the i64 instant range"))?;
        Ok(())
    }

    /// Instants of the series, in milliseconds. Saturates at the `i64`
    /// bounds; [`SolarModel::series`] rejects configs that would overflow.
    pub fn instants(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.count).map(move |i| {
            let i = i64::try_from(i).unwrap_or(i64::MAX);
            self.start_ms.saturating_add(self.step_ms.saturating_mul(i))
        })
    }
}

/// One point of a sampled series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSample {
    /// Milliseconds since 1970-01-01T00:00:00Z.
    pub epoch_ms: i64,
    /// Elevation in radians.
    pub elevation: f64,
    /// Azimuth in radians, [0, 2π).
    pub azimuth: f64,
}

impl SolarModel {
    /// Sample elevation and azimuth for `location` over `config`.
    pub fn series(
        &self,
        config: &SeriesConfig,
        location: &GeoLocation,
    ) -> Result<Vec<SeriesSample>, SolarError> {
        config.validate()?;
        debug!(
            "sampling {} points every {} ms from {} at ({}, {})",
            config.count,
            config.step_ms,
            config.start_ms,
            location.latitude_deg,
            location.longitude_deg
        );
        Ok(config
            .instants()
            .map(|epoch_ms| {
                let p = self.position(from_calendar(epoch_ms), location);
                SeriesSample {
                    epoch_ms,
                    elevation: p.elevation,
                    azimuth: p.azimuth,
                }
            })
            .collect())
    }
}

/// Sample with the standard model.
pub fn elevation_series(
    config: &SeriesConfig,
    location: &GeoLocation,
) -> Result<Vec<SeriesSample>, SolarError> {
    SolarModel::STANDARD.series(config, location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = SeriesConfig::default();
        assert_eq!(c.step_ms, 600_000);
        assert_eq!(c.count, 144);
        assert_eq!(c.start_ms, REFERENCE_EPOCH_MS);
    }

    #[test]
    fn instants_are_evenly_spaced() {
        let c = SeriesConfig::ten_minute(1_000, 3);
        let v: Vec<i64> = c.instants().collect();
        assert_eq!(v, vec![1_000, 601_000, 1_201_000]);
    }

    #[test]
    fn instants_saturate_instead_of_wrapping() {
        let c = SeriesConfig {
            start_ms: 0,
            step_ms: i64::MAX / 2,
            count: 4,
        };
        let v: Vec<i64> = c.instants().collect();
        assert_eq!(v[3], i64::MAX);
    }

    #[test]
    fn series_length_and_order() {
        let c = SeriesConfig::ten_minute(1_702_722_600_000, 75);
        let s = elevation_series(&c, &GeoLocation::new(42.35, -71.05)).unwrap();
        assert_eq!(s.len(), 75);
        assert!(s.windows(2).all(|w| w[1].epoch_ms - w[0].epoch_ms == TEN_MINUTES_MS));
    }

    #[test]
    fn rejects_zero_step() {
        let c = SeriesConfig {
            step_ms: 0,
            ..SeriesConfig::default()
        };
        let err = elevation_series(&c, &GeoLocation::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, SolarError::InvalidSeries(_)));
    }

    #[test]
    fn rejects_span_past_i64() {
        let c = SeriesConfig {
            start_ms: 0,
            step_ms: i64::MAX / 2,
            count: 4,
        };
        let err = elevation_series(&c, &GeoLocation::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, SolarError::InvalidSeries(_)));

        let c = SeriesConfig {
            start_ms: i64::MAX - 10,
            step_ms: 10,
            count: 3,
        };
        assert!(elevation_series(&c, &GeoLocation::new(0.0, 0.0)).is_err());

        let c = SeriesConfig::ten_minute(0, usize::MAX);
        assert!(elevation_series(&c, &GeoLocation::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn accepts_span_ending_at_i64_max() {
        let c = SeriesConfig {
            start_ms: i64::MAX - 10,
            step_ms: 10,
            count: 2,
        };
        let s = elevation_series(&c, &GeoLocation::new(0.0, 0.0)).unwrap();
        assert_eq!(s[1].epoch_ms, i64::MAX);
    }

    #[test]
    fn rejects_empty() {
        let c = SeriesConfig::ten_minute(0, 0);
        assert!(elevation_series(&c, &GeoLocation::new(0.0, 0.0)).is_err());
    }
}
