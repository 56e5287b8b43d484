use gnomon_solar::{
    GeoLocation, SeriesConfig, SeriesSample, SolarError, SolarPosition, elevation_series,
    sun_position,
};
use gnomon_time::{DayNumber, parse_timestamp};

/// Continuous day count (days since J2000.0) of a timestamp string.
pub fn julian(timestamp: &str) -> Result<f64, SolarError> {
    Ok(DayNumber::parse(timestamp)?.days())
}

/// Full solar position for an observer at `lat`/`lon` degrees.
///
/// Latitude and longitude are range-checked.
pub fn position(timestamp: &str, lat: f64, lon: f64) -> Result<SolarPosition, SolarError> {
    let location = GeoLocation::try_new(lat, lon)?;
    let jt = julian(timestamp)?;
    Ok(sun_position(jt, &location))
}

/// Solar elevation in degrees.
///
/// Shorthand for `position(timestamp, lat, lon)?.elevation_deg()`.
pub fn elevation_deg(timestamp: &str, lat: f64, lon: f64) -> Result<f64, SolarError> {
    Ok(position(timestamp, lat, lon)?.elevation_deg())
}

/// Solar azimuth in degrees, [0, 360).
pub fn azimuth_deg(timestamp: &str, lat: f64, lon: f64) -> Result<f64, SolarError> {
    Ok(position(timestamp, lat, lon)?.azimuth_deg())
}

/// `count` samples spaced `step_minutes` apart, starting at `timestamp`.
pub fn series(
    timestamp: &str,
    lat: f64,
    lon: f64,
    step_minutes: i64,
    count: usize,
) -> Result<Vec<SeriesSample>, SolarError> {
    let location = GeoLocation::try_new(lat, lon)?;
    let config = SeriesConfig {
        start_ms: parse_timestamp(timestamp)?,
        step_ms: step_minutes.saturating_mul(60_000),
        count,
    };
    elevation_series(&config, &location)
}
