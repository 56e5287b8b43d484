//! Ground observer location.

use gnomon_angle::to_radians;

use crate::error::SolarError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location without validation.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(SolarError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        to_radians(self.latitude_deg)
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        to_radians(self.longitude_deg)
    }
}
