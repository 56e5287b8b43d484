//! Low-order solar position for a ground observer.
//!
//! The pipeline runs from a continuous day count `jt` (days since J2000.0)
//! through mean anomaly, obliquity and ecliptic longitude to the sun's
//! equatorial coordinates, then to hour angle, elevation and azimuth for a
//! given latitude/longitude. Accuracy is on the order of a degree, enough
//! for shadow and daylight work.
//!
//! All angles are radians unless a name ends in `_deg`.

pub mod eratosthenes;
pub mod error;
pub mod location;
pub mod model;
pub mod position;
pub mod series;
pub mod solar;

pub use eratosthenes::{
    CircumferenceEstimate, EARTH_CIRCUMFERENCE_KM, EratosthenesSetup, estimate_circumference,
    gnomon_shadow_ratio,
};
pub use error::SolarError;
pub use location::GeoLocation;
pub use model::{ANOMALISTIC_YEAR_DAYS, SolarModel, TROPICAL_YEAR_DAYS};
pub use position::{SolarPosition, sun_position};
pub use series::{SeriesConfig, SeriesSample, TEN_MINUTES_MS, elevation_series};
pub use solar::{
    azimuth, declination, ecliptic_longitude, elevation, hour_angle, mean_anomaly,
    normalized_azimuth, obliquity, right_ascension, sin_declination, sin_elevation,
};
