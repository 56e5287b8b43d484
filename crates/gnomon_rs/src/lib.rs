//! Convenience wrapper for the gnomon solar position crates.
//!
//! High-level functions that accept timestamp strings directly, removing the
//! need to parse, convert to the continuous day count and build a
//! [`GeoLocation`] by hand.
//!
//! # Quick start
//!
//! ```rust
//! use gnomon_rs::*;
//!
//! let pos = position("2023-12-16T11:40:00-0500", 42.35, -71.05).unwrap();
//! println!("elevation {:.1}°, azimuth {:.1}°", pos.elevation_deg(), pos.azimuth_deg());
//! ```

pub mod convenience;

// Primary re-exports: users should only need `use gnomon_rs::*`
pub use convenience::{azimuth_deg, elevation_deg, julian, position, series};

pub use gnomon_angle::{Dms, deg_to_dms, format_degrees, to_degrees, to_radians};
pub use gnomon_solar::{
    CircumferenceEstimate, EARTH_CIRCUMFERENCE_KM, EratosthenesSetup, GeoLocation, SeriesConfig,
    SeriesSample, SolarError, SolarModel, SolarPosition, estimate_circumference,
    gnomon_shadow_ratio,
};
pub use gnomon_time::{DayNumber, TimeError, Timestamp, local_sidereal_hours, parse_timestamp};
