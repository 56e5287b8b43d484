//! Error types for solar position calculations.

use gnomon_time::TimeError;
use thiserror::Error;

/// Errors from the solar crate.
///
/// The pipeline formulas themselves never fail; these cover bad inputs at
/// the edges (timestamps, locations, sampling parameters).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Error from timestamp parsing.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Invalid sampling parameters for a series.
    #[error("invalid series: {0}")]
    InvalidSeries(&'static str),
    /// The two observations cannot yield a finite estimate.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}
