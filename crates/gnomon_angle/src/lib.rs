//! Angle units and normalisation helpers.
//!
//! Every other crate in the workspace works in radians internally and in
//! degrees at its boundary. This crate owns the conversion between the two,
//! the reductions into a single turn, and the display formatting used by the
//! CLI.

pub mod dms;
pub mod normalize;
pub mod units;

pub use dms::{Dms, deg_to_dms, format_degrees};
pub use normalize::{normalize_360, normalize_tau, wrap_180};
pub use units::{DEG_PER_RAD, RAD_PER_DEG, to_degrees, to_radians};
