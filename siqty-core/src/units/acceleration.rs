//! Acceleration units.
//!
//! Besides the SI unit this covers the centimetre-based galileo family (`cm/s²`) and the per-hour-squared units
//! used for slow drifts, e.g. in geodesy:
//!
//! ```rust
//! use siqty_core::acceleration::{Acceleration, AccelerationUnit};
//!
//! let g = Acceleration::from_metres_per_second_squared(9.80665);
//! assert!((g.value_in(AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED) - 980.665).abs() < 1e-9);
//! ```

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for acceleration.
#[derive(Debug, Dimension)]
#[dimension(name = "Acceleration", si = METRES_PER_SECOND_SQUARED)]
pub enum AccelerationDim {}

/// `1 h²` in `s²`.
const HOUR_SQUARED: f64 = 3600.0 * 3600.0;

define_units! {
    /// An acceleration, stored in metres per second squared.
    quantity Acceleration;
    /// A unit of [`Acceleration`].
    unit AccelerationUnit for AccelerationDim;
    {
        /// Metre per second squared (SI).
        METRES_PER_SECOND_SQUARED = "m/s²", Scale::IDENTITY
            => from_metres_per_second_squared, metres_per_second_squared;
        /// Centimetre per second squared (the galileo, `Gal`).
        CENTIMETRES_PER_SECOND_SQUARED = "cm/s²", Scale::per(100.0)
            => from_centimetres_per_second_squared, centimetres_per_second_squared;
        /// Millimetre per second squared.
        MILLIMETRES_PER_SECOND_SQUARED = "mm/s²", Scale::per(1e3)
            => from_millimetres_per_second_squared, millimetres_per_second_squared;
        /// Millimetre per hour squared.
        MILLIMETRES_PER_HOUR_SQUARED = "mm/h²", Scale::per(1e3 * HOUR_SQUARED)
            => from_millimetres_per_hour_squared, millimetres_per_hour_squared;
        /// Centimetre per hour squared.
        CENTIMETRES_PER_HOUR_SQUARED = "cm/h²", Scale::per(100.0 * HOUR_SQUARED)
            => from_centimetres_per_hour_squared, centimetres_per_hour_squared;
        /// Metre per hour squared.
        METRES_PER_HOUR_SQUARED = "m/h²", Scale::per(HOUR_SQUARED)
            => from_metres_per_hour_squared, metres_per_hour_squared;
    }
}
