//! Speed units.
//!
//! Compound units fold both steps into one scale, so `km/h` is `Scale::ratio(1000.0, 3600.0)` rather than a
//! chain of two conversions.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for speed.
#[derive(Debug, Dimension)]
#[dimension(name = "Speed", si = METRES_PER_SECOND)]
pub enum SpeedDim {}

define_units! {
    /// A speed, stored in metres per second.
    quantity Speed;
    /// A unit of [`Speed`].
    unit SpeedUnit for SpeedDim;
    {
        /// Metre per second (SI).
        METRES_PER_SECOND = "m/s", Scale::IDENTITY => from_metres_per_second, metres_per_second;
        /// Kilometre per hour.
        KILOMETRES_PER_HOUR = "km/h", Scale::ratio(1000.0, 3600.0)
            => from_kilometres_per_hour, kilometres_per_hour;
        /// Millimetre per second.
        MILLIMETRES_PER_SECOND = "mm/s", Scale::per(1e3)
            => from_millimetres_per_second, millimetres_per_second;
        /// Centimetre per second.
        CENTIMETRES_PER_SECOND = "cm/s", Scale::per(100.0)
            => from_centimetres_per_second, centimetres_per_second;
        /// Metre per minute.
        METRES_PER_MINUTE = "m/min", Scale::per(60.0) => from_metres_per_minute, metres_per_minute;
        /// Metre per hour.
        METRES_PER_HOUR = "m/h", Scale::per(3600.0) => from_metres_per_hour, metres_per_hour;
        /// Statute mile per hour.
        MILES_PER_HOUR = "mi/h", Scale::ratio(1609.344, 3600.0) => from_miles_per_hour, miles_per_hour;
        /// Knot (one nautical mile per hour).
        KNOTS = "kn", Scale::ratio(1852.0, 3600.0) => from_knots, knots;
    }
}
