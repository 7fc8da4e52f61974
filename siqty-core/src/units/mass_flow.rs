//! Mass flow rate units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for mass flow rate.
#[derive(Debug, Dimension)]
#[dimension(name = "MassFlow", si = KILOGRAMS_PER_SECOND)]
pub enum MassFlowDim {}

define_units! {
    /// A mass flow rate, stored in kilograms per second.
    quantity MassFlow;
    /// A unit of [`MassFlow`].
    unit MassFlowUnit for MassFlowDim;
    {
        /// Kilogram per second (SI).
        KILOGRAMS_PER_SECOND = "kg/s", Scale::IDENTITY => from_kilograms_per_second, kilograms_per_second;
        /// Gram per second.
        GRAMS_PER_SECOND = "g/s", Scale::per(1e3) => from_grams_per_second, grams_per_second;
        /// Kilogram per minute.
        KILOGRAMS_PER_MINUTE = "kg/min", Scale::per(60.0) => from_kilograms_per_minute, kilograms_per_minute;
        /// Kilogram per hour.
        KILOGRAMS_PER_HOUR = "kg/h", Scale::per(3600.0) => from_kilograms_per_hour, kilograms_per_hour;
        /// Tonne per hour.
        TONNES_PER_HOUR = "t/h", Scale::ratio(1e3, 3600.0) => from_tonnes_per_hour, tonnes_per_hour;
        /// Gram per hour.
        GRAMS_PER_HOUR = "g/h", Scale::per(1e3 * 3600.0) => from_grams_per_hour, grams_per_hour;
    }
}
