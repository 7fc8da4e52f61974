//! Volumetric flow rate units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for volumetric flow rate.
#[derive(Debug, Dimension)]
#[dimension(name = "VolumetricFlow", si = CUBIC_METRES_PER_SECOND)]
pub enum VolumetricFlowDim {}

define_units! {
    /// A volumetric flow rate, stored in cubic metres per second.
    quantity VolumetricFlow;
    /// A unit of [`VolumetricFlow`].
    unit VolumetricFlowUnit for VolumetricFlowDim;
    {
        /// Cubic metre per second (SI).
        CUBIC_METRES_PER_SECOND = "m³/s", Scale::IDENTITY
            => from_cubic_metres_per_second, cubic_metres_per_second;
        /// Cubic metre per minute.
        CUBIC_METRES_PER_MINUTE = "m³/min", Scale::per(60.0)
            => from_cubic_metres_per_minute, cubic_metres_per_minute;
        /// Cubic metre per hour.
        CUBIC_METRES_PER_HOUR = "m³/h", Scale::per(3600.0)
            => from_cubic_metres_per_hour, cubic_metres_per_hour;
        /// Litre per second.
        LITRES_PER_SECOND = "L/s", Scale::per(1e3) => from_litres_per_second, litres_per_second;
        /// Litre per minute.
        LITRES_PER_MINUTE = "L/min", Scale::per(1e3 * 60.0) => from_litres_per_minute, litres_per_minute;
        /// Litre per hour.
        LITRES_PER_HOUR = "L/h", Scale::per(1e3 * 3600.0) => from_litres_per_hour, litres_per_hour;
        /// Millilitre per minute.
        MILLILITRES_PER_MINUTE = "ml/min", Scale::per(1e6 * 60.0)
            => from_millilitres_per_minute, millilitres_per_minute;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn litres_per_minute() {
        let q = VolumetricFlow::from_litres_per_minute(60.0);
        assert_relative_eq!(q.litres_per_second(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(q.cubic_metres_per_hour(), 3.6, max_relative = 1e-12);
    }
}
