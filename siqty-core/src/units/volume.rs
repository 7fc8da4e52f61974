//! Volume units.
//!
//! Litres use the upper-case symbol `L` to stay clear of the digit one.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for volume.
#[derive(Debug, Dimension)]
#[dimension(name = "Volume", si = CUBIC_METRES)]
pub enum VolumeDim {}

define_units! {
    /// A volume, stored in cubic metres.
    quantity Volume;
    /// A unit of [`Volume`].
    unit VolumeUnit for VolumeDim;
    {
        /// Cubic metre (SI).
        CUBIC_METRES = "m³", Scale::IDENTITY => from_cubic_metres, cubic_metres;
        /// Litre (`1e-3 m³`).
        LITRES = "L", Scale::per(1e3) => from_litres, litres;
        /// Millilitre (`1e-6 m³`).
        MILLILITRES = "ml", Scale::per(1e6) => from_millilitres, millilitres;
        /// Cubic centimetre (`1e-6 m³`).
        CUBIC_CENTIMETRES = "cm³", Scale::per(1e6) => from_cubic_centimetres, cubic_centimetres;
        /// Cubic millimetre (`1e-9 m³`).
        CUBIC_MILLIMETRES = "mm³", Scale::per(1e9) => from_cubic_millimetres, cubic_millimetres;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn litre_conversions() {
        assert_eq!(Volume::from_cubic_metres(1.0).litres(), 1000.0);
        assert_eq!(Volume::from_litres(1.0).millilitres(), 1000.0);
    }

    #[test]
    fn millilitre_and_cubic_centimetre_are_distinct_units() {
        assert_ne!(VolumeUnit::MILLILITRES, VolumeUnit::CUBIC_CENTIMETRES);
        let v = Volume::from_millilitres(5.0);
        assert_relative_eq!(v.cubic_centimetres(), 5.0, max_relative = 1e-12);
    }
}
