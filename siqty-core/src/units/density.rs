//! Density units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for mass density.
#[derive(Debug, Dimension)]
#[dimension(name = "Density", si = KILOGRAMS_PER_CUBIC_METRE)]
pub enum DensityDim {}

define_units! {
    /// A mass density, stored in kilograms per cubic metre.
    quantity Density;
    /// A unit of [`Density`].
    unit DensityUnit for DensityDim;
    {
        /// Kilogram per cubic metre (SI).
        KILOGRAMS_PER_CUBIC_METRE = "kg/m³", Scale::IDENTITY
            => from_kilograms_per_cubic_metre, kilograms_per_cubic_metre;
        /// Gram per cubic centimetre (`1000 kg/m³`).
        GRAMS_PER_CUBIC_CENTIMETRE = "g/cm³", Scale::times(1e3)
            => from_grams_per_cubic_centimetre, grams_per_cubic_centimetre;
        /// Gram per cubic metre (`1e-3 kg/m³`).
        GRAMS_PER_CUBIC_METRE = "g/m³", Scale::per(1e3)
            => from_grams_per_cubic_metre, grams_per_cubic_metre;
        /// Milligram per cubic metre (`1e-6 kg/m³`).
        MILLIGRAMS_PER_CUBIC_METRE = "mg/m³", Scale::per(1e6)
            => from_milligrams_per_cubic_metre, milligrams_per_cubic_metre;
        /// Gram per litre (equal to `1 kg/m³`).
        GRAMS_PER_LITRE = "g/L", Scale::IDENTITY => from_grams_per_litre, grams_per_litre;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water() {
        let water = Density::from_grams_per_cubic_centimetre(1.0);
        assert_eq!(water.kilograms_per_cubic_metre(), 1000.0);
        assert_eq!(water.grams_per_litre(), 1000.0);
    }
}
