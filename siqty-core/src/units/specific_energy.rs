//! Specific energy units (energy per unit mass).

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for specific energy.
#[derive(Debug, Dimension)]
#[dimension(name = "SpecificEnergy", si = JOULES_PER_KILOGRAM)]
pub enum SpecificEnergyDim {}

define_units! {
    /// A specific energy, stored in joules per kilogram.
    quantity SpecificEnergy;
    /// A unit of [`SpecificEnergy`].
    unit SpecificEnergyUnit for SpecificEnergyDim;
    {
        /// Joule per kilogram (SI).
        JOULES_PER_KILOGRAM = "J/kg", Scale::IDENTITY => from_joules_per_kilogram, joules_per_kilogram;
        /// Kilojoule per kilogram.
        KILOJOULES_PER_KILOGRAM = "kJ/kg", Scale::times(1e3)
            => from_kilojoules_per_kilogram, kilojoules_per_kilogram;
        /// Megajoule per kilogram, common for fuel heating values.
        MEGAJOULES_PER_KILOGRAM = "MJ/kg", Scale::times(1e6)
            => from_megajoules_per_kilogram, megajoules_per_kilogram;
        /// Joule per gram.
        JOULES_PER_GRAM = "J/g", Scale::times(1e3) => from_joules_per_gram, joules_per_gram;
    }
}
