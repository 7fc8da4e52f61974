//! Mass units.
//!
//! The SI base unit is the kilogram, so the gram ladder divides rather than multiplies.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for mass.
#[derive(Debug, Dimension)]
#[dimension(name = "Mass", si = KILOGRAMS)]
pub enum MassDim {}

define_units! {
    /// A mass, stored in kilograms.
    quantity Mass;
    /// A unit of [`Mass`].
    unit MassUnit for MassDim;
    {
        /// Kilogram (SI base unit).
        KILOGRAMS = "kg", Scale::IDENTITY => from_kilograms, kilograms;
        /// Gram (`1e-3 kg`).
        GRAMS = "g", Scale::per(1e3) => from_grams, grams;
        /// Milligram (`1e-6 kg`).
        MILLIGRAMS = "mg", Scale::per(1e6) => from_milligrams, milligrams;
        /// Microgram (`1e-9 kg`).
        MICROGRAMS = "µg", Scale::per(1e9) => from_micrograms, micrograms;
        /// Tonne (`1000 kg`).
        TONNES = "t", Scale::times(1e3) => from_tonnes, tonnes;
    }
}
