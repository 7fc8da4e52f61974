//! Length units.
//!
//! The SI unit is the metre. Imperial and nautical units follow the international definitions: the inch is
//! exactly `0.0254 m`, the foot `0.3048 m`, the statute mile `1609.344 m` and the nautical mile `1852 m`.
//!
//! ```rust
//! use siqty_core::length::{Length, LengthUnit};
//!
//! let l = Length::new(2.5, LengthUnit::KILOMETRES);
//! assert_eq!(l.metres(), 2500.0);
//! assert_eq!(l.value_in(LengthUnit::CENTIMETRES), 250_000.0);
//! ```

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for length.
#[derive(Debug, Dimension)]
#[dimension(name = "Length", si = METRES)]
pub enum LengthDim {}

define_units! {
    /// A length, stored in metres.
    quantity Length;
    /// A unit of [`Length`].
    unit LengthUnit for LengthDim;
    {
        /// Metre (SI base unit).
        METRES = "m", Scale::IDENTITY => from_metres, metres;
        /// Nanometre (`1e-9 m`).
        NANOMETRES = "nm", Scale::per(1e9) => from_nanometres, nanometres;
        /// Micrometre (`1e-6 m`).
        MICROMETRES = "µm", Scale::per(1e6) => from_micrometres, micrometres;
        /// Millimetre (`1e-3 m`).
        MILLIMETRES = "mm", Scale::per(1e3) => from_millimetres, millimetres;
        /// Centimetre (`1e-2 m`).
        CENTIMETRES = "cm", Scale::per(100.0) => from_centimetres, centimetres;
        /// Decimetre (`1e-1 m`).
        DECIMETRES = "dm", Scale::per(10.0) => from_decimetres, decimetres;
        /// Kilometre (`1000 m`).
        KILOMETRES = "km", Scale::times(1e3) => from_kilometres, kilometres;
        /// International inch (`0.0254 m`).
        INCHES = "in", Scale::times(0.0254) => from_inches, inches;
        /// International foot (`0.3048 m`).
        FEET = "ft", Scale::times(0.3048) => from_feet, feet;
        /// International yard (`0.9144 m`).
        YARDS = "yd", Scale::times(0.9144) => from_yards, yards;
        /// Statute mile (`1609.344 m`).
        MILES = "mi", Scale::times(1609.344) => from_miles, miles;
        /// Nautical mile (`1852 m`).
        NAUTICAL_MILES = "nmi", Scale::times(1852.0) => from_nautical_miles, nautical_miles;
    }
}
