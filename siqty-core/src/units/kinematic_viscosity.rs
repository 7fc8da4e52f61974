//! Kinematic viscosity units.
//!
//! The stokes (`St`) is the CGS unit, `1 cm²/s`; the centistokes equals `1 mm²/s`.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for kinematic viscosity.
#[derive(Debug, Dimension)]
#[dimension(name = "KinematicViscosity", si = SQUARE_METRES_PER_SECOND)]
pub enum KinematicViscosityDim {}

define_units! {
    /// A kinematic viscosity, stored in square metres per second.
    quantity KinematicViscosity;
    /// A unit of [`KinematicViscosity`].
    unit KinematicViscosityUnit for KinematicViscosityDim;
    {
        /// Square metre per second (SI).
        SQUARE_METRES_PER_SECOND = "m²/s", Scale::IDENTITY
            => from_square_metres_per_second, square_metres_per_second;
        /// Square centimetre per second.
        SQUARE_CENTIMETRES_PER_SECOND = "cm²/s", Scale::per(1e4)
            => from_square_centimetres_per_second, square_centimetres_per_second;
        /// Square millimetre per second.
        SQUARE_MILLIMETRES_PER_SECOND = "mm²/s", Scale::per(1e6)
            => from_square_millimetres_per_second, square_millimetres_per_second;
        /// Stokes (`1 cm²/s`).
        STOKES = "St", Scale::per(1e4) => from_stokes, stokes;
        /// Centistokes (`1 mm²/s`).
        CENTISTOKES = "cSt", Scale::per(1e6) => from_centistokes, centistokes;
    }
}
