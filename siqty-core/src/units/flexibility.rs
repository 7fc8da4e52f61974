//! Flexibility (compliance) units: displacement per unit force, the reciprocal of [`crate::stiffness`].

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for flexibility.
#[derive(Debug, Dimension)]
#[dimension(name = "Flexibility", si = METRES_PER_NEWTON)]
pub enum FlexibilityDim {}

define_units! {
    /// A flexibility, stored in metres per newton.
    quantity Flexibility;
    /// A unit of [`Flexibility`].
    unit FlexibilityUnit for FlexibilityDim;
    {
        /// Metre per newton (SI).
        METRES_PER_NEWTON = "m/N", Scale::IDENTITY => from_metres_per_newton, metres_per_newton;
        /// Millimetre per newton.
        MILLIMETRES_PER_NEWTON = "mm/N", Scale::per(1e3)
            => from_millimetres_per_newton, millimetres_per_newton;
        /// Metre per kilonewton.
        METRES_PER_KILONEWTON = "m/kN", Scale::per(1e3)
            => from_metres_per_kilonewton, metres_per_kilonewton;
        /// Millimetre per kilonewton.
        MILLIMETRES_PER_KILONEWTON = "mm/kN", Scale::per(1e6)
            => from_millimetres_per_kilonewton, millimetres_per_kilonewton;
    }
}
