//! Force units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for force.
#[derive(Debug, Dimension)]
#[dimension(name = "Force", si = NEWTONS)]
pub enum ForceDim {}

define_units! {
    /// A force, stored in newtons.
    quantity Force;
    /// A unit of [`Force`].
    unit ForceUnit for ForceDim;
    {
        /// Newton (SI, `kg⋅m/s²`).
        NEWTONS = "N", Scale::IDENTITY => from_newtons, newtons;
        /// Millinewton.
        MILLINEWTONS = "mN", Scale::per(1e3) => from_millinewtons, millinewtons;
        /// Kilonewton.
        KILONEWTONS = "kN", Scale::times(1e3) => from_kilonewtons, kilonewtons;
        /// Meganewton.
        MEGANEWTONS = "MN", Scale::times(1e6) => from_meganewtons, meganewtons;
        /// Giganewton.
        GIGANEWTONS = "GN", Scale::times(1e9) => from_giganewtons, giganewtons;
    }
}
