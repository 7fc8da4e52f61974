//! Electric charge units.
//!
//! Ampere hours are the usual battery capacity unit: `1 A⋅h = 3600 C`.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for electric charge.
#[derive(Debug, Dimension)]
#[dimension(name = "ElectricCharge", si = COULOMBS)]
pub enum ElectricChargeDim {}

define_units! {
    /// An electric charge, stored in coulombs.
    quantity ElectricCharge;
    /// A unit of [`ElectricCharge`].
    unit ElectricChargeUnit for ElectricChargeDim;
    {
        /// Coulomb (SI, `A⋅s`).
        COULOMBS = "C", Scale::IDENTITY => from_coulombs, coulombs;
        /// Picocoulomb.
        PICOCOULOMBS = "pC", Scale::per(1e12) => from_picocoulombs, picocoulombs;
        /// Nanocoulomb.
        NANOCOULOMBS = "nC", Scale::per(1e9) => from_nanocoulombs, nanocoulombs;
        /// Microcoulomb.
        MICROCOULOMBS = "µC", Scale::per(1e6) => from_microcoulombs, microcoulombs;
        /// Millicoulomb.
        MILLICOULOMBS = "mC", Scale::per(1e3) => from_millicoulombs, millicoulombs;
        /// Ampere hour.
        AMPERE_HOURS = "A⋅h", Scale::times(3600.0) => from_ampere_hours, ampere_hours;
        /// Milliampere hour.
        MILLIAMPERE_HOURS = "mA⋅h", Scale::times(3.6) => from_milliampere_hours, milliampere_hours;
    }
}
