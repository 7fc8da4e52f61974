//! Energy units.
//!
//! Watt hours are exact multiples of the joule: `1 Wh = 3600 J`, `1 kWh = 3.6 MJ`.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for energy.
#[derive(Debug, Dimension)]
#[dimension(name = "Energy", si = JOULES)]
pub enum EnergyDim {}

define_units! {
    /// An energy, stored in joules.
    quantity Energy;
    /// A unit of [`Energy`].
    unit EnergyUnit for EnergyDim;
    {
        /// Joule (SI).
        JOULES = "J", Scale::IDENTITY => from_joules, joules;
        /// Millijoule.
        MILLIJOULES = "mJ", Scale::per(1e3) => from_millijoules, millijoules;
        /// Kilojoule.
        KILOJOULES = "kJ", Scale::times(1e3) => from_kilojoules, kilojoules;
        /// Megajoule.
        MEGAJOULES = "MJ", Scale::times(1e6) => from_megajoules, megajoules;
        /// Gigajoule.
        GIGAJOULES = "GJ", Scale::times(1e9) => from_gigajoules, gigajoules;
        /// Watt hour.
        WATT_HOURS = "Wh", Scale::times(3600.0) => from_watt_hours, watt_hours;
        /// Kilowatt hour.
        KILOWATT_HOURS = "kWh", Scale::times(3.6e6) => from_kilowatt_hours, kilowatt_hours;
    }
}
