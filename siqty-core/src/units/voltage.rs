//! Electric potential units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for electric potential difference.
#[derive(Debug, Dimension)]
#[dimension(name = "Voltage", si = VOLTS)]
pub enum VoltageDim {}

define_units! {
    /// A voltage, stored in volts.
    quantity Voltage;
    /// A unit of [`Voltage`].
    unit VoltageUnit for VoltageDim;
    {
        /// Volt (SI).
        VOLTS = "V", Scale::IDENTITY => from_volts, volts;
        /// Microvolt.
        MICROVOLTS = "µV", Scale::per(1e6) => from_microvolts, microvolts;
        /// Millivolt.
        MILLIVOLTS = "mV", Scale::per(1e3) => from_millivolts, millivolts;
        /// Kilovolt.
        KILOVOLTS = "kV", Scale::times(1e3) => from_kilovolts, kilovolts;
        /// Megavolt.
        MEGAVOLTS = "MV", Scale::times(1e6) => from_megavolts, megavolts;
    }
}
