//! Power units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for power.
#[derive(Debug, Dimension)]
#[dimension(name = "Power", si = WATTS)]
pub enum PowerDim {}

define_units! {
    /// A power, stored in watts.
    quantity Power;
    /// A unit of [`Power`].
    unit PowerUnit for PowerDim;
    {
        /// Watt (SI, `J/s`).
        WATTS = "W", Scale::IDENTITY => from_watts, watts;
        /// Milliwatt.
        MILLIWATTS = "mW", Scale::per(1e3) => from_milliwatts, milliwatts;
        /// Kilowatt.
        KILOWATTS = "kW", Scale::times(1e3) => from_kilowatts, kilowatts;
        /// Megawatt.
        MEGAWATTS = "MW", Scale::times(1e6) => from_megawatts, megawatts;
        /// Gigawatt.
        GIGAWATTS = "GW", Scale::times(1e9) => from_gigawatts, gigawatts;
    }
}
