//! Frequency units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for frequency.
#[derive(Debug, Dimension)]
#[dimension(name = "Frequency", si = HERTZ)]
pub enum FrequencyDim {}

define_units! {
    /// A frequency, stored in hertz.
    quantity Frequency;
    /// A unit of [`Frequency`].
    unit FrequencyUnit for FrequencyDim;
    {
        /// Hertz (SI, `1/s`).
        HERTZ = "Hz", Scale::IDENTITY => from_hertz, hertz;
        /// Millihertz (`1e-3 Hz`).
        MILLIHERTZ = "mHz", Scale::per(1e3) => from_millihertz, millihertz;
        /// Kilohertz (`1e3 Hz`).
        KILOHERTZ = "kHz", Scale::times(1e3) => from_kilohertz, kilohertz;
        /// Megahertz (`1e6 Hz`).
        MEGAHERTZ = "MHz", Scale::times(1e6) => from_megahertz, megahertz;
        /// Gigahertz (`1e9 Hz`).
        GIGAHERTZ = "GHz", Scale::times(1e9) => from_gigahertz, gigahertz;
    }
}
