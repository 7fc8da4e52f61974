//! Electrical conductance units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for electrical conductance.
#[derive(Debug, Dimension)]
#[dimension(name = "ElectricalConductance", si = SIEMENS)]
pub enum ElectricalConductanceDim {}

define_units! {
    /// An electrical conductance, stored in siemens.
    quantity ElectricalConductance;
    /// A unit of [`ElectricalConductance`].
    unit ElectricalConductanceUnit for ElectricalConductanceDim;
    {
        /// Siemens (SI, `1/Ω`).
        SIEMENS = "S", Scale::IDENTITY => from_siemens, siemens;
        /// Nanosiemens.
        NANOSIEMENS = "nS", Scale::per(1e9) => from_nanosiemens, nanosiemens;
        /// Microsiemens.
        MICROSIEMENS = "µS", Scale::per(1e6) => from_microsiemens, microsiemens;
        /// Millisiemens.
        MILLISIEMENS = "mS", Scale::per(1e3) => from_millisiemens, millisiemens;
        /// Kilosiemens.
        KILOSIEMENS = "kS", Scale::times(1e3) => from_kilosiemens, kilosiemens;
    }
}
