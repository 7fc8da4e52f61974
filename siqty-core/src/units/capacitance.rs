//! Capacitance units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for capacitance.
#[derive(Debug, Dimension)]
#[dimension(name = "Capacitance", si = FARADS)]
pub enum CapacitanceDim {}

define_units! {
    /// A capacitance, stored in farads.
    quantity Capacitance;
    /// A unit of [`Capacitance`].
    unit CapacitanceUnit for CapacitanceDim;
    {
        /// Farad (SI, `C/V`).
        FARADS = "F", Scale::IDENTITY => from_farads, farads;
        /// Picofarad.
        PICOFARADS = "pF", Scale::per(1e12) => from_picofarads, picofarads;
        /// Nanofarad.
        NANOFARADS = "nF", Scale::per(1e9) => from_nanofarads, nanofarads;
        /// Microfarad.
        MICROFARADS = "µF", Scale::per(1e6) => from_microfarads, microfarads;
        /// Millifarad.
        MILLIFARADS = "mF", Scale::per(1e3) => from_millifarads, millifarads;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nanofarads_to_picofarads() {
        assert_relative_eq!(Capacitance::from_nanofarads(4.7).picofarads(), 4700.0, max_relative = 1e-12);
    }
}
