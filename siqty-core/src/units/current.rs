//! Electric current units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for electric current.
#[derive(Debug, Dimension)]
#[dimension(name = "Current", si = AMPERES)]
pub enum CurrentDim {}

define_units! {
    /// An electric current, stored in amperes.
    quantity Current;
    /// A unit of [`Current`].
    unit CurrentUnit for CurrentDim;
    {
        /// Ampere (SI base unit).
        AMPERES = "A", Scale::IDENTITY => from_amperes, amperes;
        /// Microampere.
        MICROAMPERES = "µA", Scale::per(1e6) => from_microamperes, microamperes;
        /// Milliampere.
        MILLIAMPERES = "mA", Scale::per(1e3) => from_milliamperes, milliamperes;
        /// Kiloampere.
        KILOAMPERES = "kA", Scale::times(1e3) => from_kiloamperes, kiloamperes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes() {
        assert_eq!(Current::from_milliamperes(250.0).amperes(), 0.25);
        assert_eq!(Current::parse("20 mA").unwrap(), Current::from_amperes(0.02));
    }
}
