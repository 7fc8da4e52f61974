//! Pressure and mechanical stress units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for pressure.
#[derive(Debug, Dimension)]
#[dimension(name = "Pressure", si = PASCALS)]
pub enum PressureDim {}

define_units! {
    /// A pressure or stress, stored in pascals.
    quantity Pressure;
    /// A unit of [`Pressure`].
    unit PressureUnit for PressureDim;
    {
        /// Pascal (SI, `N/m²`).
        PASCALS = "Pa", Scale::IDENTITY => from_pascals, pascals;
        /// Kilopascal.
        KILOPASCALS = "kPa", Scale::times(1e3) => from_kilopascals, kilopascals;
        /// Megapascal.
        MEGAPASCALS = "MPa", Scale::times(1e6) => from_megapascals, megapascals;
        /// Gigapascal.
        GIGAPASCALS = "GPa", Scale::times(1e9) => from_gigapascals, gigapascals;
        /// Bar (`1e5 Pa`).
        BAR = "bar", Scale::times(1e5) => from_bar, bar;
        /// Millibar (`100 Pa`).
        MILLIBAR = "mbar", Scale::times(100.0) => from_millibar, millibar;
        /// Newton per square millimetre (`1 MPa`), common for material strengths.
        NEWTONS_PER_SQUARE_MILLIMETRE = "N/mm²", Scale::times(1e6)
            => from_newtons_per_square_millimetre, newtons_per_square_millimetre;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_and_millibar() {
        let p = Pressure::from_pascals(101_325.0);
        assert_eq!(p.bar(), 1.013_25);
        assert_eq!(p.millibar(), 1013.25);
    }

    #[test]
    fn megapascal_is_newton_per_square_millimetre() {
        let s = Pressure::from_megapascals(235.0);
        assert_eq!(s.newtons_per_square_millimetre(), 235.0);
    }
}
