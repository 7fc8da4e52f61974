//! Area units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for area.
#[derive(Debug, Dimension)]
#[dimension(name = "Area", si = SQUARE_METRES)]
pub enum AreaDim {}

define_units! {
    /// An area, stored in square metres.
    quantity Area;
    /// A unit of [`Area`].
    unit AreaUnit for AreaDim;
    {
        /// Square metre (SI).
        SQUARE_METRES = "m²", Scale::IDENTITY => from_square_metres, square_metres;
        /// Square millimetre (`1e-6 m²`).
        SQUARE_MILLIMETRES = "mm²", Scale::per(1e6) => from_square_millimetres, square_millimetres;
        /// Square centimetre (`1e-4 m²`).
        SQUARE_CENTIMETRES = "cm²", Scale::per(1e4) => from_square_centimetres, square_centimetres;
        /// Square kilometre (`1e6 m²`).
        SQUARE_KILOMETRES = "km²", Scale::times(1e6) => from_square_kilometres, square_kilometres;
        /// Hectare (`1e4 m²`).
        HECTARES = "ha", Scale::times(1e4) => from_hectares, hectares;
        /// Square inch (`0.00064516 m²`).
        SQUARE_INCHES = "in²", Scale::times(0.000_645_16) => from_square_inches, square_inches;
        /// Square foot (`0.09290304 m²`).
        SQUARE_FEET = "ft²", Scale::times(0.092_903_04) => from_square_feet, square_feet;
    }
}
