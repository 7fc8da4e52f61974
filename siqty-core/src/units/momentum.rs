//! Momentum units.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for momentum.
#[derive(Debug, Dimension)]
#[dimension(name = "Momentum", si = NEWTON_SECONDS)]
pub enum MomentumDim {}

define_units! {
    /// A momentum, stored in newton seconds.
    quantity Momentum;
    /// A unit of [`Momentum`].
    unit MomentumUnit for MomentumDim;
    {
        /// Newton second (SI).
        NEWTON_SECONDS = "N⋅s", Scale::IDENTITY => from_newton_seconds, newton_seconds;
        /// Kilogram metre per second (equal to `1 N⋅s`).
        KILOGRAM_METRES_PER_SECOND = "kg⋅m/s", Scale::IDENTITY
            => from_kilogram_metres_per_second, kilogram_metres_per_second;
        /// Gram centimetre per second (CGS, `1e-5 N⋅s`).
        GRAM_CENTIMETRES_PER_SECOND = "g⋅cm/s", Scale::per(1e5)
            => from_gram_centimetres_per_second, gram_centimetres_per_second;
    }
}
