//! Jerk units (rate of change of acceleration).

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for jerk.
#[derive(Debug, Dimension)]
#[dimension(name = "Jerk", si = METRES_PER_SECOND_CUBED)]
pub enum JerkDim {}

define_units! {
    /// A jerk, stored in metres per second cubed.
    quantity Jerk;
    /// A unit of [`Jerk`].
    unit JerkUnit for JerkDim;
    {
        /// Metre per second cubed (SI).
        METRES_PER_SECOND_CUBED = "m/s³", Scale::IDENTITY
            => from_metres_per_second_cubed, metres_per_second_cubed;
        /// Centimetre per second cubed.
        CENTIMETRES_PER_SECOND_CUBED = "cm/s³", Scale::per(100.0)
            => from_centimetres_per_second_cubed, centimetres_per_second_cubed;
        /// Millimetre per second cubed.
        MILLIMETRES_PER_SECOND_CUBED = "mm/s³", Scale::per(1e3)
            => from_millimetres_per_second_cubed, millimetres_per_second_cubed;
    }
}
