//! Stiffness units (force per unit displacement, e.g. spring rates).
//!
//! The reciprocal dimension is [`crate::flexibility`].

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for stiffness.
#[derive(Debug, Dimension)]
#[dimension(name = "Stiffness", si = NEWTONS_PER_METRE)]
pub enum StiffnessDim {}

define_units! {
    /// A stiffness, stored in newtons per metre.
    quantity Stiffness;
    /// A unit of [`Stiffness`].
    unit StiffnessUnit for StiffnessDim;
    {
        /// Newton per metre (SI).
        NEWTONS_PER_METRE = "N/m", Scale::IDENTITY => from_newtons_per_metre, newtons_per_metre;
        /// Newton per millimetre.
        NEWTONS_PER_MILLIMETRE = "N/mm", Scale::times(1e3)
            => from_newtons_per_millimetre, newtons_per_millimetre;
        /// Newton per centimetre.
        NEWTONS_PER_CENTIMETRE = "N/cm", Scale::times(100.0)
            => from_newtons_per_centimetre, newtons_per_centimetre;
        /// Kilonewton per metre.
        KILONEWTONS_PER_METRE = "kN/m", Scale::times(1e3)
            => from_kilonewtons_per_metre, kilonewtons_per_metre;
        /// Kilonewton per millimetre.
        KILONEWTONS_PER_MILLIMETRE = "kN/mm", Scale::times(1e6)
            => from_kilonewtons_per_millimetre, kilonewtons_per_millimetre;
        /// Meganewton per metre.
        MEGANEWTONS_PER_METRE = "MN/m", Scale::times(1e6)
            => from_meganewtons_per_metre, meganewtons_per_metre;
    }
}
