//! Electrical resistance units.
//!
//! Symbols use the Greek capital omega (U+03A9); the ohm sign (U+2126) is accepted when parsing.

use crate::Scale;
use siqty_derive::Dimension;

/// Dimension tag for electrical resistance.
#[derive(Debug, Dimension)]
#[dimension(name = "Resistance", si = OHMS)]
pub enum ResistanceDim {}

define_units! {
    /// A resistance, stored in ohms.
    quantity Resistance;
    /// A unit of [`Resistance`].
    unit ResistanceUnit for ResistanceDim;
    {
        /// Ohm (SI).
        OHMS = "\u{3a9}", Scale::IDENTITY => from_ohms, ohms;
        /// Microohm.
        MICROOHMS = "µ\u{3a9}", Scale::per(1e6) => from_microohms, microohms;
        /// Milliohm.
        MILLIOHMS = "m\u{3a9}", Scale::per(1e3) => from_milliohms, milliohms;
        /// Kiloohm.
        KILOHMS = "k\u{3a9}", Scale::times(1e3) => from_kilohms, kilohms;
        /// Megaohm.
        MEGAOHMS = "M\u{3a9}", Scale::times(1e6) => from_megaohms, megaohms;
    }
}
