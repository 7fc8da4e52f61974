//! Dimension trait.

use crate::registry::UnitRegistry;
use crate::unit::Unit;

/// Marker trait for **dimensions** (Length, Force, Voltage …).
///
/// A *dimension* is the category that distinguishes a metre from a newton. Each dimension is modelled as an empty
/// enum tag carrying compile-time constants: its name, its SI unit and the table of every registered unit.
///
/// Inside this crate the impl is generated by `#[derive(Dimension)]`. Downstream crates can implement it by hand:
///
/// ```rust
/// use siqty_core::{Dimension, Quantity, Scale, Unit, UnitRegistry};
/// use std::sync::OnceLock;
///
/// #[derive(Debug)]
/// pub enum Dose {}
///
/// impl Dimension for Dose {
///     const NAME: &'static str = "Dose";
///     const SI_UNIT: Unit<Self> = Unit::new("Gy", Scale::IDENTITY);
///     const UNITS: &'static [Unit<Self>] = &[Self::SI_UNIT, Unit::new("mGy", Scale::per(1000.0))];
///
///     fn registry() -> &'static UnitRegistry<Self> {
///         static REGISTRY: OnceLock<UnitRegistry<Dose>> = OnceLock::new();
///         REGISTRY.get_or_init(|| UnitRegistry::new(Self::NAME, Self::UNITS))
///     }
/// }
///
/// let d: Quantity<Dose> = "250 mGy".parse().unwrap();
/// assert_eq!(d.si_value(), 0.25);
/// ```
pub trait Dimension: Sized + 'static {
    /// Human readable name, used in diagnostics and `Debug` output.
    const NAME: &'static str;

    /// The canonical SI unit; quantities store their value in this unit.
    const SI_UNIT: Unit<Self>;

    /// Every unit registered for this dimension, SI unit first.
    const UNITS: &'static [Unit<Self>];

    /// Symbol lookup table built from [`Dimension::UNITS`] on first use.
    fn registry() -> &'static UnitRegistry<Self>;
}
