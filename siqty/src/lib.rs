//! Strongly typed SI quantities and conversions.
//!
//! `siqty` is the user-facing crate in this workspace. It re-exports the full API from `siqty-core`, and every
//! predefined quantity, unit alias and dimension tag at the crate root.
//!
//! A value is always a `Quantity<D>` where `D` names the dimension. The value is stored once, in the SI unit of `D`;
//! units only matter when a value enters (`new`, `from_*`, `parse`) or leaves (`value_in`, named accessors, `Display`).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Converts between any registered units of the same dimension with one linear scale each way.
//! - Provides physically meaningful operators across dimensions: `Force / Area` is a `Pressure`, `Voltage / Current`
//!   is a `Resistance`.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra; only the listed cross-dimension operators exist.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Locale-aware number formatting or parsing.
//!
//! # Quick start
//!
//! ```rust
//! use siqty::{Acceleration, AccelerationUnit, Length, Stiffness, Force};
//!
//! let a = Acceleration::new(250.0, AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED);
//! assert_eq!(a.si_value(), 2.5);
//!
//! let f = Stiffness::from_newtons_per_metre(2.0) * Length::from_metres(3.0);
//! assert_eq!(f, Force::from_newtons(6.0));
//! ```
//!
//! Parse and print:
//!
//! ```rust
//! use siqty::{Pressure, PressureUnit};
//!
//! let p: Pressure = "2.5 bar".parse().unwrap();
//! assert_eq!(p.to_string(), "250000 Pa");
//! assert_eq!(p.display_in(PressureUnit::KILOPASCALS).to_string(), "250 kPa");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use siqty::{Length, Time};
//!
//! let d = Length::from_metres(1.0);
//! let t = Time::from_seconds(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped under modules (also re-exported at the crate root for convenience), e.g. `siqty::length`,
//! `siqty::acceleration`, `siqty::electric_charge`. See [`units`] for the full list.
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw SI `f64` value. Fields marked
//!   `#[serde(with = "siqty::serde_with_unit")]` are written as `{"value": .., "unit": ..}` instead.
//!
//! # Panics and errors
//!
//! `equals_within` panics on a tolerance that is not strictly positive (`try_equals_within` returns an error
//! instead). Parsing returns [`ParseQuantityError`]. Everything else follows IEEE-754 and does not panic.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use siqty_core::*;

pub use siqty_core::units::acceleration::*;
pub use siqty_core::units::area::*;
pub use siqty_core::units::capacitance::*;
pub use siqty_core::units::current::*;
pub use siqty_core::units::density::*;
pub use siqty_core::units::electric_charge::*;
pub use siqty_core::units::electrical_conductance::*;
pub use siqty_core::units::energy::*;
pub use siqty_core::units::flexibility::*;
pub use siqty_core::units::force::*;
pub use siqty_core::units::frequency::*;
pub use siqty_core::units::jerk::*;
pub use siqty_core::units::kinematic_viscosity::*;
pub use siqty_core::units::length::*;
pub use siqty_core::units::mass::*;
pub use siqty_core::units::mass_flow::*;
pub use siqty_core::units::momentum::*;
pub use siqty_core::units::power::*;
pub use siqty_core::units::pressure::*;
pub use siqty_core::units::resistance::*;
pub use siqty_core::units::specific_energy::*;
pub use siqty_core::units::speed::*;
pub use siqty_core::units::stiffness::*;
pub use siqty_core::units::time::*;
pub use siqty_core::units::voltage::*;
pub use siqty_core::units::volume::*;
pub use siqty_core::units::volumetric_flow::*;
