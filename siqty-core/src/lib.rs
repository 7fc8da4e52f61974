//! Core type system for SI physical quantities.
//!
//! `siqty-core` models every physical quantity with one generic pair of types:
//!
//! - A *dimension* is an empty enum tag implementing [`Dimension`] (e.g. `LengthDim`).
//! - A [`Unit<D>`] is a display symbol plus a linear [`Scale`] to the SI unit of `D`.
//! - A [`Quantity<D>`] stores a single `f64`, the magnitude in the SI unit of `D`.
//! - Operators between different dimensions (`Force / Area => Pressure`, ...) come from a hand-written relation
//!   table.
//!
//! Most users should depend on `siqty` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: adding a length to a time does not type-check.
//! - Linear conversion between any two units of a dimension through a single `f64` SI value.
//! - Parsing, formatting and (optionally) serializing quantities with their unit symbol.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine units with an offset (degrees Celsius, gauge pressure).
//! - Automatic derivation of products and quotients; only the listed relations exist.
//!
//! # Quick start
//!
//! ```rust
//! use siqty_core::acceleration::{Acceleration, AccelerationUnit};
//! use siqty_core::force::Force;
//! use siqty_core::mass::Mass;
//!
//! let a = Acceleration::new(250.0, AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED);
//! assert_eq!(a.metres_per_second_squared(), 2.5);
//!
//! let f: Force = Mass::from_kilograms(4.0) * a;
//! assert_eq!(f.newtons(), 10.0);
//! assert_eq!(f.to_string(), "10 N");
//! ```
//!
//! Parse and render in a chosen unit:
//!
//! ```rust
//! use siqty_core::speed::{Speed, SpeedUnit};
//!
//! let v: Speed = "90 km/h".parse().unwrap();
//! assert_eq!(v.metres_per_second(), 25.0);
//! assert_eq!(v.display_in(SpeedUnit::METRES_PER_MINUTE).to_string(), "1500 m/min");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<D>`; serialization is the raw SI `f64` value. The
//!   `serde_with_unit` helper writes `{"value": .., "unit": ..}` instead.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic are pure `f64` computations that follow IEEE-754 (NaN and infinities propagate).
//! [`Quantity::equals_within`] panics on a tolerance that is not strictly positive; its `try_` variant returns
//! [`QuantityError`]. Parsing returns [`ParseQuantityError`].
//!
//! # Logging
//!
//! Registry construction and parse failures are reported through the `log` facade at `debug` level; duplicate
//! unit symbols are reported at `warn` level. No logger is installed by this crate.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod dimension;
mod error;
mod format;
mod parse;
mod quantity;
mod registry;
mod relations;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use error::{ParseQuantityError, QuantityError};
pub use format::Formatted;
pub use quantity::Quantity;
pub use registry::UnitRegistry;
pub use unit::{Scale, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions and unit tables.
///
/// These are defined in `siqty-core` so the relation table can implement operators between them without running
/// into Rust's orphan rules.
pub mod units;

pub use units::acceleration;
pub use units::area;
pub use units::capacitance;
pub use units::current;
pub use units::density;
pub use units::electric_charge;
pub use units::electrical_conductance;
pub use units::energy;
pub use units::flexibility;
pub use units::force;
pub use units::frequency;
pub use units::jerk;
pub use units::kinematic_viscosity;
pub use units::length;
pub use units::mass;
pub use units::mass_flow;
pub use units::momentum;
pub use units::power;
pub use units::pressure;
pub use units::resistance;
pub use units::specific_energy;
pub use units::speed;
pub use units::stiffness;
pub use units::time;
pub use units::voltage;
pub use units::volume;
pub use units::volumetric_flow;

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::OnceLock;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test dimension for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Debug)]
    pub enum TestDim {}

    const TEST_BASE: Unit<TestDim> = Unit::new("tu", Scale::IDENTITY);
    const TEST_CENTI: Unit<TestDim> = Unit::new("ctu", Scale::per(100.0));
    const TEST_KILO: Unit<TestDim> = Unit::new("ktu", Scale::times(1000.0));

    impl Dimension for TestDim {
        const NAME: &'static str = "Test";
        const SI_UNIT: Unit<Self> = TEST_BASE;
        const UNITS: &'static [Unit<Self>] = &[TEST_BASE, TEST_CENTI, TEST_KILO];

        fn registry() -> &'static UnitRegistry<Self> {
            static REGISTRY: OnceLock<UnitRegistry<TestDim>> = OnceLock::new();
            REGISTRY.get_or_init(|| UnitRegistry::new(Self::NAME, Self::UNITS))
        }
    }

    type TU = Quantity<TestDim>;

    fn tu(value: f64) -> TU {
        TU::new(value, TEST_BASE)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quantity core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn quantity_new_stores_si_value() {
        let q = TU::new(250.0, TEST_CENTI);
        assert_eq!(q.si_value(), 2.5);
        assert_eq!(q.value_in(TEST_CENTI), 250.0);
        assert_eq!(q.value_in(TEST_KILO), 0.0025);
    }

    #[test]
    fn quantity_zero_and_default() {
        assert_eq!(TU::ZERO.si_value(), 0.0);
        assert_eq!(TU::default(), TU::ZERO);
    }

    #[test]
    fn quantity_nan_constant() {
        assert!(TU::NAN.si_value().is_nan());
        assert_ne!(TU::NAN, TU::NAN);
        assert!(!TU::NAN.is_finite());
    }

    #[test]
    fn quantity_abs_min_max() {
        assert_eq!(tu(-3.0).abs(), tu(3.0));
        assert_eq!(tu(1.0).min(tu(2.0)), tu(1.0));
        assert_eq!(tu(1.0).max(tu(2.0)), tu(2.0));
        assert_eq!(tu(1.0).max(TU::NAN), tu(1.0));
    }

    #[test]
    fn quantity_debug_names_dimension() {
        assert_eq!(format!("{:?}", tu(2.5)), "Test(2.5)");
    }

    #[test]
    fn quantity_display_uses_si_symbol() {
        assert_eq!(TU::new(5.0, TEST_KILO).to_string(), "5000 tu");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits: Add, Sub, Mul, Div, Neg
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        assert_eq!(tu(2.0) + tu(3.0), tu(5.0));
        assert_eq!(tu(5.0) - tu(3.0), tu(2.0));
        assert_eq!(TU::new(1.0, TEST_KILO) + TU::new(50.0, TEST_CENTI), tu(1000.5));
    }

    #[test]
    fn operator_scalar_mul_div() {
        assert_eq!(tu(3.0) * 2.0, tu(6.0));
        assert_eq!(2.0 * tu(3.0), tu(6.0));
        assert_eq!(tu(6.0) / 4.0, tu(1.5));
    }

    #[test]
    fn operator_neg() {
        assert_eq!(-tu(2.0), tu(-2.0));
        assert_eq!(-(-tu(2.0)), tu(2.0));
    }

    #[test]
    fn same_dimension_ratio_is_f64() {
        let ratio: f64 = tu(6.0) / tu(4.0);
        assert_eq!(ratio, 1.5);
        assert_eq!(tu(7.0) / tu(7.0), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Assignment operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_assign() {
        let mut q = tu(1.0);
        q += tu(2.0);
        assert_eq!(q, tu(3.0));
        q -= tu(0.5);
        assert_eq!(q, tu(2.5));
        q *= 4.0;
        assert_eq!(q, tu(10.0));
        q /= 5.0;
        assert_eq!(q, tu(2.0));
    }

    #[test]
    fn sum_of_values_and_references() {
        let items = [tu(1.0), tu(2.0), tu(3.5)];
        let by_ref: TU = items.iter().sum();
        let by_value: TU = items.into_iter().sum();
        assert_eq!(by_ref, tu(6.5));
        assert_eq!(by_value, tu(6.5));
        assert_eq!(core::iter::empty::<TU>().sum::<TU>(), TU::ZERO);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Equality, ordering and hashing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_across_units() {
        assert_eq!(TU::new(100.0, TEST_CENTI), tu(1.0));
        assert!(tu(1.0) < TU::new(1.0, TEST_KILO));
        assert!(tu(2.0) >= tu(2.0));
    }

    #[test]
    fn signed_zeros_are_equal_and_hash_alike() {
        assert_eq!(tu(0.0), tu(-0.0));
        assert_eq!(hash_of(&tu(0.0)), hash_of(&tu(-0.0)));
        assert_eq!(hash_of(&tu(1.5)), hash_of(&TU::new(150.0, TEST_CENTI)));
    }

    #[test]
    fn compare_to_orders_numbers() {
        assert_eq!(tu(1.0).compare_to(&tu(2.0)), Ordering::Less);
        assert_eq!(tu(2.0).compare_to(&tu(1.0)), Ordering::Greater);
        assert_eq!(tu(2.0).compare_to(&tu(2.0)), Ordering::Equal);
    }

    #[test]
    fn compare_to_sorts_nan_first() {
        assert_eq!(TU::NAN.compare_to(&tu(f64::NEG_INFINITY)), Ordering::Less);
        assert_eq!(tu(0.0).compare_to(&TU::NAN), Ordering::Greater);
        assert_eq!(TU::NAN.compare_to(&TU::NAN), Ordering::Equal);

        let mut values = vec![tu(3.0), TU::NAN, tu(-1.0)];
        values.sort_by(TU::compare_to);
        assert!(values[0].si_value().is_nan());
        assert_eq!(values[1..], [tu(-1.0), tu(3.0)]);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Tolerance comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equals_within_tolerance() {
        assert!(tu(1.0).equals_within(tu(1.05), tu(0.1)));
        assert!(!tu(1.0).equals_within(tu(1.2), tu(0.1)));
        // strict bound
        assert!(!tu(1.0).equals_within(tu(2.0), tu(1.0)));
    }

    #[test]
    #[should_panic(expected = "tolerance must be greater than zero")]
    fn equals_within_rejects_zero_tolerance() {
        tu(1.0).equals_within(tu(1.0), TU::ZERO);
    }

    #[test]
    #[should_panic]
    fn equals_within_rejects_negative_tolerance() {
        tu(1.0).equals_within(tu(1.0), tu(-1.0));
    }

    #[test]
    fn try_equals_within_reports_error() {
        assert_eq!(
            tu(1.0).try_equals_within(tu(1.0), tu(-1.0)),
            Err(QuantityError::NonPositiveTolerance(-1.0))
        );
        assert!(tu(1.0).try_equals_within(tu(1.0), TU::NAN).is_err());
        assert_eq!(tu(1.0).try_equals_within(tu(1.0), tu(1e-9)), Ok(true));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Hand-written dimensions parse through their registry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn custom_dimension_parses() {
        assert_eq!("3 ktu".parse::<TU>().unwrap(), tu(3000.0));
        assert_eq!(TU::try_parse("3 mtu"), None);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity() {
            let q = TU::new(42.5, TEST_BASE);
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn serialize_writes_si_value() {
            let q = TU::new(250.0, TEST_CENTI);
            assert_eq!(serde_json::to_string(&q).unwrap(), "2.5");
        }

        #[test]
        fn deserialize_quantity() {
            let q: TU = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.si_value(), 42.5);
        }

        // ─────────────────────────────────────────────────────────────────────────
        // serde_with_unit module tests
        // ─────────────────────────────────────────────────────────────────────────

        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            distance: TU,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                distance: TU::new(4250.0, TEST_CENTI),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(json, r#"{"distance":{"value":42.5,"unit":"tu"}}"#);
        }

        #[test]
        fn serde_with_unit_deserialize_converts_unit() {
            let json = r#"{"distance":{"value":2.5,"unit":"ktu"}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.si_value(), 2500.0);
        }

        #[test]
        fn serde_with_unit_deserialize_no_unit_field() {
            let json = r#"{"distance":{"value":42.5}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.si_value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_unknown_unit() {
            let json = r#"{"distance":{"value":42.5,"unit":"wrong"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("unknown Test unit 'wrong'"));
        }

        #[test]
        fn serde_with_unit_deserialize_missing_value() {
            let json = r#"{"distance":{"unit":"tu"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("missing field"));
        }

        #[test]
        fn serde_with_unit_deserialize_duplicate_value() {
            let json = r#"{"distance":{"value":42.5,"value":100.0,"unit":"tu"}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("duplicate field"));
        }

        #[test]
        fn serde_with_unit_deserialize_invalid_format() {
            let json = r#"{"distance":"not_an_object"}"#;
            assert!(serde_json::from_str::<TestStruct>(json).is_err());
        }

        #[test]
        fn serde_with_unit_roundtrip() {
            let original = TestStruct {
                distance: tu(123.456),
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: TestStruct = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.distance, original.distance);
        }
    }
}
