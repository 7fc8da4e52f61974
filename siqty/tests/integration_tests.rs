//! Integration-level tests for the `siqty` facade crate.

use siqty::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn acceleration_centimetres_per_second_squared() {
    let unit = AccelerationUnit::CENTIMETRES_PER_SECOND_SQUARED;
    assert_eq!(unit.from_si(1.0), 100.0);
    assert_eq!(unit.to_si(100.0), 1.0);
}

#[test]
fn value_in_any_unit() {
    let d = Length::new(1.0, LengthUnit::MILES);
    assert_abs_diff_eq!(d.value_in(LengthUnit::METRES), 1609.344, epsilon = 1e-9);
    assert_relative_eq!(d.value_in(LengthUnit::FEET), 5280.0, max_relative = 1e-12);
}

#[test]
fn zero_for_every_dimension() {
    assert_eq!(Length::ZERO.si_value(), 0.0);
    assert_eq!(Voltage::ZERO.si_value(), 0.0);
    assert_eq!(MassFlow::ZERO.si_value(), 0.0);
    assert_eq!(KinematicViscosity::ZERO.si_value(), 0.0);
    assert_eq!(Capacitance::default(), Capacitance::ZERO);
}

/// Calls a generic check once per shipped dimension.
macro_rules! each_dimension {
    ($check:ident($($arg:expr),*)) => {{
        $check::<LengthDim>($($arg),*);
        $check::<AreaDim>($($arg),*);
        $check::<VolumeDim>($($arg),*);
        $check::<TimeDim>($($arg),*);
        $check::<FrequencyDim>($($arg),*);
        $check::<MassDim>($($arg),*);
        $check::<DensityDim>($($arg),*);
        $check::<SpeedDim>($($arg),*);
        $check::<AccelerationDim>($($arg),*);
        $check::<JerkDim>($($arg),*);
        $check::<KinematicViscosityDim>($($arg),*);
        $check::<ForceDim>($($arg),*);
        $check::<StiffnessDim>($($arg),*);
        $check::<FlexibilityDim>($($arg),*);
        $check::<PressureDim>($($arg),*);
        $check::<MomentumDim>($($arg),*);
        $check::<EnergyDim>($($arg),*);
        $check::<PowerDim>($($arg),*);
        $check::<SpecificEnergyDim>($($arg),*);
        $check::<MassFlowDim>($($arg),*);
        $check::<VolumetricFlowDim>($($arg),*);
        $check::<VoltageDim>($($arg),*);
        $check::<CurrentDim>($($arg),*);
        $check::<ResistanceDim>($($arg),*);
        $check::<ElectricalConductanceDim>($($arg),*);
        $check::<ElectricChargeDim>($($arg),*);
        $check::<CapacitanceDim>($($arg),*);
    }};
}

#[test]
fn every_table_starts_with_its_si_unit() {
    fn check<D: Dimension>() {
        assert_eq!(D::UNITS[0], D::SI_UNIT, "{}", D::NAME);
        assert!(D::SI_UNIT.is_si());
        assert_eq!(D::SI_UNIT.scale(), Scale::IDENTITY, "{}", D::NAME);
    }

    each_dimension!(check());
}

#[test]
fn every_symbol_resolves_and_survives_display_then_parse() {
    fn check<D: Dimension>() {
        let registry = D::registry();
        for unit in D::UNITS {
            assert_eq!(registry.lookup(unit.symbol()), Some(*unit), "{}", unit.symbol());

            let q = Quantity::<D>::new(12.75, *unit);
            let text = q.display_in(*unit).to_string();
            let back: Quantity<D> = text.parse().unwrap_or_else(|e| panic!("`{text}`: {e}"));
            assert_relative_eq!(back.si_value(), q.si_value(), max_relative = 1e-12);
        }
    }

    each_dimension!(check());
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit identity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn units_with_same_symbol_are_equal_regardless_of_scale() {
    let a = AccelerationUnit::new("m/s²", Scale::IDENTITY);
    let b = AccelerationUnit::new("m/s²", Scale::times(9.80665));
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
    assert!(set.contains(&AccelerationUnit::METRES_PER_SECOND_SQUARED));
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn arithmetic_on_si_values() {
    let a = Energy::from_kilojoules(1.5);
    let b = Energy::from_joules(250.0);
    assert_eq!((a + b).si_value(), a.si_value() + b.si_value());
    assert_eq!((a - b).si_value(), a.si_value() - b.si_value());
    assert_eq!(-(-a), a);
    assert_eq!(a / a, 1.0);
}

#[test]
fn stiffness_times_length_is_force() {
    assert_eq!(
        Stiffness::from_newtons_per_metre(2.0) * Length::from_metres(3.0),
        Force::from_newtons(6.0)
    );
}

#[test]
fn reciprocal_of_conductance_is_resistance() {
    let r: Resistance = 1.0 / ElectricalConductance::from_siemens(0.25);
    assert_eq!(r, Resistance::from_ohms(4.0));
}

#[test]
fn travel_time() {
    let d = Length::from_kilometres(120.0);
    let v = Speed::from_kilometres_per_hour(80.0);
    let t: Time = d / v;
    assert_relative_eq!(t.hours(), 1.5, max_relative = 1e-12);
}

#[test]
fn battery_runtime() {
    let capacity = ElectricCharge::from_milliampere_hours(3000.0);
    let draw = Current::from_milliamperes(150.0);
    let runtime: Time = capacity / draw;
    assert_relative_eq!(runtime.hours(), 20.0, max_relative = 1e-12);

    let energy: Energy = capacity * Voltage::from_volts(3.7);
    assert_relative_eq!(energy.watt_hours(), 11.1, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn comparison_across_units() {
    assert!(Time::from_minutes(1.0) > Time::from_seconds(59.0));
    assert!(Length::from_millimetres(1000.0) <= Length::from_metres(1.0));
    assert_eq!(
        Mass::from_grams(1.0).compare_to(&Mass::from_milligrams(1000.0)),
        core::cmp::Ordering::Equal
    );
}

#[test]
fn equals_within_tolerance() {
    let a = Length::from_metres(1.0);
    let b = Length::from_millimetres(1000.4);
    assert!(a.equals_within(b, Length::from_millimetres(1.0)));
    assert!(!a.equals_within(b, Length::from_millimetres(0.1)));
}

#[test]
#[should_panic]
fn equals_within_panics_on_zero_tolerance() {
    let a = Length::from_metres(1.0);
    a.equals_within(a, Length::ZERO);
}

#[test]
#[should_panic]
fn equals_within_panics_on_negative_tolerance() {
    let a = Voltage::from_volts(1.0);
    a.equals_within(a, Voltage::from_volts(-0.1));
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing and formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_acceleration() {
    let a: Acceleration = "2.5 m/s²".parse().unwrap();
    assert_eq!(a, Acceleration::from_metres_per_second_squared(2.5));
    assert!(Acceleration::try_parse("abc").is_none());
}

#[test]
fn parse_reports_errors() {
    assert_eq!(Time::parse(""), Err(ParseQuantityError::Empty));
    assert!(matches!(
        Time::parse("5 parsecs"),
        Err(ParseQuantityError::UnknownUnit { dimension: "Time", .. })
    ));
}

#[test]
fn display_round_trips_through_parse() {
    let p = Power::from_kilowatts(3.5);
    let text = p.to_string();
    assert_eq!(text, "3500 W");
    assert_eq!(text.parse::<Power>().unwrap(), p);
}

#[test]
fn registry_lists_symbols() {
    let symbols: Vec<_> = VolumeDim::registry().symbols().collect();
    assert_eq!(symbols, ["m³", "L", "ml", "cm³", "mm³"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Spring {
        stiffness: Stiffness,
        #[serde(with = "siqty::serde_with_unit")]
        preload: Force,
    }

    #[test]
    fn struct_roundtrip() {
        let spring = Spring {
            stiffness: Stiffness::from_kilonewtons_per_metre(12.0),
            preload: Force::from_newtons(150.0),
        };
        let json = serde_json::to_string(&spring).unwrap();
        assert_eq!(
            json,
            r#"{"stiffness":12000.0,"preload":{"value":150.0,"unit":"N"}}"#
        );
        let restored: Spring = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, spring);
    }

    #[test]
    fn with_unit_accepts_other_symbols() {
        let json = r#"{"stiffness":1.0,"preload":{"value":1.5,"unit":"kN"}}"#;
        let spring: Spring = serde_json::from_str(json).unwrap();
        assert_eq!(spring.preload, Force::from_newtons(1500.0));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_si_roundtrip_is_exact(x in -1e12..1e12f64) {
        let unit = AccelerationUnit::METRES_PER_SECOND_SQUARED;
        prop_assert_eq!(unit.from_si(unit.to_si(x)), x);
    }

    #[test]
    fn prop_roundtrip_every_acceleration_unit(x in -1e9..1e9f64) {
        for unit in AccelerationUnit::ALL {
            let back = unit.from_si(unit.to_si(x));
            prop_assert!((back - x).abs() <= 1e-12 * x.abs().max(1.0));
        }
    }

    #[test]
    fn prop_roundtrip_every_unit_of_every_dimension(x in -1e9..1e9f64) {
        fn check<D: Dimension>(x: f64) {
            for unit in D::UNITS {
                let back = unit.from_si(unit.to_si(x));
                assert!(
                    (back - x).abs() <= 1e-12 * x.abs().max(1.0),
                    "{} `{}`: {x} came back as {back}",
                    D::NAME,
                    unit.symbol()
                );
            }
        }

        each_dimension!(check(x));
    }

    #[test]
    fn prop_add_sub_match_si_values(a in -1e9..1e9f64, b in -1e9..1e9f64) {
        let qa = Pressure::from_pascals(a);
        let qb = Pressure::from_pascals(b);
        prop_assert_eq!((qa + qb).si_value(), a + b);
        prop_assert_eq!((qa - qb).si_value(), a - b);
        prop_assert_eq!(-(-qa), qa);
    }

    #[test]
    fn prop_self_ratio_is_one(a in 1e-9..1e9f64) {
        let q = Momentum::from_newton_seconds(a);
        prop_assert_eq!(q / q, 1.0);
    }
}
