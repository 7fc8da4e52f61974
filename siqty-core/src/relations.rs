//! Cross-dimension operators.
//!
//! Every binding below multiplies or divides the SI values of its operands. The table is written out by hand and
//! is deliberately not closed under commutation: `Stiffness * Length` exists, `Length * Stiffness` does too, but
//! `f64 / Resistance` does not while `f64 / ElectricalConductance` does.
//!
//! ```rust
//! use siqty_core::force::Force;
//! use siqty_core::length::Length;
//! use siqty_core::stiffness::Stiffness;
//!
//! let f = Stiffness::from_newtons_per_metre(2.0) * Length::from_metres(3.0);
//! assert_eq!(f, Force::from_newtons(6.0));
//! ```

use crate::units::acceleration::Acceleration;
use crate::units::area::Area;
use crate::units::capacitance::Capacitance;
use crate::units::current::Current;
use crate::units::density::Density;
use crate::units::electric_charge::ElectricCharge;
use crate::units::electrical_conductance::ElectricalConductance;
use crate::units::energy::Energy;
use crate::units::flexibility::Flexibility;
use crate::units::force::Force;
use crate::units::frequency::Frequency;
use crate::units::jerk::Jerk;
use crate::units::kinematic_viscosity::KinematicViscosity;
use crate::units::length::Length;
use crate::units::mass::Mass;
use crate::units::mass_flow::MassFlow;
use crate::units::momentum::Momentum;
use crate::units::power::Power;
use crate::units::pressure::Pressure;
use crate::units::resistance::Resistance;
use crate::units::specific_energy::SpecificEnergy;
use crate::units::speed::Speed;
use crate::units::stiffness::Stiffness;
use crate::units::time::Time;
use crate::units::voltage::Voltage;
use crate::units::volume::Volume;
use crate::units::volumetric_flow::VolumetricFlow;

// ─────────────────────────────────────────────────────────────────────────────
// Reciprocals
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    f64 / Time => Frequency;
    f64 / Frequency => Time;
    f64 / Stiffness => Flexibility;
    f64 / Flexibility => Stiffness;
    f64 / ElectricalConductance => Resistance;
}

// ─────────────────────────────────────────────────────────────────────────────
// Geometry and time
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Length * Length => Area;
    Length * Area => Volume;
    Length / Time => Speed;
    Length * Frequency => Speed;
    Length / Speed => Time;
    Length * Force => Energy;
    Length * Stiffness => Force;

    Area / Length => Length;
    Area * Length => Volume;
    Area * Pressure => Force;
    Area * Speed => VolumetricFlow;
    Area / Time => KinematicViscosity;

    Volume / Length => Area;
    Volume / Area => Length;
    Volume * Density => Mass;
    Volume / Time => VolumetricFlow;
    Volume * Frequency => VolumetricFlow;
    Volume * Pressure => Energy;

    Time * Speed => Length;
    Time * Acceleration => Speed;
    Time * Jerk => Acceleration;
    Time * Power => Energy;
    Time * Current => ElectricCharge;
    Time * MassFlow => Mass;
    Time * VolumetricFlow => Volume;
    Time * Force => Momentum;

    Frequency * Length => Speed;
    Frequency * Speed => Acceleration;
    Frequency * Energy => Power;
    Frequency * Mass => MassFlow;
    Frequency * Volume => VolumetricFlow;
    Frequency * ElectricCharge => Current;
}

// ─────────────────────────────────────────────────────────────────────────────
// Kinematics
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Speed * Time => Length;
    Speed / Time => Acceleration;
    Speed * Frequency => Acceleration;
    Speed * Mass => Momentum;
    Speed * Force => Power;
    Speed / Length => Frequency;
    Speed * Area => VolumetricFlow;
    Speed * Length => KinematicViscosity;

    Acceleration * Time => Speed;
    Acceleration / Time => Jerk;
    Acceleration * Mass => Force;
    Acceleration / Frequency => Speed;
    Acceleration / Speed => Frequency;
    Acceleration * Frequency => Jerk;

    Jerk * Time => Acceleration;
    Jerk / Frequency => Acceleration;

    KinematicViscosity * Time => Area;
    KinematicViscosity / Length => Speed;
    KinematicViscosity / Speed => Length;
}

// ─────────────────────────────────────────────────────────────────────────────
// Mass and flow
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Mass * Acceleration => Force;
    Mass * Speed => Momentum;
    Mass / Volume => Density;
    Mass / Density => Volume;
    Mass / Time => MassFlow;
    Mass * Frequency => MassFlow;
    Mass * SpecificEnergy => Energy;

    Density * Volume => Mass;
    Density * VolumetricFlow => MassFlow;

    MassFlow * Time => Mass;
    MassFlow / Frequency => Mass;
    MassFlow / Density => VolumetricFlow;
    MassFlow / VolumetricFlow => Density;

    VolumetricFlow * Time => Volume;
    VolumetricFlow / Frequency => Volume;
    VolumetricFlow / Area => Speed;
    VolumetricFlow / Speed => Area;
    VolumetricFlow * Density => MassFlow;
}

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Force / Length => Stiffness;
    Force / Stiffness => Length;
    Force * Length => Energy;
    Force / Area => Pressure;
    Force / Pressure => Area;
    Force / Mass => Acceleration;
    Force / Acceleration => Mass;
    Force * Speed => Power;
    Force * Time => Momentum;
    Force * Flexibility => Length;

    Stiffness * Length => Force;

    Flexibility * Force => Length;

    Pressure * Area => Force;
    Pressure * Volume => Energy;

    Momentum / Time => Force;
    Momentum / Mass => Speed;
    Momentum / Speed => Mass;
    Momentum * Frequency => Force;
}

// ─────────────────────────────────────────────────────────────────────────────
// Energy and power
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Energy / Time => Power;
    Energy * Frequency => Power;
    Energy / Power => Time;
    Energy / Length => Force;
    Energy / Force => Length;
    Energy / Mass => SpecificEnergy;
    Energy / Volume => Pressure;
    Energy / ElectricCharge => Voltage;
    Energy / Voltage => ElectricCharge;

    Power * Time => Energy;
    Power / Frequency => Energy;
    Power / Speed => Force;
    Power / Force => Speed;
    Power / Voltage => Current;
    Power / Current => Voltage;

    SpecificEnergy * Mass => Energy;
}

// ─────────────────────────────────────────────────────────────────────────────
// Electricity
// ─────────────────────────────────────────────────────────────────────────────

impl_relations! {
    Voltage * Current => Power;
    Voltage / Current => Resistance;
    Voltage / Resistance => Current;
    Voltage * ElectricalConductance => Current;
    Voltage * ElectricCharge => Energy;
    Voltage * Capacitance => ElectricCharge;

    Current * Voltage => Power;
    Current * Time => ElectricCharge;
    Current / Frequency => ElectricCharge;
    Current * Resistance => Voltage;
    Current / Voltage => ElectricalConductance;
    Current / ElectricalConductance => Voltage;

    Resistance * Current => Voltage;

    ElectricalConductance * Voltage => Current;

    ElectricCharge / Time => Current;
    ElectricCharge * Frequency => Current;
    ElectricCharge / Current => Time;
    ElectricCharge / Voltage => Capacitance;
    ElectricCharge / Capacitance => Voltage;
    ElectricCharge * Voltage => Energy;

    Capacitance * Voltage => ElectricCharge;
}
