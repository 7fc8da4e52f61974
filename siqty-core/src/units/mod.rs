//! Predefined dimensions and their unit tables.
//!
//! Every module declares one dimension tag, its quantity and unit aliases, and the table of named units. The
//! operators linking dimensions together live in the crate's relation table, not here.
//!
//! ## Modules
//!
//! - Geometry: [`length`], [`area`], [`volume`].
//! - Time: [`time`], [`frequency`].
//! - Kinematics: [`speed`], [`acceleration`], [`jerk`], [`kinematic_viscosity`].
//! - Mass: [`mass`], [`density`], [`mass_flow`], [`volumetric_flow`].
//! - Mechanics: [`force`], [`stiffness`], [`flexibility`], [`pressure`], [`momentum`].
//! - Energy: [`energy`], [`power`], [`specific_energy`].
//! - Electricity: [`voltage`], [`current`], [`resistance`], [`electrical_conductance`], [`electric_charge`],
//!   [`capacitance`].

pub mod acceleration;
pub mod area;
pub mod capacitance;
pub mod current;
pub mod density;
pub mod electric_charge;
pub mod electrical_conductance;
pub mod energy;
pub mod flexibility;
pub mod force;
pub mod frequency;
pub mod jerk;
pub mod kinematic_viscosity;
pub mod length;
pub mod mass;
pub mod mass_flow;
pub mod momentum;
pub mod power;
pub mod pressure;
pub mod resistance;
pub mod specific_energy;
pub mod speed;
pub mod stiffness;
pub mod time;
pub mod voltage;
pub mod volume;
pub mod volumetric_flow;
