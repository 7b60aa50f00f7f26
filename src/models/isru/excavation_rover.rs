//! Excavation rover fleet for regolith acquisition.
//!
//! Sizes a discrete fleet of RASSOR-class rovers to meet a daily regolith
//! load. Power covers the extraction duty recharged over the daily charging
//! window only; mobility power is out of scope of the reference data.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    f64::{Mass, MassRate, Power, Time},
    power::kilowatt,
    time::hour,
};

use crate::support::units::DailyRate;

/// Input parameters for the excavation rover fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcavationRoverInput {
    /// Regolith excavation load requirement, kg/day, > 0.
    pub regolith_load: MassRate,

    /// Mass of one rover, kg.
    pub baseline_mass: Mass,

    /// Regolith capacity of one rover, kg/day, > 0.
    pub baseline_capacity: MassRate,

    /// Extraction power per excavation rate, kW/(kg/h).
    pub specific_power: f64,

    /// Daily battery recharge window, h, in (0, 24).
    pub recharge_time: Time,

    /// Spare rovers added on top of the sized fleet.
    pub redundancy: u32,
}

/// Derived quantities for the excavation rover fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcavationRoverResults {
    /// Number of rovers, including redundancy.
    pub num_rovers: u32,

    /// Total fleet mass, kg.
    pub mass: Mass,

    /// Power to recharge the fleet's extraction duty over the charging
    /// window.
    pub power: Power,
}

/// Sizing model for a fleet of regolith excavation rovers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcavationRoverFleet;

impl Model for ExcavationRoverFleet {
    type Input = ExcavationRoverInput;
    type Output = ExcavationRoverResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let load = input.regolith_load.kilograms_per_day();
        let capacity = input.baseline_capacity.kilograms_per_day();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let num_rovers = (load / capacity).ceil() as u32 + input.redundancy;

        let mass = input.baseline_mass * f64::from(num_rovers);

        // Extraction energy spread over the recharge window instead of the
        // full day.
        let recharge = input.recharge_time.get::<hour>();
        let power = (load / 24.0) * input.specific_power * (24.0 - recharge) / recharge;

        Ok(ExcavationRoverResults {
            num_rovers,
            mass,
            power: Power::new::<kilowatt>(power),
        })
    }
}
