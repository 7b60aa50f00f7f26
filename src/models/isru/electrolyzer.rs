//! Water electrolyzer producing O2 and H2 for the plant models.
//!
//! Power follows from the Gibbs free energy of water formation and the
//! stack efficiency; mass follows from a specific-mass regression over the
//! balance-of-plant components.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    f64::{Mass, MassRate, Power},
    mass::kilogram,
    power::kilowatt,
};

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    properties::{enthalpy, molar_mass},
    units::{DailyRate, SECONDS_PER_DAY},
};

/// Specific mass of the electrolyzer and its balance of plant, kg per kW of
/// stack power: electrolysis stack, water tank, filter, pump and lines,
/// control unit, wiring, heat exchanger, water purifier, check valves,
/// frame, control valves, sensors, and fluid storage.
const SPECIFIC_MASS_KG_PER_KW: f64 =
    2.00 + 0.10 + 0.12 + 0.52 + 0.16 + 0.30 + 1.00 + 0.27 + 0.08 + 0.62 + 0.16 + 0.07 + 0.06;

/// Input parameters for the water electrolyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrolyzerInput {
    /// Water electrolysis load, kg/day, > 0.
    pub water_load: MassRate,

    /// Stack power efficiency, (0, 1].
    pub efficiency: Constrained<f64, UnitIntervalLowerOpen>,
}

/// Derived quantities for the water electrolyzer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectrolyzerResults {
    /// Electrical power drawn by the stack.
    pub power: Power,

    /// Inefficiency heat to dissipate.
    pub heat: Power,

    /// Electrolyzer mass including its balance of plant, kg.
    pub mass: Mass,
}

/// Sizing model for a water electrolyzer.
///
/// Evaluation is infallible: the efficiency is validated at construction
/// through its [`Constrained`] wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Electrolyzer;

impl Model for Electrolyzer {
    type Input = ElectrolyzerInput;
    type Output = ElectrolyzerResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let load = input.water_load.kilograms_per_day();
        let efficiency = *input.efficiency.as_ref();

        // kJ/mol over kg/mol gives kJ/kg; the daily load then yields kW.
        let ideal_power =
            enthalpy::WATER_GIBBS_KJ_PER_MOL * load / (SECONDS_PER_DAY * molar_mass::H2O);

        let power = ideal_power / efficiency;
        let heat = ideal_power * (1.0 / efficiency - 1.0);

        Ok(ElectrolyzerResults {
            power: Power::new::<kilowatt>(power),
            heat: Power::new::<kilowatt>(heat),
            mass: Mass::new::<kilogram>(power * SPECIFIC_MASS_KG_PER_KW),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn baseline() -> ElectrolyzerInput {
        ElectrolyzerInput {
            water_load: MassRate::from_kilograms_per_day(44.01),
            efficiency: UnitIntervalLowerOpen::new(0.72).unwrap(),
        }
    }

    #[test]
    fn baseline_power_and_mass() {
        let results = Electrolyzer.call(&baseline()).unwrap();

        let power = 230.4 * 44.01 / (86_400.0 * 0.72 * 18e-3);
        assert_relative_eq!(
            results.power.get::<kilowatt>(),
            power,
            max_relative = 1e-9
        );
        assert_relative_eq!(results.power.get::<kilowatt>(), 9.055, epsilon = 1e-3);
        assert_relative_eq!(
            results.mass.get::<kilogram>(),
            power * 5.46,
            max_relative = 1e-9
        );
        assert_relative_eq!(results.mass.get::<kilogram>(), 49.44, epsilon = 0.01);
    }

    #[test]
    fn heat_balances_the_inefficiency() {
        let results = Electrolyzer.call(&baseline()).unwrap();

        // power * efficiency is the ideal electrolysis power; the rest is
        // rejected as heat.
        assert_relative_eq!(
            results.heat.get::<kilowatt>(),
            results.power.get::<kilowatt>() * (1.0 - 0.72),
            max_relative = 1e-9
        );
    }

    #[test]
    fn ideal_stack_rejects_no_heat() {
        let results = Electrolyzer
            .call(&ElectrolyzerInput {
                efficiency: UnitIntervalLowerOpen::new(1.0).unwrap(),
                ..baseline()
            })
            .unwrap();

        assert_relative_eq!(results.heat.get::<kilowatt>(), 0.0);
    }
}
