//! Mass-and-energy balance for the H2 ilmenite reduction plant.
//!
//! Screened regolith is magnetically separated into an ilmenite stream that
//! is heated to the reduction temperature in a cylindrical reactor and
//! reduced by hydrogen to release water. The reactor bed is continuously
//! renewed: a fraction of its volume is replaced with fresh feedstock every
//! hour, which throttles the heating power a charge can absorb.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Mass, MassDensity, MassRate, Power, ThermodynamicTemperature, Time},
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::kilowatt,
    thermodynamic_temperature::kelvin,
    time::hour,
};

use crate::models::isru::feasibility::{self, FeasibilityError};
use crate::support::{
    properties::{self, density, enthalpy, molar_mass},
    quadrature,
    thermal,
    units::{DailyRate, SECONDS_PER_DAY},
};

/// Temperature the ilmenite is reduced at, K.
const REDUCTION_TEMPERATURE: f64 = 1275.0;

/// Input parameters for the H2 ilmenite reduction plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlmeniteReductionInput {
    /// Water production load requirement, kg/day, > 0.
    pub water_load: MassRate,

    /// Mass of the electrolyzer sized for the same water load, kg.
    /// Subtracted from the plant mass regression to avoid double counting.
    pub electrolyzer_mass: Mass,

    /// Power of the electrolyzer sized for the same water load; the plant's
    /// auxiliary electrical power is a fixed markup over it.
    pub electrolyzer_power: Power,

    /// Fraction of excavated regolith processable given the maximum
    /// admissible particle diameter, (0, 1].
    pub compo_fraction: f64,

    /// Ilmenite separation process efficiency, (0, 1].
    pub separation_factor: f64,

    /// Ratio of ilmenite mass to regolith mass, 0.004 to 0.128.
    pub ilmenite_mass_fraction: f64,

    /// Trapped solar-wind hydrogen per regolith volume, 0.1 to 0.2 kg/m³.
    pub hydrogen_density_in_regolith: MassDensity,

    /// Temperature of the regolith entering the reactor, 100 K to 384 K.
    pub regolith_temperature: ThermodynamicTemperature,

    /// Reactor tank diameter, m.
    pub reactor_diameter: Length,

    /// Reactor tank height, m.
    pub reactor_height: Length,

    /// Residence time at the reduction temperature, h.
    pub remain_at_temperature_time: Time,
}

/// Derived quantities for the H2 ilmenite reduction plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IlmeniteReductionResults {
    /// Ilmenite processed by the reduction, kg/day.
    pub ilmenite_flow: MassRate,

    /// Total regolith excavation load, kg/day.
    pub regolith_load: MassRate,

    /// H2 released from the regolith while heating above 900 °C, kg/day.
    pub h2_released_heating: MassRate,

    /// H2 consumed by the reduction reaction, kg/day.
    pub h2_consumed_reduction: MassRate,

    /// Fraction of the reactor volume renewed per hour, derived from the
    /// regolith load and the reactor geometry.
    pub fraction_volume_renewed: f64,

    /// Endothermic reduction reaction power. Positive: to supply.
    pub reaction_power: Power,

    /// Bed heating power over the renewed reactor volume. Positive: to supply.
    pub heating_power: Power,

    /// Thermal losses, a 3 %/97 % markup over reaction plus heating.
    pub loss_power: Power,

    /// Total thermal power. Positive: to supply.
    pub thermal_power: Power,

    /// Plant electrical power other than electrolysis.
    pub electrical_power: Power,

    /// Total plant power (thermal plus electrical).
    pub total_power: Power,

    /// Total plant mass from the literature regression, kg, with the
    /// electrolyzer and O2/H2 tanks removed.
    pub mass: Mass,
}

pub(super) fn solve(
    input: &IlmeniteReductionInput,
) -> Result<IlmeniteReductionResults, FeasibilityError> {
    let load = input.water_load.kilograms_per_day();

    let ilmenite_flow =
        (molar_mass::ILMENITE / molar_mass::H2O) * load / input.separation_factor;
    let screened_feed = ilmenite_flow / input.ilmenite_mass_fraction;
    let regolith_load = screened_feed / input.compo_fraction;

    let hydrogen_density = input
        .hydrogen_density_in_regolith
        .get::<kilogram_per_cubic_meter>();
    let h2_released_heating = (hydrogen_density / density::REGOLITH) * ilmenite_flow;
    let h2_consumed_reduction = (molar_mass::H2 / molar_mass::H2O) * load;

    let diameter = input.reactor_diameter.get::<meter>();
    let height = input.reactor_height.get::<meter>();
    let residence = input.remain_at_temperature_time.get::<hour>();

    // How fast the bed turns over follows from the load and the geometry,
    // and directly drives the heating power.
    let fraction_volume_renewed = (4.0 * input.ilmenite_mass_fraction)
        / (density::ILMENITE * PI * height * diameter * diameter)
        * regolith_load
        / 24.0;
    feasibility::check_renewal_rate(fraction_volume_renewed, residence)?;

    let reaction_power = Power::new::<kilowatt>(
        enthalpy::ILMENITE_REDUCTION_KJ_PER_KG * input.separation_factor * ilmenite_flow
            / SECONDS_PER_DAY,
    );

    // rho * pi * D^2 * H / 4 is the bed mass of one full charge.
    let bed_volume = PI * diameter * diameter * height / 4.0;
    let sensible_heat = quadrature::integrate(
        properties::regolith_specific_heat,
        input.regolith_temperature.get::<kelvin>(),
        REDUCTION_TEMPERATURE,
    );
    let heating_power = Power::new::<kilowatt>(
        density::ILMENITE * sensible_heat * bed_volume
            * thermal::renewal_throttle(fraction_volume_renewed, residence)
            / (1000.0 * 3600.0),
    );

    let loss_power = thermal::loss_markup(reaction_power + heating_power);
    let thermal_power = reaction_power + heating_power + loss_power;
    let electrical_power = thermal::auxiliary_electrical_power(input.electrolyzer_power);
    let total_power = thermal_power + electrical_power;

    let o2_per_water = molar_mass::O2 / (2.0 * molar_mass::H2O);
    let mass_kg = (1.0 - (0.43 + 0.02)) * (588.0 * o2_per_water * load / 24.0 - 240.0) + 240.0
        - input.electrolyzer_mass.get::<kilogram>();

    Ok(IlmeniteReductionResults {
        ilmenite_flow: MassRate::from_kilograms_per_day(ilmenite_flow),
        regolith_load: MassRate::from_kilograms_per_day(regolith_load),
        h2_released_heating: MassRate::from_kilograms_per_day(h2_released_heating),
        h2_consumed_reduction: MassRate::from_kilograms_per_day(h2_consumed_reduction),
        fraction_volume_renewed,
        reaction_power,
        heating_power,
        loss_power,
        thermal_power,
        electrical_power,
        total_power,
        mass: Mass::new::<kilogram>(mass_kg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn baseline() -> IlmeniteReductionInput {
        IlmeniteReductionInput {
            water_load: MassRate::from_kilograms_per_day(44.01),
            electrolyzer_mass: Mass::new::<kilogram>(49.44),
            electrolyzer_power: Power::new::<kilowatt>(9.05),
            compo_fraction: 0.9,
            separation_factor: 0.9,
            ilmenite_mass_fraction: 0.07,
            hydrogen_density_in_regolith: MassDensity::new::<kilogram_per_cubic_meter>(0.15),
            regolith_temperature: ThermodynamicTemperature::new::<kelvin>(384.0),
            reactor_diameter: Length::new::<meter>(0.8),
            reactor_height: Length::new::<meter>(0.8),
            remain_at_temperature_time: Time::new::<hour>(1.0),
        }
    }

    #[test]
    fn baseline_mass_flows() {
        let results = solve(&baseline()).unwrap();

        let ilmenite = (151.7 / 18.0) * 44.01 / 0.9;
        assert_relative_eq!(
            results.ilmenite_flow.kilograms_per_day(),
            ilmenite,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.regolith_load.kilograms_per_day(),
            ilmenite / 0.07 / 0.9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.h2_consumed_reduction.kilograms_per_day(),
            (2.0 / 18.0) * 44.01,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.h2_released_heating.kilograms_per_day(),
            (0.15 / 1400.0) * ilmenite,
            max_relative = 1e-9
        );
    }

    #[test]
    fn baseline_power_ledger() {
        let results = solve(&baseline()).unwrap();

        // The literature baseline renews about 3 % of the bed per hour.
        assert_relative_eq!(results.fraction_volume_renewed, 0.0339, epsilon = 5e-4);

        let ilmenite = (151.7 / 18.0) * 44.01 / 0.9;
        assert_relative_eq!(
            results.reaction_power.get::<kilowatt>(),
            294.0 * 0.9 * ilmenite / 86_400.0,
            max_relative = 1e-9
        );
        assert!(results.heating_power.get::<kilowatt>() > 0.0);
        assert_relative_eq!(
            results.loss_power.get::<kilowatt>(),
            (0.03 / 0.97)
                * (results.reaction_power + results.heating_power).get::<kilowatt>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.electrical_power.get::<kilowatt>(),
            (0.04 / 0.96) * 9.05,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.total_power.get::<kilowatt>(),
            (results.thermal_power + results.electrical_power).get::<kilowatt>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn baseline_mass_regression() {
        let results = solve(&baseline()).unwrap();

        let expected = 0.55 * (588.0 * (32.0 / 36.0) * 44.01 / 24.0 - 240.0) + 240.0 - 49.44;
        assert_relative_eq!(results.mass.get::<kilogram>(), expected, max_relative = 1e-12);
    }

    #[test]
    fn rejects_renewal_faster_than_heating() {
        // At the baseline turnover (~0.034 per hour), 30 hours of residence
        // pushes f * t past 1.
        let result = solve(&IlmeniteReductionInput {
            remain_at_temperature_time: Time::new::<hour>(30.0),
            ..baseline()
        });

        assert!(matches!(
            result,
            Err(FeasibilityError::RenewedBeforeHeated { product, .. }) if product >= 1.0
        ));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = solve(&baseline()).unwrap();
        let b = solve(&baseline()).unwrap();
        assert_eq!(a, b);
    }
}
