//! Mass-and-energy balance for the sub-triple-point regolith dryer.
//!
//! Icy regolith is heated at constant pressure below the triple point of
//! water, so the ice sublimes directly to vapor. The load is shared evenly
//! across identical dryer units sized by a fixed drum volume, and each unit
//! is continuously renewed with fresh feedstock.

pub(super) mod equilibrium;

use thiserror::Error;
use uom::si::{
    f64::{Mass, MassRate, Power, Pressure, ThermodynamicTemperature, Time},
    mass::kilogram,
    power::kilowatt,
    thermodynamic_temperature::kelvin,
    time::hour,
};

use crate::models::isru::feasibility::{self, FeasibilityError};
use crate::support::{
    properties::{self, density, enthalpy, specific_heat},
    quadrature, thermal,
    units::DailyRate,
};

use equilibrium::{EquilibriumConfig, EquilibriumError};

/// Dryer drum volume, m³, from rough vendor estimates.
const DRYER_VOLUME: f64 = 0.0246;

/// Dry mass of one dryer unit, kg: conveyor belts, vibrating screen, and
/// drying section.
const DRYER_UNIT_MASS: f64 = 26.9 + 68.4 + 50.9;

/// Errors that can occur while sizing the dryer.
#[derive(Debug, Error)]
pub enum DryerError {
    /// A guarded physical precondition failed.
    #[error("infeasible dryer operating point")]
    Feasibility(#[from] FeasibilityError),

    /// The sublimation temperature solve failed.
    #[error("sublimation temperature solve failed")]
    Equilibrium(#[from] EquilibriumError),
}

/// Input parameters for the sub-triple-point dryer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SublimationDryerInput {
    /// Water production load requirement, kg/day, > 0.
    pub water_load: MassRate,

    /// Fraction of excavated regolith processable given the maximum
    /// admissible particle diameter, (0, 1].
    pub compo_fraction: f64,

    /// Ratio of water ice mass to regolith mass, 0.029 to 0.085.
    /// Set to 1 for pure ice mining.
    pub water_mass_fraction: f64,

    /// Operating pressure, strictly below the triple point of water.
    pub dryer_pressure: Pressure,

    /// Temperature of the feedstock entering the dryer, K.
    pub initial_temperature: ThermodynamicTemperature,

    /// Final operating temperature of the dryer, K.
    pub final_temperature: ThermodynamicTemperature,

    /// Residence time at the final temperature, h.
    pub remain_at_temperature_time: Time,

    /// Fraction of the drum volume renewed per hour with fresh feedstock.
    pub fraction_volume_renewed: f64,

    /// Water extraction process efficiency, (0, 1]. 1 is an ideal process.
    pub water_extraction_efficiency: f64,
}

/// Derived quantities for the sub-triple-point dryer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SublimationDryerResults {
    /// Sublimation temperature at the operating pressure.
    pub sublimation_temperature: ThermodynamicTemperature,

    /// Screened regolith feed required for the water load, kg/day.
    pub screened_feed: MassRate,

    /// Total regolith excavation load, kg/day.
    pub regolith_load: MassRate,

    /// Feedstock one dryer unit processes per day, kg/day.
    pub dryer_capacity: MassRate,

    /// Number of identical dryer units sharing the load.
    pub num_dryers: u32,

    /// Water extraction power per dryer: ice heating, sublimation, and
    /// vapor superheating.
    pub extraction_power: Power,

    /// Power to heat the dry regolith fraction per dryer.
    pub heating_power: Power,

    /// Thermal losses per dryer, a 3 %/97 % markup over the duty.
    pub loss_power: Power,

    /// Total power per dryer unit.
    pub power_per_dryer: Power,

    /// Total power across all dryer units.
    pub total_power: Power,

    /// Total mass across all dryer units, kg.
    pub mass: Mass,
}

pub(super) fn solve(
    input: &SublimationDryerInput,
) -> Result<SublimationDryerResults, DryerError> {
    // The pressure check comes first so the curve inversion always has its
    // root inside the bisection bracket.
    feasibility::check_dryer_pressure(input.dryer_pressure)?;

    let sublimation_temperature =
        equilibrium::sublimation_temperature(input.dryer_pressure, &EquilibriumConfig::default())?;

    feasibility::check_temperature_ordering(
        input.initial_temperature,
        input.final_temperature,
        sublimation_temperature,
    )?;

    let f = input.fraction_volume_renewed;
    let residence = input.remain_at_temperature_time.get::<hour>();
    feasibility::check_renewal_rate(f, residence)?;

    let load = input.water_load.kilograms_per_day();
    let w = input.water_mass_fraction;

    let screened_feed = load / (input.water_extraction_efficiency * w);
    let regolith_load = screened_feed / input.compo_fraction;

    // A drum holds regolith and ice in proportion to the water fraction.
    let bulk_density = (1.0 - w) * density::REGOLITH + w * density::ICE;
    let dryer_capacity = 24.0 * f * DRYER_VOLUME * bulk_density;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let num_dryers = (screened_feed / dryer_capacity).ceil() as u32;

    // Load sharing leaves each drum partially filled.
    let fill_fraction = regolith_load / (f64::from(num_dryers) * dryer_capacity);

    let ice_mass =
        (density::REGOLITH / density::ICE) * w * density::ICE * DRYER_VOLUME * fill_fraction;

    let t_sub = sublimation_temperature.get::<kelvin>();
    let t_initial = input.initial_temperature.get::<kelvin>();
    let t_final = input.final_temperature.get::<kelvin>();

    // Energy per charge, kJ: warm the ice, sublime it, superheat the vapor.
    let heat_ice = ice_mass * specific_heat::ICE_KJ_PER_KG_K * (t_sub - t_initial);
    let sublimation = ice_mass
        * (enthalpy::WATER_FUSION_KJ_PER_KG + enthalpy::WATER_VAPORIZATION_KJ_PER_KG);
    let heat_vapor = ice_mass * specific_heat::STEAM_KJ_PER_KG_K * (t_final - t_sub);

    let throttle = thermal::renewal_throttle(f, residence);

    let extraction_power =
        Power::new::<kilowatt>((heat_ice + sublimation + heat_vapor) * throttle / 3600.0);

    let dry_fraction = 1.0 - (density::REGOLITH / density::ICE) * w;
    let heating_power = Power::new::<kilowatt>(
        quadrature::integrate(properties::regolith_specific_heat, t_initial, t_final)
            * dry_fraction
            * density::REGOLITH
            * DRYER_VOLUME
            * fill_fraction
            * throttle
            / (1000.0 * 3600.0),
    );

    let loss_power = thermal::loss_markup(extraction_power + heating_power);
    let power_per_dryer = extraction_power + heating_power + loss_power;
    let total_power = power_per_dryer * f64::from(num_dryers);

    let mass = Mass::new::<kilogram>(DRYER_UNIT_MASS * f64::from(num_dryers));

    Ok(SublimationDryerResults {
        sublimation_temperature,
        screened_feed: MassRate::from_kilograms_per_day(screened_feed),
        regolith_load: MassRate::from_kilograms_per_day(regolith_load),
        dryer_capacity: MassRate::from_kilograms_per_day(dryer_capacity),
        num_dryers,
        extraction_power,
        heating_power,
        loss_power,
        power_per_dryer,
        total_power,
        mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::pascal;

    fn baseline() -> SublimationDryerInput {
        SublimationDryerInput {
            water_load: MassRate::from_kilograms_per_day(44.01),
            compo_fraction: 0.9,
            water_mass_fraction: 0.057,
            dryer_pressure: Pressure::new::<pascal>(500.0),
            initial_temperature: ThermodynamicTemperature::new::<kelvin>(120.0),
            final_temperature: ThermodynamicTemperature::new::<kelvin>(280.0),
            remain_at_temperature_time: Time::new::<hour>(1.0),
            fraction_volume_renewed: 0.9,
            water_extraction_efficiency: 1.0,
        }
    }

    #[test]
    fn baseline_shares_the_load_across_two_dryers() {
        let results = solve(&baseline()).unwrap();

        let screened = 44.01 / 0.057;
        assert_relative_eq!(
            results.screened_feed.kilograms_per_day(),
            screened,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            results.regolith_load.kilograms_per_day(),
            screened / 0.9,
            max_relative = 1e-9
        );

        let capacity = 24.0 * 0.9 * 0.0246 * ((1.0 - 0.057) * 1400.0 + 0.057 * 910.0);
        assert_relative_eq!(
            results.dryer_capacity.kilograms_per_day(),
            capacity,
            max_relative = 1e-9
        );
        assert_eq!(results.num_dryers, 2);
    }

    #[test]
    fn baseline_sublimation_temperature_sits_below_the_triple_point() {
        let results = solve(&baseline()).unwrap();

        let t_sub = results.sublimation_temperature.get::<kelvin>();
        assert!((270.0..272.0).contains(&t_sub), "got {t_sub} K");
        assert_relative_eq!(
            equilibrium::sublimation_pressure(t_sub),
            500.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn baseline_power_ledger() {
        let results = solve(&baseline()).unwrap();

        assert!(results.extraction_power.get::<kilowatt>() > 0.0);
        assert!(results.heating_power.get::<kilowatt>() > 0.0);
        assert_relative_eq!(
            results.loss_power.get::<kilowatt>(),
            (0.03 / 0.97)
                * (results.extraction_power + results.heating_power).get::<kilowatt>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            results.total_power.get::<kilowatt>(),
            2.0 * results.power_per_dryer.get::<kilowatt>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn baseline_mass_counts_every_unit() {
        let results = solve(&baseline()).unwrap();
        assert_relative_eq!(
            results.mass.get::<kilogram>(),
            2.0 * (26.9 + 68.4 + 50.9),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_pressure_at_the_triple_point() {
        let result = solve(&SublimationDryerInput {
            dryer_pressure: Pressure::new::<pascal>(611.657),
            ..baseline()
        });

        assert!(matches!(
            result,
            Err(DryerError::Feasibility(
                FeasibilityError::PressureAboveTriplePoint { .. }
            ))
        ));
    }

    #[test]
    fn rejects_inverted_temperatures() {
        let result = solve(&SublimationDryerInput {
            initial_temperature: ThermodynamicTemperature::new::<kelvin>(300.0),
            ..baseline()
        });

        assert!(matches!(
            result,
            Err(DryerError::Feasibility(
                FeasibilityError::InitialAboveFinal { .. }
            ))
        ));
    }

    #[test]
    fn rejects_final_temperature_below_sublimation() {
        // At 500 Pa the sublimation temperature is near 271 K.
        let result = solve(&SublimationDryerInput {
            final_temperature: ThermodynamicTemperature::new::<kelvin>(250.0),
            ..baseline()
        });

        assert!(matches!(
            result,
            Err(DryerError::Feasibility(
                FeasibilityError::FinalBelowSublimation { .. }
            ))
        ));
    }

    #[test]
    fn rejects_renewal_faster_than_heating() {
        let result = solve(&SublimationDryerInput {
            remain_at_temperature_time: Time::new::<hour>(2.0),
            ..baseline()
        });

        assert!(matches!(
            result,
            Err(DryerError::Feasibility(
                FeasibilityError::RenewedBeforeHeated { .. }
            ))
        ));
    }
}
