//! Mass-and-energy balance for the CH4 carbothermal reduction plant.
//!
//! The plant melts screened regolith with optic fibers (one hemispherical
//! melt of 7.5 cm diameter per fiber), reduces the contained SiO2 with CH4,
//! and feeds the released CO to a Sabatier reactor to recover water.
//!
//! Because the Sabatier reaction and water electrolysis have near-ideal
//! yields, the whole water-yield penalty is attributed to the carbothermal
//! reduction step: the efficiency factor inflates the regolith/silica feed
//! requirement only, while the Sabatier consumption and production flows
//! are computed directly from the target water load.

use std::f64::consts::PI;

use uom::si::{
    f64::{Mass, MassRate, Power, ThermodynamicTemperature, Time},
    mass::kilogram,
    power::kilowatt,
    thermodynamic_temperature::kelvin,
    time::hour,
};

use crate::support::{
    properties::{density, enthalpy, molar_mass, specific_heat},
    units::{DailyRate, SECONDS_PER_DAY},
};

/// Diameter of the hemispherical melt produced by one optic fiber, m.
const FIBER_MELT_DIAMETER: f64 = 0.075;

/// Fixed subsystem mass deductions in the plant mass regression, kg:
/// magnetic separator (treated as constant) and O2/H2 tank fractions.
const REGRESSION_REMOVED_FRACTION: f64 = 0.43 + 0.02;
const MAGNETIC_SEPARATOR_MASS: f64 = 97.7;

/// Input parameters for the CH4 carbothermal reduction plant.
///
/// Documented ranges come from the sizing literature; values outside them
/// are not rejected and may produce non-physical output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbothermalInput {
    /// Water production load requirement, kg/day, > 0.
    pub water_load: MassRate,

    /// Mass of the electrolyzer sized for the same water load, kg.
    /// Subtracted from the plant mass regression to avoid double counting.
    pub electrolyzer_mass: Mass,

    /// Fraction of excavated regolith processable given the maximum
    /// admissible particle diameter, (0, 1].
    pub compo_fraction: f64,

    /// Ratio of silica mass to regolith mass, 0.41 to 0.445.
    pub silica_mass_fraction: f64,

    /// Power delivered per optic fiber, 86 W to 111 W.
    pub power_per_fiber: Power,

    /// Temperature the regolith is brought to for the reduction, > 1875 K.
    pub melting_temperature: ThermodynamicTemperature,

    /// Time to melt the regolith and perform the reaction, 0.6 h to 1.4 h.
    pub melting_time: Time,

    /// Mass fraction of carbon lost per unit of water produced, 0 to 0.0017.
    pub carbon_loss_mass_fraction: f64,

    /// Sabatier reactor temperature, 523.15 K to 573.15 K.
    pub sabatier_temperature: ThermodynamicTemperature,

    /// Water mass yield of the reduction step, 0.1 to 0.15.
    pub efficiency_factor: f64,

    /// H2:CO mole ratio fed to the Sabatier reactor; 3 is stoichiometric.
    pub mole_fraction: f64,
}

/// Derived quantities for the CH4 carbothermal reduction plant.
///
/// All fields are computed once per evaluation; the record is a pure
/// function of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbothermalResults {
    /// Total regolith excavation load, kg/day, including the doubling for
    /// insulation regolith.
    pub regolith_load: MassRate,

    /// Silica processed by the reduction, kg/day.
    pub silica_flow: MassRate,

    /// CH4 consumed by the reduction reaction, kg/day.
    pub ch4_consumed_reduction: MassRate,

    /// CO consumed by the Sabatier reaction, kg/day.
    pub co_consumed_sabatier: MassRate,

    /// H2 consumed by the Sabatier reaction, kg/day.
    pub h2_consumed_sabatier: MassRate,

    /// CH4 recovered from the Sabatier reaction, kg/day.
    pub ch4_produced_sabatier: MassRate,

    /// CO released by the reduction reaction, kg/day.
    pub co_produced_reduction: MassRate,

    /// H2 released by the reduction reaction, kg/day.
    pub h2_produced_reduction: MassRate,

    /// Carbon lost to the melt, kg/day.
    pub carbon_loss: MassRate,

    /// Number of optic fibers needed to melt the screened feed, rounded up.
    pub num_fibers: u32,

    /// Plant electrical power: fibers times per-fiber power.
    pub electrical_power: Power,

    /// Net thermal power. Negative: heat that must be dissipated (CO cooling
    /// from the melt to the Sabatier temperature plus the exothermic
    /// Sabatier release).
    pub thermal_power: Power,

    /// Power the plant must be supplied with. The thermal ledger is pure
    /// dissipation here, so this equals the electrical power.
    pub total_power: Power,

    /// Total plant mass from the literature regression, kg, with the
    /// electrolyzer, tanks, and magnetic separator removed and the Sabatier
    /// reactor added.
    pub mass: Mass,
}

pub(super) fn solve(input: &CarbothermalInput) -> CarbothermalResults {
    let load = input.water_load.kilograms_per_day();
    let o2_per_water = molar_mass::O2 / (2.0 * molar_mass::H2O);

    // The yield penalty inflates the screened feed only.
    let screened_feed = o2_per_water * load / input.efficiency_factor;
    let regolith_load = 2.0 * screened_feed / input.compo_fraction;
    let silica_flow = input.silica_mass_fraction * screened_feed;

    // Reduction: SiO2 + 2 CH4 -> Si + 2 CO + 4 H2.
    let ch4_consumed_reduction = 2.0 * (molar_mass::CH4 / molar_mass::SILICA) * silica_flow;

    // Sabatier: CO + 3 H2 -> CH4 + H2O, driven by the target water load.
    let co_consumed_sabatier = (molar_mass::CO / molar_mass::H2O) * load;
    let h2_consumed_sabatier =
        input.mole_fraction * (molar_mass::H2 / molar_mass::CO) * co_consumed_sabatier;
    let ch4_produced_sabatier = (molar_mass::CH4 / molar_mass::CO) * co_consumed_sabatier;
    let co_produced_reduction = co_consumed_sabatier;
    let h2_produced_reduction = 2.0 * (molar_mass::H2 / molar_mass::CO) * co_produced_reduction;

    let carbon_loss = o2_per_water * input.carbon_loss_mass_fraction * load;

    // One fiber melts one hemisphere per melting period.
    let melt_volume = 4.0 * PI * (FIBER_MELT_DIAMETER / 2.0).powi(3) / 6.0;
    let fiber_throughput =
        24.0 * melt_volume * density::REGOLITH / input.melting_time.get::<hour>();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let num_fibers = (screened_feed / fiber_throughput).ceil() as u32;

    let electrical_power = input.power_per_fiber * f64::from(num_fibers);

    // CO leaves the melt at the melting temperature and is cooled to the
    // Sabatier temperature; the Sabatier reaction then releases its
    // enthalpy. Both terms are negative: heat to dissipate.
    let sabatier_kelvin = input.sabatier_temperature.get::<kelvin>();
    let melting_kelvin = input.melting_temperature.get::<kelvin>();
    let co_cooling_kw = co_consumed_sabatier * specific_heat::CO_J_PER_KG_K
        * (sabatier_kelvin - melting_kelvin)
        / (1000.0 * SECONDS_PER_DAY);
    let sabatier_release_kw = enthalpy::SABATIER_CO_KJ_PER_MOL * co_consumed_sabatier
        / (SECONDS_PER_DAY * molar_mass::CO);
    let thermal_power = Power::new::<kilowatt>(co_cooling_kw + sabatier_release_kw);

    let electrolyzer_mass = input.electrolyzer_mass.get::<kilogram>();
    let sabatier_reactor_mass = (5.5 / 1.2) * load;
    let mass_kg = (1.0 - REGRESSION_REMOVED_FRACTION)
        * (588.0 * o2_per_water * load / 24.0 - 240.0)
        + 240.0
        - MAGNETIC_SEPARATOR_MASS
        - electrolyzer_mass
        + sabatier_reactor_mass;

    CarbothermalResults {
        regolith_load: MassRate::from_kilograms_per_day(regolith_load),
        silica_flow: MassRate::from_kilograms_per_day(silica_flow),
        ch4_consumed_reduction: MassRate::from_kilograms_per_day(ch4_consumed_reduction),
        co_consumed_sabatier: MassRate::from_kilograms_per_day(co_consumed_sabatier),
        h2_consumed_sabatier: MassRate::from_kilograms_per_day(h2_consumed_sabatier),
        ch4_produced_sabatier: MassRate::from_kilograms_per_day(ch4_produced_sabatier),
        co_produced_reduction: MassRate::from_kilograms_per_day(co_produced_reduction),
        h2_produced_reduction: MassRate::from_kilograms_per_day(h2_produced_reduction),
        carbon_loss: MassRate::from_kilograms_per_day(carbon_loss),
        num_fibers,
        electrical_power,
        thermal_power,
        total_power: electrical_power,
        mass: Mass::new::<kilogram>(mass_kg),
    }
}
