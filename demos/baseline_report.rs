//! Prints the literature baseline sizing for every plant model.
//!
//! The electrolyzer is sized first; its power and mass feed the two plants
//! that integrate one. Run with `cargo run --example baseline_report`.

use std::error::Error;

use twine_core::Model;
use uom::si::{
    f64::{Length, Mass, MassDensity, MassRate, Power, Pressure, ThermodynamicTemperature, Time},
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::{kilowatt, watt},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    time::hour,
};

use isru_models::models::isru::{
    atmosphere_processing::{AtmosphereProcessingInput, AtmosphereProcessingPlant},
    carbothermal::{CarbothermalInput, CarbothermalPlant},
    electrolyzer::{Electrolyzer, ElectrolyzerInput},
    excavation_rover::{ExcavationRoverFleet, ExcavationRoverInput},
    ilmenite_reduction::{IlmeniteReductionInput, IlmeniteReductionPlant},
    sublimation_dryer::{SublimationDryer, SublimationDryerInput},
};
use isru_models::support::{constraint::UnitIntervalLowerOpen, units::DailyRate};

fn main() -> Result<(), Box<dyn Error>> {
    let water_load = MassRate::from_kilograms_per_day(44.01);

    let electrolyzer = Electrolyzer.call(&ElectrolyzerInput {
        water_load,
        efficiency: UnitIntervalLowerOpen::new(0.72)?,
    })?;

    println!("Electrolyzer");
    println!("  power            = {:.3} kW", electrolyzer.power.get::<kilowatt>());
    println!("  heat to dissipate = {:.3} kW", electrolyzer.heat.get::<kilowatt>());
    println!("  mass             = {:.2} kg", electrolyzer.mass.get::<kilogram>());

    let carbothermal = CarbothermalPlant.call(&CarbothermalInput {
        water_load,
        electrolyzer_mass: electrolyzer.mass,
        compo_fraction: 0.9,
        silica_mass_fraction: 0.41,
        power_per_fiber: Power::new::<watt>(100.0),
        melting_temperature: ThermodynamicTemperature::new::<kelvin>(2000.0),
        melting_time: Time::new::<hour>(1.0),
        carbon_loss_mass_fraction: 0.001,
        sabatier_temperature: ThermodynamicTemperature::new::<kelvin>(573.15),
        efficiency_factor: 0.125,
        mole_fraction: 3.0,
    })?;

    println!("\nCH4 carbothermal reduction plant");
    println!(
        "  regolith load    = {:.2} kg/day",
        carbothermal.regolith_load.kilograms_per_day()
    );
    println!("  optic fibers     = {}", carbothermal.num_fibers);
    println!(
        "  electrical power = {:.3} kW",
        carbothermal.electrical_power.get::<kilowatt>()
    );
    println!(
        "  thermal power    = {:.3} kW",
        carbothermal.thermal_power.get::<kilowatt>()
    );
    println!("  mass             = {:.2} kg", carbothermal.mass.get::<kilogram>());

    let ilmenite = IlmeniteReductionPlant.call(&IlmeniteReductionInput {
        water_load,
        electrolyzer_mass: electrolyzer.mass,
        electrolyzer_power: electrolyzer.power,
        compo_fraction: 0.9,
        separation_factor: 0.9,
        ilmenite_mass_fraction: 0.07,
        hydrogen_density_in_regolith: MassDensity::new::<kilogram_per_cubic_meter>(0.15),
        regolith_temperature: ThermodynamicTemperature::new::<kelvin>(384.0),
        reactor_diameter: Length::new::<meter>(0.8),
        reactor_height: Length::new::<meter>(0.8),
        remain_at_temperature_time: Time::new::<hour>(1.0),
    })?;

    println!("\nH2 ilmenite reduction plant");
    println!(
        "  regolith load    = {:.2} kg/day",
        ilmenite.regolith_load.kilograms_per_day()
    );
    println!(
        "  volume renewed   = {:.4} /h",
        ilmenite.fraction_volume_renewed
    );
    println!(
        "  thermal power    = {:.3} kW",
        ilmenite.thermal_power.get::<kilowatt>()
    );
    println!(
        "  total power      = {:.3} kW",
        ilmenite.total_power.get::<kilowatt>()
    );
    println!("  mass             = {:.2} kg", ilmenite.mass.get::<kilogram>());

    let atmosphere = AtmosphereProcessingPlant.call(&AtmosphereProcessingInput {
        water_load,
        mole_fraction: 2.34,
        reactor_1_temperature: ThermodynamicTemperature::new::<kelvin>(803.0),
        reactor_2_temperature: ThermodynamicTemperature::new::<kelvin>(573.0),
        water_recovery_temperature: ThermodynamicTemperature::new::<kelvin>(303.0),
        conversion_efficiency: 0.95,
    })?;

    println!("\nMars atmosphere Sabatier processing plant");
    println!(
        "  H2 load          = {:.2} kg/day",
        atmosphere.h2_load.kilograms_per_day()
    );
    println!(
        "  CO2 load         = {:.2} kg/day",
        atmosphere.co2_load.kilograms_per_day()
    );
    println!(
        "  CH4 byproduct    = {:.2} kg/day",
        atmosphere.reactor_2_out.methane.kilograms_per_day()
    );
    println!(
        "  heat to dissipate = {:.3} kW",
        atmosphere.heat.get::<kilowatt>()
    );
    println!("  mass             = {:.2} kg", atmosphere.mass.get::<kilogram>());

    let dryer = SublimationDryer.call(&SublimationDryerInput {
        water_load,
        compo_fraction: 0.9,
        water_mass_fraction: 0.057,
        dryer_pressure: Pressure::new::<pascal>(500.0),
        initial_temperature: ThermodynamicTemperature::new::<kelvin>(120.0),
        final_temperature: ThermodynamicTemperature::new::<kelvin>(280.0),
        remain_at_temperature_time: Time::new::<hour>(1.0),
        fraction_volume_renewed: 0.9,
        water_extraction_efficiency: 1.0,
    })?;

    println!("\nSub-triple-point dryer");
    println!(
        "  sublimation temp = {:.2} K",
        dryer.sublimation_temperature.get::<kelvin>()
    );
    println!(
        "  regolith load    = {:.2} kg/day",
        dryer.regolith_load.kilograms_per_day()
    );
    println!(
        "  dryer capacity   = {:.2} kg/day",
        dryer.dryer_capacity.kilograms_per_day()
    );
    println!("  dryers           = {}", dryer.num_dryers);
    println!(
        "  total power      = {:.3} kW",
        dryer.total_power.get::<kilowatt>()
    );
    println!("  mass             = {:.2} kg", dryer.mass.get::<kilogram>());

    let fleet = ExcavationRoverFleet.call(&ExcavationRoverInput {
        regolith_load: MassRate::from_kilograms_per_day(2778.94737),
        baseline_mass: Mass::new::<kilogram>(66.0),
        baseline_capacity: MassRate::from_kilograms_per_day(2778.94737),
        specific_power: 4e-3,
        recharge_time: Time::new::<hour>(8.0),
        redundancy: 0,
    })?;

    println!("\nExcavation rover fleet");
    println!("  rovers           = {}", fleet.num_rovers);
    println!("  mass             = {:.2} kg", fleet.mass.get::<kilogram>());
    println!("  recharge power   = {:.3} kW", fleet.power.get::<kilowatt>());

    Ok(())
}
