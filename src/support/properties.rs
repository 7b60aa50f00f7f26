//! Shared physical property data for the ISRU plant models.
//!
//! Every constant the plant models share lives here, keyed by species or
//! material, so a value edited for one model cannot silently diverge from
//! another model's copy. Values are the ones used by the sizing literature
//! the models are fit to; they are engineering constants, not high-precision
//! reference data.
//!
//! Units are SI unless a name says otherwise: molar masses in kg/mol,
//! densities in kg/m³, heat capacities as documented per constant.

/// Molar masses, kg/mol.
pub mod molar_mass {
    pub const H2: f64 = 2.0e-3;
    pub const CH4: f64 = 16.0e-3;
    pub const H2O: f64 = 18.0e-3;
    pub const CO: f64 = 28.0e-3;
    pub const O2: f64 = 32.0e-3;
    pub const CO2: f64 = 44.0e-3;
    /// SiO2, the load-defining oxide for carbothermal reduction.
    pub const SILICA: f64 = 60.0e-3;
    /// FeTiO3. The cited sizing report works with 308 g/mol, which does not
    /// match the formula mass; 151.7 g/mol is the corrected value.
    pub const ILMENITE: f64 = 151.7e-3;
}

/// Bulk densities, kg/m³.
pub mod density {
    pub const REGOLITH: f64 = 1400.0;
    /// Bulk ilmenite is taken at regolith density.
    pub const ILMENITE: f64 = 1400.0;
    pub const ICE: f64 = 910.0;
}

/// Specific heat capacities of the process gases.
pub mod specific_heat {
    /// CO, J/(kg·K).
    pub const CO_J_PER_KG_K: f64 = 1046.0;

    // Sabatier product gases, kJ/(kg·K), at the reactor outlet conditions.
    pub const H2O_VAPOR_KJ_PER_KG_K: f64 = 2.047;
    pub const CH4_KJ_PER_KG_K: f64 = 2.232;
    pub const H2_KJ_PER_KG_K: f64 = 14.57;
    pub const CO2_KJ_PER_KG_K: f64 = 1.102;

    // Water phases in the dryer, kJ/(kg·K).
    pub const ICE_KJ_PER_KG_K: f64 = 2.10;
    pub const STEAM_KJ_PER_KG_K: f64 = 1.9;
}

/// Reaction and phase-change enthalpies.
pub mod enthalpy {
    /// Sabatier reaction of CO, kJ/mol. Negative: exothermic.
    pub const SABATIER_CO_KJ_PER_MOL: f64 = -206.0;
    /// Sabatier reaction of CO2, kJ/mol. Negative: exothermic.
    pub const SABATIER_CO2_KJ_PER_MOL: f64 = -165.0;
    /// Hydrogen reduction of ilmenite, kJ/kg of ilmenite.
    pub const ILMENITE_REDUCTION_KJ_PER_KG: f64 = 294.0;
    /// Fusion of water ice, kJ/kg.
    pub const WATER_FUSION_KJ_PER_KG: f64 = 333.5;
    /// Vaporization of water, kJ/kg.
    pub const WATER_VAPORIZATION_KJ_PER_KG: f64 = 2257.0;
    /// Gibbs free energy of water formation, kJ/mol, for electrolysis.
    pub const WATER_GIBBS_KJ_PER_MOL: f64 = 230.4;
}

/// Triple point of water.
pub mod water_triple_point {
    /// Pa.
    pub const PRESSURE: f64 = 611.657;
    /// K.
    pub const TEMPERATURE: f64 = 273.16;
}

/// Specific heat capacity of regolith-like material (ilmenite fit), J/(kg·K),
/// as a function of temperature in K.
///
/// Logarithmic literature fit, valid over the heating ranges the models use
/// (roughly 100 K to 1300 K). Integrate over a temperature interval to get
/// the sensible heat per kilogram.
#[must_use]
pub fn regolith_specific_heat(temperature: f64) -> f64 {
    -1848.5 + 1047.41 * temperature.log10()
}
