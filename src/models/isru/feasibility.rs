//! Physical admissibility checks shared by the plant models.
//!
//! Each check is fail-fast: a violated constraint aborts the whole model
//! evaluation with a distinct [`FeasibilityError`] variant and no partial
//! result is produced. There is no recovery or default substitution; the
//! caller must supply corrected parameters.
//!
//! Only the constraints listed here are guarded. Inputs outside their
//! documented literature ranges that do not trip one of these checks
//! produce numerically well-defined but possibly non-physical output.

use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::{constraint::StrictlyPositive, properties::water_triple_point};

/// A guarded physical or mathematical precondition failed.
///
/// Each variant carries the offending value(s) and the bound that was
/// violated, so callers can report or log the exact constraint.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FeasibilityError {
    /// The dryer operating pressure is at or above the triple point of
    /// water, where no sublimation regime exists.
    #[error("the dryer pressure must be lower than the triple-point pressure: {limit:?}")]
    PressureAboveTriplePoint {
        pressure: Pressure,
        limit: Pressure,
    },

    /// The feedstock enters warmer than the dryer's final temperature.
    ///
    /// The bound quoted in the message is the triple-point temperature,
    /// reproducing the wording of the source worksheet; the structured
    /// fields carry the actual temperatures.
    #[error("the initial temperature must be less than the final temperature: {limit:?}")]
    InitialAboveFinal {
        initial_temperature: ThermodynamicTemperature,
        final_temperature: ThermodynamicTemperature,
        limit: ThermodynamicTemperature,
    },

    /// The feedstock enters warmer than the sublimation temperature at the
    /// operating pressure, so the ice would already be subliming.
    #[error("the initial temperature must be less than the sublimation temperature: {sublimation_temperature:?}")]
    InitialAboveSublimation {
        initial_temperature: ThermodynamicTemperature,
        sublimation_temperature: ThermodynamicTemperature,
    },

    /// The final temperature sits below the sublimation temperature, so the
    /// extracted vapor would never form.
    #[error("the final temperature must be greater than the sublimation temperature: {sublimation_temperature:?}")]
    FinalBelowSublimation {
        final_temperature: ThermodynamicTemperature,
        sublimation_temperature: ThermodynamicTemperature,
    },

    /// The reactor or dryer contents are renewed before they can reach the
    /// operating temperature, leaving no time at temperature.
    #[error(
        "the time at temperature must be greater than zero, i.e. \
         fraction_volume_renewed * remain_at_temperature_time must be strictly less than 1 \
         (got {product})"
    )]
    RenewedBeforeHeated {
        /// Fraction of the working volume renewed per hour.
        fraction_volume_renewed: f64,
        /// Residence time at temperature, hours.
        remain_at_temperature_time: f64,
        /// The offending product `f * t`.
        product: f64,
    },
}

/// Checks that the dryer pressure admits a sublimation regime.
///
/// # Errors
///
/// Returns [`FeasibilityError::PressureAboveTriplePoint`] for pressures at
/// or above 611.657 Pa.
pub fn check_dryer_pressure(pressure: Pressure) -> Result<(), FeasibilityError> {
    let limit = Pressure::new::<pascal>(water_triple_point::PRESSURE);
    if pressure >= limit {
        return Err(FeasibilityError::PressureAboveTriplePoint { pressure, limit });
    }
    Ok(())
}

/// Checks the dryer temperature ordering against the solved sublimation
/// temperature.
///
/// The three inequalities are checked in a fixed order: initial vs. final,
/// initial vs. sublimation, final vs. sublimation.
///
/// # Errors
///
/// Returns the variant for the first violated inequality.
pub fn check_temperature_ordering(
    initial_temperature: ThermodynamicTemperature,
    final_temperature: ThermodynamicTemperature,
    sublimation_temperature: ThermodynamicTemperature,
) -> Result<(), FeasibilityError> {
    if initial_temperature > final_temperature {
        return Err(FeasibilityError::InitialAboveFinal {
            initial_temperature,
            final_temperature,
            limit: ThermodynamicTemperature::new::<kelvin>(water_triple_point::TEMPERATURE),
        });
    }
    if initial_temperature > sublimation_temperature {
        return Err(FeasibilityError::InitialAboveSublimation {
            initial_temperature,
            sublimation_temperature,
        });
    }
    if final_temperature < sublimation_temperature {
        return Err(FeasibilityError::FinalBelowSublimation {
            final_temperature,
            sublimation_temperature,
        });
    }
    Ok(())
}

/// Checks that a continuously renewed volume retains time at temperature,
/// i.e. `fraction_volume_renewed * remain_at_temperature_time < 1` strictly.
///
/// This guards the renewed-volume heating formula, which divides by
/// `1/f - t` (see [`crate::support::thermal::renewal_throttle`]).
///
/// # Errors
///
/// Returns [`FeasibilityError::RenewedBeforeHeated`] when the product
/// reaches 1.
pub fn check_renewal_rate(
    fraction_volume_renewed: f64,
    remain_at_temperature_time: f64,
) -> Result<(), FeasibilityError> {
    let product = fraction_volume_renewed * remain_at_temperature_time;
    if StrictlyPositive::new(1.0 - product).is_err() {
        return Err(FeasibilityError::RenewedBeforeHeated {
            fraction_volume_renewed,
            remain_at_temperature_time,
            product,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn pressure_bound_is_inclusive() {
        assert!(check_dryer_pressure(Pressure::new::<pascal>(500.0)).is_ok());
        assert!(matches!(
            check_dryer_pressure(Pressure::new::<pascal>(611.657)),
            Err(FeasibilityError::PressureAboveTriplePoint { .. })
        ));
        assert!(matches!(
            check_dryer_pressure(Pressure::new::<pascal>(700.0)),
            Err(FeasibilityError::PressureAboveTriplePoint { .. })
        ));
    }

    #[test]
    fn temperature_ordering_reports_first_violation() {
        // Valid ordering: 120 <= 270 <= 280.
        assert!(check_temperature_ordering(k(120.0), k(280.0), k(270.0)).is_ok());

        assert!(matches!(
            check_temperature_ordering(k(300.0), k(280.0), k(270.0)),
            Err(FeasibilityError::InitialAboveFinal { .. })
        ));
        assert!(matches!(
            check_temperature_ordering(k(275.0), k(280.0), k(270.0)),
            Err(FeasibilityError::InitialAboveSublimation { .. })
        ));
        assert!(matches!(
            check_temperature_ordering(k(120.0), k(260.0), k(270.0)),
            Err(FeasibilityError::FinalBelowSublimation { .. })
        ));
    }

    #[test]
    fn renewal_product_must_stay_below_one() {
        assert!(check_renewal_rate(0.9, 1.0).is_ok());
        assert!(matches!(
            check_renewal_rate(1.0, 1.0),
            Err(FeasibilityError::RenewedBeforeHeated { product, .. }) if product == 1.0
        ));
        assert!(check_renewal_rate(0.03389, 30.0).is_err());
    }
}
