//! Solid-vapor equilibrium of water below the triple point.
//!
//! The sublimation curve gives the vapor pressure over ice as a function of
//! temperature. The dryer needs the inverse: the sublimation temperature at
//! its operating pressure, found here by bisection since the curve is
//! strictly increasing over the operating range.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::properties::water_triple_point;

/// Bisection bracket in K.
///
/// The curve spans roughly 3e-15 Pa at 100 K to 1055 Pa at 280 K, so any
/// operating pressure below the triple point has its root inside.
const BRACKET: [f64; 2] = [100.0, 280.0];

/// Vapor pressure over ice, Pa, at a temperature in K.
///
/// Empirical integration of Clausius-Clapeyron anchored at the triple
/// point. Valid below 273.16 K.
#[must_use]
pub fn sublimation_pressure(temperature: f64) -> f64 {
    let t_tp = water_triple_point::TEMPERATURE;
    water_triple_point::PRESSURE
        * (6293.0 * (1.0 / t_tp - 1.0 / temperature)
            - 0.555 * (temperature / t_tp).ln()
            - 1.0 / temperature)
            .exp()
}

/// Solver configuration for the sublimation temperature search.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the temperature search variable, K.
    pub temperature_tol: f64,

    /// Absolute tolerance for the pressure residual, Pa.
    pub pressure_tol: f64,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temperature_tol: 1e-9,
            pressure_tol: 1e-9,
        }
    }
}

impl EquilibriumConfig {
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temperature_tol,
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol,
        }
    }
}

/// Errors that can occur while inverting the sublimation curve.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best pressure residual achieved.
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// A point on the sublimation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SublimationPoint {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

/// Model over the sublimation curve: temperature in, equilibrium point out.
struct SublimationCurve;

impl Model for SublimationCurve {
    type Input = ThermodynamicTemperature;
    type Output = SublimationPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(SublimationPoint {
            temperature: *input,
            pressure: Pressure::new::<pascal>(sublimation_pressure(input.get::<kelvin>())),
        })
    }
}

/// Equation problem matching the curve to a target operating pressure.
///
/// Computes the residual as `curve_pressure - target_pressure`.
struct EquilibriumProblem {
    target: Pressure,
}

impl EquationProblem<1> for EquilibriumProblem {
    type Input = ThermodynamicTemperature;
    type Output = SublimationPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.pressure - self.target).get::<pascal>()])
    }
}

/// Solves for the sublimation temperature at a dryer operating pressure.
///
/// # Errors
///
/// Returns [`EquilibriumError`] if the bisection solve fails or does not
/// converge within the configured iteration limit.
pub(crate) fn sublimation_temperature(
    pressure: Pressure,
    config: &EquilibriumConfig,
) -> Result<ThermodynamicTemperature, EquilibriumError> {
    let problem = EquilibriumProblem { target: pressure };

    let solution = bisection::solve(
        &SublimationCurve,
        &problem,
        BRACKET,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(EquilibriumError::MaxIters {
            residual: Pressure::new::<pascal>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn curve_is_anchored_near_the_triple_point() {
        // At the triple-point temperature only the residual 1/T term in the
        // exponent remains.
        assert_relative_eq!(
            sublimation_pressure(273.16),
            611.657 * (-1.0 / 273.16_f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn curve_is_strictly_increasing_over_the_bracket() {
        let mut previous = sublimation_pressure(BRACKET[0]);
        let mut t = BRACKET[0] + 1.0;
        while t <= BRACKET[1] {
            let p = sublimation_pressure(t);
            assert!(p > previous, "curve not increasing at {t} K");
            previous = p;
            t += 1.0;
        }
    }

    #[test]
    fn solves_the_dryer_baseline_pressure() {
        let temperature =
            sublimation_temperature(Pressure::new::<pascal>(500.0), &EquilibriumConfig::default())
                .unwrap();

        let t = temperature.get::<kelvin>();
        assert!((270.0..272.0).contains(&t), "got {t} K");
        assert_relative_eq!(sublimation_pressure(t), 500.0, max_relative = 1e-9);
    }

    #[test]
    fn solves_deep_vacuum_pressures() {
        let temperature =
            sublimation_temperature(Pressure::new::<pascal>(1.0), &EquilibriumConfig::default())
                .unwrap();

        let t = temperature.get::<kelvin>();
        assert!(t > BRACKET[0] && t < BRACKET[1]);
        assert_relative_eq!(sublimation_pressure(t), 1.0, max_relative = 1e-6);
    }
}
