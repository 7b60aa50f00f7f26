//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities in its public APIs
//! (mass rates, power, temperature, pressure). This module provides the
//! extensions the ISRU sizing domain needs that aren't included in [`uom`].
//!
//! ## Daily mass rates
//!
//! The sizing literature quotes every mass flow in kilograms per day, so the
//! [`DailyRate`] trait adds kg/day construction and readout to
//! [`MassRate`](uom::si::f64::MassRate):
//!
//! ```
//! use uom::si::f64::MassRate;
//! use isru_models::support::units::DailyRate;
//!
//! let load = MassRate::from_kilograms_per_day(44.01);
//! assert!((load.kilograms_per_day() - 44.01).abs() < 1e-12);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method for subtracting one
//! absolute temperature from another to get a temperature interval, which
//! [`uom`] does not allow directly (see
//! [uom#380](https://github.com/iliekturtles/uom/issues/380)).

use uom::si::{
    f64::{MassRate, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Seconds in one day, the time normalization used across the sizing models.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Extension trait for kg/day mass rates.
pub trait DailyRate {
    /// Builds a mass rate from a value in kilograms per day.
    fn from_kilograms_per_day(value: f64) -> Self;

    /// Returns this mass rate in kilograms per day.
    fn kilograms_per_day(&self) -> f64;
}

impl DailyRate for MassRate {
    fn from_kilograms_per_day(value: f64) -> Self {
        MassRate::new::<kilogram_per_second>(value / SECONDS_PER_DAY)
    }

    fn kilograms_per_day(&self) -> f64 {
        self.get::<kilogram_per_second>() * SECONDS_PER_DAY
    }
}

/// Extension trait for computing temperature differences.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn daily_rate_round_trips() {
        let rate = MassRate::from_kilograms_per_day(2778.94737);
        assert_relative_eq!(rate.kilograms_per_day(), 2778.94737, epsilon = 1e-9);
        assert_relative_eq!(
            rate.get::<kilogram_per_second>(),
            2778.94737 / 86_400.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn subtract_temperatures() {
        let hot = ThermodynamicTemperature::new::<abs_kelvin>(803.0);
        let cold = ThermodynamicTemperature::new::<abs_kelvin>(573.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_kelvin>(), 230.0);
        assert_relative_eq!(cold.minus(hot).get::<delta_kelvin>(), -230.0);
    }
}
