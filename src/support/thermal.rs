//! Shared thermal and electrical bookkeeping rules.
//!
//! The sizing literature applies the same overhead rules across plant
//! technologies; they live here so each model quotes one implementation.

use uom::si::f64::Power;

/// Thermal losses as a markup on the useful thermal power.
///
/// Losses are approximately 3 % of total thermal power in the reference
/// breakdowns, so the markup on the remaining 97 % is `(0.03/0.97) * p`.
#[must_use]
pub fn loss_markup(useful_thermal_power: Power) -> Power {
    useful_thermal_power * (0.03 / 0.97)
}

/// Plant electrical power other than electrolysis.
///
/// The reference power budgets allocate 4 % of total electrical power to
/// everything besides the electrolyzer, i.e. `(0.04/0.96) * p_electrolyzer`.
#[must_use]
pub fn auxiliary_electrical_power(electrolyzer_power: Power) -> Power {
    electrolyzer_power * (0.04 / 0.96)
}

/// Duty-cycle factor for heating a continuously renewed reactor volume.
///
/// With `f` the fraction of the volume renewed per hour and `t` the
/// residence time at temperature in hours, the heating power of a charge is
/// throttled by `(1 - f*t) / (1/f - t)` (per hour). The expression is only
/// meaningful for `f*t < 1`; callers guard that product before evaluating
/// (see [`crate::models::isru::feasibility`]).
#[must_use]
pub fn renewal_throttle(fraction_volume_renewed: f64, remain_at_temperature_time: f64) -> f64 {
    (1.0 - fraction_volume_renewed * remain_at_temperature_time)
        / (1.0 / fraction_volume_renewed - remain_at_temperature_time)
}
