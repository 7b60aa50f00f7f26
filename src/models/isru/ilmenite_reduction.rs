//! H2 ilmenite reduction plant.
//!
//! Water production by hydrogen reduction of ilmenite in a continuously
//! renewed reactor bed, accounting for all systems involved. The
//! computational core is in the internal `core` module;
//! [`IlmeniteReductionPlant`] is the thin [`twine_core::Model`] adapter.

mod core;

pub use core::{IlmeniteReductionInput, IlmeniteReductionResults};

use twine_core::Model;

use super::feasibility::FeasibilityError;

/// Sizing model for an H2 ilmenite reduction plant.
///
/// Evaluation fails with a [`FeasibilityError`] when the reactor bed is
/// renewed faster than it can be heated
/// (`fraction_volume_renewed * remain_at_temperature_time >= 1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IlmeniteReductionPlant;

impl Model for IlmeniteReductionPlant {
    type Input = IlmeniteReductionInput;
    type Output = IlmeniteReductionResults;
    type Error = FeasibilityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::solve(input)
    }
}
