//! Sub-triple-point regolith dryer.
//!
//! Water extraction by heating icy regolith at constant pressure below the
//! triple point of water, so the ice sublimes directly. Models the
//! extraction physics shared evenly across identical dryer units. The
//! computational core is in the internal `core` module;
//! [`SublimationDryer`] is the thin [`twine_core::Model`] adapter over it.

mod core;

pub use core::{
    DryerError, SublimationDryerInput, SublimationDryerResults,
    equilibrium::{EquilibriumConfig, EquilibriumError, sublimation_pressure},
};

use twine_core::Model;

/// Sizing model for a sub-triple-point regolith dryer.
///
/// Evaluation fails with a [`DryerError`] when the operating pressure or the
/// temperature ordering does not admit a sublimation regime, when the drum
/// is renewed faster than it can be heated, or when the sublimation
/// temperature solve does not converge.
#[derive(Debug, Clone, Copy, Default)]
pub struct SublimationDryer;

impl Model for SublimationDryer {
    type Input = SublimationDryerInput;
    type Output = SublimationDryerResults;
    type Error = DryerError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::solve(input)
    }
}
