//! CH4 carbothermal reduction plant.
//!
//! Water production by carbothermal reduction of silicon oxides followed by
//! a Sabatier reaction of the released CO. The computational core is in the
//! internal `core` module; [`CarbothermalPlant`] is the thin
//! [`twine_core::Model`] adapter over it.

mod core;

pub use core::{CarbothermalInput, CarbothermalResults};

use std::convert::Infallible;

use twine_core::Model;

/// Sizing model for a CH4 carbothermal reduction plant.
///
/// Evaluation is infallible: this plant has no guarded feasibility
/// constraints, and inputs outside their documented ranges produce
/// (possibly non-physical) output rather than errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarbothermalPlant;

impl Model for CarbothermalPlant {
    type Input = CarbothermalInput;
    type Output = CarbothermalResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::solve(input))
    }
}
