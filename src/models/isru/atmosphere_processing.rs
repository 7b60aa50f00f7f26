//! Mars atmosphere Sabatier processing plant.
//!
//! Water production from atmospheric CO2 and electrolysis hydrogen through
//! two Sabatier reactor stages in series. The computational core is in the
//! internal `core` module; [`AtmosphereProcessingPlant`] is the thin
//! [`twine_core::Model`] adapter over it.

mod core;

pub use core::{AtmosphereProcessingInput, AtmosphereProcessingResults, ReactorStreams};

use std::convert::Infallible;

use twine_core::Model;

/// Sizing model for a Mars atmosphere Sabatier processing plant.
///
/// Evaluation is infallible: conversion efficiencies below the first-stage
/// progress yield negative intermediate flows, which propagate through the
/// stream ledger unflagged rather than erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtmosphereProcessingPlant;

impl Model for AtmosphereProcessingPlant {
    type Input = AtmosphereProcessingInput;
    type Output = AtmosphereProcessingResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(core::solve(input))
    }
}
