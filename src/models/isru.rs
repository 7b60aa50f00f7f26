//! Water-production plant models for ISRU trade studies.
//!
//! Four core plants cover the candidate process technologies:
//!
//! - [`carbothermal`]: CH4 carbothermal reduction of silicon oxides followed
//!   by a Sabatier reaction of the released CO.
//! - [`ilmenite_reduction`]: hydrogen reduction of ilmenite in a
//!   continuously renewed reactor bed.
//! - [`atmosphere_processing`]: two-stage Sabatier processing of Martian
//!   atmospheric CO2.
//! - [`sublimation_dryer`]: water extraction from icy regolith by heating
//!   below triple-point conditions.
//!
//! Two collaborator models supply quantities the plants consume as inputs:
//!
//! - [`electrolyzer`]: water electrolysis power, dissipated heat, and mass.
//! - [`excavation_rover`]: excavation rover fleet sizing for a regolith load.
//!
//! The plants do not invoke each other at runtime. A caller wires them
//! together by feeding one model's outputs (for example the electrolyzer
//! mass and power) into another model's input record, mirroring how the
//! source literature composes its mass and power budgets.
//!
//! Shared physical admissibility checks live in [`feasibility`].

pub mod atmosphere_processing;
pub mod carbothermal;
pub mod electrolyzer;
pub mod excavation_rover;
pub mod feasibility;
pub mod ilmenite_reduction;
pub mod sublimation_dryer;
