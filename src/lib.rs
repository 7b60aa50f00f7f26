//! # ISRU Models
//!
//! Parametric sizing models for in-situ resource utilization (ISRU) process
//! plants that produce water, and derived oxygen/hydrogen, from planetary
//! regolith or atmosphere.
//!
//! Each model is a deterministic calculator for one candidate process
//! technology: it takes a small set of physical/engineering parameters and
//! returns steady-state species mass flows, electrical and thermal power, and
//! total system mass, using closed-form relations and curve fits from the
//! published sizing literature. The models are intended for early-stage
//! mission and systems engineering trade studies, not for detailed design.
//!
//! ## Crate layout
//!
//! - [`models`]: The plant models, each a [`twine_core::Model`] implementation.
//! - [`support`]: Supporting utilities used by the models.
//!
//! ## Evaluation model
//!
//! One evaluation is a pure function of its inputs: every derived quantity is
//! computed once and returned in an immutable results record. There is no
//! shared state between evaluations, so callers running what-if parameter
//! sweeps can evaluate independent instances concurrently without any
//! synchronization.
//!
//! Physically inadmissible parameter combinations are rejected up front by
//! the models that guard them (see [`models::isru::feasibility`]); inputs
//! that are merely outside their documented literature ranges are not
//! checked and may produce numerically well-defined but physically
//! meaningless output.

pub mod models;
pub mod support;
