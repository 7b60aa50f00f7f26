//! Public plant models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Everything here
//! currently lives under [`isru`], the water-production plant family.
//!
//! # Model structure
//!
//! Each substantial model lives in its own module and contains an internal
//! `core` submodule where the actual computation and domain logic lives. The
//! `core` module is an implementation detail and is **not** part of the
//! public API.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the model-specific core: `Input` is the configuration record of named
//! parameters, `Output` is the immutable results record, and `Error` is the
//! model's feasibility error type (or `Infallible` for unguarded models).

pub mod isru;
