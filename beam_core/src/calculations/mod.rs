//! # Beam Calculations
//!
//! The analysis engines. Each one wraps a validated [`crate::beam::Beam`] and
//! exposes pure functions of its inputs:
//!
//! - [`statics`] - Reactions, shear and moment for fixed point loads
//! - [`influence`] - Influence lines and their superposition
//! - [`envelope`] - Moving-load shear/moment envelopes
//! - [`moving_load`] - `analyze(L, W1, W2, x)`, the two-load entry point
//!
//! Inputs and results are JSON-serializable; failures are structured
//! [`crate::errors::CalcError`] values.

pub mod envelope;
pub mod influence;
pub mod moving_load;
pub mod statics;

// Re-export commonly used types
pub use envelope::{Diagrams, Envelope, EnvelopeAnalyzer, EnvelopeExtreme, EnvelopePair, Response};
pub use influence::{InfluenceFunction, InfluenceLine, InfluenceLineEngine, MaxReactions};
pub use moving_load::{analyze, calculate, MovingLoadInput, MovingLoadResult};
pub use statics::{SingleLoadExtremes, StaticsEngine};
