//! # beam_core - Simply Supported Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear force and bending moment for a
//! simply supported beam carrying point loads, and the governing shear/moment
//! envelopes as one or two loads travel across the span. Plotting is left to
//! the caller: the engine returns scalars and ordered `(position, value)`
//! samples.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: Inputs, settings and results implement Serialize/Deserialize
//! - **Rich Errors**: Every rejected input names the parameter and constraint
//! - **Consistent SI scalars**: No unit conversion inside the engine
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, Beam, PointLoad, StaticsEngine};
//!
//! // Two loads of 5 and 10 kN, 2 m apart, crossing a 10 m span
//! let result = analyze(10.0, 5.0, 10.0, 2.0).unwrap();
//! println!("Max moment {:.3} kNm at {:.2} m", result.max_moment(), result.max_moment_position());
//!
//! // Fixed loads
//! let statics = StaticsEngine::new(Beam::new(10.0).unwrap());
//! let reactions = statics.reactions(&[PointLoad::new(6.0, 4.0)]).unwrap();
//! assert!((reactions.r_a - 3.6).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam, loads, reactions and samples
//! - [`calculations`] - Statics, influence lines, envelopes and `analyze`
//! - [`equations`] - Closed-form formulas behind the engines
//! - [`settings`] - Grid resolution and evaluation limits
//! - [`errors`] - Structured error types

pub mod beam;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, MovingLoads, PointLoad, ReactionPair, ResponseSample, TwoLoadConfiguration};
pub use calculations::{
    analyze, calculate, Envelope, EnvelopeAnalyzer, InfluenceFunction, InfluenceLineEngine,
    MovingLoadInput, MovingLoadResult, StaticsEngine,
};
pub use errors::{CalcError, CalcResult};
pub use settings::AnalysisSettings;
