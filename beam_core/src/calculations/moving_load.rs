//! # Two Moving Point Loads
//!
//! The caller-facing analysis of a simply supported beam crossed by two point
//! loads at fixed spacing: maximum reactions from influence lines, a reference
//! placement with the leading load over support A, and the governing shear and
//! moment envelopes.
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use beam_core::calculations::moving_load::analyze;
//!
//! let result = analyze(10.0, 5.0, 10.0, 2.0).unwrap();
//!
//! assert!((result.max_reaction_a - 13.0).abs() < 1e-9);
//! assert!((result.max_reaction_b - 14.0).abs() < 1e-9);
//! assert!((result.midspan_shear + 2.0).abs() < 1e-12);
//! println!("{}", result.to_json_pretty().unwrap());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::beam::{Beam, MovingLoads, PointLoad, TwoLoadConfiguration};
use crate::calculations::envelope::{Envelope, EnvelopeAnalyzer};
use crate::calculations::influence::InfluenceLineEngine;
use crate::calculations::statics::StaticsEngine;
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// Input parameters for a two-load moving-load analysis.
///
/// ## JSON Example
///
/// ```json
/// { "length": 10.0, "w1": 5.0, "w2": 10.0, "spacing": 2.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingLoadInput {
    /// Span length L (> 0)
    pub length: f64,
    /// Leading load W1 (> 0)
    pub w1: f64,
    /// Trailing load W2 (> 0)
    pub w2: f64,
    /// Distance from W1 to W2, 0 < spacing < L
    pub spacing: f64,
}

impl MovingLoadInput {
    /// Validate input parameters: length first, then loads, then spacing.
    pub fn validate(&self) -> CalcResult<(Beam, MovingLoads)> {
        let beam = Beam::new(self.length)?;
        let loads = MovingLoads::new(self.w1, self.w2, self.spacing);
        loads.validate(&beam)?;
        Ok((beam, loads))
    }
}

/// Results of a two-load moving-load analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingLoadResult {
    /// Inputs that produced this result
    pub input: MovingLoadInput,

    /// Largest reaction at A over the travel sweep
    pub max_reaction_a: f64,
    /// Largest reaction at B over the travel sweep
    pub max_reaction_b: f64,

    /// Reference placement: W1 at 0, W2 at the spacing
    pub reference_loads: Vec<PointLoad>,
    /// Moment under the resultant of the reference placement
    pub reference_moment: f64,
    /// Resultant position `(x·W2)/(W1 + W2)` where `reference_moment` is taken
    pub reference_moment_position: f64,
    /// Shear at L/2 for the reference placement
    pub midspan_shear: f64,

    /// Governing shear envelope
    pub shear_envelope: Envelope,
    /// Governing moment envelope
    pub moment_envelope: Envelope,
}

impl MovingLoadResult {
    /// Largest-magnitude shear over the sweep (signed)
    pub fn max_shear(&self) -> f64 {
        self.shear_envelope.extreme.value
    }

    /// Cut position of [`Self::max_shear`]
    pub fn max_shear_position(&self) -> f64 {
        self.shear_envelope.extreme.position
    }

    /// Largest-magnitude moment over the sweep (signed)
    pub fn max_moment(&self) -> f64 {
        self.moment_envelope.extreme.value
    }

    /// Cut position of [`Self::max_moment`]
    pub fn max_moment_position(&self) -> f64 {
        self.moment_envelope.extreme.position
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Analyze two moving loads with default grid settings (steps of 0.01·L).
///
/// Requires `L > 0`, `W1 > 0`, `W2 > 0` and `0 < x < L`.
pub fn analyze(length: f64, w1: f64, w2: f64, spacing: f64) -> CalcResult<MovingLoadResult> {
    let input = MovingLoadInput {
        length,
        w1,
        w2,
        spacing,
    };
    calculate(&input, &AnalysisSettings::default())
}

/// Analyze two moving loads with explicit settings.
pub fn calculate(input: &MovingLoadInput, settings: &AnalysisSettings) -> CalcResult<MovingLoadResult> {
    let (beam, loads) = input.validate()?;
    settings.validate()?;
    debug!(
        "moving-load analysis: L={} W1={} W2={} spacing={}",
        input.length, input.w1, input.w2, input.spacing
    );

    let statics = StaticsEngine::new(beam);
    let lines = InfluenceLineEngine::new(beam);
    let analyzer = EnvelopeAnalyzer::new(beam, settings.clone())?;

    let max_reaction_a = lines.max_reaction_a(&loads, settings)?;
    let max_reaction_b = lines.max_reaction_b(&loads, settings)?;

    let reference = TwoLoadConfiguration::new(loads.w1, 0.0, loads.w2, loads.spacing);
    let reference_loads = reference.loads().to_vec();
    let reference_moment_position = (loads.spacing * loads.w2) / loads.total();
    let reference_moment = statics.moment_at_two(&reference, reference_moment_position)?;
    let midspan_shear = statics.shear_at(&reference_loads, beam.midspan())?;

    let envelopes = analyzer.two_load_envelopes(&loads)?;

    Ok(MovingLoadResult {
        input: *input,
        max_reaction_a,
        max_reaction_b,
        reference_loads,
        reference_moment,
        reference_moment_position,
        midspan_shear,
        shear_envelope: envelopes.shear,
        moment_envelope: envelopes.moment,
    })
}
