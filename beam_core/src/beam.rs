//! # Beam and Load Model
//!
//! Data types shared by every engine: the beam itself, point loads, reaction
//! pairs, response samples and the two-load configurations used by moving-load
//! analysis. Validation of caller input lives here so each public operation
//! can reject bad input before computing anything.
//!
//! ## Coordinates
//!
//! Positions are measured from support A (pin) at `0` towards support B
//! (roller) at `L`. Loads are positive downward, reactions positive upward.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, PointLoad};
//!
//! let beam = Beam::new(10.0).unwrap();
//! let load = PointLoad::new(6.0, 4.0);
//! assert!(beam.check_load(&load, "load").is_ok());
//! assert!(Beam::new(0.0).is_err());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Build an [`CalcError::InvalidConfiguration`] and record the rejection.
pub(crate) fn reject(field: &str, value: f64, reason: &str) -> CalcError {
    debug!("rejected {field} = {value}: {reason}");
    CalcError::invalid_configuration(field, value.to_string(), reason)
}

/// Require a finite value.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(field, value, "Value must be finite"))
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(reject(field, value, "Value must be positive"))
    }
}

// ============================================================================
// Beam
// ============================================================================

/// A simply supported beam of length `L`.
///
/// Immutable once constructed; the constructor guarantees `L` is finite and
/// positive, so every engine can divide by it freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBeam")]
pub struct Beam {
    length: f64,
}

#[derive(Deserialize)]
struct UncheckedBeam {
    length: f64,
}

impl TryFrom<UncheckedBeam> for Beam {
    type Error = CalcError;

    fn try_from(raw: UncheckedBeam) -> CalcResult<Self> {
        Beam::new(raw.length)
    }
}

impl Beam {
    /// Create a beam, rejecting non-positive or non-finite lengths.
    pub fn new(length: f64) -> CalcResult<Self> {
        require_positive("length", length)?;
        Ok(Beam { length })
    }

    /// Span length `L`
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Midspan coordinate `L/2`
    pub fn midspan(&self) -> f64 {
        self.length / 2.0
    }

    /// Require `0 ≤ position ≤ L`.
    pub fn check_position(&self, field: &str, position: f64) -> CalcResult<()> {
        require_finite(field, position)?;
        if position < 0.0 || position > self.length {
            return Err(reject(field, position, &format!("Position must lie within [0, {}]", self.length)));
        }
        Ok(())
    }

    /// Require a finite magnitude and an in-span position.
    pub fn check_load(&self, load: &PointLoad, field: &str) -> CalcResult<()> {
        require_finite(&format!("{field}.magnitude"), load.magnitude)?;
        self.check_position(&format!("{field}.position"), load.position)
    }

    /// Validate a whole load set. The set must not be empty.
    pub fn check_loads(&self, loads: &[PointLoad]) -> CalcResult<()> {
        if loads.is_empty() {
            debug!("rejected empty load set");
            return Err(CalcError::invalid_configuration(
                "loads",
                "[]",
                "At least one point load is required",
            ));
        }
        for (i, load) in loads.iter().enumerate() {
            self.check_load(load, &format!("loads[{i}]"))?;
        }
        Ok(())
    }
}

// ============================================================================
// Loads and Results
// ============================================================================

/// A concentrated load of `magnitude` (positive downward) at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude `W`
    pub magnitude: f64,
    /// Distance from support A
    pub position: f64,
}

impl PointLoad {
    /// Create a point load. Validation happens against a [`Beam`].
    pub fn new(magnitude: f64, position: f64) -> Self {
        PointLoad { magnitude, position }
    }
}

/// Support reactions `(R_A, R_B)`, positive upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionPair {
    /// Reaction at the pin support A (x = 0)
    pub r_a: f64,
    /// Reaction at the roller support B (x = L)
    pub r_b: f64,
}

impl ReactionPair {
    /// `R_A + R_B`, equal to the total applied load
    pub fn total(&self) -> f64 {
        self.r_a + self.r_b
    }
}

/// A response value (shear or moment) at a cut position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    /// Cut position measured from support A
    pub position: f64,
    /// Shear force or bending moment at the cut
    pub value: f64,
}

impl ResponseSample {
    pub fn new(position: f64, value: f64) -> Self {
        ResponseSample { position, value }
    }
}

// ============================================================================
// Two-Load Configurations
// ============================================================================

/// Two point loads a fixed distance apart: `W1` at `x1`, `W2` at `x1 + spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoLoadConfiguration {
    /// Leading load magnitude
    pub w1: f64,
    /// Leading load position
    pub x1: f64,
    /// Trailing load magnitude
    pub w2: f64,
    /// Distance from the leading to the trailing load
    pub spacing: f64,
}

impl TwoLoadConfiguration {
    pub fn new(w1: f64, x1: f64, w2: f64, spacing: f64) -> Self {
        TwoLoadConfiguration { w1, x1, w2, spacing }
    }

    /// Position of the trailing load
    pub fn x2(&self) -> f64 {
        self.x1 + self.spacing
    }

    /// The configuration as a load set, ordered by position.
    pub fn loads(&self) -> [PointLoad; 2] {
        [
            PointLoad::new(self.w1, self.x1),
            PointLoad::new(self.w2, self.x2()),
        ]
    }

    /// Require positive magnitudes, `spacing ≥ 0` and both loads on the span.
    pub fn validate(&self, beam: &Beam) -> CalcResult<()> {
        require_positive("w1", self.w1)?;
        require_positive("w2", self.w2)?;
        require_finite("spacing", self.spacing)?;
        if self.spacing < 0.0 {
            return Err(reject("spacing", self.spacing, "Spacing must not be negative"));
        }
        beam.check_position("x1", self.x1)?;
        beam.check_position("x2", self.x2())
    }
}

/// A pair of loads travelling across the span at constant spacing.
///
/// The leading load `W1` occupies `a ∈ [0, L − spacing]` and the trailing
/// load `W2` sits at `a + spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingLoads {
    pub w1: f64,
    pub w2: f64,
    pub spacing: f64,
}

impl MovingLoads {
    pub fn new(w1: f64, w2: f64, spacing: f64) -> Self {
        MovingLoads { w1, w2, spacing }
    }

    /// Require `W1 > 0`, `W2 > 0` and `0 < spacing < L`.
    pub fn validate(&self, beam: &Beam) -> CalcResult<()> {
        require_positive("w1", self.w1)?;
        require_positive("w2", self.w2)?;
        require_finite("spacing", self.spacing)?;
        if self.spacing <= 0.0 || self.spacing >= beam.length() {
            return Err(reject(
                "spacing",
                self.spacing,
                &format!("Spacing must lie strictly between 0 and the span {}", beam.length()),
            ));
        }
        Ok(())
    }

    /// Largest admissible leading-load position, `L − spacing`.
    ///
    /// Rounded down where needed so that `max_travel + spacing ≤ L` holds in
    /// floating point; every placement on `[0, max_travel]` then validates.
    pub fn max_travel(&self, beam: &Beam) -> f64 {
        let l = beam.length();
        let mut a = l - self.spacing;
        while a > 0.0 && a + self.spacing > l {
            // Next representable value below a positive a
            a = f64::from_bits(a.to_bits() - 1);
        }
        a
    }

    /// Place the leading load at `a`.
    pub fn at(&self, a: f64) -> TwoLoadConfiguration {
        TwoLoadConfiguration::new(self.w1, a, self.w2, self.spacing)
    }

    /// Combined load `W1 + W2`
    pub fn total(&self) -> f64 {
        self.w1 + self.w2
    }
}
