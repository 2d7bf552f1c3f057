//! Simply-Supported Beam Statics
//!
//! Reactions, shear and moment for point loads on a simple span. Every method
//! validates its inputs against the beam and then evaluates the closed-form
//! equations in [`crate::equations::beam`].
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{Beam, PointLoad};
//! use beam_core::calculations::statics::StaticsEngine;
//!
//! let statics = StaticsEngine::new(Beam::new(10.0).unwrap());
//! let loads = [PointLoad::new(6.0, 4.0)];
//!
//! let reactions = statics.reactions(&loads).unwrap();
//! assert!((reactions.r_a - 3.6).abs() < 1e-12);
//!
//! // Left limit at the load, then the drop by W
//! assert!((statics.shear_at(&loads, 4.0).unwrap() - 3.6).abs() < 1e-12);
//! assert!((statics.shear_at(&loads, 5.0).unwrap() + 2.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{require_positive, Beam, PointLoad, ReactionPair, TwoLoadConfiguration};
use crate::equations::beam as eq;
use crate::errors::CalcResult;

/// Peak responses for a single point load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleLoadExtremes {
    /// max(|RA|, |RA − W|), the shear just left and right of the load
    pub max_shear: f64,
    /// RA·x, the moment under the load
    pub max_moment: f64,
    /// Where the peak moment occurs (the load position)
    pub max_moment_position: f64,
}

/// Closed-form statics for one beam
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticsEngine {
    beam: Beam,
}

impl StaticsEngine {
    pub fn new(beam: Beam) -> Self {
        StaticsEngine { beam }
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    /// Reactions for any non-empty set of point loads.
    ///
    /// Magnitudes may be negative (uplift); they only need to be finite.
    pub fn reactions(&self, loads: &[PointLoad]) -> CalcResult<ReactionPair> {
        self.beam.check_loads(loads)?;
        let (r_a, r_b) = eq::reactions(loads, self.beam.length());
        Ok(ReactionPair { r_a, r_b })
    }

    /// Reactions for a single load `W > 0` at `0 ≤ x ≤ L`.
    pub fn single_point_load(&self, w: f64, x: f64) -> CalcResult<ReactionPair> {
        require_positive("w", w)?;
        self.beam.check_position("x", x)?;
        let (r_a, r_b) = eq::point_load_reactions(w, x, self.beam.length());
        Ok(ReactionPair { r_a, r_b })
    }

    /// Shear at `position`; a load exactly at the cut is not yet subtracted.
    pub fn shear_at(&self, loads: &[PointLoad], position: f64) -> CalcResult<f64> {
        let reactions = self.reactions(loads)?;
        self.beam.check_position("position", position)?;
        Ok(eq::shear(reactions.r_a, loads, position))
    }

    /// Bending moment at `position`
    pub fn moment_at(&self, loads: &[PointLoad], position: f64) -> CalcResult<f64> {
        let reactions = self.reactions(loads)?;
        self.beam.check_position("position", position)?;
        Ok(eq::moment(reactions.r_a, loads, position))
    }

    /// Reactions for two loads, plus the derived trailing-load position `x2`.
    pub fn two_point_load(&self, config: &TwoLoadConfiguration) -> CalcResult<(ReactionPair, f64)> {
        config.validate(&self.beam)?;
        let x2 = config.x2();
        let (r_a, r_b) = eq::two_point_reactions(config.w1, config.x1, config.w2, x2, self.beam.length());
        Ok((ReactionPair { r_a, r_b }, x2))
    }

    /// Two-load fast path for [`Self::shear_at`]
    pub fn shear_at_two(&self, config: &TwoLoadConfiguration, position: f64) -> CalcResult<f64> {
        let (reactions, x2) = self.two_point_load(config)?;
        self.beam.check_position("position", position)?;
        Ok(eq::two_point_shear(reactions.r_a, config.w1, config.x1, config.w2, x2, position))
    }

    /// Two-load fast path for [`Self::moment_at`]
    pub fn moment_at_two(&self, config: &TwoLoadConfiguration, position: f64) -> CalcResult<f64> {
        let (reactions, x2) = self.two_point_load(config)?;
        self.beam.check_position("position", position)?;
        Ok(eq::two_point_moment(reactions.r_a, config.w1, config.x1, config.w2, x2, position))
    }

    /// Peak shear and moment for one load `W` at `x`.
    ///
    /// The moment diagram is a triangle with its apex under the load, so the
    /// peak is `RA·x` at `x`.
    pub fn max_shear_and_moment_single(&self, w: f64, x: f64) -> CalcResult<SingleLoadExtremes> {
        let reactions = self.single_point_load(w, x)?;
        Ok(SingleLoadExtremes {
            max_shear: reactions.r_a.abs().max((reactions.r_a - w).abs()),
            max_moment: reactions.r_a * x,
            max_moment_position: x,
        })
    }

    /// Moment under a single load, `W·x·(L−x)/L`
    pub fn moment_under_load(&self, w: f64, x: f64) -> CalcResult<f64> {
        require_positive("w", w)?;
        self.beam.check_position("x", x)?;
        Ok(eq::moment_under_load(w, x, self.beam.length()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine(length: f64) -> StaticsEngine {
        StaticsEngine::new(Beam::new(length).unwrap())
    }

    #[test]
    fn test_single_point_load_reactions() {
        // 6 at 4 on a 10 span: RA = 6·6/10, RB = 6·4/10
        let reactions = engine(10.0).single_point_load(6.0, 4.0).unwrap();
        assert_relative_eq!(reactions.r_a, 3.6, epsilon = 1e-12);
        assert_relative_eq!(reactions.r_b, 2.4, epsilon = 1e-12);
    }

    #[test]
    fn test_single_load_extremes() {
        let extremes = engine(10.0).max_shear_and_moment_single(6.0, 4.0).unwrap();
        assert_relative_eq!(extremes.max_shear, 3.6, epsilon = 1e-12);
        assert_relative_eq!(extremes.max_moment, 14.4, epsilon = 1e-12);
        assert_eq!(extremes.max_moment_position, 4.0);
    }

    #[test]
    fn test_single_load_extremes_near_support_b() {
        // Load at 8: RA = 1.2, shear right of the load = -4.8 governs
        let extremes = engine(10.0).max_shear_and_moment_single(6.0, 8.0).unwrap();
        assert_relative_eq!(extremes.max_shear, 4.8, epsilon = 1e-12);
        assert_relative_eq!(extremes.max_moment, 9.6, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_under_load_matches_extremes() {
        let statics = engine(10.0);
        let m = statics.moment_under_load(6.0, 4.0).unwrap();
        let extremes = statics.max_shear_and_moment_single(6.0, 4.0).unwrap();
        assert_relative_eq!(m, extremes.max_moment, epsilon = 1e-12);
    }

    #[test]
    fn test_shear_steps_down_by_load() {
        let statics = engine(10.0);
        let loads = [PointLoad::new(5.0, 2.0), PointLoad::new(10.0, 6.0)];
        let before = statics.shear_at(&loads, 6.0).unwrap();
        let after = statics.shear_at(&loads, 6.5).unwrap();
        assert_relative_eq!(before - after, 10.0, epsilon = 1e-12);
        // Constant between loads
        assert_relative_eq!(
            statics.shear_at(&loads, 2.5).unwrap(),
            statics.shear_at(&loads, 5.5).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_moment_zero_at_supports() {
        let statics = engine(12.0);
        let loads = [
            PointLoad::new(3.0, 1.5),
            PointLoad::new(7.0, 6.0),
            PointLoad::new(2.0, 11.0),
        ];
        assert_relative_eq!(statics.moment_at(&loads, 0.0).unwrap(), 0.0, epsilon = 1e-12);
        assert!(statics.moment_at(&loads, 12.0).unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_two_point_load() {
        let statics = engine(10.0);
        let config = TwoLoadConfiguration::new(5.0, 0.0, 10.0, 2.0);
        let (reactions, x2) = statics.two_point_load(&config).unwrap();
        assert_eq!(x2, 2.0);
        assert_relative_eq!(reactions.r_a, 13.0, epsilon = 1e-12);
        assert_relative_eq!(reactions.r_b, 2.0, epsilon = 1e-12);
        assert_relative_eq!(statics.shear_at_two(&config, 5.0).unwrap(), -2.0, epsilon = 1e-12);
        // Left limit under the trailing load: only W1 subtracted
        assert_relative_eq!(statics.shear_at_two(&config, 2.0).unwrap(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(statics.moment_at_two(&config, 2.0).unwrap(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let statics = engine(10.0);
        assert_eq!(statics.single_point_load(6.0, 11.0).unwrap_err().field(), "x");
        assert_eq!(statics.single_point_load(0.0, 4.0).unwrap_err().field(), "w");
        assert_eq!(statics.reactions(&[]).unwrap_err().field(), "loads");
        let loads = [PointLoad::new(6.0, 4.0)];
        assert_eq!(statics.shear_at(&loads, -1.0).unwrap_err().field(), "position");
        assert_eq!(statics.moment_at(&loads, 10.5).unwrap_err().field(), "position");
        let config = TwoLoadConfiguration::new(5.0, 9.0, 10.0, 2.0);
        assert_eq!(statics.two_point_load(&config).unwrap_err().field(), "x2");
    }
}
