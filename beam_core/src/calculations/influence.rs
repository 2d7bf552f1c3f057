//! Influence Lines
//!
//! Response quantities as functions of a unit load's position, and their
//! superposition over fixed load sets. This is an independent formulation of
//! the statics in [`super::statics`]: applying a shear or moment line to a
//! load set must reproduce `shear_at` / `moment_at` at the same cut.
//!
//! The shear line is discontinuous at its own cut. Ordinates there are
//! reported as `None`, and [`InfluenceLineEngine::apply`] refuses a load set
//! with a load sitting exactly on the cut instead of guessing a side.
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{Beam, PointLoad};
//! use beam_core::calculations::influence::{InfluenceFunction, InfluenceLineEngine};
//!
//! let lines = InfluenceLineEngine::new(Beam::new(10.0).unwrap());
//! let loads = [PointLoad::new(5.0, 0.0), PointLoad::new(10.0, 2.0)];
//!
//! let v = lines.apply(InfluenceFunction::Shear { cut: 5.0 }, &loads).unwrap();
//! assert!((v + 2.0).abs() < 1e-12);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::beam::{Beam, MovingLoads, PointLoad};
use crate::equations::{beam as statics_eq, influence as eq};
use crate::errors::{CalcError, CalcResult};
use crate::settings::{linspace, AnalysisSettings};

/// Which response an influence line describes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InfluenceFunction {
    /// Reaction at support A
    ReactionA,
    /// Reaction at support B
    ReactionB,
    /// Shear force at a cut
    Shear { cut: f64 },
    /// Bending moment at a cut
    Moment { cut: f64 },
}

impl InfluenceFunction {
    /// Cut position, for the functions that have one
    pub fn cut(&self) -> Option<f64> {
        match self {
            InfluenceFunction::Shear { cut } | InfluenceFunction::Moment { cut } => Some(*cut),
            InfluenceFunction::ReactionA | InfluenceFunction::ReactionB => None,
        }
    }

    fn ordinate(&self, x: f64, l: f64) -> Option<f64> {
        match *self {
            InfluenceFunction::ReactionA => Some(eq::reaction_a(x, l)),
            InfluenceFunction::ReactionB => Some(eq::reaction_b(x, l)),
            InfluenceFunction::Shear { cut } => eq::shear(cut, x, l),
            InfluenceFunction::Moment { cut } => Some(eq::moment(cut, x, l)),
        }
    }
}

/// A sampled influence line for plotting.
///
/// `ordinates[i]` belongs to `positions[i]`; `None` marks the shear
/// discontinuity at the cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceLine {
    pub function: InfluenceFunction,
    pub positions: Vec<f64>,
    pub ordinates: Vec<Option<f64>>,
}

impl InfluenceLine {
    /// Positions where the line is undefined
    pub fn discontinuities(&self) -> Vec<f64> {
        self.positions
            .iter()
            .zip(&self.ordinates)
            .filter(|(_, ordinate)| ordinate.is_none())
            .map(|(position, _)| *position)
            .collect()
    }
}

/// Largest reactions over a moving load pair's travel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxReactions {
    /// Largest reaction at A over all placements
    pub r_a: f64,
    /// Largest reaction at B over all placements
    pub r_b: f64,
}

/// Influence-line evaluation for one beam
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfluenceLineEngine {
    beam: Beam,
}

impl InfluenceLineEngine {
    pub fn new(beam: Beam) -> Self {
        InfluenceLineEngine { beam }
    }

    /// (L − x)/L
    pub fn reaction_influence_a(&self, position: f64) -> CalcResult<f64> {
        self.beam.check_position("position", position)?;
        Ok(eq::reaction_a(position, self.beam.length()))
    }

    /// x/L
    pub fn reaction_influence_b(&self, position: f64) -> CalcResult<f64> {
        self.beam.check_position("position", position)?;
        Ok(eq::reaction_b(position, self.beam.length()))
    }

    /// Shear at `cut_position` due to a unit load at `load_position`.
    ///
    /// `Ok(None)` when the unit load sits exactly on the cut.
    pub fn shear_influence(&self, cut_position: f64, load_position: f64) -> CalcResult<Option<f64>> {
        self.beam.check_position("cut_position", cut_position)?;
        self.beam.check_position("load_position", load_position)?;
        Ok(eq::shear(cut_position, load_position, self.beam.length()))
    }

    /// Moment at `cut_position` due to a unit load at `load_position`
    pub fn moment_influence(&self, cut_position: f64, load_position: f64) -> CalcResult<f64> {
        self.beam.check_position("cut_position", cut_position)?;
        self.beam.check_position("load_position", load_position)?;
        Ok(eq::moment(cut_position, load_position, self.beam.length()))
    }

    /// Superpose `Σ W_i · f(x_i)` over a fixed load set.
    ///
    /// Fails when a load lies on the shear line's discontinuity.
    pub fn apply(&self, function: InfluenceFunction, loads: &[PointLoad]) -> CalcResult<f64> {
        self.check_function(&function)?;
        self.beam.check_loads(loads)?;
        let l = self.beam.length();
        let mut total = 0.0;
        for (i, load) in loads.iter().enumerate() {
            let ordinate = function.ordinate(load.position, l).ok_or_else(|| {
                debug!("load {i} at {} lies on the shear discontinuity", load.position);
                CalcError::invalid_configuration(
                    format!("loads[{i}].position"),
                    load.position.to_string(),
                    "Load lies on the shear influence-line discontinuity at the cut",
                )
            })?;
            total += load.magnitude * ordinate;
        }
        Ok(total)
    }

    /// Sample a line at `num_points ≥ 2` evenly spaced unit-load positions.
    pub fn sample(&self, function: InfluenceFunction, num_points: usize) -> CalcResult<InfluenceLine> {
        self.check_function(&function)?;
        if num_points < 2 {
            return Err(CalcError::invalid_configuration(
                "num_points",
                num_points.to_string(),
                "At least two sample points are required",
            ));
        }
        let l = self.beam.length();
        let positions = linspace(0.0, l, num_points);
        let ordinates = positions.iter().map(|&x| function.ordinate(x, l)).collect();
        Ok(InfluenceLine {
            function,
            positions,
            ordinates,
        })
    }

    /// Largest reaction at A as the pair travels the span
    pub fn max_reaction_a(&self, loads: &MovingLoads, settings: &AnalysisSettings) -> CalcResult<f64> {
        self.max_over_travel(loads, settings, InfluenceFunction::ReactionA)
    }

    /// Largest reaction at B as the pair travels the span
    pub fn max_reaction_b(&self, loads: &MovingLoads, settings: &AnalysisSettings) -> CalcResult<f64> {
        self.max_over_travel(loads, settings, InfluenceFunction::ReactionB)
    }

    /// Exact maxima: W1 over support A, or W2 over support B.
    pub fn max_reactions_closed_form(&self, loads: &MovingLoads) -> CalcResult<MaxReactions> {
        loads.validate(&self.beam)?;
        let (r_a, r_b) =
            statics_eq::moving_pair_max_reactions(loads.w1, loads.w2, loads.spacing, self.beam.length());
        Ok(MaxReactions { r_a, r_b })
    }

    fn max_over_travel(
        &self,
        loads: &MovingLoads,
        settings: &AnalysisSettings,
        function: InfluenceFunction,
    ) -> CalcResult<f64> {
        loads.validate(&self.beam)?;
        settings.validate()?;
        let l = self.beam.length();
        let travel = settings.travel_grid(&self.beam, loads.max_travel(&self.beam))?;
        debug!("{function:?} reaction sweep over {} travel positions", travel.len());

        let mut best = f64::NEG_INFINITY;
        for &a in &travel {
            let x2 = loads.at(a).x2();
            // Reaction lines are defined everywhere
            let value = loads.w1 * function.ordinate(a, l).unwrap_or(0.0)
                + loads.w2 * function.ordinate(x2, l).unwrap_or(0.0);
            if value > best {
                trace!("{function:?} reaction {value} with leading load at {a}");
                best = value;
            }
        }
        Ok(best)
    }

    fn check_function(&self, function: &InfluenceFunction) -> CalcResult<()> {
        match function.cut() {
            Some(cut) => self.beam.check_position("cut", cut),
            None => Ok(()),
        }
    }
}
