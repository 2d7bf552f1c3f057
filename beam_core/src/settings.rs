//! # Analysis Settings
//!
//! Sampling resolution for envelope sweeps and the cap that bounds their cost.
//! Settings serialize to JSON so a caller can keep them alongside its inputs.
//!
//! ```rust
//! use beam_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::default()
//!     .with_position_step(0.05)
//!     .with_travel_step(0.05);
//! assert_eq!(settings.position_step, Some(0.05));
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{reject, require_positive, Beam};
use crate::errors::{CalcError, CalcResult};

/// Default sampling step as a fraction of the span (`h = 0.01·L`)
pub const DEFAULT_STEP_RATIO: f64 = 0.01;

/// Default cap on shear/moment evaluations per envelope
pub const DEFAULT_MAX_GRID_EVALUATIONS: usize = 4_000_000;

/// Grid resolution and resource limits for envelope analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Spacing of the cut-position grid. `None` uses `0.01·L`.
    pub position_step: Option<f64>,

    /// Spacing of the load-travel grid. `None` uses `0.01·L`.
    pub travel_step: Option<f64>,

    /// Maximum `positions × travel positions` a single sweep may evaluate
    pub max_grid_evaluations: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            position_step: None,
            travel_step: None,
            max_grid_evaluations: DEFAULT_MAX_GRID_EVALUATIONS,
        }
    }
}

impl AnalysisSettings {
    pub fn with_position_step(mut self, step: f64) -> Self {
        self.position_step = Some(step);
        self
    }

    pub fn with_travel_step(mut self, step: f64) -> Self {
        self.travel_step = Some(step);
        self
    }

    pub fn with_max_grid_evaluations(mut self, limit: usize) -> Self {
        self.max_grid_evaluations = limit;
        self
    }

    /// Validate explicit steps and the evaluation cap.
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(step) = self.position_step {
            require_positive("position_step", step)?;
        }
        if let Some(step) = self.travel_step {
            require_positive("travel_step", step)?;
        }
        if self.max_grid_evaluations == 0 {
            return Err(CalcError::invalid_configuration(
                "max_grid_evaluations",
                "0",
                "Evaluation limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Effective `h_p` for a beam
    pub fn position_step_for(&self, beam: &Beam) -> f64 {
        self.position_step.unwrap_or(beam.length() * DEFAULT_STEP_RATIO)
    }

    /// Effective `h_a` for a beam
    pub fn travel_step_for(&self, beam: &Beam) -> f64 {
        self.travel_step.unwrap_or(beam.length() * DEFAULT_STEP_RATIO)
    }

    /// Cut positions `{p_0 … p_n}` covering `[0, L]`.
    ///
    /// Fails on `position_step` when the grid alone would exceed the
    /// evaluation cap; nothing is allocated in that case.
    pub fn position_grid(&self, beam: &Beam) -> CalcResult<Vec<f64>> {
        let step = self.position_step_for(beam);
        self.check_points("position_step", step, grid_len(0.0, beam.length(), step))?;
        Ok(uniform_grid(0.0, beam.length(), step))
    }

    /// Leading-load positions `{a_0 … a_m}` covering `[0, max_travel]`.
    pub fn travel_grid(&self, beam: &Beam, max_travel: f64) -> CalcResult<Vec<f64>> {
        let step = self.travel_step_for(beam);
        self.check_points("travel_step", step, grid_len(0.0, max_travel, step))?;
        Ok(uniform_grid(0.0, max_travel, step))
    }

    /// Fail when a sweep of every cut against every placement would exceed
    /// the evaluation cap. Counts are estimated before any grid is built.
    pub fn check_sweep(&self, beam: &Beam, max_travel: f64) -> CalcResult<()> {
        let position_step = self.position_step_for(beam);
        let travel_step = self.travel_step_for(beam);
        let positions = grid_len(0.0, beam.length(), position_step);
        let travel = grid_len(0.0, max_travel, travel_step);
        self.check_points("position_step", position_step, positions)?;
        self.check_points("travel_step", travel_step, travel)?;

        let evaluations = positions * travel;
        if evaluations > self.max_grid_evaluations as f64 {
            return Err(reject(
                "max_grid_evaluations",
                self.max_grid_evaluations as f64,
                &format!(
                    "Sweep needs {evaluations} evaluations ({positions} positions x {travel} travel positions); increase the steps or the limit"
                ),
            ));
        }
        Ok(())
    }

    fn check_points(&self, field: &str, step: f64, points: f64) -> CalcResult<()> {
        if points > self.max_grid_evaluations as f64 {
            return Err(reject(
                field,
                step,
                &format!(
                    "Step gives {points:e} grid points, above the limit of {}",
                    self.max_grid_evaluations
                ),
            ));
        }
        Ok(())
    }
}

/// Point count of a uniform grid over `[start, end]` at `step`, as `f64` so
/// that a tiny step cannot overflow it.
pub fn grid_len(start: f64, end: f64, step: f64) -> f64 {
    let range = end - start;
    if range <= 0.0 {
        return 1.0;
    }
    grid_intervals(range, step) + 1.0
}

fn grid_intervals(range: f64, step: f64) -> f64 {
    // Tolerance keeps L/h = 100.000000001 from adding a sliver interval.
    ((range / step) - 1e-9).ceil().max(1.0)
}

/// Evenly spaced points from `start` to `end` inclusive, at most `step` apart.
///
/// Points are computed as `start + range·(i/n)` so the last point equals `end`
/// exactly. A degenerate range yields the single point `start`. The point
/// count is not bounded here; callers check [`grid_len`] first.
pub(crate) fn uniform_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
    let range = end - start;
    if range <= 0.0 {
        return vec![start];
    }
    let intervals = grid_intervals(range, step) as usize;
    (0..=intervals)
        .map(|i| start + range * (i as f64 / intervals as f64))
        .collect()
}

/// `num_points` evenly spaced points over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (num_points - 1) as f64;
            (0..num_points)
                .map(|i| start + (end - start) * (i as f64 / last))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_are_one_percent_of_span() {
        let beam = Beam::new(10.0).unwrap();
        let settings = AnalysisSettings::default();
        assert_eq!(settings.position_step_for(&beam), 0.1);
        let grid = settings.position_grid(&beam).unwrap();
        assert_eq!(grid.len(), 101);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[100], 10.0);
        assert_eq!(grid[50], 5.0);
    }

    #[test]
    fn test_uniform_grid_hits_both_ends() {
        let grid = uniform_grid(0.0, 8.0, 0.3);
        assert_eq!(*grid.first().unwrap(), 0.0);
        assert_eq!(*grid.last().unwrap(), 8.0);
        // 8 / 0.3 = 26.67 -> 27 intervals
        assert_eq!(grid.len(), 28);
        assert!(grid.windows(2).all(|w| w[1] - w[0] <= 0.3 + 1e-12));
    }

    #[test]
    fn test_uniform_grid_step_larger_than_range() {
        assert_eq!(uniform_grid(0.0, 1.0, 5.0), vec![0.0, 1.0]);
        assert_eq!(uniform_grid(2.0, 2.0, 0.1), vec![2.0]);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(0.0, 10.0, 1), vec![0.0]);
        assert!(linspace(0.0, 10.0, 0).is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(AnalysisSettings::default().validate().is_ok());
        let bad = AnalysisSettings::default().with_position_step(0.0);
        assert_eq!(bad.validate().unwrap_err().field(), "position_step");
        let bad = AnalysisSettings::default().with_travel_step(f64::NAN);
        assert_eq!(bad.validate().unwrap_err().field(), "travel_step");
        let bad = AnalysisSettings::default().with_max_grid_evaluations(0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_sweep_budget() {
        let beam = Beam::new(10.0).unwrap();
        let settings = AnalysisSettings::default()
            .with_position_step(1.0)
            .with_travel_step(1.0)
            .with_max_grid_evaluations(100);
        // 11 cuts x 9 placements
        assert!(settings.check_sweep(&beam, 8.0).is_ok());
        let err = settings.check_sweep(&beam, 10.0).unwrap_err();
        assert_eq!(err.field(), "max_grid_evaluations");
    }

    #[test]
    fn test_tiny_steps_rejected_before_allocation() {
        let beam = Beam::new(10.0).unwrap();
        let settings = AnalysisSettings::default().with_position_step(1e-300);
        assert!(settings.validate().is_ok());
        assert!(grid_len(0.0, 10.0, 1e-300) > 1e300);
        assert_eq!(settings.position_grid(&beam).unwrap_err().field(), "position_step");
        assert_eq!(settings.check_sweep(&beam, 8.0).unwrap_err().field(), "position_step");

        let settings = AnalysisSettings::default().with_travel_step(1e-8);
        assert_eq!(settings.travel_grid(&beam, 8.0).unwrap_err().field(), "travel_step");
        assert_eq!(settings.check_sweep(&beam, 8.0).unwrap_err().field(), "travel_step");
    }

    #[test]
    fn test_grid_len_matches_uniform_grid() {
        for (end, step) in [(8.0, 0.3), (10.0, 0.1), (1.0, 5.0), (0.0, 0.1)] {
            assert_eq!(grid_len(0.0, end, step), uniform_grid(0.0, end, step).len() as f64);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AnalysisSettings = serde_json::from_str(r#"{"travel_step": 0.05}"#).unwrap();
        assert_eq!(settings.travel_step, Some(0.05));
        assert_eq!(settings.position_step, None);
        assert_eq!(settings.max_grid_evaluations, DEFAULT_MAX_GRID_EVALUATIONS);
    }
}
