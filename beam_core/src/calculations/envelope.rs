//! Moving-Load Envelopes
//!
//! Sweeps a load configuration across the span and keeps, for every cut
//! position, the shear and moment of largest magnitude seen over all
//! placements. The result is the governing design envelope, not the diagram
//! of any single placement.
//!
//! ## Algorithm
//!
//! 1. Cut grid `{p_0 … p_n}` over `[0, L]` at step `h_p`, travel grid
//!    `{a_0 … a_m}` over the admissible leading-load positions at step `h_a`
//!    (see [`AnalysisSettings`]).
//! 2. Reactions are computed once per placement.
//! 3. Each cut reduces over the placements in travel order and keeps the
//!    sample with the largest absolute value; ties keep the earliest `a`.
//! 4. The overall extreme is the first envelope sample of largest magnitude.
//!
//! Cost is `O(n·m)` and bounded by `max_grid_evaluations`, checked against
//! the estimated grid sizes before either grid is built. With the
//! `parallel` feature the cuts are reduced on the rayon pool; each cut is
//! still reduced in travel order, so results are identical.
//!
//! ## Example
//! ```rust
//! use beam_core::beam::{Beam, MovingLoads};
//! use beam_core::calculations::envelope::EnvelopeAnalyzer;
//! use beam_core::settings::AnalysisSettings;
//!
//! let analyzer = EnvelopeAnalyzer::new(Beam::new(10.0).unwrap(), AnalysisSettings::default()).unwrap();
//! let envelopes = analyzer.two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0)).unwrap();
//!
//! assert_eq!(envelopes.moment.samples.len(), 101);
//! assert!((envelopes.moment.extreme.value - 32.667).abs() < 0.01);
//! ```

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::beam::{require_positive, Beam, MovingLoads, PointLoad, ResponseSample};
use crate::equations::beam as eq;
use crate::errors::CalcResult;
use crate::settings::AnalysisSettings;

/// Response quantity an envelope tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Shear,
    Moment,
}

/// Governing sample over the whole sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeExtreme {
    /// Signed value of the largest-magnitude sample
    pub value: f64,
    /// Cut position `p*`
    pub position: f64,
    /// Leading-load position `a*` that produced it
    pub travel_position: f64,
}

/// Pointwise maximum-magnitude response over all load placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub response: Response,
    /// Governing signed value at each cut, ordered by position
    pub samples: Vec<ResponseSample>,
    /// Leading-load position that governs each sample
    pub governing_travel: Vec<f64>,
    pub extreme: EnvelopeExtreme,
}

impl Envelope {
    /// `(position, value)` pairs for plotting
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.position, s.value)).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Shear and moment envelopes from one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePair {
    pub shear: Envelope,
    pub moment: Envelope,
}

/// Shear and moment diagrams for one fixed load placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagrams {
    pub shear: Vec<ResponseSample>,
    pub moment: Vec<ResponseSample>,
}

/// One placement of the moving loads with its left reaction
struct Placement {
    travel: f64,
    r_a: f64,
    loads: Vec<PointLoad>,
}

/// Running maximum-magnitude sample at one cut
#[derive(Clone, Copy)]
struct Governing {
    value: f64,
    travel: f64,
}

impl Governing {
    fn offer(slot: &mut Option<Governing>, value: f64, travel: f64) {
        match slot {
            Some(best) if value.abs() <= best.value.abs() => {}
            _ => *slot = Some(Governing { value, travel }),
        }
    }
}

/// Envelope sweeps for one beam at a fixed grid resolution
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeAnalyzer {
    beam: Beam,
    settings: AnalysisSettings,
}

impl EnvelopeAnalyzer {
    pub fn new(beam: Beam, settings: AnalysisSettings) -> CalcResult<Self> {
        settings.validate()?;
        Ok(EnvelopeAnalyzer { beam, settings })
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Cut positions every envelope and diagram is sampled at
    pub fn position_grid(&self) -> CalcResult<Vec<f64>> {
        self.settings.position_grid(&self.beam)
    }

    /// Leading-load positions `a ∈ [0, L − spacing]` for a moving pair
    pub fn travel_grid(&self, loads: &MovingLoads) -> CalcResult<Vec<f64>> {
        loads.validate(&self.beam)?;
        self.settings.travel_grid(&self.beam, loads.max_travel(&self.beam))
    }

    /// Envelopes for `W1` leading `W2` at fixed spacing across the span.
    pub fn two_load_envelopes(&self, loads: &MovingLoads) -> CalcResult<EnvelopePair> {
        loads.validate(&self.beam)?;
        let max_travel = loads.max_travel(&self.beam);
        self.settings.check_sweep(&self.beam, max_travel)?;
        let l = self.beam.length();
        let placements: Vec<Placement> = self
            .settings
            .travel_grid(&self.beam, max_travel)?
            .into_iter()
            .map(|a| {
                let loads = loads.at(a).loads().to_vec();
                let (r_a, _) = eq::reactions(&loads, l);
                Placement { travel: a, r_a, loads }
            })
            .collect();
        debug!(
            "two-load sweep: W1={} W2={} spacing={} over {} placements",
            loads.w1,
            loads.w2,
            loads.spacing,
            placements.len()
        );
        self.sweep(&placements)
    }

    /// Envelopes for a single load `W` travelling `a ∈ [0, L]`.
    pub fn single_load_envelopes(&self, w: f64) -> CalcResult<EnvelopePair> {
        require_positive("w", w)?;
        let l = self.beam.length();
        self.settings.check_sweep(&self.beam, l)?;
        let placements: Vec<Placement> = self
            .settings
            .travel_grid(&self.beam, l)?
            .into_iter()
            .map(|a| {
                let (r_a, _) = eq::point_load_reactions(w, a, l);
                Placement {
                    travel: a,
                    r_a,
                    loads: vec![PointLoad::new(w, a)],
                }
            })
            .collect();
        debug!("single-load sweep: W={w} over {} placements", placements.len());
        self.sweep(&placements)
    }

    /// Instantaneous shear and moment diagrams for a fixed load set, on the
    /// same cut grid as the envelopes.
    pub fn diagrams(&self, loads: &[PointLoad]) -> CalcResult<Diagrams> {
        self.beam.check_loads(loads)?;
        let (r_a, _) = eq::reactions(loads, self.beam.length());
        let positions = self.position_grid()?;
        Ok(Diagrams {
            shear: positions
                .iter()
                .map(|&p| ResponseSample::new(p, eq::shear(r_a, loads, p)))
                .collect(),
            moment: positions
                .iter()
                .map(|&p| ResponseSample::new(p, eq::moment(r_a, loads, p)))
                .collect(),
        })
    }

    fn sweep(&self, placements: &[Placement]) -> CalcResult<EnvelopePair> {
        let positions = self.position_grid()?;
        debug!("sweeping {} cuts x {} placements", positions.len(), placements.len());

        #[cfg(feature = "parallel")]
        let governing: Vec<(Governing, Governing)> = positions
            .par_iter()
            .map(|&p| Self::govern_at(p, placements))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let governing: Vec<(Governing, Governing)> = positions
            .iter()
            .map(|&p| Self::govern_at(p, placements))
            .collect();

        let (shear, moment): (Vec<Governing>, Vec<Governing>) = governing.into_iter().unzip();
        Ok(EnvelopePair {
            shear: Self::assemble(Response::Shear, &positions, shear),
            moment: Self::assemble(Response::Moment, &positions, moment),
        })
    }

    /// Reduce every placement at cut `p`, in travel order.
    fn govern_at(p: f64, placements: &[Placement]) -> (Governing, Governing) {
        let mut shear = None;
        let mut moment = None;
        for placement in placements {
            let v = eq::shear(placement.r_a, &placement.loads, p);
            let m = eq::moment(placement.r_a, &placement.loads, p);
            Governing::offer(&mut shear, v, placement.travel);
            Governing::offer(&mut moment, m, placement.travel);
        }
        // Travel grids always hold at least one placement
        let empty = Governing { value: 0.0, travel: 0.0 };
        (shear.unwrap_or(empty), moment.unwrap_or(empty))
    }

    fn assemble(response: Response, positions: &[f64], governing: Vec<Governing>) -> Envelope {
        let mut extreme = EnvelopeExtreme {
            value: 0.0,
            position: 0.0,
            travel_position: 0.0,
        };
        let mut seen = false;
        for (&position, g) in positions.iter().zip(&governing) {
            if !seen || g.value.abs() > extreme.value.abs() {
                trace!("{response:?} extreme {} at p={position} a={}", g.value, g.travel);
                extreme = EnvelopeExtreme {
                    value: g.value,
                    position,
                    travel_position: g.travel,
                };
                seen = true;
            }
        }
        Envelope {
            response,
            samples: positions
                .iter()
                .zip(&governing)
                .map(|(&p, g)| ResponseSample::new(p, g.value))
                .collect(),
            governing_travel: governing.iter().map(|g| g.travel).collect(),
            extreme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn analyzer(length: f64) -> EnvelopeAnalyzer {
        EnvelopeAnalyzer::new(Beam::new(length).unwrap(), AnalysisSettings::default()).unwrap()
    }

    #[test]
    fn test_single_load_moment_envelope_is_parabola() {
        // With aligned grids the governing placement at p is a = p, giving
        // M(p) = W·p·(L − p)/L
        let envelopes = analyzer(10.0).single_load_envelopes(6.0).unwrap();
        for sample in &envelopes.moment.samples {
            let p = sample.position;
            assert_relative_eq!(sample.value, 6.0 * p * (10.0 - p) / 10.0, epsilon = 1e-9);
        }
        assert_relative_eq!(envelopes.moment.extreme.value, 15.0, epsilon = 1e-9);
        assert_relative_eq!(envelopes.moment.extreme.position, 5.0, epsilon = 1e-12);
        assert_relative_eq!(envelopes.moment.extreme.travel_position, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_load_shear_envelope_peaks_at_supports() {
        let envelopes = analyzer(10.0).single_load_envelopes(6.0).unwrap();
        // Load over A with the cut at A: left limit keeps the full reaction
        assert_relative_eq!(envelopes.shear.samples[0].value, 6.0, epsilon = 1e-12);
        assert_relative_eq!(envelopes.shear.extreme.value.abs(), 6.0, epsilon = 1e-9);
        assert_eq!(envelopes.shear.extreme.position, 0.0);
        assert_eq!(envelopes.shear.extreme.travel_position, 0.0);
    }

    #[test]
    fn test_two_load_moment_extreme() {
        // Absolute maximum: W2 and the resultant straddle midspan, W2 at 5.333
        // M = 8·(16/3) − 5·2 = 32.667. On the 0.1 grid the nearest placement
        // is a = 3.3 with the cut under W2 at 5.3.
        let envelopes = analyzer(10.0)
            .two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0))
            .unwrap();
        assert!((envelopes.moment.extreme.value - 98.0 / 3.0).abs() < 0.01);
        assert!((envelopes.moment.extreme.position - 5.3).abs() < 1e-9);
        assert!((envelopes.moment.extreme.travel_position - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_envelope_dominates_every_placement() {
        let analyzer = analyzer(10.0);
        let pair = MovingLoads::new(5.0, 10.0, 2.0);
        let envelopes = analyzer.two_load_envelopes(&pair).unwrap();
        for a in analyzer.travel_grid(&pair).unwrap().into_iter().step_by(7) {
            let diagrams = analyzer.diagrams(&pair.at(a).loads()).unwrap();
            for (i, sample) in diagrams.shear.iter().enumerate() {
                assert!(sample.value.abs() <= envelopes.shear.samples[i].value.abs() + 1e-12);
            }
            for (i, sample) in diagrams.moment.iter().enumerate() {
                assert!(sample.value.abs() <= envelopes.moment.samples[i].value.abs() + 1e-12);
            }
        }
    }

    #[test]
    fn test_governing_travel_reproduces_sample() {
        let analyzer = analyzer(10.0);
        let pair = MovingLoads::new(5.0, 10.0, 2.0);
        let envelopes = analyzer.two_load_envelopes(&pair).unwrap();
        let i = 37;
        let a = envelopes.moment.governing_travel[i];
        let loads = pair.at(a).loads();
        let (r_a, _) = eq::reactions(&loads, 10.0);
        let p = envelopes.moment.samples[i].position;
        assert_relative_eq!(eq::moment(r_a, &loads, p), envelopes.moment.samples[i].value, epsilon = 1e-12);
    }

    #[test]
    fn test_ties_keep_first_travel_position() {
        // At the cut over A every placement gives M = 0, so the first
        // placement (a = 0) must govern.
        let envelopes = analyzer(10.0)
            .two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0))
            .unwrap();
        assert_eq!(envelopes.moment.samples[0].value, 0.0);
        assert_eq!(envelopes.moment.governing_travel[0], 0.0);
    }

    #[test]
    fn test_grid_budget_enforced() {
        let settings = AnalysisSettings::default().with_max_grid_evaluations(1_000);
        let analyzer = EnvelopeAnalyzer::new(Beam::new(10.0).unwrap(), settings).unwrap();
        let err = analyzer
            .two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0))
            .unwrap_err();
        assert_eq!(err.field(), "max_grid_evaluations");
    }

    #[test]
    fn test_tiny_steps_fail_before_sweeping() {
        let settings = AnalysisSettings::default()
            .with_position_step(1e-300)
            .with_max_grid_evaluations(1_000);
        let analyzer = EnvelopeAnalyzer::new(Beam::new(10.0).unwrap(), settings).unwrap();
        let err = analyzer
            .two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0))
            .unwrap_err();
        assert_eq!(err.field(), "position_step");
        assert_eq!(analyzer.single_load_envelopes(5.0).unwrap_err().field(), "position_step");
        assert_eq!(analyzer.diagrams(&[PointLoad::new(5.0, 2.0)]).unwrap_err().field(), "position_step");

        let settings = AnalysisSettings::default().with_travel_step(1e-300);
        let analyzer = EnvelopeAnalyzer::new(Beam::new(10.0).unwrap(), settings).unwrap();
        let err = analyzer
            .two_load_envelopes(&MovingLoads::new(5.0, 10.0, 2.0))
            .unwrap_err();
        assert_eq!(err.field(), "travel_step");
    }

    #[test]
    fn test_last_placement_stays_on_span() {
        // 12.9 − 2.3 rounds up, and adding 2.3 back lands past 12.9
        let beam = Beam::new(12.9).unwrap();
        let analyzer = EnvelopeAnalyzer::new(beam, AnalysisSettings::default()).unwrap();
        let pair = MovingLoads::new(5.0, 10.0, 2.3);
        let a_last = *analyzer.travel_grid(&pair).unwrap().last().unwrap();
        let config = pair.at(a_last);
        assert!(config.x2() <= 12.9);
        assert!(config.validate(&beam).is_ok());

        let diagrams = analyzer.diagrams(&config.loads()).unwrap();
        let envelopes = analyzer.two_load_envelopes(&pair).unwrap();
        let last = envelopes.moment.len() - 1;
        for (i, sample) in diagrams.moment.iter().enumerate() {
            assert!(sample.value.abs() <= envelopes.moment.samples[i].value.abs() + 1e-12);
        }
        assert_eq!(diagrams.moment[last].position, 12.9);
    }

    #[test]
    fn test_invalid_moving_loads() {
        let analyzer = analyzer(10.0);
        assert_eq!(
            analyzer.two_load_envelopes(&MovingLoads::new(5.0, 10.0, 10.0)).unwrap_err().field(),
            "spacing"
        );
        assert_eq!(
            analyzer.two_load_envelopes(&MovingLoads::new(0.0, 10.0, 2.0)).unwrap_err().field(),
            "w1"
        );
        assert_eq!(analyzer.single_load_envelopes(-1.0).unwrap_err().field(), "w");
    }

    #[test]
    fn test_to_pairs_preserves_order() {
        let envelopes = analyzer(4.0).single_load_envelopes(1.0).unwrap();
        let pairs = envelopes.shear.to_pairs();
        assert_eq!(pairs.len(), envelopes.shear.len());
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
