//! # Simply-Supported Beam Statics
//!
//! Closed-form equilibrium equations for a beam with a pin at the left
//! support (x=0) and a roller at the right support (x=L) carrying point loads.
//! These functions do no validation; callers check inputs first.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `p` = Cut position from left support
//! - `x` = Load position from left support
//! - `W` = Point load magnitude
//! - `RA` = Left reaction, `RB` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Reactions: Positive upward
//! - Shear: Positive when the left side is pushed up (V = RA just right of A)
//! - Moment: Positive sagging
//!
//! ## At-load convention
//!
//! Shear is discontinuous under a point load. A cut exactly at a load reports
//! the left limit: the load is subtracted only when `x < p`. Moment is
//! continuous, so a load at the cut contributes a zero lever arm either way.

use crate::beam::PointLoad;

// =============================================================================
// ARBITRARY LOAD SETS
// =============================================================================

/// Reactions for any set of point loads by moment balance about A.
///
/// # Formulas
/// - RB = Σ(W·x) / L
/// - RA = ΣW − RB
pub fn reactions(loads: &[PointLoad], l: f64) -> (f64, f64) {
    let total: f64 = loads.iter().map(|load| load.magnitude).sum();
    let moment_about_a: f64 = loads.iter().map(|load| load.magnitude * load.position).sum();
    let rb = moment_about_a / l;
    (total - rb, rb)
}

/// Shear at cut `p`: V(p) = RA − Σ{W : x < p}
pub fn shear(ra: f64, loads: &[PointLoad], p: f64) -> f64 {
    loads
        .iter()
        .filter(|load| load.position < p)
        .fold(ra, |v, load| v - load.magnitude)
}

/// Moment at cut `p`: M(p) = RA·p − Σ{W·(p − x) : x ≤ p}
pub fn moment(ra: f64, loads: &[PointLoad], p: f64) -> f64 {
    loads
        .iter()
        .filter(|load| load.position <= p)
        .fold(ra * p, |m, load| m - load.magnitude * (p - load.position))
}

// =============================================================================
// SINGLE POINT LOAD
// =============================================================================

/// Reactions for one point load W at position x
///
/// ```text
///        W
///        ↓
///    ────┬────────────
///    △   x            △
///   RA  ←───────L────→ RB
/// ```
///
/// - RA = W(L−x)/L
/// - RB = Wx/L
#[inline]
pub fn point_load_reactions(w: f64, x: f64, l: f64) -> (f64, f64) {
    (w * (l - x) / l, w * x / l)
}

/// Moment directly under a single load: M = W·x·(L−x)/L
///
/// This is the peak of the single-load moment diagram.
#[inline]
pub fn moment_under_load(w: f64, x: f64, l: f64) -> f64 {
    w * x * (l - x) / l
}

// =============================================================================
// TWO POINT LOADS
// W1 at x1, W2 at x2 with x1 ≤ x2
// =============================================================================

/// Reactions for W1 at x1 and W2 at x2
///
/// - RA = [W1(L−x1) + W2(L−x2)] / L
/// - RB = (W1·x1 + W2·x2) / L
#[inline]
pub fn two_point_reactions(w1: f64, x1: f64, w2: f64, x2: f64, l: f64) -> (f64, f64) {
    let ra = (w1 * (l - x1) + w2 * (l - x2)) / l;
    let rb = (w1 * x1 + w2 * x2) / l;
    (ra, rb)
}

/// Shear at cut `p` for two loads
///
/// - V = RA             for p ≤ x1
/// - V = RA − W1        for x1 < p ≤ x2
/// - V = RA − W1 − W2   for p > x2
#[inline]
pub fn two_point_shear(ra: f64, w1: f64, x1: f64, w2: f64, x2: f64, p: f64) -> f64 {
    if p <= x1 {
        ra
    } else if p <= x2 {
        ra - w1
    } else {
        ra - w1 - w2
    }
}

/// Moment at cut `p` for two loads
///
/// - M = RA·p                          for p < x1
/// - M = RA·p − W1(p−x1)               for x1 ≤ p < x2
/// - M = RA·p − W1(p−x1) − W2(p−x2)    for p ≥ x2
#[inline]
pub fn two_point_moment(ra: f64, w1: f64, x1: f64, w2: f64, x2: f64, p: f64) -> f64 {
    if p < x1 {
        ra * p
    } else if p < x2 {
        ra * p - w1 * (p - x1)
    } else {
        ra * p - w1 * (p - x1) - w2 * (p - x2)
    }
}

// =============================================================================
// MOVING LOAD PAIR
// =============================================================================

/// Largest reactions produced by W1 leading W2 at fixed spacing `s`.
///
/// RA peaks with W1 over support A (a = 0) and RB with W2 over support B
/// (a = L − s):
/// - RA,max = W1 + W2(L−s)/L
/// - RB,max = W2 + W1(L−s)/L
#[inline]
pub fn moving_pair_max_reactions(w1: f64, w2: f64, s: f64, l: f64) -> (f64, f64) {
    (w1 + w2 * (l - s) / l, w2 + w1 * (l - s) / l)
}
