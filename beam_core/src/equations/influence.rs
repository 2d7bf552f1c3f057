//! # Influence-Line Ordinates
//!
//! Response at a fixed point due to a unit load at position `x`, for a
//! simply supported beam of span `L`. Unchecked; see
//! [`crate::calculations::influence`] for the validated engine.
//!
//! The shear line falls from 0 at A to −c/L just left of the cut, jumps by
//! one to (L − c)/L, and falls back to 0 at B. The moment line is a triangle
//! peaking at c(L − c)/L under the cut.
//!
//! Superposing ordinates times load magnitudes gives the response to any set
//! of point loads (Müller-Breslau principle).

/// Unit-load reaction at A: (L − x)/L
#[inline]
pub fn reaction_a(x: f64, l: f64) -> f64 {
    (l - x) / l
}

/// Unit-load reaction at B: x/L
#[inline]
pub fn reaction_b(x: f64, l: f64) -> f64 {
    x / l
}

/// Unit-load shear at cut `c`.
///
/// - −x/L       for x < c (load left of the cut: V = RA − 1)
/// - (L − x)/L  for x > c (load right of the cut: V = RA)
///
/// The limits at the cut are −c/L and (L − c)/L. Returns `None` at
/// `x == c`, where the line jumps by one.
#[inline]
pub fn shear(c: f64, x: f64, l: f64) -> Option<f64> {
    if x < c {
        Some(-x / l)
    } else if x > c {
        Some((l - x) / l)
    } else {
        None
    }
}

/// Unit-load moment at cut `c`.
///
/// - x(L − c)/L  for x ≤ c
/// - c(L − x)/L  for x > c
#[inline]
pub fn moment(c: f64, x: f64, l: f64) -> f64 {
    if x <= c {
        x * (l - c) / l
    } else {
        c * (l - x) / l
    }
}
