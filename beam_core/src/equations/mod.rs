//! # Structural Mechanics Equations
//!
//! Closed-form equations used by the calculation engines, kept in one place
//! so each formula can be checked against a textbook on its own.
//!
//! ## Modules
//!
//! - [`beam`] - Reactions, shear and moment for point loads on a simple span
//! - [`influence`] - Influence-line ordinates for a unit load
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler, Chapter 6 (Influence Lines)

pub mod beam;
pub mod influence;
