//! # Elastic-Plastic Fracture Mechanics Formulas
//!
//! LEFM-equivalent J-integral and crack tip opening displacement (CTOD)
//! computed from a known `K_I`.
//!
//! ## References
//!
//! - Anderson, Fracture Mechanics, Ch. 3 (J = K²/E', δ = K²/(m·σ_y·E))

use serde::{Deserialize, Serialize};

/// In-plane stress state at the crack tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StressState {
    /// Thin sections: E' = E
    #[default]
    PlaneStress,
    /// Thick sections: E' = E / (1 − ν²)
    PlaneStrain,
}

/// Effective modulus E' for the given stress state
#[inline]
pub fn effective_modulus(youngs_modulus: f64, poisson_ratio: f64, state: StressState) -> f64 {
    match state {
        StressState::PlaneStress => youngs_modulus,
        StressState::PlaneStrain => youngs_modulus / (1.0 - poisson_ratio.powi(2)),
    }
}

/// J-integral from stress intensity
///
/// # Formula
/// - J = K_I² / E'
#[inline]
pub fn j_integral(k_i: f64, youngs_modulus: f64, poisson_ratio: f64, state: StressState) -> f64 {
    k_i.powi(2) / effective_modulus(youngs_modulus, poisson_ratio, state)
}

/// Crack tip opening displacement
///
/// # Formula
/// - δ = K_I² / (m·σ_y·E)
///
/// `constraint_factor` is m, roughly 1.0 (plane stress) to 2.0 (plane strain).
#[inline]
pub fn ctod(k_i: f64, yield_strength: f64, youngs_modulus: f64, constraint_factor: f64) -> f64 {
    k_i.powi(2) / (constraint_factor * yield_strength * youngs_modulus)
}
