//! # Specimen Geometry Factors
//!
//! Finite-width corrections for the two standard specimen types.
//!
//! ```text
//!   Center cracked plate (CCT)         Single edge notch bend (SENB)
//!   ┌──────────────┐                          P
//!   │              │                          ↓
//!   │    ──2a──    │                   ┌──────┴──────┐  W
//!   │              │                   └──────┬──────┘
//!   └──────────────┘                    △    a│     △
//!   ←──────W───────→                    ←─────S─────→
//! ```
//!
//! ## References
//!
//! - Tada, Paris & Irwin, The Stress Analysis of Cracks Handbook (secant form)
//! - ASTM E399, Annex A3 (SENB compliance function)

use std::f64::consts::PI;

/// Finite-width geometry factor for a center crack of total length 2a
///
/// # Formula
/// - α = 2a / W
/// - Y = √(sec(π·α/2))
///
/// Tends to 1.0 as W → ∞ and diverges as 2a → W.
#[inline]
pub fn center_crack_geometry_factor(total_crack_length: f64, width: f64) -> f64 {
    let alpha = total_crack_length / width;
    (1.0 / (PI * alpha / 2.0).cos()).sqrt()
}

/// Dimensionless SENB shape function f(a/W) for S/W = 4
///
/// # Formula (ASTM E399)
/// ```text
///          3·√α·[1.99 − α(1−α)(2.15 − 3.93α + 2.7α²)]
/// f(α) = ───────────────────────────────────────────────
///                  2·(1 + 2α)·(1 − α)^1.5
/// ```
#[inline]
pub fn senb_shape_function(crack_length: f64, width: f64) -> f64 {
    let alpha = crack_length / width;
    let numerator =
        3.0 * alpha.sqrt() * (1.99 - alpha * (1.0 - alpha) * (2.15 - 3.93 * alpha + 2.7 * alpha.powi(2)));
    let denominator = 2.0 * (1.0 + 2.0 * alpha) * (1.0 - alpha).powf(1.5);
    numerator / denominator
}

/// SENB stress intensity from applied load
///
/// # Formula
/// - K_I = (P·S / (B·W^1.5))·f(a/W)
#[inline]
pub fn senb_stress_intensity(load: f64, span: f64, thickness: f64, width: f64, crack_length: f64) -> f64 {
    (load * span / (thickness * width.powf(1.5))) * senb_shape_function(crack_length, width)
}
