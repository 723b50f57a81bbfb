//! # Linear-Elastic Fracture Mechanics Formulas
//!
//! Mode I stress intensity for a crack of length `a` under remote stress `σ`,
//! and the critical crack length at which `K_I` reaches the fracture
//! toughness `K_IC`.
//!
//! ## Notation
//!
//! - `Y` = Geometry factor (dimensionless, 1.0 for an infinite plate)
//! - `σ` = Remote stress (Pa)
//! - `a` = Crack length (m); half-length for center cracks
//! - `K_I` = Mode I stress intensity factor (Pa·√m)
//! - `K_IC` = Plane-strain fracture toughness (Pa·√m)
//!
//! ## References
//!
//! - Anderson, Fracture Mechanics: Fundamentals and Applications, Ch. 2
//! - Tada, Paris & Irwin, The Stress Analysis of Cracks Handbook

use std::f64::consts::PI;

/// Mode I stress intensity factor
///
/// # Formula
/// - K_I = Y·σ·√(π·a)
///
/// # Arguments
/// * `geometry_factor` - Y
/// * `stress` - Remote stress σ
/// * `crack_length` - Crack length a
#[inline]
pub fn stress_intensity(geometry_factor: f64, stress: f64, crack_length: f64) -> f64 {
    geometry_factor * stress * (PI * crack_length).sqrt()
}

/// Critical crack length for unstable fracture
///
/// # Formula
/// - a_c = (1/π)·(K_IC / (Y·σ))²
#[inline]
pub fn critical_crack_length(k_ic: f64, stress: f64, geometry_factor: f64) -> f64 {
    (1.0 / PI) * (k_ic / (geometry_factor * stress)).powi(2)
}

/// Remote stress at which a crack of length `a` becomes critical
///
/// # Formula
/// - σ_c = K_IC / (Y·√(π·a))
#[inline]
pub fn critical_stress(k_ic: f64, crack_length: f64, geometry_factor: f64) -> f64 {
    k_ic / (geometry_factor * (PI * crack_length).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_infinite_plate_k1() {
        let k = stress_intensity(1.0, 100e6, 0.01);
        assert_relative_eq!(k, 100e6 * (PI * 0.01).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_critical_crack_length() {
        // K_IC = 50 MPa√m, σ = 200 MPa → a_c = (1/π)(0.25)² ≈ 19.9 mm
        let a_c = critical_crack_length(50e6, 200e6, 1.0);
        assert_relative_eq!(a_c, 0.0625 / PI, max_relative = 1e-12);
    }

    #[test]
    fn test_critical_stress_inverts_critical_length() {
        let a_c = critical_crack_length(50e6, 200e6, 1.12);
        let sigma = critical_stress(50e6, a_c, 1.12);
        assert_relative_eq!(sigma, 200e6, max_relative = 1e-12);
    }
}
