//! # J-Integral Calculation
//!
//! Converts a linear-elastic stress intensity into the equivalent J-integral
//! and, when a yield strength is supplied, the crack tip opening displacement.

use serde::{Deserialize, Serialize};

use crate::equations::epfm::{self, StressState};
use crate::errors::{require_positive, GriffithError, GriffithResult};

/// Default Poisson's ratio for metals
pub const DEFAULT_POISSON_RATIO: f64 = 0.3;

fn default_poisson_ratio() -> f64 {
    DEFAULT_POISSON_RATIO
}

fn default_constraint_factor() -> f64 {
    1.0
}

/// Input parameters for a J-integral calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Weld toe",
///   "k_i": 50e6,
///   "youngs_modulus": 200e9,
///   "stress_state": "PlaneStrain"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JIntegralInput {
    /// User label for this calculation
    pub label: String,

    /// Stress intensity K_I (Pa·√m)
    pub k_i: f64,

    /// Young's modulus E (Pa)
    pub youngs_modulus: f64,

    /// Poisson's ratio ν (only used for plane strain)
    #[serde(default = "default_poisson_ratio")]
    pub poisson_ratio: f64,

    #[serde(default)]
    pub stress_state: StressState,

    /// Yield strength σ_y (Pa); enables the CTOD result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_strength: Option<f64>,

    /// CTOD constraint factor m (1.0 to 2.0)
    #[serde(default = "default_constraint_factor")]
    pub constraint_factor: f64,
}

impl JIntegralInput {
    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        require_positive("k_i", self.k_i)?;
        require_positive("youngs_modulus", self.youngs_modulus)?;
        if !(0.0..0.5).contains(&self.poisson_ratio) {
            return Err(GriffithError::invalid_input(
                "poisson_ratio",
                self.poisson_ratio.to_string(),
                "Poisson's ratio must be in [0, 0.5)",
            ));
        }
        if let Some(sy) = self.yield_strength {
            require_positive("yield_strength", sy)?;
        }
        require_positive("constraint_factor", self.constraint_factor)?;
        Ok(())
    }
}

/// Results from a J-integral calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JIntegralResult {
    /// J-integral (J/m²)
    pub j_integral: f64,

    /// Effective modulus E' used (Pa)
    pub effective_modulus: f64,

    /// Crack tip opening displacement δ (m), when yield strength is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctod: Option<f64>,
}

/// Calculate J (and optionally CTOD) from K_I.
pub fn calculate(input: &JIntegralInput) -> GriffithResult<JIntegralResult> {
    input.validate()?;

    let effective_modulus = epfm::effective_modulus(input.youngs_modulus, input.poisson_ratio, input.stress_state);
    let j_integral = epfm::j_integral(input.k_i, input.youngs_modulus, input.poisson_ratio, input.stress_state);
    let ctod = input
        .yield_strength
        .map(|sy| epfm::ctod(input.k_i, sy, input.youngs_modulus, input.constraint_factor));

    Ok(JIntegralResult {
        j_integral,
        effective_modulus,
        ctod,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{ "label": "J", "k_i": 50e6, "youngs_modulus": 200e9 }"#;
        let input: JIntegralInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.poisson_ratio, DEFAULT_POISSON_RATIO);
        assert_eq!(input.stress_state, StressState::PlaneStress);
        assert_eq!(input.constraint_factor, 1.0);

        let result = calculate(&input).unwrap();
        assert_relative_eq!(result.j_integral, 12_500.0, max_relative = 1e-12);
        assert!(result.ctod.is_none());
    }

    #[test]
    fn test_plane_strain_with_ctod() {
        let input = JIntegralInput {
            label: "J".to_string(),
            k_i: 50e6,
            youngs_modulus: 200e9,
            poisson_ratio: 0.3,
            stress_state: StressState::PlaneStrain,
            yield_strength: Some(350e6),
            constraint_factor: 2.0,
        };
        let result = calculate(&input).unwrap();
        assert_relative_eq!(result.effective_modulus, 200e9 / 0.91, max_relative = 1e-12);
        assert_relative_eq!(result.ctod.unwrap(), 2.5e15 / (2.0 * 350e6 * 200e9), max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_poisson_ratio() {
        let input = JIntegralInput {
            label: "J".to_string(),
            k_i: 50e6,
            youngs_modulus: 200e9,
            poisson_ratio: 0.5,
            stress_state: StressState::PlaneStrain,
            yield_strength: None,
            constraint_factor: 1.0,
        };
        assert!(calculate(&input).is_err());
    }
}
