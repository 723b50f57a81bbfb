//! # R-Curve Stability Analysis
//!
//! Finds the stress at which stable tearing turns unstable for a material with
//! a rising resistance curve R(Δa), using the J-integral driving force of a
//! through crack in a wide plate.
//!
//! ## Instability Condition
//!
//! With `J = (Y·σ)²·π·a / E` and Y treated as constant:
//!
//! 1. `J(a) = R(Δa)`
//! 2. `dJ/da = dR/da`
//!
//! Eliminating σ gives `(a₀ + Δa)·dR/da = R(Δa)`. The crack extension is
//! found by sweeping Δa and taking the first sign change of the residual; the
//! critical stress then follows from condition 1.
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::calculations::r_curve::{find_instability, ResistanceCurve};
//!
//! let curve = ResistanceCurve::default(); // R = 150 + 400·√Δa  kJ/m²
//! let point = find_instability(&curve, 0.05, 200e9, 1.0).unwrap().unwrap();
//!
//! assert!(point.critical_stress > 400e6 && point.critical_stress < 500e6);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, GriffithError, GriffithResult};

/// Smallest crack extension in the sweep (m)
pub const SWEEP_START: f64 = 1e-5;
/// Largest crack extension in the sweep (m)
pub const SWEEP_END: f64 = 0.1;
/// Number of evenly spaced sweep points
pub const SWEEP_POINTS: usize = 1000;
/// Step for the central-difference slope dR/da (m)
pub const SLOPE_STEP: f64 = 1e-6;

/// Material crack growth resistance curve, R in J/m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResistanceCurve {
    /// R(Δa) = initial + coefficient · Δa^exponent
    PowerLaw {
        initial: f64,
        coefficient: f64,
        exponent: f64,
    },
}

impl Default for ResistanceCurve {
    /// Typical ductile steel J-R curve: R = 150 + 400·√Δa  kJ/m²
    fn default() -> Self {
        ResistanceCurve::PowerLaw {
            initial: 150e3,
            coefficient: 400e3,
            exponent: 0.5,
        }
    }
}

impl ResistanceCurve {
    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        match *self {
            ResistanceCurve::PowerLaw { initial, coefficient, exponent } => {
                if !initial.is_finite() || initial < 0.0 {
                    return Err(GriffithError::invalid_input(
                        "initial",
                        initial.to_string(),
                        "Initiation toughness must be finite and non-negative",
                    ));
                }
                require_positive("coefficient", coefficient)?;
                require_positive("exponent", exponent)?;
            }
        }
        Ok(())
    }

    /// Resistance at crack extension Δa
    pub fn resistance(&self, delta_a: f64) -> f64 {
        match *self {
            ResistanceCurve::PowerLaw { initial, coefficient, exponent } => {
                initial + coefficient * delta_a.powf(exponent)
            }
        }
    }

    /// Central-difference slope dR/da
    pub fn slope(&self, delta_a: f64) -> f64 {
        (self.resistance(delta_a + SLOPE_STEP) - self.resistance(delta_a - SLOPE_STEP)) / (2.0 * SLOPE_STEP)
    }
}

/// The tangency point between driving force and resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstabilityPoint {
    /// Crack extension at instability Δa_c (m)
    pub critical_extension: f64,

    /// Crack length at instability a₀ + Δa_c (m)
    pub critical_crack_length: f64,

    /// Resistance at instability (J/m²)
    pub critical_resistance: f64,

    /// Applied stress that drives unstable tearing (Pa)
    pub critical_stress: f64,
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fn validate_plate(initial_crack: f64, youngs_modulus: f64, geometry_factor: f64) -> GriffithResult<()> {
    require_positive("initial_crack", initial_crack)?;
    require_positive("youngs_modulus", youngs_modulus)?;
    require_positive("geometry_factor", geometry_factor)?;
    Ok(())
}

/// Applied J for a crack of length `a` under stress σ: `(Y·σ)²·π·a / E`
pub fn applied_j(stress: f64, crack_length: f64, youngs_modulus: f64, geometry_factor: f64) -> f64 {
    (geometry_factor * stress).powi(2) * PI * crack_length / youngs_modulus
}

/// Locate the instability point.
///
/// # Returns
///
/// * `Ok(Some(point))` - instability found within the sweep range
/// * `Ok(None)` - stable tearing over the whole sweep range
/// * `Err(GriffithError::InvalidInput)` - invalid plate or curve parameters
pub fn find_instability(
    curve: &ResistanceCurve,
    initial_crack: f64,
    youngs_modulus: f64,
    geometry_factor: f64,
) -> GriffithResult<Option<InstabilityPoint>> {
    curve.validate()?;
    validate_plate(initial_crack, youngs_modulus, geometry_factor)?;

    let spacing = (SWEEP_END - SWEEP_START) / (SWEEP_POINTS - 1) as f64;
    let residual = |delta_a: f64| (initial_crack + delta_a) * curve.slope(delta_a) - curve.resistance(delta_a);

    let crossing = (0..SWEEP_POINTS - 1).find(|&i| {
        let here = SWEEP_START + i as f64 * spacing;
        let next = SWEEP_START + (i + 1) as f64 * spacing;
        sign(residual(here)) != sign(residual(next))
    });

    let Some(i) = crossing else {
        return Ok(None);
    };

    let critical_extension = SWEEP_START + i as f64 * spacing;
    let critical_resistance = curve.resistance(critical_extension);
    let critical_crack_length = initial_crack + critical_extension;
    let critical_stress = (critical_resistance * youngs_modulus
        / (geometry_factor.powi(2) * PI * critical_crack_length))
        .sqrt();

    Ok(Some(InstabilityPoint {
        critical_extension,
        critical_crack_length,
        critical_resistance,
        critical_stress,
    }))
}

/// One point of an R-curve stability diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityPoint {
    /// Crack extension Δa (m)
    pub delta_a: f64,
    /// Material resistance R(Δa) (J/m²)
    pub resistance: f64,
    /// Applied J at the critical stress (J/m²)
    pub applied_j: f64,
}

/// Resistance and driving-force curves over `[0, 2·Δa_c]` for plotting.
pub fn stability_diagram(
    curve: &ResistanceCurve,
    point: &InstabilityPoint,
    initial_crack: f64,
    youngs_modulus: f64,
    geometry_factor: f64,
    samples: usize,
) -> Vec<StabilityPoint> {
    let samples = samples.max(2);
    let spacing = 2.0 * point.critical_extension / (samples - 1) as f64;

    (0..samples)
        .map(|i| {
            let delta_a = i as f64 * spacing;
            StabilityPoint {
                delta_a,
                resistance: curve.resistance(delta_a),
                applied_j: applied_j(
                    point.critical_stress,
                    initial_crack + delta_a,
                    youngs_modulus,
                    geometry_factor,
                ),
            }
        })
        .collect()
}

// ============================================================================
// Calculation API
// ============================================================================

fn default_youngs_modulus() -> f64 {
    200e9
}

fn default_geometry_factor() -> f64 {
    1.0
}

/// Input parameters for an R-curve stability calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pipe seam",
///   "initial_crack": 0.05,
///   "youngs_modulus": 200e9,
///   "geometry_factor": 1.0,
///   "resistance": { "type": "PowerLaw", "initial": 150e3, "coefficient": 400e3, "exponent": 0.5 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RCurveInput {
    /// User label for this calculation
    pub label: String,

    /// Initial crack length a₀ (m)
    pub initial_crack: f64,

    /// Young's modulus E (Pa)
    #[serde(default = "default_youngs_modulus")]
    pub youngs_modulus: f64,

    /// Geometry factor Y
    #[serde(default = "default_geometry_factor")]
    pub geometry_factor: f64,

    #[serde(default)]
    pub resistance: ResistanceCurve,
}

/// Results from an R-curve stability calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RCurveResult {
    /// Instability point, or `None` for stable tearing in the sweep range
    pub instability: Option<InstabilityPoint>,
}

impl RCurveResult {
    /// True when no instability was found
    pub fn is_stable(&self) -> bool {
        self.instability.is_none()
    }
}

/// Run the stability analysis.
pub fn calculate(input: &RCurveInput) -> GriffithResult<RCurveResult> {
    let instability = find_instability(
        &input.resistance,
        input.initial_crack,
        input.youngs_modulus,
        input.geometry_factor,
    )?;
    Ok(RCurveResult { instability })
}
