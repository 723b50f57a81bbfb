//! # Stress Intensity Calculation
//!
//! Mode I stress intensity for standard specimen geometries.
//!
//! ## Supported Geometries
//!
//! - Center cracked plate under remote stress (finite-width secant correction)
//! - Single edge notch bend specimen under a three-point bend load
//! - Generic crack with a user-supplied geometry factor Y
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::calculations::stress_intensity::{
//!     calculate, AppliedLoad, Specimen, StressIntensityInput,
//! };
//!
//! let input = StressIntensityInput {
//!     label: "Panel crack".to_string(),
//!     specimen: Specimen::CenterCrackedPlate { width: 0.1, crack_length: 0.02 },
//!     applied: AppliedLoad::Stress { stress: 200e6 },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.k1 > 30e6);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{geometry, lefm};
use crate::errors::{require_positive, GriffithError, GriffithResult};

/// Cracked specimen geometry.
///
/// ## JSON Example
///
/// ```json
/// { "type": "CenterCrackedPlate", "width": 0.1, "crack_length": 0.02 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Specimen {
    /// Crack with a known, constant geometry factor (Y = 1 for an infinite plate)
    Generic { geometry_factor: f64, crack_length: f64 },

    /// Center cracked tension plate. `crack_length` is the total length 2a.
    CenterCrackedPlate { width: f64, crack_length: f64 },

    /// Single edge notch bend specimen (depth `width`, thickness B, span S)
    SingleEdgeNotchBend {
        width: f64,
        thickness: f64,
        span: f64,
        crack_length: f64,
    },
}

impl Specimen {
    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        match *self {
            Specimen::Generic { geometry_factor, crack_length } => {
                require_positive("geometry_factor", geometry_factor)?;
                require_positive("crack_length", crack_length)?;
            }
            Specimen::CenterCrackedPlate { width, crack_length } => {
                require_positive("width", width)?;
                require_positive("crack_length", crack_length)?;
                if crack_length >= width {
                    return Err(GriffithError::invalid_input(
                        "crack_length",
                        crack_length.to_string(),
                        format!("Total crack length must be less than plate width {}", width),
                    ));
                }
            }
            Specimen::SingleEdgeNotchBend { width, thickness, span, crack_length } => {
                require_positive("width", width)?;
                require_positive("thickness", thickness)?;
                require_positive("span", span)?;
                require_positive("crack_length", crack_length)?;
                if crack_length >= width {
                    return Err(GriffithError::invalid_input(
                        "crack_length",
                        crack_length.to_string(),
                        format!("Crack length must be less than specimen depth {}", width),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Geometry factor Y (or f(a/W) for SENB)
    pub fn geometry_factor(&self) -> f64 {
        match *self {
            Specimen::Generic { geometry_factor, .. } => geometry_factor,
            Specimen::CenterCrackedPlate { width, crack_length } => {
                geometry::center_crack_geometry_factor(crack_length, width)
            }
            Specimen::SingleEdgeNotchBend { width, crack_length, .. } => {
                geometry::senb_shape_function(crack_length, width)
            }
        }
    }

    /// Crack length `a` used in K (half-length for center cracks)
    pub fn effective_crack_length(&self) -> f64 {
        match *self {
            Specimen::Generic { crack_length, .. } => crack_length,
            Specimen::CenterCrackedPlate { crack_length, .. } => crack_length / 2.0,
            Specimen::SingleEdgeNotchBend { crack_length, .. } => crack_length,
        }
    }

    /// Specimen type as a string
    pub fn specimen_type(&self) -> &'static str {
        match self {
            Specimen::Generic { .. } => "Generic",
            Specimen::CenterCrackedPlate { .. } => "CCT",
            Specimen::SingleEdgeNotchBend { .. } => "SENB",
        }
    }
}

/// How the specimen is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AppliedLoad {
    /// Remote tensile stress (Pa)
    Stress { stress: f64 },
    /// Concentrated bending load (N)
    Force { load: f64 },
}

/// Input parameters for a stress intensity calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressIntensityInput {
    /// User label for this calculation
    pub label: String,

    pub specimen: Specimen,

    pub applied: AppliedLoad,
}

/// Results from a stress intensity calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressIntensityResult {
    /// Mode I stress intensity K_I (Pa·√m)
    pub k1: f64,

    /// Geometry factor used (f(a/W) for SENB)
    pub geometry_factor: f64,

    /// Crack length entering the K formula (m)
    pub effective_crack_length: f64,
}

impl StressIntensityResult {
    /// Compare against a fracture toughness: K_I / K_IC
    pub fn toughness_ratio(&self, k_ic: f64) -> f64 {
        self.k1 / k_ic
    }
}

/// Calculate K_I for the given specimen and load.
///
/// # Returns
///
/// * `Ok(StressIntensityResult)` - Calculation results
/// * `Err(GriffithError::InvalidInput)` - Invalid dimensions or load
/// * `Err(GriffithError::CalculationFailed)` - Load type not defined for the specimen
pub fn calculate(input: &StressIntensityInput) -> GriffithResult<StressIntensityResult> {
    input.specimen.validate()?;

    let geometry_factor = input.specimen.geometry_factor();
    let a = input.specimen.effective_crack_length();

    let k1 = match (input.specimen, input.applied) {
        (Specimen::SingleEdgeNotchBend { width, thickness, span, crack_length }, AppliedLoad::Force { load }) => {
            require_positive("load", load)?;
            geometry::senb_stress_intensity(load, span, thickness, width, crack_length)
        }
        (Specimen::SingleEdgeNotchBend { .. }, AppliedLoad::Stress { .. }) => {
            return Err(GriffithError::calculation_failed(
                "StressIntensity",
                "SENB stress intensity is defined from the applied load, not remote stress",
            ));
        }
        (_, AppliedLoad::Stress { stress }) => {
            require_positive("stress", stress)?;
            lefm::stress_intensity(geometry_factor, stress, a)
        }
        (specimen, AppliedLoad::Force { load }) => {
            return Err(GriffithError::invalid_input(
                "applied",
                load.to_string(),
                format!("{} specimens take a remote stress, not a force", specimen.specimen_type()),
            ));
        }
    };

    Ok(StressIntensityResult {
        k1,
        geometry_factor,
        effective_crack_length: a,
    })
}
