//! # Fracture Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, GriffithError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`fatigue`] - Paris-law fatigue crack growth (cycles vs. crack length)
//! - [`stress_intensity`] - Mode I K for standard specimens
//! - [`j_integral`] - J-integral and CTOD from K
//! - [`r_curve`] - R-curve tearing instability

pub mod fatigue;
pub mod j_integral;
pub mod r_curve;
pub mod stress_intensity;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::GriffithResult;

// Re-export commonly used types
pub use fatigue::{
    CrackLengthBounds, FatigueInput, FatigueResult, GrowthSample, GrowthSimulator, IntegrationConfig,
    LoadingCondition, MaterialLawParameters,
};
pub use j_integral::{JIntegralInput, JIntegralResult};
pub use r_curve::{RCurveInput, RCurveResult};
pub use stress_intensity::{StressIntensityInput, StressIntensityResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while keeping type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Paris-law crack growth
    FatigueGrowth(FatigueInput),
    /// Stress intensity for a specimen
    StressIntensity(StressIntensityInput),
    /// J-integral / CTOD from K
    JIntegral(JIntegralInput),
    /// R-curve instability
    RCurve(RCurveInput),
}

/// Results matching [`CalculationItem`] variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    FatigueGrowth(FatigueResult),
    StressIntensity(StressIntensityResult),
    JIntegral(JIntegralResult),
    RCurve(RCurveResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::FatigueGrowth(f) => &f.label,
            CalculationItem::StressIntensity(s) => &s.label,
            CalculationItem::JIntegral(j) => &j.label,
            CalculationItem::RCurve(r) => &r.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::FatigueGrowth(_) => "FatigueGrowth",
            CalculationItem::StressIntensity(_) => "StressIntensity",
            CalculationItem::JIntegral(_) => "JIntegral",
            CalculationItem::RCurve(_) => "RCurve",
        }
    }

    /// Run the calculation this item describes.
    pub fn run(&self) -> GriffithResult<CalculationOutput> {
        debug!("Running {} calculation '{}'", self.calc_type(), self.label());
        Ok(match self {
            CalculationItem::FatigueGrowth(input) => CalculationOutput::FatigueGrowth(fatigue::calculate(input)?),
            CalculationItem::StressIntensity(input) => {
                CalculationOutput::StressIntensity(stress_intensity::calculate(input)?)
            }
            CalculationItem::JIntegral(input) => CalculationOutput::JIntegral(j_integral::calculate(input)?),
            CalculationItem::RCurve(input) => CalculationOutput::RCurve(r_curve::calculate(input)?),
        })
    }
}
