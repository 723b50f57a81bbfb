//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in fracture mechanics. These are
//! plain f64 newtypes so that JSON stays clean (just numbers).
//!
//! ## SI Units (Primary)
//!
//! Calculations are carried out in SI base units:
//! - Length: meters (m), with millimeters for display
//! - Stress: pascals (Pa), megapascals (MPa)
//! - Stress intensity: Pa·√m
//!
//! Paris-law coefficients are calibrated against a specific stress unit
//! (usually MPa·√m), so [`StressUnit`] lets callers state which unit a value
//! is in and convert explicitly.
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::units::{Meters, Millimeters, Megapascals, Pascals};
//!
//! let a = Meters(0.02);
//! let a_mm: Millimeters = a.into();
//! assert_eq!(a_mm.0, 20.0);
//!
//! let stress: Pascals = Megapascals(150.0).into();
//! assert_eq!(stress.0, 150.0e6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

/// Length unit selector for output (e.g., growth-curve crack lengths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Meters,
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
}

impl LengthUnit {
    /// Raw value of `length` in this unit
    pub fn express(&self, length: Meters) -> f64 {
        match self {
            LengthUnit::Meters => length.0,
            LengthUnit::Millimeters => Millimeters::from(length).0,
        }
    }

    /// Unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Millimeters => "mm",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

/// Stress unit selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StressUnit {
    Pa,
    #[default]
    MPa,
}

impl StressUnit {
    /// Read a raw value given in this unit
    pub fn to_pascals(&self, value: f64) -> Pascals {
        match self {
            StressUnit::Pa => Pascals(value),
            StressUnit::MPa => Megapascals(value).into(),
        }
    }

    /// Raw value of `stress` in this unit
    pub fn express(&self, stress: Pascals) -> f64 {
        match self {
            StressUnit::Pa => stress.0,
            StressUnit::MPa => Megapascals::from(stress).0,
        }
    }

    /// Convert a stress value expressed in `self` into `target` units
    pub fn convert(&self, value: f64, target: StressUnit) -> f64 {
        if *self == target {
            return value;
        }
        target.express(self.to_pascals(value))
    }
}

impl std::fmt::Display for StressUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StressUnit::Pa => write!(f, "Pa"),
            StressUnit::MPa => write!(f, "MPa"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let m = Meters(0.25);
        let mm: Millimeters = m.into();
        assert_eq!(mm.0, 250.0);
    }

    #[test]
    fn test_megapascals_to_pascals() {
        let pa: Pascals = Megapascals(1.5).into();
        assert_eq!(pa.0, 1.5e6);
    }

    #[test]
    fn test_stress_unit_convert() {
        assert_eq!(StressUnit::Pa.convert(150.0e6, StressUnit::MPa), 150.0);
        assert_eq!(StressUnit::MPa.convert(150.0, StressUnit::Pa), 150.0e6);
        assert_eq!(StressUnit::MPa.convert(42.0, StressUnit::MPa), 42.0);
    }

    #[test]
    fn test_length_unit_express() {
        assert_eq!(LengthUnit::Meters.express(Meters(0.25)), 0.25);
        assert_eq!(LengthUnit::Millimeters.express(Meters(0.25)), 250.0);
        assert_eq!(Meters::from(Millimeters(20.0)).0, 0.02);
    }

    #[test]
    fn test_stress_unit_roundtrip_through_pascals() {
        assert_eq!(StressUnit::MPa.to_pascals(2.5), Pascals(2.5e6));
        assert_eq!(StressUnit::MPa.express(Pascals(3.0e6)), 3.0);
        assert_eq!(StressUnit::Pa.express(Pascals(7.0)), 7.0);
    }

    #[test]
    fn test_serialization() {
        let a = Meters(0.02);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "0.02");

        assert_eq!(serde_json::to_string(&LengthUnit::Millimeters).unwrap(), "\"mm\"");
        let unit: StressUnit = serde_json::from_str("\"Pa\"").unwrap();
        assert_eq!(unit, StressUnit::Pa);
    }
}
