//! # Materials Database
//!
//! Fracture properties for common structural alloys, plus lookups for
//! critical crack size and leak-before-break checks.
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::materials::MaterialPreset;
//!
//! let steel = MaterialPreset::Steel.material();
//! let a_c = steel.critical_crack_length(200e6, 1.0).unwrap();
//! assert!(a_c > 0.019 && a_c < 0.020);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::lefm;
use crate::errors::{require_positive, GriffithError, GriffithResult};

/// Fracture-relevant material properties (SI units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractureMaterial {
    /// Display name
    pub name: String,

    /// Young's modulus E (Pa)
    pub youngs_modulus_pa: f64,

    /// Yield strength σ_y (Pa)
    pub yield_strength_pa: f64,

    /// Plane-strain fracture toughness K_IC (Pa·√m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_ic: Option<f64>,

    /// Critical J-integral J_IC (J/m²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j_ic: Option<f64>,
}

impl FractureMaterial {
    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        require_positive("youngs_modulus_pa", self.youngs_modulus_pa)?;
        require_positive("yield_strength_pa", self.yield_strength_pa)?;
        if let Some(k_ic) = self.k_ic {
            require_positive("k_ic", k_ic)?;
        }
        if let Some(j_ic) = self.j_ic {
            require_positive("j_ic", j_ic)?;
        }
        Ok(())
    }

    /// Override the fracture toughness
    pub fn with_k_ic(mut self, k_ic: f64) -> Self {
        self.k_ic = Some(k_ic);
        self
    }

    /// Override the yield strength
    pub fn with_yield_strength(mut self, yield_strength_pa: f64) -> Self {
        self.yield_strength_pa = yield_strength_pa;
        self
    }

    /// Critical crack length a_c = (1/π)·(K_IC/(Y·σ))² in meters.
    ///
    /// Fails with `MissingField` when K_IC is not defined for this material.
    pub fn critical_crack_length(&self, stress: f64, geometry_factor: f64) -> GriffithResult<f64> {
        let k_ic = self.k_ic.ok_or_else(|| GriffithError::missing_field("k_ic"))?;
        require_positive("k_ic", k_ic)?;
        require_positive("stress", stress)?;
        require_positive("geometry_factor", geometry_factor)?;
        Ok(lefm::critical_crack_length(k_ic, stress, geometry_factor))
    }

    /// Leak-before-break check for a through-wall crack in a wall of the
    /// given thickness: the crack leaks before it can run when a_c exceeds
    /// the wall thickness.
    pub fn leaks_before_break(&self, stress: f64, wall_thickness: f64) -> GriffithResult<bool> {
        require_positive("wall_thickness", wall_thickness)?;
        let a_c = self.critical_crack_length(stress, 1.0)?;
        Ok(a_c > wall_thickness)
    }
}

/// Built-in material presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialPreset {
    /// Structural steel
    #[serde(rename = "steel")]
    Steel,
    /// Aluminum 2024-T3
    #[serde(rename = "al-2024-t3")]
    Aluminum2024T3,
    /// Titanium Ti-6Al-4V
    #[serde(rename = "ti-6al-4v")]
    Titanium6Al4V,
}

impl MaterialPreset {
    /// All presets for selection lists
    pub const ALL: [MaterialPreset; 3] = [
        MaterialPreset::Steel,
        MaterialPreset::Aluminum2024T3,
        MaterialPreset::Titanium6Al4V,
    ];

    /// Default property set for this preset
    pub fn material(&self) -> FractureMaterial {
        let (name, e, sy, k_ic) = match self {
            MaterialPreset::Steel => ("Steel", 200e9, 350e6, 50e6),
            MaterialPreset::Aluminum2024T3 => ("Aluminum 2024-T3", 73e9, 300e6, 25e6),
            MaterialPreset::Titanium6Al4V => ("Titanium Ti-6Al-4V", 113e9, 830e6, 55e6),
        };
        FractureMaterial {
            name: name.to_string(),
            youngs_modulus_pa: e,
            yield_strength_pa: sy,
            k_ic: Some(k_ic),
            j_ic: None,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> GriffithResult<Self> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "steel" => Ok(MaterialPreset::Steel),
            "al-2024-t3" | "aluminum" | "aluminum-2024-t3" | "2024-t3" => Ok(MaterialPreset::Aluminum2024T3),
            "ti-6al-4v" | "titanium" | "ti64" => Ok(MaterialPreset::Titanium6Al4V),
            _ => Err(GriffithError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.material().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_preset_values() {
        let al = MaterialPreset::Aluminum2024T3.material();
        assert_eq!(al.youngs_modulus_pa, 73e9);
        assert_eq!(al.k_ic, Some(25e6));
        assert!(al.validate().is_ok());
    }

    #[test]
    fn test_critical_crack_length() {
        let steel = MaterialPreset::Steel.material();
        let a_c = steel.critical_crack_length(200e6, 1.0).unwrap();
        assert_relative_eq!(a_c, (1.0 / PI) * 0.25_f64.powi(2), max_relative = 1e-12);
    }

    #[test]
    fn test_missing_toughness() {
        let mut mat = MaterialPreset::Steel.material();
        mat.k_ic = None;
        let err = mat.critical_crack_length(200e6, 1.0).unwrap_err();
        assert_eq!(err, GriffithError::missing_field("k_ic"));
    }

    #[test]
    fn test_leak_before_break() {
        // Vessel r = 1 m, t = 10 mm, p = 2 MPa → hoop stress 200 MPa
        let hoop_stress = 2e6 * 1.0 / 0.01;
        let tough = MaterialPreset::Steel.material().with_k_ic(80e6);
        assert!(tough.leaks_before_break(hoop_stress, 0.01).unwrap());

        let brittle = MaterialPreset::Steel.material().with_k_ic(10e6);
        assert!(!brittle.leaks_before_break(hoop_stress, 0.01).unwrap());
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(MaterialPreset::from_str_flexible("Titanium").unwrap(), MaterialPreset::Titanium6Al4V);
        assert_eq!(MaterialPreset::from_str_flexible("al_2024_t3").unwrap(), MaterialPreset::Aluminum2024T3);
        assert!(MaterialPreset::from_str_flexible("unobtanium").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MaterialPreset::Aluminum2024T3).unwrap();
        assert_eq!(json, "\"al-2024-t3\"");

        let steel = MaterialPreset::Steel.material();
        let json = serde_json::to_string(&steel).unwrap();
        assert!(!json.contains("j_ic"));
        let roundtrip: FractureMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, steel);
    }
}
