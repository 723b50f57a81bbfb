//! # Fracture Mechanics Equations
//!
//! Closed-form fracture mechanics relations used by the calculations.
//! Keeping them in one place makes them easy to check against references and
//! reuse across calculation types.
//!
//! ## Modules
//!
//! - [`lefm`] - Stress intensity and critical crack size (linear-elastic)
//! - [`geometry`] - Finite-width correction factors for standard specimens
//! - [`epfm`] - J-integral and CTOD (elastic-plastic, from K)
//!
//! ## Conventions
//!
//! - SI units throughout: m, Pa, Pa·√m, J/m²
//! - Mode I (opening) loading only
//! - Center crack formulas take the total length 2a; the others take a

pub mod epfm;
pub mod geometry;
pub mod lefm;

// Re-export commonly used items
pub use epfm::{ctod, effective_modulus, j_integral, StressState};
pub use geometry::{center_crack_geometry_factor, senb_shape_function, senb_stress_intensity};
pub use lefm::{critical_crack_length, critical_stress, stress_intensity};
