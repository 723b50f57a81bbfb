//! # griffith_core - Fracture Mechanics Calculation Engine
//!
//! `griffith_core` is the computational heart of Griffith: fatigue crack
//! growth, stress intensity, elastic-plastic fracture parameters and R-curve
//! stability. All inputs and outputs are JSON-serializable.
//!
//! Every function is a plain call from inputs to a result or a
//! [`GriffithError`]; nothing is cached between calls. Degenerate numerics
//! (zero or non-finite growth rates, overflowing cycle counts) come back as
//! typed errors instead of NaN.
//!
//! ## Quick Start
//!
//! ```rust
//! use griffith_core::calculations::fatigue::{
//!     calculate, CrackLengthBounds, FatigueInput, IntegrationConfig, LoadingCondition,
//!     MaterialLawParameters,
//! };
//! use griffith_core::units::StressUnit;
//!
//! let input = FatigueInput {
//!     label: "Edge crack".to_string(),
//!     law: MaterialLawParameters::new(1.5e-11, 3.0),
//!     loading: LoadingCondition::new(150.0, 1.12),
//!     bounds: CrackLengthBounds::new(0.002, 0.02),
//!     config: IntegrationConfig::default(),
//!     stress_unit: StressUnit::MPa,
//!     law_stress_unit: StressUnit::MPa,
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("Cycles to failure: {:.0}", result.total_cycles);
//! ```
//!
//! ## Layout
//!
//! - [`calculations`] - runnable calculations: fatigue growth, K_I, J/CTOD, R-curve
//! - [`equations`] - bare LEFM, geometry and EPFM formulas
//! - [`materials`] - presets and leak-before-break checks
//! - [`units`] - length and stress newtypes
//! - [`errors`] - [`GriffithError`] and its codes
//! - [`project`] - `.grf` project contents
//! - [`file_io`] - saving, loading and locking project files

pub mod calculations;
pub mod equations;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod materials;
pub mod project;
pub mod units;

pub use calculations::fatigue::{simulate, GrowthSample, GrowthSimulator};
pub use errors::{GriffithError, GriffithResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_project, save_project, ProjectLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
