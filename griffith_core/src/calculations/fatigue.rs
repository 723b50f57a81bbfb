//! # Fatigue Crack Growth (Paris' Law)
//!
//! Predicts how many load cycles it takes to grow a crack from an initial to
//! a final length under constant-amplitude loading.
//!
//! ## Model
//!
//! - Stress-intensity range: `ΔK(a) = Y · Δσ · √(π·a)`
//! - Growth rate: `da/dN = C · ΔK^m`
//! - Cycles per length increment: `ΔN = Δa / (da/dN)`, with the rate taken at
//!   the left edge of each sub-interval (forward Riemann sum, fixed step).
//!
//! The left-edge rule over-predicts life for large steps or steep exponents.
//! It is kept as the curve generator; [`closed_form_cycles`] gives the exact
//! integral for constant `Y` so callers can see the discretization error.
//!
//! ## Assumptions
//!
//! - Constant geometry factor over the whole interval
//! - Single crack, mode I, constant stress range
//! - `C` is calibrated in the same stress unit as `Δσ` (see [`FatigueInput`]
//!   for explicit conversion)
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::calculations::fatigue::{
//!     simulate, CrackLengthBounds, IntegrationConfig, LoadingCondition, MaterialLawParameters,
//! };
//!
//! let law = MaterialLawParameters::new(1e-12, 3.0);
//! let loading = LoadingCondition::new(100.0, 1.0);
//! let bounds = CrackLengthBounds::new(0.005, 0.02);
//!
//! let samples = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap();
//!
//! assert_eq!(samples.len(), 51);
//! assert_eq!(samples[0].cycles, 0.0);
//! assert_eq!(samples[50].crack_length, 0.02);
//! ```

use std::f64::consts::PI;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, GriffithError, GriffithResult};
use crate::units::{LengthUnit, Meters, StressUnit};

/// Default number of integration sub-intervals
pub const DEFAULT_STEP_COUNT: usize = 50;

/// Paris-law constants `C` and `m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialLawParameters {
    /// Growth-rate coefficient C (length per cycle per ΔK^m)
    pub c: f64,

    /// Growth-rate exponent m (typically 2 to 4 for metals)
    pub m: f64,
}

impl MaterialLawParameters {
    pub fn new(c: f64, m: f64) -> Self {
        MaterialLawParameters { c, m }
    }

    /// Validate input parameters.
    ///
    /// An exponent of zero or below makes the growth rate non-increasing in ΔK,
    /// which the fixed-step integration cannot represent, so it is rejected.
    pub fn validate(&self) -> GriffithResult<()> {
        require_positive("c", self.c)?;
        if !self.m.is_finite() {
            return Err(GriffithError::invalid_input("m", self.m.to_string(), "Exponent must be finite"));
        }
        if self.m <= 0.0 {
            return Err(GriffithError::invalid_input(
                "m",
                self.m.to_string(),
                "Exponent must be positive for a growing crack",
            ));
        }
        Ok(())
    }

    /// Crack growth rate da/dN = C · ΔK^m
    pub fn growth_rate(&self, delta_k: f64) -> f64 {
        self.c * delta_k.powf(self.m)
    }
}

/// Cyclic loading applied to the cracked plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingCondition {
    /// Stress range Δσ = σ_max − σ_min
    pub stress_range: f64,

    /// Geometry correction factor Y (dimensionless, typically 0.5 to 3)
    pub geometry_factor: f64,
}

impl LoadingCondition {
    pub fn new(stress_range: f64, geometry_factor: f64) -> Self {
        LoadingCondition {
            stress_range,
            geometry_factor,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        require_positive("stress_range", self.stress_range)?;
        require_positive("geometry_factor", self.geometry_factor)?;
        Ok(())
    }

    /// Stress-intensity range ΔK = Y · Δσ · √(π·a)
    pub fn stress_intensity_range(&self, crack_length: f64) -> f64 {
        self.geometry_factor * self.stress_range * (PI * crack_length).sqrt()
    }
}

/// Crack length interval to integrate over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackLengthBounds {
    /// Initial crack length a₀
    pub initial_length: f64,

    /// Final crack length a_f
    pub final_length: f64,
}

impl CrackLengthBounds {
    pub fn new(initial_length: f64, final_length: f64) -> Self {
        CrackLengthBounds {
            initial_length,
            final_length,
        }
    }

    /// Validate input parameters (0 < a₀ < a_f).
    pub fn validate(&self) -> GriffithResult<()> {
        require_positive("initial_length", self.initial_length)?;
        require_positive("final_length", self.final_length)?;
        if self.initial_length >= self.final_length {
            return Err(GriffithError::invalid_input(
                "final_length",
                self.final_length.to_string(),
                format!(
                    "Final crack length must exceed initial length {}",
                    self.initial_length
                ),
            ));
        }
        Ok(())
    }

    /// Crack extension a_f − a₀
    pub fn extension(&self) -> f64 {
        self.final_length - self.initial_length
    }
}

/// Resolution of the fixed-step integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Number of equal sub-intervals (≥ 1)
    pub step_count: usize,
}

impl IntegrationConfig {
    pub fn new(step_count: usize) -> Self {
        IntegrationConfig { step_count }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> GriffithResult<()> {
        if self.step_count < 1 {
            return Err(GriffithError::invalid_input(
                "step_count",
                self.step_count.to_string(),
                "At least one integration step is required",
            ));
        }
        Ok(())
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        IntegrationConfig {
            step_count: DEFAULT_STEP_COUNT,
        }
    }
}

/// One point on the crack growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthSample {
    /// Accumulated load cycles N
    pub cycles: f64,

    /// Crack length a after `cycles`
    pub crack_length: f64,
}

/// Fixed-step integrator for the Paris-law growth ODE.
///
/// Holds only its step configuration; every call to
/// [`simulate`](GrowthSimulator::simulate) is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthSimulator {
    pub config: IntegrationConfig,
}

impl GrowthSimulator {
    pub fn new(config: IntegrationConfig) -> Self {
        GrowthSimulator { config }
    }

    /// Integrate from a₀ to a_f and return `step_count + 1` samples.
    ///
    /// The first sample is `(0, a₀)`, the last sample's crack length is
    /// exactly `a_f`, and intermediate lengths are `a₀ + i·Δa`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<GrowthSample>)` - ordered samples, increasing in both coordinates
    /// * `Err(GriffithError::InvalidInput)` - an input violates its invariant (checked up front)
    /// * `Err(GriffithError::DegenerateRate)` - the rate law is zero, negative or
    ///   non-finite at some step, or a cycle increment is too small to advance
    ///   the running total (first offending step is reported)
    pub fn simulate(
        &self,
        law: &MaterialLawParameters,
        loading: &LoadingCondition,
        bounds: &CrackLengthBounds,
    ) -> GriffithResult<Vec<GrowthSample>> {
        law.validate()?;
        loading.validate()?;
        bounds.validate()?;
        self.config.validate()?;

        let steps = self.config.step_count;
        let a0 = bounds.initial_length;
        let delta_a = bounds.extension() / steps as f64;

        // Consecutive lengths must stay distinct after rounding.
        if delta_a <= 4.0 * f64::EPSILON * bounds.final_length {
            return Err(GriffithError::invalid_input(
                "step_count",
                steps.to_string(),
                "Step size is below floating-point resolution for this crack length interval",
            ));
        }

        debug!(
            "Simulating growth: C={} m={} Δσ={} Y={} a0={} af={} steps={}",
            law.c, law.m, loading.stress_range, loading.geometry_factor, a0, bounds.final_length, steps
        );

        let mut samples = Vec::with_capacity(steps + 1);
        samples.push(GrowthSample {
            cycles: 0.0,
            crack_length: a0,
        });

        let total_cycles = (0..steps).try_fold(0.0_f64, |cycles, step| {
            let a = a0 + step as f64 * delta_a;
            let rate = law.growth_rate(loading.stress_intensity_range(a));

            if !rate.is_finite() || rate <= 0.0 {
                warn!("Degenerate growth rate {} at step {} (a = {})", rate, step, a);
                return Err(GriffithError::degenerate_rate(step, a, rate));
            }

            let next = cycles + delta_a / rate;
            if !next.is_finite() {
                warn!("Cycle count overflowed at step {} (a = {}, rate = {})", step, a, rate);
                return Err(GriffithError::degenerate_rate(step, a, rate));
            }
            // Increment lost in the running total: N would stall.
            if next <= cycles {
                warn!("Cycle increment vanished at step {} (a = {}, rate = {})", step, a, rate);
                return Err(GriffithError::degenerate_rate(step, a, rate));
            }

            let crack_length = if step + 1 == steps {
                bounds.final_length
            } else {
                a0 + (step + 1) as f64 * delta_a
            };
            samples.push(GrowthSample {
                cycles: next,
                crack_length,
            });
            Ok(next)
        })?;

        debug!("Growth simulation finished: N = {:.1} cycles", total_cycles);
        Ok(samples)
    }
}

/// Run a [`GrowthSimulator`] with the given configuration.
pub fn simulate(
    law: &MaterialLawParameters,
    loading: &LoadingCondition,
    bounds: &CrackLengthBounds,
    config: &IntegrationConfig,
) -> GriffithResult<Vec<GrowthSample>> {
    GrowthSimulator::new(*config).simulate(law, loading, bounds)
}

/// Exact cycles-to-grow for constant Y:
///
/// `N = ∫ da / (C·(Y·Δσ·√(π·a))^m)`, which is
/// `(a_f^(1−m/2) − a₀^(1−m/2)) / ((1−m/2)·C·(Y·Δσ·√π)^m)` for m ≠ 2 and
/// `ln(a_f/a₀) / (C·(Y·Δσ·√π)²)` for m = 2.
pub fn closed_form_cycles(
    law: &MaterialLawParameters,
    loading: &LoadingCondition,
    bounds: &CrackLengthBounds,
) -> GriffithResult<f64> {
    law.validate()?;
    loading.validate()?;
    bounds.validate()?;

    let k = law.c * (loading.geometry_factor * loading.stress_range * PI.sqrt()).powf(law.m);
    let exponent = 1.0 - law.m / 2.0;

    let cycles = if exponent.abs() < 1e-12 {
        (bounds.final_length / bounds.initial_length).ln() / k
    } else {
        (bounds.final_length.powf(exponent) - bounds.initial_length.powf(exponent)) / (exponent * k)
    };

    if !cycles.is_finite() || cycles <= 0.0 {
        return Err(GriffithError::calculation_failed(
            "FatigueGrowth",
            format!("Closed-form cycle count is not a finite positive number ({})", cycles),
        ));
    }
    Ok(cycles)
}

// ============================================================================
// Calculation API
// ============================================================================

/// Input parameters for a fatigue crack growth calculation.
///
/// Lengths are in meters. `loading.stress_range` is in `stress_unit`; it is
/// converted to `law_stress_unit` (the unit `C` was fitted against) before
/// integrating.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Lug bore crack",
///   "law": { "c": 1.5e-11, "m": 3.0 },
///   "loading": { "stress_range": 150e6, "geometry_factor": 1.12 },
///   "bounds": { "initial_length": 0.002, "final_length": 0.02 },
///   "config": { "step_count": 50 },
///   "stress_unit": "Pa",
///   "law_stress_unit": "MPa"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueInput {
    /// User label for this calculation
    pub label: String,

    pub law: MaterialLawParameters,

    pub loading: LoadingCondition,

    pub bounds: CrackLengthBounds,

    #[serde(default)]
    pub config: IntegrationConfig,

    /// Unit of `loading.stress_range`
    #[serde(default)]
    pub stress_unit: StressUnit,

    /// Stress unit the Paris-law coefficient is calibrated in
    #[serde(default)]
    pub law_stress_unit: StressUnit,
}

impl FatigueInput {
    /// Loading with the stress range expressed in the law's stress unit
    pub fn law_loading(&self) -> LoadingCondition {
        LoadingCondition {
            stress_range: self
                .stress_unit
                .convert(self.loading.stress_range, self.law_stress_unit),
            geometry_factor: self.loading.geometry_factor,
        }
    }
}

/// A growth-curve point ready for plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub cycles: f64,
    pub crack_length: f64,
}

/// Results from a fatigue crack growth calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueResult {
    /// Growth curve samples (meters)
    pub samples: Vec<GrowthSample>,

    /// Cycles to reach the final crack length (last sample)
    pub total_cycles: f64,

    /// Exact integral for constant Y; `None` when it is not representable
    pub closed_form_cycles: Option<f64>,

    /// (total_cycles − closed_form_cycles) / closed_form_cycles
    pub discretization_error: Option<f64>,
}

impl FatigueResult {
    /// Growth curve with crack lengths expressed in `unit`.
    pub fn curve(&self, unit: LengthUnit) -> Vec<CurvePoint> {
        self.samples
            .iter()
            .map(|s| CurvePoint {
                cycles: s.cycles,
                crack_length: unit.express(Meters(s.crack_length)),
            })
            .collect()
    }
}

/// Calculate fatigue life and the growth curve.
///
/// # Returns
///
/// * `Ok(FatigueResult)` - Calculation results
/// * `Err(GriffithError)` - If inputs are invalid or the rate law degenerates
pub fn calculate(input: &FatigueInput) -> GriffithResult<FatigueResult> {
    let loading = input.law_loading();
    let samples = simulate(&input.law, &loading, &input.bounds, &input.config)?;
    let total_cycles = samples.last().map(|s| s.cycles).unwrap_or(0.0);

    // Reference value only; the stepped curve stands on its own.
    let closed_form_cycles = match closed_form_cycles(&input.law, &loading, &input.bounds) {
        Ok(n) => Some(n),
        Err(e) => {
            debug!("No closed-form reference for '{}': {}", input.label, e);
            None
        }
    };
    let discretization_error = closed_form_cycles.map(|exact| (total_cycles - exact) / exact);

    Ok(FatigueResult {
        samples,
        total_cycles,
        closed_form_cycles,
        discretization_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_a() -> (MaterialLawParameters, LoadingCondition, CrackLengthBounds) {
        (
            MaterialLawParameters::new(1e-12, 3.0),
            LoadingCondition::new(100.0, 1.0),
            CrackLengthBounds::new(0.005, 0.02),
        )
    }

    fn run(steps: usize) -> GriffithResult<Vec<GrowthSample>> {
        let (law, loading, bounds) = scenario_a();
        simulate(&law, &loading, &bounds, &IntegrationConfig::new(steps))
    }

    #[test]
    fn test_scenario_a_curve() {
        let samples = run(50).unwrap();

        assert_eq!(samples.len(), 51);
        assert_eq!(samples[0], GrowthSample { cycles: 0.0, crack_length: 0.005 });
        assert_eq!(samples[50].crack_length, 0.02);

        let final_n = samples[50].cycles;
        assert!(final_n.is_finite() && final_n > 0.0);
        // Left-edge sum for these inputs is ~2.61e6 cycles
        assert_relative_eq!(final_n, 2.6075e6, max_relative = 1e-3);

        for pair in samples.windows(2) {
            assert!(pair[1].cycles > pair[0].cycles);
            assert!(pair[1].crack_length > pair[0].crack_length);
        }
    }

    #[test]
    fn test_sample_count_matches_steps() {
        for steps in [1, 2, 7, 50, 333] {
            assert_eq!(run(steps).unwrap().len(), steps + 1);
        }
    }

    #[test]
    fn test_lengths_are_arithmetic() {
        let samples = run(40).unwrap();
        let delta_a = (0.02 - 0.005) / 40.0;
        for (i, s) in samples.iter().enumerate() {
            assert_relative_eq!(s.crack_length, 0.005 + i as f64 * delta_a, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_doubling_steps_converges() {
        let coarse = run(50).unwrap().last().unwrap().cycles;
        let fine = run(100).unwrap().last().unwrap().cycles;
        assert!(((coarse - fine) / fine).abs() < 0.02);
    }

    #[test]
    fn test_single_step_matches_formula() {
        // Scenario E
        let (law, loading, bounds) = scenario_a();
        let samples = run(1).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0], GrowthSample { cycles: 0.0, crack_length: 0.005 });
        assert_eq!(samples[1].crack_length, 0.02);

        let dk = loading.geometry_factor * loading.stress_range * (PI * bounds.initial_length).sqrt();
        let expected = (bounds.final_length - bounds.initial_length) / (law.c * dk.powf(law.m));
        assert_relative_eq!(samples[1].cycles, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_initial_length_rejected() {
        // Scenario B
        let (law, loading, _) = scenario_a();
        let bounds = CrackLengthBounds::new(0.0, 0.02);
        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap_err();
        assert!(matches!(err, GriffithError::InvalidInput { ref field, .. } if field == "initial_length"));
    }

    #[test]
    fn test_reversed_bounds_rejected() {
        // Scenario C
        let (law, loading, _) = scenario_a();
        let bounds = CrackLengthBounds::new(0.03, 0.02);
        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let equal = CrackLengthBounds::new(0.02, 0.02);
        assert!(simulate(&law, &loading, &equal, &IntegrationConfig::default()).is_err());
    }

    #[test]
    fn test_underflowing_rate_is_degenerate() {
        // Scenario D: ΔK ≈ 1.25e-4, so ΔK^200 underflows to zero at step 0
        let law = MaterialLawParameters::new(1e-12, 200.0);
        let loading = LoadingCondition::new(1e-3, 1.0);
        let bounds = CrackLengthBounds::new(0.005, 0.02);

        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap_err();
        match err {
            GriffithError::DegenerateRate { step, crack_length, rate } => {
                assert_eq!(step, 0);
                assert_eq!(crack_length, 0.005);
                assert_eq!(rate, 0.0);
            }
            other => panic!("expected DegenerateRate, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_rate_is_degenerate() {
        let law = MaterialLawParameters::new(1.0, 400.0);
        let loading = LoadingCondition::new(1e6, 1.0);
        let bounds = CrackLengthBounds::new(0.005, 0.02);

        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap_err();
        assert!(matches!(err, GriffithError::DegenerateRate { step: 0, .. }));
    }

    #[test]
    fn test_stalled_cycle_count_is_degenerate() {
        // m = 200: after a few steps the increments vanish against N
        let law = MaterialLawParameters::new(1e-12, 200.0);
        let loading = LoadingCondition::new(100.0, 1.0);
        let bounds = CrackLengthBounds::new(0.005, 0.02);

        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::default()).unwrap_err();
        match err {
            GriffithError::DegenerateRate { step, crack_length, rate } => {
                assert!(step > 0 && step < 50);
                assert!(crack_length > 0.005 && crack_length < 0.02);
                assert!(rate.is_finite() && rate > 0.0);
            }
            other => panic!("expected DegenerateRate, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let (law, loading, bounds) = scenario_a();
        let config = IntegrationConfig::default();

        let bad_c = MaterialLawParameters::new(0.0, 3.0);
        assert!(simulate(&bad_c, &loading, &bounds, &config).is_err());

        let bad_m = MaterialLawParameters::new(1e-12, -1.0);
        assert!(simulate(&bad_m, &loading, &bounds, &config).is_err());

        let bad_stress = LoadingCondition::new(-100.0, 1.0);
        assert!(simulate(&law, &bad_stress, &bounds, &config).is_err());

        let bad_y = LoadingCondition::new(100.0, f64::NAN);
        assert!(simulate(&law, &bad_y, &bounds, &config).is_err());

        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::new(0)).unwrap_err();
        assert!(matches!(err, GriffithError::InvalidInput { ref field, .. } if field == "step_count"));
    }

    #[test]
    fn test_unresolvable_step_size_rejected() {
        let (law, loading, _) = scenario_a();
        let bounds = CrackLengthBounds::new(1.0, 1.0 + 1e-15);
        let err = simulate(&law, &loading, &bounds, &IntegrationConfig::new(1000)).unwrap_err();
        assert!(matches!(err, GriffithError::InvalidInput { ref field, .. } if field == "step_count"));
    }

    #[test]
    fn test_closed_form_m_equals_two() {
        let law = MaterialLawParameters::new(1e-11, 2.0);
        let loading = LoadingCondition::new(100.0, 1.0);
        let bounds = CrackLengthBounds::new(0.01, 0.02);

        let expected = (0.02_f64 / 0.01).ln() / (1e-11 * 100.0_f64.powi(2) * PI);
        let n = closed_form_cycles(&law, &loading, &bounds).unwrap();
        assert_relative_eq!(n, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_closed_form_m_three() {
        let (law, loading, bounds) = scenario_a();
        let term = 1e-12 * (100.0 * PI.sqrt()).powi(3);
        let expected = (-2.0 / 0.02_f64.sqrt() + 2.0 / 0.005_f64.sqrt()) / term;
        let n = closed_form_cycles(&law, &loading, &bounds).unwrap();
        assert_relative_eq!(n, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_fine_steps_approach_closed_form() {
        let (law, loading, bounds) = scenario_a();
        let exact = closed_form_cycles(&law, &loading, &bounds).unwrap();
        let fine = run(2000).unwrap().last().unwrap().cycles;
        assert_relative_eq!(fine, exact, max_relative = 1e-3);
    }

    #[test]
    fn test_calculate_converts_stress_units() {
        let input = FatigueInput {
            label: "Edge crack".to_string(),
            law: MaterialLawParameters::new(1.5e-11, 3.0),
            loading: LoadingCondition::new(150.0e6, 1.12),
            bounds: CrackLengthBounds::new(0.002, 0.02),
            config: IntegrationConfig::default(),
            stress_unit: StressUnit::Pa,
            law_stress_unit: StressUnit::MPa,
        };
        assert_eq!(input.law_loading().stress_range, 150.0);

        let result = calculate(&input).unwrap();
        assert_eq!(result.samples.len(), 51);
        let exact = result.closed_form_cycles.unwrap();
        assert_relative_eq!(exact, 77_211.6, max_relative = 1e-4);
        // Left-edge sum over-predicts life for a decreasing integrand
        assert!(result.total_cycles > exact);
        let error = result.discretization_error.unwrap();
        assert!(error > 0.0 && error < 0.1);
    }

    #[test]
    fn test_calculate_without_closed_form() {
        // (Y·Δσ·√π)² overflows while every stepped rate stays finite
        let input = FatigueInput {
            label: "Overflowing reference".to_string(),
            law: MaterialLawParameters::new(1e-12, 2.0),
            loading: LoadingCondition::new(1e154, 1.0),
            bounds: CrackLengthBounds::new(0.005, 0.02),
            config: IntegrationConfig::default(),
            stress_unit: StressUnit::MPa,
            law_stress_unit: StressUnit::MPa,
        };
        let loading = input.law_loading();
        assert!(closed_form_cycles(&input.law, &loading, &input.bounds).is_err());

        let result = calculate(&input).unwrap();
        assert_eq!(result.samples.len(), 51);
        assert!(result.total_cycles.is_finite() && result.total_cycles > 0.0);
        assert!(result.closed_form_cycles.is_none());
        assert!(result.discretization_error.is_none());
        for pair in result.samples.windows(2) {
            assert!(pair[1].cycles > pair[0].cycles);
        }
    }

    #[test]
    fn test_curve_in_millimeters() {
        let input = FatigueInput {
            label: "Curve".to_string(),
            law: MaterialLawParameters::new(1e-12, 3.0),
            loading: LoadingCondition::new(100.0, 1.0),
            bounds: CrackLengthBounds::new(0.005, 0.02),
            config: IntegrationConfig::new(10),
            stress_unit: StressUnit::MPa,
            law_stress_unit: StressUnit::MPa,
        };
        let result = calculate(&input).unwrap();
        let curve = result.curve(LengthUnit::Millimeters);

        assert_eq!(curve.len(), 11);
        assert_relative_eq!(curve[0].crack_length, 5.0, max_relative = 1e-12);
        assert_relative_eq!(curve[10].crack_length, 20.0, max_relative = 1e-12);
        assert_eq!(curve[10].cycles, result.total_cycles);
    }

    #[test]
    fn test_input_defaults_from_json() {
        let json = r#"{
            "label": "Defaults",
            "law": { "c": 1e-12, "m": 3.0 },
            "loading": { "stress_range": 100.0, "geometry_factor": 1.0 },
            "bounds": { "initial_length": 0.005, "final_length": 0.02 }
        }"#;
        let input: FatigueInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.config.step_count, DEFAULT_STEP_COUNT);
        assert_eq!(input.stress_unit, StressUnit::MPa);
        assert_eq!(input.law_stress_unit, StressUnit::MPa);
    }
}
