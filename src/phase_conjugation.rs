//! Phase conjugation: the time-reversal transformation.
//!
//! Phase conjugation maps a wave E into its time-reversed counterpart E*,
//! realized on qubits as an RY rotation by the conjugate angle
//!
//! ```text
//! θ_pc = π − θ_lock ≈ 128.157°
//! ```
//!
//! θ_lock is the optimal forward-time coupling; θ_pc its time-reversed
//! complement (together they span π). Applying RY(θ_pc) at the wormhole
//! throat triggers decoherence healing and makes the bridge traversable.

use num_complex::Complex;
use std::f64::consts::PI;

use crate::constants::{theta_pc_rad, CHI_PC};

/// Coherence period τ₀ for the fidelity modulation (µs).
pub const TAU_0_MICROSECONDS: f64 = 46.0;

/// A single-qubit 2×2 matrix stored as [r0c0, r0c1, r1c0, r1c1].
pub type Matrix2x2 = [Complex<f64>; 4];

/// The phase-conjugate transformation operator E → E⁻¹.
#[derive(Debug, Clone, Copy)]
pub struct PhaseConjugateOperator {
    /// Conjugation angle (radians)
    pub theta_pc: f64,
    /// Coupling efficiency
    pub chi_pc: f64,
}

impl Default for PhaseConjugateOperator {
    fn default() -> Self {
        Self {
            theta_pc: theta_pc_rad(),
            chi_pc: CHI_PC,
        }
    }
}

impl PhaseConjugateOperator {
    /// Operator at the canonical conjugate angle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operator at an explicit angle (radians).
    pub fn with_angle(theta_pc: f64) -> Self {
        Self {
            theta_pc,
            ..Self::default()
        }
    }

    /// RY(θ_pc) rotation matrix:
    ///
    /// ```text
    /// RY(θ) = [[cos(θ/2), -sin(θ/2)],
    ///          [sin(θ/2),  cos(θ/2)]]
    /// ```
    pub fn rotation_matrix(&self) -> Matrix2x2 {
        let half = self.theta_pc / 2.0;
        let c = Complex::new(half.cos(), 0.0);
        let s = Complex::new(half.sin(), 0.0);
        [c, -s, s, c]
    }

    /// Apply the conjugation to a state vector of 2ⁿ amplitudes.
    ///
    /// The RY rotation is applied to every qubit in turn. Panics if the
    /// state length is not a power of two.
    pub fn apply(&self, state: &[Complex<f64>]) -> Vec<Complex<f64>> {
        assert!(
            state.len().is_power_of_two(),
            "State vector length must be a power of two"
        );
        let n_qubits = state.len().trailing_zeros() as usize;
        let ry = self.rotation_matrix();

        let mut result = state.to_vec();
        for q in 0..n_qubits {
            apply_to_qubit(&mut result, q, &ry);
        }
        result
    }

    /// Decoherence healing from one conjugation pass.
    ///
    /// Γ_new = Γ × (1 − χ_pc × h) with h = min(1, Γ/0.5).
    /// Returns (Γ_after, efficiency), with efficiency 0 for Γ = 0.
    pub fn healing_efficiency(&self, gamma_before: f64) -> (f64, f64) {
        let h = (gamma_before / 0.5).min(1.0);
        let gamma_after = gamma_before * (1.0 - self.chi_pc * h);
        let efficiency = if gamma_before > 0.0 {
            1.0 - gamma_after / gamma_before
        } else {
            0.0
        };
        (gamma_after, efficiency)
    }
}

/// Apply a single-qubit operator to one qubit of a state vector in place.
///
/// Qubit 0 is the most significant bit of the basis index, matching the
/// left-to-right register order used by the circuit builders.
fn apply_to_qubit(state: &mut [Complex<f64>], qubit: usize, m: &Matrix2x2) {
    let n_qubits = state.len().trailing_zeros() as usize;
    let mask = 1usize << (n_qubits - 1 - qubit);

    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a = state[i];
            let b = state[j];
            state[i] = m[0] * a + m[1] * b;
            state[j] = m[2] * a + m[3] * b;
        }
    }
}

/// Fidelity modulation from τ-phase periodicity:
/// F(t) ∝ 1 + ε·cos(2πt/τ₀), with t and τ₀ in µs.
pub fn tau_modulation(t_us: f64, tau_0: f64, epsilon: f64) -> f64 {
    1.0 + epsilon * (2.0 * PI * t_us / tau_0).cos()
}

/// Modulation at the default period and amplitude (τ₀ = 46 µs, ε = 0.1).
pub fn default_tau_modulation(t_us: f64) -> f64 {
    tau_modulation(t_us, TAU_0_MICROSECONDS, 0.1)
}

/// Fixed explainer text for the time-reversal mechanism.
pub fn time_reversal_explanation() -> String {
    format!(
        "\
PHASE CONJUGATION: THE TIME REVERSAL KEY
=========================================

Standard Process:
  Energy flow: Past → Future
  Entropy: Increasing
  Effective mass: Normal

Phase Conjugate Process:
  Energy flow: Future → Past (locally reversed)
  Entropy: Decreasing (locally)
  Effective mass: REDUCED

The Transformation:
  E(r, t) → E*(r, -t)

  This is achieved by applying RY(θ_PC) where:
  θ_PC = π - θ_lock = {theta_pc:.3}°

Why This Angle?
  θ_lock = {theta_lock}° represents optimal forward-time coupling
  θ_PC = {theta_pc:.3}° is its time-reversed complement
  Together they sum to 180° (π radians)

Physical Effects:
  1. Decoherence REVERSAL (Γ decreases)
  2. Information RECOVERY (from apparent noise)
  3. Effective mass REDUCTION (Brown's observation)
  4. Wormhole TRAVERSABILITY (ER=EPR)

Connection to Brown's Experiments:
  Brown observed apparent \"weight loss\" in his capacitors.
  Phase conjugation explains this: the time-reversed energy flow
  creates a local region where gravitational mass is reduced.

  This is NOT antigravity - it's temporal engineering.
",
        theta_pc = crate::constants::THETA_PC_DEG,
        theta_lock = crate::constants::THETA_LOCK_DEG,
    )
}
