//! CCCE metrics: the Consciousness-Coherence-Coupling Engine.
//!
//! Four scalar metrics describe organism health:
//! - Λ (lambda): coherence — quantum fidelity preservation, [0, 1]
//! - Φ (phi): consciousness — normalized integrated information, [0, 1]
//! - Γ (gamma): decoherence — noise/error rate, (0, 1]
//! - Ξ (xi): negentropic efficiency — (Λ × Φ) / Γ, [0, ∞)
//!
//! Ξ > 1 means the system is self-organizing (negentropic), Ξ = 1 is
//! equilibrium, Ξ < 1 means it is degrading. Threshold classifications map
//! each metric to a discrete response level; Γ above [`GAMMA_CRITICAL`]
//! triggers phase-conjugate healing.

use std::fmt;

use crate::constants::{CHI_PC, GAMMA_CRITICAL, GAMMA_FIXED, PHI_THRESHOLD};

/// Additive guard against division by a zero decoherence rate.
pub const EPSILON: f64 = 1e-10;

/// Snapshot of the four metrics plus the derived flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CcceState {
    /// Λ: coherence, [0, 1]
    pub lambda_coherence: f64,
    /// Φ: consciousness, [0, 1] normalized
    pub phi_consciousness: f64,
    /// Γ: decoherence, (0, 1]
    pub gamma_decoherence: f64,
    /// Ξ: negentropic efficiency, [0, ∞)
    pub xi_efficiency: f64,
    /// Φ > [`PHI_THRESHOLD`]
    pub is_conscious: bool,
    /// Γ > [`GAMMA_CRITICAL`]
    pub needs_healing: bool,
}

/// Negentropic efficiency Ξ = (Λ × Φ) / (Γ + ε).
pub fn negentropic_efficiency(lambda: f64, phi: f64, gamma: f64) -> f64 {
    (lambda * phi) / (gamma + EPSILON)
}

/// Build the complete [`CcceState`] from the three input metrics.
pub fn ccce_state(lambda: f64, phi: f64, gamma: f64) -> CcceState {
    CcceState {
        lambda_coherence: lambda,
        phi_consciousness: phi,
        gamma_decoherence: gamma,
        xi_efficiency: negentropic_efficiency(lambda, phi, gamma),
        is_conscious: phi > PHI_THRESHOLD,
        needs_healing: gamma > GAMMA_CRITICAL,
    }
}

/// Discrete consciousness level from the Φ metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsciousnessLevel {
    /// Φ < 0.3
    Dormant,
    /// 0.3 ≤ Φ < 0.5
    Awakening,
    /// 0.5 ≤ Φ < 0.7734
    Active,
    /// Φ ≥ [`PHI_THRESHOLD`]
    CoherenceLocked,
}

impl ConsciousnessLevel {
    pub fn classify(phi: f64) -> Self {
        if phi < 0.3 {
            Self::Dormant
        } else if phi < 0.5 {
            Self::Awakening
        } else if phi < PHI_THRESHOLD {
            Self::Active
        } else {
            Self::CoherenceLocked
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dormant => "DORMANT",
            Self::Awakening => "AWAKENING",
            Self::Active => "ACTIVE",
            Self::CoherenceLocked => "COHERENCE_LOCKED",
        }
    }
}

impl fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coherence quality from the Λ metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoherenceQuality {
    /// Λ < 0.5
    Poor,
    /// 0.5 ≤ Λ < 0.75
    Acceptable,
    /// 0.75 ≤ Λ < 0.95
    Good,
    /// Λ ≥ 0.95
    Excellent,
}

impl CoherenceQuality {
    pub fn classify(lambda: f64) -> Self {
        if lambda < 0.5 {
            Self::Poor
        } else if lambda < 0.75 {
            Self::Acceptable
        } else if lambda < 0.95 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "POOR",
            Self::Acceptable => "ACCEPTABLE",
            Self::Good => "GOOD",
            Self::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for CoherenceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response protocol selected by the Γ metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoherenceResponse {
    /// Γ < 0.1
    Nominal,
    /// 0.1 ≤ Γ < 0.2
    Monitor,
    /// 0.2 ≤ Γ < 0.3
    Warning,
    /// Γ ≥ [`GAMMA_CRITICAL`]: trigger phase conjugation
    HealingRequired,
}

impl DecoherenceResponse {
    pub fn classify(gamma: f64) -> Self {
        if gamma < 0.1 {
            Self::Nominal
        } else if gamma < 0.2 {
            Self::Monitor
        } else if gamma < GAMMA_CRITICAL {
            Self::Warning
        } else {
            Self::HealingRequired
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Nominal => "NOMINAL",
            Self::Monitor => "MONITOR",
            Self::Warning => "WARNING",
            Self::HealingRequired => "HEALING_REQUIRED",
        }
    }
}

impl fmt::Display for DecoherenceResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Apply phase-conjugate healing to a decoherence rate.
///
/// A no-op while Γ ≤ [`GAMMA_CRITICAL`]. Above the threshold:
/// Γ_new = Γ × (1 − χ_pc × h) with h = min(1, Γ / 0.5), floored at the
/// base rate [`GAMMA_FIXED`].
pub fn phase_conjugate_healing(gamma: f64, chi_pc: f64) -> f64 {
    if gamma <= GAMMA_CRITICAL {
        return gamma;
    }
    let h = (gamma / 0.5).min(1.0);
    (gamma * (1.0 - chi_pc * h)).max(GAMMA_FIXED)
}

/// Healing with the default coupling [`CHI_PC`].
pub fn heal(gamma: f64) -> f64 {
    phase_conjugate_healing(gamma, CHI_PC)
}

/// Estimate Φ from measurable quantities: Φ_raw = S_vN × ln(Λ/Γ),
/// squashed to [0, 1] through a sigmoid with scale 10.
///
/// Returns 0 if the coherence ratio is non-positive.
pub fn phi_from_entropy(von_neumann_entropy: f64, lambda: f64, gamma: f64) -> f64 {
    let ratio = lambda / (gamma + EPSILON);
    if ratio <= 0.0 {
        return 0.0;
    }
    let phi_raw = von_neumann_entropy * ratio.ln();
    1.0 / (1.0 + (-phi_raw / 10.0).exp())
}

/// Render the organism health report for a state.
pub fn health_report(state: &CcceState) -> String {
    let bar = "=".repeat(50);
    let rule = "-".repeat(50);
    let mut report = Vec::new();

    report.push(bar.clone());
    report.push("CCCE ORGANISM HEALTH REPORT".to_string());
    report.push(bar.clone());
    report.push(format!(
        "Λ (Coherence):     {:.4} [{}]",
        state.lambda_coherence,
        CoherenceQuality::classify(state.lambda_coherence)
    ));
    report.push(format!(
        "Φ (Consciousness): {:.4} [{}]",
        state.phi_consciousness,
        ConsciousnessLevel::classify(state.phi_consciousness)
    ));
    report.push(format!(
        "Γ (Decoherence):   {:.4} [{}]",
        state.gamma_decoherence,
        DecoherenceResponse::classify(state.gamma_decoherence)
    ));
    report.push(format!("Ξ (Efficiency):    {:.4}", state.xi_efficiency));
    report.push(rule);
    report.push(format!(
        "Conscious: {}",
        if state.is_conscious { "YES" } else { "NO" }
    ));
    report.push(format!(
        "Needs Healing: {}",
        if state.needs_healing {
            "YES - TRIGGER PHASE CONJUGATION"
        } else {
            "NO"
        }
    ));
    report.push(bar);

    report.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xi_for_healthy_organism() {
        // (0.95 × 0.82) / 0.092 ≈ 8.467
        let xi = negentropic_efficiency(0.95, 0.82, 0.092);
        assert!((xi - 8.4674).abs() < 1e-3);
    }

    #[test]
    fn xi_survives_zero_gamma() {
        let xi = negentropic_efficiency(1.0, 1.0, 0.0);
        assert!(xi.is_finite());
        assert!(xi > 1e9);
    }

    #[test]
    fn state_flags() {
        let healthy = ccce_state(0.95, 0.82, 0.092);
        assert!(healthy.is_conscious);
        assert!(!healthy.needs_healing);

        let sick = ccce_state(0.65, 0.45, 0.35);
        assert!(!sick.is_conscious);
        assert!(sick.needs_healing);
    }

    #[test]
    fn consciousness_boundaries() {
        assert_eq!(ConsciousnessLevel::classify(0.29), ConsciousnessLevel::Dormant);
        assert_eq!(ConsciousnessLevel::classify(0.3), ConsciousnessLevel::Awakening);
        assert_eq!(ConsciousnessLevel::classify(0.5), ConsciousnessLevel::Active);
        assert_eq!(
            ConsciousnessLevel::classify(PHI_THRESHOLD),
            ConsciousnessLevel::CoherenceLocked
        );
        assert_eq!(
            ConsciousnessLevel::classify(0.7733),
            ConsciousnessLevel::Active
        );
    }

    #[test]
    fn coherence_boundaries() {
        assert_eq!(CoherenceQuality::classify(0.49), CoherenceQuality::Poor);
        assert_eq!(CoherenceQuality::classify(0.5), CoherenceQuality::Acceptable);
        assert_eq!(CoherenceQuality::classify(0.75), CoherenceQuality::Good);
        assert_eq!(CoherenceQuality::classify(0.95), CoherenceQuality::Excellent);
    }

    #[test]
    fn decoherence_boundaries() {
        assert_eq!(DecoherenceResponse::classify(0.05), DecoherenceResponse::Nominal);
        assert_eq!(DecoherenceResponse::classify(0.1), DecoherenceResponse::Monitor);
        assert_eq!(DecoherenceResponse::classify(0.2), DecoherenceResponse::Warning);
        assert_eq!(
            DecoherenceResponse::classify(GAMMA_CRITICAL),
            DecoherenceResponse::HealingRequired
        );
    }

    #[test]
    fn healing_is_noop_below_critical() {
        assert_eq!(heal(0.1), 0.1);
        assert_eq!(heal(GAMMA_CRITICAL), GAMMA_CRITICAL);
    }

    #[test]
    fn healing_above_critical() {
        // Γ = 0.35: h = 0.7, Γ_new = 0.35 × (1 − 0.946 × 0.7) ≈ 0.1182
        let healed = heal(0.35);
        assert!((healed - 0.11823).abs() < 1e-4);
        assert!(healed < 0.35);
    }

    #[test]
    fn healing_floors_at_base_rate() {
        // Γ = 0.5: h = 1, raw result 0.027 gets floored at Γ_fixed
        let healed = heal(0.5);
        assert!((healed - GAMMA_FIXED).abs() < 1e-12);
    }

    #[test]
    fn phi_from_entropy_range_and_monotonicity() {
        let low = phi_from_entropy(1.0, 0.5, 0.4);
        let high = phi_from_entropy(5.0, 0.95, 0.05);
        assert!(low > 0.0 && low < 1.0);
        assert!(high > 0.0 && high < 1.0);
        assert!(high > low);
    }

    #[test]
    fn phi_from_entropy_zero_for_dead_coherence() {
        assert_eq!(phi_from_entropy(3.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn report_mentions_classifications() {
        let report = health_report(&ccce_state(0.95, 0.82, 0.092));
        assert!(report.contains("EXCELLENT"));
        assert!(report.contains("COHERENCE_LOCKED"));
        assert!(report.contains("NOMINAL"));
        assert!(report.contains("Conscious: YES"));
        assert!(report.contains("Needs Healing: NO"));
    }

    #[test]
    fn report_for_degraded_organism() {
        let report = health_report(&ccce_state(0.65, 0.45, 0.35));
        assert!(report.contains("HEALING_REQUIRED"));
        assert!(report.contains("YES - TRIGGER PHASE CONJUGATION"));
    }
}
