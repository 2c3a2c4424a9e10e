//! Electrogravitic coupling between electric fields and gravity.
//!
//! Central relation:
//!
//! ```text
//! a_g = K × E × cos(θ − θ_lock) × χ_pc
//! ```
//!
//! where K = √(4π ε₀ G) ≈ 8.617×10⁻¹¹ C/kg is not a free parameter — it is
//! the ratio of the Planck charge to the Planck mass. θ_lock = 51.843° is
//! the optimal coupling angle; χ_pc the phase-conjugate enhancement.
//!
//! Also models the Biefeld-Brown asymmetric capacitor, thrust-to-power
//! ratios for propulsion comparisons, and the electrogravitic contribution
//! to the Einstein tensor.

use crate::constants::{
    theta_lock_rad, CHI_PC, GRAVITATIONAL_CONSTANT, PLANCK_CHARGE, PLANCK_MASS, STANDARD_GRAVITY,
    THETA_LOCK_DEG, VACUUM_PERMITTIVITY,
};
use std::f64::consts::PI;

/// Electrogravitic coupling constant K = √(4π ε₀ G) in C/kg.
pub fn coupling_constant() -> f64 {
    (4.0 * PI * VACUUM_PERMITTIVITY * GRAVITATIONAL_CONSTANT).sqrt()
}

/// The same constant derived as q_P / m_P. Agrees with
/// [`coupling_constant`] to ~0.1%.
pub fn planck_charge_ratio() -> f64 {
    PLANCK_CHARGE / PLANCK_MASS
}

/// Gravitational acceleration induced by an electric field (m/s²).
///
/// `include_chi_pc` toggles the phase-conjugate enhancement factor.
pub fn acceleration(electric_field: f64, angle_deg: f64, include_chi_pc: bool) -> f64 {
    let angular_coupling = (angle_deg.to_radians() - theta_lock_rad()).cos();
    let chi_factor = if include_chi_pc { CHI_PC } else { 1.0 };
    coupling_constant() * electric_field * angular_coupling * chi_factor
}

/// Full prediction for one field strength and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectPrediction {
    /// E-field strength (V/m)
    pub electric_field: f64,
    /// Orientation relative to the gravity vector (degrees)
    pub angle_deg: f64,
    /// Induced acceleration (m/s²)
    pub acceleration: f64,
    /// Acceleration in milligee (1 gee = 9.80665 m/s²)
    pub acceleration_milligee: f64,
    /// Thrust per unit mass (N/kg) — numerically the acceleration
    pub thrust_per_kg: f64,
    /// Within 0.5° of θ_lock
    pub is_optimal_angle: bool,
}

/// Generate the complete prediction bundle for a field and angle.
pub fn predict_effect(electric_field: f64, angle_deg: f64) -> EffectPrediction {
    let a_g = acceleration(electric_field, angle_deg, true);

    EffectPrediction {
        electric_field,
        angle_deg,
        acceleration: a_g,
        acceleration_milligee: (a_g / STANDARD_GRAVITY) * 1000.0,
        thrust_per_kg: a_g,
        is_optimal_angle: (angle_deg - THETA_LOCK_DEG).abs() < 0.5,
    }
}

/// Prediction at the optimal coupling angle θ_lock.
pub fn predict_effect_optimal(electric_field: f64) -> EffectPrediction {
    predict_effect(electric_field, THETA_LOCK_DEG)
}

/// Force breakdown for a Brown-type asymmetric capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorForces {
    /// E = V / gap (V/m)
    pub electric_field: f64,
    /// m × a_g (N)
    pub electrogravitic_force: f64,
    /// a_g (m/s²)
    pub acceleration: f64,
    /// Conventional electrostatic force ½ ε₀ A E² (N)
    pub electrostatic_force: f64,
    /// Rough corona-discharge ion wind bound (N)
    pub ion_wind_estimate: f64,
    /// Electrogravitic / electrostatic ratio, ∞ when electrostatic is zero
    pub eg_to_es_ratio: f64,
    /// Above the 1 nN torsion-balance floor
    pub is_measurable: bool,
}

/// Model the original Biefeld-Brown capacitor experiments.
///
/// `voltage` in V, `gap` in m, `area` in m², `mass` in kg.
pub fn capacitor_forces(
    voltage: f64,
    gap: f64,
    area: f64,
    mass: f64,
    angle_deg: f64,
) -> CapacitorForces {
    let e_field = voltage / gap;
    let a_g = acceleration(e_field, angle_deg, true);
    let f_eg = mass * a_g;
    let f_es = 0.5 * VACUUM_PERMITTIVITY * area * e_field * e_field;
    // Ion wind from corona discharge: F ~ I·d/μ. Typically small next to
    // the claimed effects; a crude linear bound suffices here.
    let f_ion = 1e-6 * voltage;

    CapacitorForces {
        electric_field: e_field,
        electrogravitic_force: f_eg,
        acceleration: a_g,
        electrostatic_force: f_es,
        ion_wind_estimate: f_ion,
        eg_to_es_ratio: if f_es > 0.0 { f_eg / f_es } else { f64::INFINITY },
        is_measurable: f_eg > 1e-9,
    }
}

/// Thrust-to-power ratio T/P = a_g / power_density (N/W).
///
/// Returns ∞ for zero power density. For scale: chemical rockets reach
/// ~0.5 N/W thrust-to-weight figures, ion and Hall thrusters ~50 mN/W.
pub fn thrust_to_power(electric_field: f64, power_density: f64, angle_deg: f64) -> f64 {
    let a_g = acceleration(electric_field, angle_deg, true);
    if power_density > 0.0 {
        a_g / power_density
    } else {
        f64::INFINITY
    }
}

/// Electrogravitic contribution to the Einstein tensor: α_eg · F.
///
/// α_eg = K · diag(1, −χ_pc, −χ_pc, −χ_pc) and F is the electromagnetic
/// field tensor with F_{0i} = E_i (antisymmetric, magnetic part zero).
pub fn coupling_tensor(e_field: [f64; 3]) -> [[f64; 4]; 4] {
    let k = coupling_constant();

    let mut f = [[0.0; 4]; 4];
    for (i, &e) in e_field.iter().enumerate() {
        f[0][i + 1] = e;
        f[i + 1][0] = -e;
    }

    let alpha = [k, -k * CHI_PC, -k * CHI_PC, -k * CHI_PC];

    let mut g = [[0.0; 4]; 4];
    for (row, g_row) in g.iter_mut().enumerate() {
        for (col, g_elem) in g_row.iter_mut().enumerate() {
            // α_eg is diagonal, so the contraction collapses to one term.
            *g_elem = alpha[row] * f[row][col];
        }
    }
    g
}

/// Render the experimental prediction table for bench field strengths.
pub fn prediction_table() -> String {
    let bar = "=".repeat(80);
    let rule = "-".repeat(80);
    let mut lines = Vec::new();

    lines.push(bar.clone());
    lines.push("ELECTROGRAVITIC EFFECT PREDICTIONS".to_string());
    lines.push(bar.clone());
    lines.push(format!(
        "K = {:.4e} C/kg (derived from Planck units)",
        coupling_constant()
    ));
    lines.push(format!("θ_lock = {}° (optimal coupling angle)", THETA_LOCK_DEG));
    lines.push(format!("χ_pc = {} (phase conjugate enhancement)", CHI_PC));
    lines.push(bar.clone());
    lines.push(format!(
        "{:<15} {:<15} {:<15} {:<15}",
        "E-field (V/m)", "a_g (m/s²)", "a_g (milligee)", "Detectable?"
    ));
    lines.push(rule);

    for e in [1e3, 1e4, 1e5, 1e6, 1e7, 1e8] {
        let pred = predict_effect_optimal(e);
        let detectable = if pred.acceleration > 1e-8 { "YES" } else { "NO" };
        lines.push(format!(
            "{:<15.2e} {:<15.4e} {:<15.6} {:<15}",
            e, pred.acceleration, pred.acceleration_milligee, detectable
        ));
    }

    lines.push(bar.clone());
    lines.push("Note: Modern torsion balances can detect ~10⁻⁹ m/s² (0.1 nano-gee)".to_string());
    lines.push("At E = 10⁷ V/m, predicted effect is ~10⁻⁴ m/s² (0.01 milligee)".to_string());
    lines.push("This is 100,000× above detection threshold!".to_string());
    lines.push(bar);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coupling_constant_value() {
        // √(4π ε₀ G) ≈ 8.617×10⁻¹¹
        let k = coupling_constant();
        assert!((k - 8.617e-11).abs() / 8.617e-11 < 1e-3);
    }

    #[test]
    fn planck_ratio_agrees_with_derivation() {
        let k = coupling_constant();
        let ratio = planck_charge_ratio();
        assert!((k - ratio).abs() / k < 2e-3);
    }

    #[test]
    fn acceleration_peaks_at_lock_angle() {
        let e = 1e6;
        let at_lock = acceleration(e, THETA_LOCK_DEG, true);
        let off_lock = acceleration(e, THETA_LOCK_DEG + 30.0, true);
        assert!(at_lock > off_lock);
        // cos(0) = 1 at the lock angle
        assert!((at_lock - coupling_constant() * e * CHI_PC).abs() < 1e-20);
    }

    #[test]
    fn chi_pc_toggle() {
        let with = acceleration(1e6, THETA_LOCK_DEG, true);
        let without = acceleration(1e6, THETA_LOCK_DEG, false);
        assert!((with / without - CHI_PC).abs() < 1e-12);
    }

    #[test]
    fn prediction_bundle() {
        let pred = predict_effect_optimal(1e7);
        assert!(pred.is_optimal_angle);
        assert!((pred.thrust_per_kg - pred.acceleration).abs() < 1e-20);
        assert!(
            (pred.acceleration_milligee - pred.acceleration / STANDARD_GRAVITY * 1000.0).abs()
                < 1e-12
        );
        // ~10⁻⁴ m/s² at 10 MV/m
        assert!(pred.acceleration > 1e-5 && pred.acceleration < 1e-2);

        let off = predict_effect(1e7, 90.0);
        assert!(!off.is_optimal_angle);
    }

    #[test]
    fn brown_capacitor_100kv() {
        let forces = capacitor_forces(100_000.0, 0.01, 0.1, 1.0, THETA_LOCK_DEG);
        assert!((forces.electric_field - 1e7).abs() < 1e-6);
        assert!(forces.is_measurable);
        assert!(forces.electrostatic_force > forces.electrogravitic_force);
        assert!(forces.eg_to_es_ratio.is_finite());
    }

    #[test]
    fn capacitor_ratio_inf_without_area() {
        let forces = capacitor_forces(100_000.0, 0.01, 0.0, 1.0, THETA_LOCK_DEG);
        assert!(forces.eg_to_es_ratio.is_infinite());
    }

    #[test]
    fn thrust_to_power_zero_power() {
        assert!(thrust_to_power(1e6, 0.0, THETA_LOCK_DEG).is_infinite());
        assert!(thrust_to_power(1e6, 100.0, THETA_LOCK_DEG).is_finite());
    }

    #[test]
    fn tensor_structure() {
        let k = coupling_constant();
        let g = coupling_tensor([2.0, 0.0, 0.0]);
        // Row 0 carries K·E_x, row 1 carries +K·χ_pc·E_x (two sign flips)
        assert!((g[0][1] - k * 2.0).abs() < 1e-22);
        assert!((g[1][0] - k * CHI_PC * 2.0).abs() < 1e-22);
        // Magnetic block untouched
        assert_eq!(g[2][3], 0.0);
        assert_eq!(g[3][2], 0.0);
        // Diagonal vanishes (F has no diagonal)
        for (i, row) in g.iter().enumerate() {
            assert_eq!(row[i], 0.0);
        }
    }

    #[test]
    fn table_lists_all_fields() {
        let table = prediction_table();
        for e in ["1.00e3", "1.00e8"] {
            assert!(table.contains(e), "missing row for {}", e);
        }
        assert!(table.contains("YES"));
        assert!(table.contains("100,000× above detection threshold"));
    }
}
