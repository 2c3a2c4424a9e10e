//! Toroidal harmonic frame — full report binary.

use harmonic_frame_sim::advantage;
use harmonic_frame_sim::ccce;
use harmonic_frame_sim::constants::*;
use harmonic_frame_sim::electrogravitics;
use harmonic_frame_sim::phase_conjugation::{
    default_tau_modulation, PhaseConjugateOperator, TAU_0_MICROSECONDS,
};
use harmonic_frame_sim::wormhole::WormholeCircuit;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════════╗");
    println!("║        TOROIDAL HARMONIC FRAME — v51.843 CALIBRATION REPORT        ║");
    println!("║                                                                    ║");
    println!("║  ΛΦ = 2.176435e-8 s⁻¹ · θ_lock = 51.843° · χ_pc = 0.946            ║");
    println!("║  CCCE metrics → phase conjugation → wormhole circuit → advantage   ║");
    println!("╚══════════════════════════════════════════════════════════════════════╝");
    println!();

    // ═══════════════════════════════════════
    // Framework constants
    // ═══════════════════════════════════════
    println!("━━━ Framework Constants ━━━");
    println!();
    println!("  ΛΦ (memory constant)    = {:.6e} s⁻¹", LAMBDA_PHI);
    println!("  τ_mem (1/ΛΦ)            = {:.4e} s", TAU_MEM);
    println!("  θ_lock                  = {}°  ({:.4} rad)", THETA_LOCK_DEG, theta_lock_rad());
    println!("  θ_pc (π − θ_lock)       = {:.3}°  ({:.4} rad)", THETA_PC_DEG, theta_pc_rad());
    println!("  Φ threshold             = {}  ({} bits)", PHI_THRESHOLD, PHI_THRESHOLD_BITS);
    println!("  Γ fixed / critical      = {} / {}", GAMMA_FIXED, GAMMA_CRITICAL);
    println!("  χ_pc                    = {}  (theoretical {})", CHI_PC, CHI_PC_ORIGINAL);
    println!("  φ (golden ratio)        = {}", GOLDEN_RATIO);
    println!("  F_max (1 − φ⁻⁸)         = {:.4}", f_max());
    println!();

    println!("  Self-checks:");
    for check in validate_constants() {
        println!("    {}  {}", if check.passed { "✓" } else { "✗" }, check.name);
    }
    println!(
        "  {}",
        if constants_valid() {
            "All constant validations PASSED"
        } else {
            "Some validations FAILED"
        }
    );
    println!();

    // ═══════════════════════════════════════
    // CCCE organism health
    // ═══════════════════════════════════════
    println!("━━━ CCCE Organism Health ━━━");
    println!();

    let healthy = ccce::ccce_state(0.95, 0.82, 0.092);
    println!("{}", ccce::health_report(&healthy));
    println!();

    let degraded = ccce::ccce_state(0.65, 0.45, 0.35);
    println!("{}", ccce::health_report(&degraded));
    println!();

    let healed = ccce::heal(degraded.gamma_decoherence);
    println!(
        "  After phase conjugate healing: Γ = {:.4} → {:.4}",
        degraded.gamma_decoherence, healed
    );
    println!();

    // ═══════════════════════════════════════
    // Electrogravitic coupling
    // ═══════════════════════════════════════
    println!("━━━ Electrogravitic Coupling ━━━");
    println!();
    println!(
        "  K (√(4πε₀G)):  {:.4e} C/kg",
        electrogravitics::coupling_constant()
    );
    println!(
        "  K (q_P/m_P):   {:.4e} C/kg",
        electrogravitics::planck_charge_ratio()
    );
    println!();
    println!("{}", electrogravitics::prediction_table());
    println!();

    println!("  Brown capacitor (100 kV, 1 cm gap, 0.1 m², 1 kg):");
    let forces = electrogravitics::capacitor_forces(100_000.0, 0.01, 0.1, 1.0, THETA_LOCK_DEG);
    println!("    E-field:              {:.4e} V/m", forces.electric_field);
    println!("    Electrogravitic:      {:.4e} N", forces.electrogravitic_force);
    println!("    Electrostatic:        {:.4e} N", forces.electrostatic_force);
    println!("    Ion wind estimate:    {:.4e} N", forces.ion_wind_estimate);
    println!("    EG/ES ratio:          {:.4e}", forces.eg_to_es_ratio);
    println!(
        "    Measurable:           {}",
        if forces.is_measurable { "YES" } else { "NO" }
    );
    println!();

    // ═══════════════════════════════════════
    // Phase conjugation
    // ═══════════════════════════════════════
    println!("{}", harmonic_frame_sim::phase_conjugation::time_reversal_explanation());
    println!();

    println!("━━━ Phase Conjugate Healing Efficiency ━━━");
    println!();
    println!("  {:<12} {:<12} {:<12}", "Γ_before", "Γ_after", "Efficiency");
    println!("  {:─<12} {:─<12} {:─<12}", "", "", "");

    let pc = PhaseConjugateOperator::new();
    for gamma in [0.1, 0.2, 0.3, 0.4, 0.5] {
        let (after, efficiency) = pc.healing_efficiency(gamma);
        println!(
            "  {:<12.3} {:<12.4} {:<11.1}%",
            gamma,
            after,
            efficiency * 100.0
        );
    }
    println!();

    // ═══════════════════════════════════════
    // Tau-phase modulation
    // ═══════════════════════════════════════
    println!("━━━ Tau-Phase Modulation (τ₀ = {} µs) ━━━", TAU_0_MICROSECONDS);
    println!();
    println!("  {:<10} {:<10} {:<12} {:<20}", "t (µs)", "t/τ₀", "Modulation", "Note");
    println!("  {:─<10} {:─<10} {:─<12} {:─<20}", "", "", "", "");

    for t in [0.0, 11.5, 23.0, 34.5, 46.0, 57.5, 69.0, 80.5, 92.0] {
        let modulation = default_tau_modulation(t);
        let note = if (t % TAU_0_MICROSECONDS).abs() < 1.0 {
            "PEAK (aligned)"
        } else if ((t + TAU_0_MICROSECONDS / 2.0) % TAU_0_MICROSECONDS).abs() < 1.0 {
            "TROUGH (anti-aligned)"
        } else {
            ""
        };
        println!(
            "  {:<10.1} {:<10.2} {:<12.4} {:<20}",
            t,
            t / TAU_0_MICROSECONDS,
            modulation,
            note
        );
    }
    println!();

    // ═══════════════════════════════════════
    // Wormhole circuit
    // ═══════════════════════════════════════
    println!("━━━ Wormhole Circuit ━━━");
    println!();

    let circuit = WormholeCircuit::new(10);
    println!("{}", circuit.circuit_description());
    println!();

    println!("  QASM Circuit (first 50 lines):");
    println!("  {:─<50}", "");
    for line in circuit.full_qasm().lines().take(50) {
        println!("  {}", line);
    }
    println!("  ...");
    println!();

    // ═══════════════════════════════════════
    // Qubit advantage
    // ═══════════════════════════════════════
    println!("━━━ Qubit Advantage ━━━");
    println!();
    println!("{}", advantage::advantage_table());
    println!();

    println!("  Maximum advantage circuit design:");
    for backend in ["ibm_torino", "ibm_fez"] {
        let plan = advantage::plan_max_advantage(backend);
        println!();
        println!("  Backend: {}", plan.backend);
        println!("    Qubits:              {}", plan.n_qubits);
        println!("    Optimal depth:       {}", plan.optimal_depth);
        println!("    Throat qubits:       {}", plan.throat_qubits);
        println!("    Scrambling layers:   {}", plan.scrambling_layers);
        println!(
            "    Gate estimate:       {} h / {} ry / {} rz / {} cx",
            plan.gate_counts.h, plan.gate_counts.ry, plan.gate_counts.rz, plan.gate_counts.cx
        );
        println!("    Advantage estimate:  {:.2e}×", plan.advantage_factor);
    }
    println!();

    // ═══════════════════════════════════════
    // Summary
    // ═══════════════════════════════════════
    println!("━━━ Summary ━━━");
    println!();
    println!("  - Ξ = (Λ×Φ)/Γ classifies organism health against Φ > {}", PHI_THRESHOLD);
    println!("  - Γ above {} triggers RY({:.3}°) phase-conjugate healing", GAMMA_CRITICAL, THETA_PC_DEG);
    println!("  - θ_lock and θ_pc are complementary: together they span π");
    println!("  - Every 3.3 qubits ≈ 10× more advantage");
}
