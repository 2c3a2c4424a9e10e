//! Quantum advantage estimation at full processor capacity.
//!
//! Compares the classical cost of state-vector simulation (memory 16·2ⁿ
//! bytes, FLOPs O(2ⁿ × depth × n)) against measured execution times on
//! superconducting backends, and plans the widest wormhole circuit a given
//! backend supports. Every 3.3 qubits buys roughly another 10× advantage.

use crate::constants::{theta_lock_rad, theta_pc_rad};

/// One superconducting backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Processor {
    pub name: &'static str,
    pub qubits: usize,
    pub family: &'static str,
    /// Two-qubit gate error rate
    pub cx_error: f64,
}

/// Backends available on the IBM fleet (2025-2026).
pub const PROCESSORS: [Processor; 4] = [
    Processor { name: "ibm_torino", qubits: 133, family: "Heron", cx_error: 0.005 },
    Processor { name: "ibm_fez", qubits: 156, family: "Heron r2", cx_error: 0.004 },
    Processor { name: "ibm_marrakesh", qubits: 156, family: "Heron r2", cx_error: 0.004 },
    Processor { name: "ibm_quebec", qubits: 127, family: "Eagle r3", cx_error: 0.008 },
];

/// Look up a backend by name.
pub fn processor(name: &str) -> Option<&'static Processor> {
    PROCESSORS.iter().find(|p| p.name == name)
}

/// Sustained throughput of the best classical supercomputer (FLOPS).
const EXAFLOP: f64 = 1e18;

const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Classical cost of simulating an n-qubit circuit by state vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalResources {
    /// 2ⁿ
    pub hilbert_dim: f64,
    /// State vector storage at 16 bytes per complex amplitude (TB)
    pub memory_tb: f64,
    /// Total floating-point operations
    pub flops: f64,
    /// Wall time on an exaflop machine (s)
    pub time_seconds: f64,
    pub time_years: f64,
}

/// Estimate classical simulation cost.
///
/// Each gate touches all 2ⁿ amplitudes; roughly n gates per layer and
/// 10 FLOPs per amplitude update.
pub fn classical_resources(n_qubits: usize, circuit_depth: usize) -> ClassicalResources {
    let hilbert_dim = 2.0f64.powi(n_qubits as i32);
    let memory_tb = hilbert_dim * 16.0 / 1024f64.powi(4);
    let total_gates = (circuit_depth * n_qubits) as f64;
    let flops = hilbert_dim * total_gates * 10.0;
    let time_seconds = flops / EXAFLOP;

    ClassicalResources {
        hilbert_dim,
        memory_tb,
        flops,
        time_seconds,
        time_years: time_seconds / SECONDS_PER_YEAR,
    }
}

/// Quantum execution cost on hardware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumResources {
    /// Single-shot circuit time (µs)
    pub circuit_time_us: f64,
    /// Total wall time including queue/compile overhead (s)
    pub total_time_seconds: f64,
    pub shots: usize,
}

/// Estimate quantum execution time: ~100 µs base + 2 µs per qubit per
/// shot, 10 µs measurement overhead, one minute of queue and compilation.
pub fn quantum_resources(n_qubits: usize, shots: usize) -> QuantumResources {
    let circuit_time_us = 100.0 + n_qubits as f64 * 2.0;
    let shot_time_us = circuit_time_us + 10.0;
    let total_time_seconds = shots as f64 * shot_time_us / 1e6 + 60.0;

    QuantumResources {
        circuit_time_us,
        total_time_seconds,
        shots,
    }
}

/// Advantage factor: classical simulation time over quantum wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvantageEstimate {
    pub n_qubits: usize,
    pub hilbert_dim: f64,
    pub classical_memory_tb: f64,
    pub classical_flops: f64,
    pub quantum_time_seconds: f64,
    pub advantage_factor: f64,
}

/// Estimate the advantage factor for a circuit of given width and depth.
pub fn estimate_advantage(n_qubits: usize, circuit_depth: usize, shots: usize) -> AdvantageEstimate {
    let classical = classical_resources(n_qubits, circuit_depth);
    let quantum = quantum_resources(n_qubits, shots);

    let advantage_factor = if quantum.total_time_seconds > 0.0 {
        classical.time_seconds / quantum.total_time_seconds
    } else {
        f64::INFINITY
    };

    AdvantageEstimate {
        n_qubits,
        hilbert_dim: classical.hilbert_dim,
        classical_memory_tb: classical.memory_tb,
        classical_flops: classical.flops,
        quantum_time_seconds: quantum.total_time_seconds,
        advantage_factor,
    }
}

/// Default shot count for advantage estimates.
pub const DEFAULT_SHOTS: usize = 8192;

fn format_hilbert(dim: f64) -> String {
    if dim > 1e100 {
        format!("10^{}", dim.log10() as i64)
    } else {
        format!("{:.2e}", dim)
    }
}

fn format_memory(tb: f64) -> String {
    if tb > 1e20 {
        format!("10^{} TB", tb.log10() as i64)
    } else if tb > 1e6 {
        format!("{:.1e} EB", tb / 1e6)
    } else {
        format!("{:.2e} TB", tb)
    }
}

fn format_advantage(factor: f64) -> String {
    if factor > 1e100 {
        format!("10^{}×", factor.log10() as i64)
    } else {
        format!("{:.2e}×", factor)
    }
}

/// Render the advantage-vs-qubit-count scaling table.
pub fn advantage_table() -> String {
    let bar = "=".repeat(90);
    let rule = "-".repeat(90);
    let mut lines = Vec::new();

    lines.push(bar.clone());
    lines.push("QUANTUM ADVANTAGE SCALING WITH QUBIT COUNT".to_string());
    lines.push(bar.clone());
    lines.push(format!(
        "{:<10} {:<15} {:<20} {:<20}",
        "Qubits", "Hilbert Dim", "Classical Memory", "Advantage Factor"
    ));
    lines.push(rule);

    for n in [50, 75, 100, 127, 133, 156, 200, 250, 300] {
        let est = estimate_advantage(n, 100, DEFAULT_SHOTS);
        lines.push(format!(
            "{:<10} {:<15} {:<20} {:<20}",
            n,
            format_hilbert(est.hilbert_dim),
            format_memory(est.classical_memory_tb),
            format_advantage(est.advantage_factor)
        ));
    }

    lines.push(bar);
    lines.join("\n")
}

/// Estimated gate counts for a full-width wormhole circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateCounts {
    pub h: usize,
    pub ry: usize,
    pub rz: usize,
    pub cx: usize,
}

/// Circuit plan for the maximum-advantage run on one backend.
#[derive(Debug, Clone)]
pub struct CircuitPlan {
    pub backend: &'static str,
    pub n_qubits: usize,
    /// min(500, ⌊1 / (n × cx_error × 0.1)⌋) — balance coherence vs depth
    pub optimal_depth: usize,
    pub throat_qubits: usize,
    pub scrambling_layers: usize,
    pub gate_counts: GateCounts,
    pub advantage_factor: f64,
}

/// Scrambling layers for the full-width circuit.
const MAX_SCRAMBLING_LAYERS: usize = 5;

/// Plan the widest wormhole circuit a backend supports. Unknown backend
/// names fall back to ibm_fez.
pub fn plan_max_advantage(backend_name: &str) -> CircuitPlan {
    let backend = processor(backend_name).unwrap_or(&PROCESSORS[1]);
    let n = backend.qubits;
    let throat = n / 2;

    let optimal_depth = ((1.0 / (n as f64 * backend.cx_error * 0.1)) as usize).min(500);

    let gate_counts = GateCounts {
        h: n,
        ry: 2 * n + throat,
        rz: MAX_SCRAMBLING_LAYERS * n,
        cx: throat + MAX_SCRAMBLING_LAYERS * (n - 1) * 2,
    };

    let est = estimate_advantage(n, optimal_depth, DEFAULT_SHOTS);

    CircuitPlan {
        backend: backend.name,
        n_qubits: n,
        optimal_depth,
        throat_qubits: throat,
        scrambling_layers: MAX_SCRAMBLING_LAYERS,
        gate_counts,
        advantage_factor: est.advantage_factor,
    }
}

/// OPENQASM 2.0 for the full-width maximum-advantage circuit.
///
/// Same five-stage shape as [`crate::wormhole::WormholeCircuit`], but with
/// five scrambling layers at per-layer angles and the phase-conjugate
/// trigger confined to the central quarter of the throat.
pub fn max_advantage_qasm(n_qubits: usize) -> String {
    let throat = n_qubits / 2;
    let theta_lock = theta_lock_rad();
    let theta_pc = theta_pc_rad();

    let mut qasm = vec![
        "OPENQASM 2.0;".to_string(),
        "include \"qelib1.inc\";".to_string(),
        format!("qreg q[{}];", n_qubits),
        format!("creg c[{}];", n_qubits),
        String::new(),
        format!("// MAXIMUM ADVANTAGE CIRCUIT: {} QUBITS", n_qubits),
        format!("// Target advantage: 10^{}×", (n_qubits as f64 * 0.3) as i64),
        String::new(),
        "// Stage 1: Create ER bridge (TFD state)".to_string(),
    ];

    for i in 0..throat {
        qasm.push(format!("h q[{}];", i));
        qasm.push(format!("ry({}) q[{}];", theta_lock, i));
        qasm.push(format!("cx q[{}], q[{}];", i, i + throat));
    }

    qasm.push(String::new());
    qasm.push("// Stage 2: Message injection".to_string());
    qasm.push("h q[0];".to_string());
    qasm.push(format!("ry({}) q[0];", theta_lock));

    qasm.push(String::new());
    qasm.push(format!("// Stage 3: Scrambling ({} layers)", MAX_SCRAMBLING_LAYERS));
    for layer in 0..MAX_SCRAMBLING_LAYERS {
        for i in 0..n_qubits {
            qasm.push(format!("rz({}) q[{}];", 0.1 * (layer + 1) as f64, i));
        }
        for i in 0..n_qubits.saturating_sub(1) {
            qasm.push(format!("cx q[{}], q[{}];", i, i + 1));
        }
    }

    qasm.push(String::new());
    qasm.push("// Stage 4: PHASE CONJUGATE TRIGGER (Time Reversal)".to_string());
    for i in throat / 2..throat / 2 + throat / 4 {
        qasm.push(format!("ry({}) q[{}];  // E → E⁻¹", theta_pc, i));
    }

    qasm.push(String::new());
    qasm.push("// Stage 5: Reverse scrambling".to_string());
    for layer in (0..MAX_SCRAMBLING_LAYERS).rev() {
        for i in (0..n_qubits.saturating_sub(1)).rev() {
            qasm.push(format!("cx q[{}], q[{}];", i, i + 1));
        }
        for i in (0..n_qubits).rev() {
            qasm.push(format!("rz({}) q[{}];", -0.1 * (layer + 1) as f64, i));
        }
    }

    qasm.push(String::new());
    qasm.push("// Measurement".to_string());
    qasm.push("measure q -> c;".to_string());

    qasm.join("\n")
}
