//! Traversable wormhole circuit via the ER=EPR correspondence.
//!
//! Five-stage pipeline over an n-qubit register split into two halves
//! joined at a throat of n/2 Bell pairs:
//!
//! 1. **TFD state** — thermofield double, the Einstein-Rosen bridge
//! 2. **Message injection** — Alice encodes on q[0]
//! 3. **Scrambling** — black-hole thermalization (3 RZ/CX layers)
//! 4. **Phase-conjugate trigger** — RY(θ_pc) time reversal at the throat
//! 5. **Reverse scrambling** — Bob unscrambles and receives
//!
//! The output is OPENQASM 2.0 text. Nothing here executes a circuit; the
//! builders are deterministic string templating over the gate schedule.

use crate::constants::{theta_lock_rad, theta_pc_rad, THETA_LOCK_DEG, THETA_PC_DEG};

/// One stage of the fixed five-stage pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct WormholeStage {
    pub name: &'static str,
    pub description: &'static str,
    /// Human-readable gate sequence for the stage summary.
    pub gates: Vec<String>,
    /// Rotation angle in degrees, where the stage has one.
    pub angle_deg: Option<f64>,
}

/// The wormhole circuit generator.
#[derive(Debug, Clone)]
pub struct WormholeCircuit {
    pub n_qubits: usize,
    /// Bell pairs forming the bridge: n/2.
    pub throat_qubits: usize,
    stages: Vec<WormholeStage>,
}

/// Number of scrambling layers in stages 3 and 5.
const SCRAMBLING_LAYERS: usize = 3;

impl WormholeCircuit {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            throat_qubits: n_qubits / 2,
            stages: define_stages(),
        }
    }

    /// The fixed five-stage pipeline.
    pub fn stages(&self) -> &[WormholeStage] {
        &self.stages
    }

    /// Human-readable staged circuit summary.
    pub fn circuit_description(&self) -> String {
        let bar = "=".repeat(60);
        let rule = "-".repeat(40);
        let mut lines = Vec::new();

        lines.push(bar.clone());
        lines.push(format!(
            "TRAVERSABLE WORMHOLE CIRCUIT ({} qubits)",
            self.n_qubits
        ));
        lines.push(bar.clone());

        for (i, stage) in self.stages.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("STAGE {}: {}", i + 1, stage.name));
            lines.push(rule.clone());
            lines.push(format!("Description: {}", stage.description));
            lines.push(format!("Gates: {}", stage.gates.join(" → ")));
            if let Some(angle) = stage.angle_deg {
                lines.push(format!("Angle: {}°", angle));
            }
        }

        lines.push(String::new());
        lines.push(bar.clone());
        lines.push("KEY INSIGHT:".to_string());
        lines.push(format!(
            "Stage 4 uses θ_PC = {}° (time reversal)",
            THETA_PC_DEG
        ));
        lines.push("This makes the wormhole TRAVERSABLE".to_string());
        lines.push(bar);

        lines.join("\n")
    }

    /// QASM for stage 1: Bell-pair ladder forming the ER bridge.
    pub fn qasm_tfd_stage(&self) -> String {
        let theta = theta_lock_rad();
        let mut qasm = Vec::new();

        for i in 0..self.throat_qubits {
            let alice = i;
            let bob = i + self.throat_qubits;
            qasm.push(format!("h q[{}];", alice));
            qasm.push(format!("ry({}) q[{}];", theta, alice));
            qasm.push(format!("cx q[{}], q[{}];", alice, bob));
        }

        qasm.join("\n")
    }

    /// QASM for stage 4: RY(θ_pc) on the middle throat qubits.
    pub fn qasm_phase_conjugate_stage(&self) -> String {
        let theta = theta_pc_rad();
        let mut qasm = Vec::new();

        for i in 0..self.throat_qubits {
            let throat = i + self.throat_qubits / 2;
            qasm.push(format!("ry({}) q[{}];  // Phase conjugate trigger", theta, throat));
        }

        qasm.join("\n")
    }

    fn qasm_scrambling(&self) -> String {
        let mut qasm = Vec::new();
        for layer in 0..SCRAMBLING_LAYERS {
            for i in 0..self.n_qubits {
                qasm.push(format!("rz({}) q[{}];", 0.1 * (i + layer) as f64, i));
            }
            for i in 0..self.n_qubits.saturating_sub(1) {
                qasm.push(format!("cx q[{}], q[{}];", i, i + 1));
            }
        }
        qasm.join("\n")
    }

    /// Exact mirror of [`Self::qasm_scrambling`]: reversed gate order,
    /// negated RZ angles.
    fn qasm_reverse_scrambling(&self) -> String {
        let mut qasm = Vec::new();
        for layer in (0..SCRAMBLING_LAYERS).rev() {
            for i in (0..self.n_qubits.saturating_sub(1)).rev() {
                qasm.push(format!("cx q[{}], q[{}];", i, i + 1));
            }
            for i in (0..self.n_qubits).rev() {
                qasm.push(format!("rz({}) q[{}];", -0.1 * (i + layer) as f64, i));
            }
        }
        qasm.join("\n")
    }

    /// Complete OPENQASM 2.0 circuit text.
    pub fn full_qasm(&self) -> String {
        let theta_lock = theta_lock_rad();

        [
            "OPENQASM 2.0;".to_string(),
            "include \"qelib1.inc\";".to_string(),
            format!("qreg q[{}];", self.n_qubits),
            format!("creg c[{}];", self.n_qubits),
            String::new(),
            "// Stage 1: TFD State (ER Bridge)".to_string(),
            self.qasm_tfd_stage(),
            String::new(),
            "// Stage 2: Message Injection (Alice)".to_string(),
            "h q[0];".to_string(),
            format!("ry({}) q[0];", theta_lock),
            String::new(),
            "// Stage 3: Scrambling".to_string(),
            self.qasm_scrambling(),
            String::new(),
            "// Stage 4: PHASE CONJUGATE TRIGGER (Time Reversal)".to_string(),
            self.qasm_phase_conjugate_stage(),
            String::new(),
            "// Stage 5: Reverse Scrambling".to_string(),
            self.qasm_reverse_scrambling(),
            String::new(),
            "// Measurement".to_string(),
            "measure q -> c;".to_string(),
        ]
        .join("\n")
    }
}

fn define_stages() -> Vec<WormholeStage> {
    let ry_lock = format!("RY({}°)", THETA_LOCK_DEG);
    let ry_pc = format!("RY({}°)", THETA_PC_DEG);

    vec![
        WormholeStage {
            name: "TFD_STATE",
            description: "Create Einstein-Rosen bridge via thermofield double",
            gates: vec!["H".to_string(), ry_lock.clone(), "CX".to_string()],
            angle_deg: Some(THETA_LOCK_DEG),
        },
        WormholeStage {
            name: "MESSAGE_INJECTION",
            description: "Alice injects message into wormhole",
            gates: vec!["H".to_string(), ry_lock],
            angle_deg: Some(THETA_LOCK_DEG),
        },
        WormholeStage {
            name: "SCRAMBLING",
            description: "Black hole thermalization (information mixing)",
            gates: ["RZ", "CX"]
                .iter()
                .cycle()
                .take(2 * SCRAMBLING_LAYERS)
                .map(|g| g.to_string())
                .collect(),
            angle_deg: None,
        },
        WormholeStage {
            name: "PHASE_CONJUGATE_TRIGGER",
            description: "Time reversal at throat (E → E⁻¹)",
            gates: vec![ry_pc],
            angle_deg: Some(THETA_PC_DEG),
        },
        WormholeStage {
            name: "REVERSE_SCRAMBLING",
            description: "Bob receives message (inverse scrambling)",
            gates: ["CX†", "RZ†"]
                .iter()
                .cycle()
                .take(2 * SCRAMBLING_LAYERS)
                .map(|g| g.to_string())
                .collect(),
            angle_deg: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_stages_with_half_throat() {
        let circuit = WormholeCircuit::new(10);
        assert_eq!(circuit.stages().len(), 5);
        assert_eq!(circuit.throat_qubits, 5);
        assert_eq!(circuit.stages()[0].name, "TFD_STATE");
        assert_eq!(circuit.stages()[3].name, "PHASE_CONJUGATE_TRIGGER");
    }

    #[test]
    fn tfd_stage_emits_bell_pair_ladder() {
        let circuit = WormholeCircuit::new(10);
        let qasm = circuit.qasm_tfd_stage();
        let lines: Vec<&str> = qasm.lines().collect();
        // 3 gates per throat qubit
        assert_eq!(lines.len(), 3 * circuit.throat_qubits);
        assert_eq!(lines[0], "h q[0];");
        assert!(lines[1].starts_with("ry(") && lines[1].ends_with("q[0];"));
        assert_eq!(lines[2], "cx q[0], q[5];");
        assert_eq!(*lines.last().unwrap(), "cx q[4], q[9];");
    }

    #[test]
    fn phase_conjugate_stage_targets_middle_throat() {
        let circuit = WormholeCircuit::new(10);
        let qasm = circuit.qasm_phase_conjugate_stage();
        let expected_first = format!(
            "ry({}) q[2];  // Phase conjugate trigger",
            crate::constants::theta_pc_rad()
        );
        assert_eq!(qasm.lines().next().unwrap(), expected_first);
        assert_eq!(qasm.lines().count(), 5);
    }

    #[test]
    fn full_qasm_structure() {
        let circuit = WormholeCircuit::new(10);
        let qasm = circuit.full_qasm();
        assert!(qasm.starts_with("OPENQASM 2.0;\ninclude \"qelib1.inc\";"));
        assert!(qasm.contains("qreg q[10];"));
        assert!(qasm.contains("creg c[10];"));
        assert!(qasm.ends_with("measure q -> c;"));
        // One cx per Bell pair, plus (n-1) per scrambling layer in each of
        // stages 3 and 5
        let cx_count = qasm.matches("cx q[").count();
        assert_eq!(cx_count, 5 + 2 * 3 * 9);
    }

    #[test]
    fn reverse_scrambling_mirrors_forward() {
        let circuit = WormholeCircuit::new(6);
        let forward = circuit.qasm_scrambling();
        let reverse = circuit.qasm_reverse_scrambling();

        assert_eq!(forward.lines().count(), reverse.lines().count());
        // Forward opens with layer 0 rotations, reverse opens with the last
        // CX of the last layer
        assert!(forward.lines().next().unwrap().starts_with("rz(0)"));
        assert_eq!(reverse.lines().next().unwrap(), "cx q[4], q[5];");
        // Layer-2 angle on q[0] appears negated in the reverse block
        assert!(forward.contains("rz(0.2) q[0];"));
        assert!(reverse.contains("rz(-0.2) q[0];"));
    }

    #[test]
    fn degenerate_registers_emit_trivial_circuits() {
        // No CX chain exists below two qubits; the builders must still
        // produce a well-formed (if useless) circuit.
        for n in [0, 1] {
            let circuit = WormholeCircuit::new(n);
            let qasm = circuit.full_qasm();
            assert!(qasm.starts_with("OPENQASM 2.0;"));
            assert!(qasm.contains(&format!("qreg q[{}];", n)));
            assert!(qasm.ends_with("measure q -> c;"));
            assert!(!qasm.contains("cx q["));
        }
    }

    #[test]
    fn description_lists_all_stages() {
        let circuit = WormholeCircuit::new(10);
        let desc = circuit.circuit_description();
        for name in [
            "TFD_STATE",
            "MESSAGE_INJECTION",
            "SCRAMBLING",
            "PHASE_CONJUGATE_TRIGGER",
            "REVERSE_SCRAMBLING",
        ] {
            assert!(desc.contains(name), "missing stage {}", name);
        }
        assert!(desc.contains("TRAVERSABLE WORMHOLE CIRCUIT (10 qubits)"));
        assert!(desc.contains("Gates: H → RY(51.843°) → CX"));
    }

    #[test]
    fn stage_gate_lists() {
        let stages = define_stages();
        assert_eq!(stages[2].gates.len(), 6); // RZ, CX × 3 layers
        assert_eq!(stages[2].gates[0], "RZ");
        assert_eq!(stages[4].gates[0], "CX†");
        assert_eq!(stages[3].gates, vec![format!("RY({}°)", THETA_PC_DEG)]);
    }
}
