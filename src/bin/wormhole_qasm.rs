//! Dump the full wormhole circuit as OPENQASM 2.0 text.
//!
//! Run: `cargo run --bin wormhole_qasm [n_qubits]` (default 10).

use harmonic_frame_sim::wormhole::WormholeCircuit;

fn main() {
    let n_qubits = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(10);

    let circuit = WormholeCircuit::new(n_qubits);
    println!("{}", circuit.full_qasm());
}
