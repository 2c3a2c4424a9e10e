// benches/circuit_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonic_frame_sim::advantage::max_advantage_qasm;
use harmonic_frame_sim::ccce::{ccce_state, heal};
use harmonic_frame_sim::wormhole::WormholeCircuit;

fn benchmark_circuit_generation(c: &mut Criterion) {
    c.bench_function("wormhole_qasm_10_qubits", |b| {
        let circuit = WormholeCircuit::new(10);
        b.iter(|| black_box(circuit.full_qasm()));
    });

    c.bench_function("wormhole_qasm_156_qubits", |b| {
        let circuit = WormholeCircuit::new(156);
        b.iter(|| black_box(circuit.full_qasm()));
    });

    c.bench_function("max_advantage_qasm_156_qubits", |b| {
        b.iter(|| black_box(max_advantage_qasm(156)));
    });
}

fn benchmark_ccce_metrics(c: &mut Criterion) {
    c.bench_function("ccce_state_and_healing", |b| {
        b.iter(|| {
            let state = ccce_state(black_box(0.65), black_box(0.45), black_box(0.35));
            black_box(heal(state.gamma_decoherence))
        });
    });
}

criterion_group!(benches, benchmark_circuit_generation, benchmark_ccce_metrics);
criterion_main!(benches);
