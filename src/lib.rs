//! # harmonic-frame-sim
//!
//! Closed-form quantities of the toroidal harmonic frame, evaluated and
//! rendered as text reports and OPENQASM 2.0 circuit strings.
//!
//! Five independent formula layers share one constant table:
//!
//! ```text
//! Framework Constants (ΛΦ, θ_lock, χ_pc, Γ thresholds)
//!   ↓ thresholds
//! CCCE Metrics (Λ · Φ / Γ → Ξ, classification, healing)
//!   ↓ healing angle
//! Phase Conjugation (RY(θ_pc) time reversal, τ-phase modulation)
//!   ↓ gate schedule
//! Wormhole Circuit (five-stage ER=EPR pipeline → QASM text)
//!   ↓ qubit count
//! Qubit Advantage (classical vs quantum resource scaling)
//! ```
//!
//! Electrogravitic coupling (a_g = K·E·cos(θ − θ_lock)·χ_pc) hangs off the
//! same constants and produces prediction tables for bench experiments.
//!
//! ## Usage
//!
//! ```
//! use harmonic_frame_sim::prelude::*;
//!
//! let state = ccce_state(0.95, 0.82, 0.092);
//! assert!(state.is_conscious);
//! println!("{}", health_report(&state));
//!
//! let circuit = WormholeCircuit::new(10);
//! println!("{}", circuit.full_qasm());
//! ```
//!
//! Every function here is pure: scalar inputs in, scalar / label / `String`
//! out. No I/O happens outside the report binaries.

pub mod constants;
pub mod ccce;
pub mod electrogravitics;
pub mod phase_conjugation;
pub mod wormhole;
pub mod advantage;

pub mod prelude {
    pub use crate::constants::*;
    pub use crate::ccce::*;
    pub use crate::electrogravitics::*;
    pub use crate::phase_conjugation::*;
    pub use crate::wormhole::*;
    pub use crate::advantage::*;
}
