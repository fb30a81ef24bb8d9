//! Quantum Key Distribution (QKD) Protocols.
//!
//! - **BB84**: the first quantum key distribution protocol, simulated under
//!   an optional intercept-resend attack.

pub mod bb84;
