//! Simulation of the BB84 quantum key distribution protocol.
//!
//! ```no_run
//! use bb84_qkd::bb84::{self, Bb84Config, Eavesdropper};
//!
//! let config = Bb84Config::new(200)
//!     .with_sample_size(50)
//!     .with_eavesdropper(Eavesdropper::new())
//!     .with_seed(7);
//! let result = bb84::run(&config)?;
//! println!("{:?}", result.outcome);
//! # Ok::<(), bb84_qkd::errors::ProtocolError>(())
//! ```

mod core;
pub mod protocols;

pub use crate::core::{
    Basis, DensityMatrixBackend, Gate, IdealBackend, Measurement, MeasurementResult,
    QuantumState, Qubit, QubitBackend, errors, utils,
};
pub use crate::protocols::bb84;
