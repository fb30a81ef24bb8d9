mod backend;
mod basis;
pub mod errors;
mod gates;
mod measurements;
mod state;
pub mod utils;

pub use backend::{DensityMatrixBackend, IdealBackend, Qubit, QubitBackend};
pub use basis::Basis;
pub use gates::Gate;
pub use measurements::{Measurement, MeasurementResult};
pub use state::QuantumState;
