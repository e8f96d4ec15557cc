pub mod runner;
pub mod state;

pub use runner::{SettleHook, SimulatedOperation};
pub use state::{OperationState, OperationStatus};
