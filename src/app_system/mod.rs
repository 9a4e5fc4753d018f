//! System orchestration, startup, and shutdown logic.

pub mod manager_system;
pub mod telemetry;

pub use manager_system::*;
pub use telemetry::*;
