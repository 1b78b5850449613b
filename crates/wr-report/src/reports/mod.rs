//! Report values produced by the assemblers.
//!
//! Reports are plain data: built once per request, never mutated, and
//! serializable as JSON.

mod gateway;
mod network;
mod sensor;

pub use gateway::GatewayReport;
pub use network::NetworkReport;
pub use sensor::SensorReport;
