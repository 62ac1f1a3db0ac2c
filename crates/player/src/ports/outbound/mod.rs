//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the PersonaForge API and read the
//! wall clock without depending on concrete implementations.

pub mod api_port;
pub mod clock_port;
pub mod raw_api_port;

pub use api_port::{ApiError, PersonaApiPort};
pub use clock_port::ClockPort;
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use api_port::MockPersonaApiPort;
#[cfg(any(test, feature = "testing"))]
pub use clock_port::MockClockPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
