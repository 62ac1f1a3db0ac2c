//! PersonaForge Player crate.
//!
//! Chat client for the PersonaForge API: the conversation state machine and
//! management use cases (`application`), their port contracts (`ports`), the
//! HTTP and clock adapters (`infrastructure`), and the terminal front end
//! (`ui`, `runner`).

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod session_types;
pub mod ui;

pub use config::PlayerConfig;
