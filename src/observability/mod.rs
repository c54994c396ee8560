//! Observability subsystem.
//!
//! Only structured logging lives here; every other module emits events
//! through the `tracing` macros.

pub mod logging;

pub use logging::init_logging;
