//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     --config flag set? → load that file
//!     otherwise          → <base>/etc/config.*, defaults when absent
//!
//! Signals (signals.rs):
//!     SIGHUP          → settings.reload()
//!     SIGINT (Ctrl-C) → stop waiting
//! ```
//!
//! # Design Decisions
//! - Fail fast: a custom config path that cannot be loaded is fatal
//! - A missing canonical file is not an error; defaults stay in force

pub mod signals;
pub mod startup;
