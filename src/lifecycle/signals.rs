//! OS signal handling.
//!
//! # Responsibilities
//! - SIGHUP reloads settings from the canonical path
//! - SIGINT (Ctrl-C) returns control to the caller
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - A failed reload is logged and the current settings stay in force

use std::sync::Arc;

use crate::config::Settings;

/// Serve reload signals until Ctrl-C is received.
#[cfg(unix)]
pub async fn serve_signals(settings: Arc<Settings>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;

    loop {
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res?;
                tracing::info!("Interrupt received, stopping");
                return Ok(());
            }
            _ = hangup.recv() => {
                tracing::info!("SIGHUP received, reloading config");
                if let Err(e) = settings.reload() {
                    tracing::warn!(error = %e, "Config reload failed, keeping current settings");
                }
            }
        }
    }
}

/// Serve reload signals until Ctrl-C is received.
#[cfg(not(unix))]
pub async fn serve_signals(_settings: Arc<Settings>) -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::info!("Interrupt received, stopping");
    Ok(())
}
