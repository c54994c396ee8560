//! Startup orchestration.
//!
//! # Responsibilities
//! - Decide between a user-supplied config path and the canonical one
//! - Build the shared settings holder
//!
//! # Design Decisions
//! - The holder starts from defaults, so a failed load never leaves a
//!   half-built configuration behind

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{defaults, has_custom, Result, Settings};

/// Build the settings holder for this process.
///
/// `config_flag` is the raw value of the user's config path flag; an empty
/// string means none was given. `base` overrides the base path, which
/// otherwise defaults to the compiled-in storage path.
pub fn bootstrap(config_flag: &str, base: Option<PathBuf>) -> Result<Arc<Settings>> {
    let base = base.unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_PATH));
    let settings = Arc::new(Settings::new(base));

    if has_custom(config_flag) {
        settings.reload_from(Path::new(config_flag))?;
        return Ok(settings);
    }

    match settings.reload() {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            tracing::info!(
                path = %settings.canonical_path().display(),
                "No config file found, using defaults"
            );
        }
        Err(e) => return Err(e),
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ServerOptions};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_custom_path_is_loaded() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("custom.yaml");
        fs::write(&custom, "port: 9100\n").unwrap();

        let settings = bootstrap(custom.to_str().unwrap(), Some(dir.path().into())).unwrap();
        assert_eq!(settings.current().port, 9100);
    }

    #[test]
    fn test_missing_custom_path_fails() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("missing.yaml");

        let err = bootstrap(custom.to_str().unwrap(), Some(dir.path().into())).err().unwrap();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_canonical_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = bootstrap("", Some(dir.path().into())).unwrap();
        assert_eq!(*settings.current(), ServerOptions::default());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_missing_canonical_logs_no_warning() {
        let dir = TempDir::new().unwrap();
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            bootstrap("", Some(dir.path().into())).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("No config file found, using defaults"), "{output}");
        assert!(!output.contains("WARN"), "{output}");
    }

    #[test]
    fn test_canonical_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("etc")).unwrap();
        fs::write(dir.path().join("etc").join("config.yaml"), "debug: true\n").unwrap();

        let settings = bootstrap("", Some(dir.path().into())).unwrap();
        assert!(settings.current().debug);
    }

    #[test]
    fn test_malformed_canonical_fails() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("etc")).unwrap();
        fs::write(dir.path().join("etc").join("config.yaml"), "allow_ip: 12\n").unwrap();

        let err = bootstrap("", Some(dir.path().into())).err().unwrap();
        assert!(matches!(err, ConfigError::Schema { .. }));
    }
}
