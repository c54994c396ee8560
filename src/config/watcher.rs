//! Configuration file watcher for hot reload.
//!
//! Watches the directory holding the canonical config file and calls
//! [`Settings::reload`] when it changes. Consumers are not notified; they
//! observe the new instance on their next [`Settings::current`] read.
//!
//! The directory is created on start, so a base path without any config
//! file yet can still be watched.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::codec::Format;
use crate::config::persist::{self, CONFIG_STEM};
use crate::config::settings::Settings;

/// A watcher that reloads settings when the config file changes.
pub struct SettingsWatcher {
    settings: Arc<Settings>,
    dir: PathBuf,
}

impl SettingsWatcher {
    /// Create a watcher for the canonical config directory of `settings`.
    pub fn new(settings: Arc<Settings>) -> Self {
        let dir = settings
            .canonical_path()
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| settings.base_path().to_path_buf());
        Self { settings, dir }
    }

    /// Directory being watched.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Start watching. The returned handle must be kept alive; dropping it
    /// stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        persist::create_dir(&self.dir, true)
            .map_err(|e| notify::Error::io(e).add_path(self.dir.clone()))?;

        let settings = Arc::clone(&self.settings);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    if !event.paths.iter().any(|p| is_config_file(p)) {
                        return;
                    }
                    tracing::info!("Config file change detected, reloading...");
                    if let Err(e) = settings.reload() {
                        tracing::warn!(error = %e, "Config reload failed, keeping current settings");
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.dir, "Config watcher started");
        Ok(watcher)
    }
}

fn is_config_file(path: &std::path::Path) -> bool {
    path.file_stem().and_then(|s| s.to_str()) == Some(CONFIG_STEM)
        && Format::from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_is_config_file() {
        assert!(is_config_file(Path::new("/srv/etc/config.yaml")));
        assert!(is_config_file(Path::new("/srv/etc/config.json")));
        assert!(is_config_file(Path::new("/srv/etc/config.yml")));
        assert!(!is_config_file(Path::new("/srv/etc/other.yaml")));
        assert!(!is_config_file(Path::new("/srv/etc/config.toml")));
        assert!(!is_config_file(Path::new("/srv/etc/config.bak")));
        assert!(!is_config_file(Path::new("/srv/etc/config")));
    }

    #[test]
    fn test_starts_without_etc_dir() {
        let dir = TempDir::new().unwrap();
        let settings = Arc::new(Settings::new(dir.path()));
        assert!(settings.reload().unwrap_err().is_not_found());

        let etc = dir.path().join("etc");
        assert!(!etc.exists());

        let _handle = SettingsWatcher::new(Arc::clone(&settings)).run().unwrap();
        assert!(etc.is_dir());

        fs::write(etc.join("config.yaml"), "port: 3100\n").unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        while settings.current().port != 3100 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
        }
        assert_eq!(settings.current().port, 3100);
    }

    #[test]
    fn test_reloads_on_change() {
        let dir = TempDir::new().unwrap();
        let etc = dir.path().join("etc");
        fs::create_dir_all(&etc).unwrap();
        let file = etc.join("config.yaml");
        fs::write(&file, "port: 1000\n").unwrap();

        let settings = Arc::new(Settings::new(dir.path()));
        settings.reload().unwrap();

        let watcher = SettingsWatcher::new(Arc::clone(&settings));
        assert_eq!(watcher.dir(), etc.as_path());
        let _handle = watcher.run().unwrap();

        fs::write(&file, "port: 2000\n").unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        while settings.current().port != 2000 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(50));
        }
        assert_eq!(settings.current().port, 2000);
    }
}
