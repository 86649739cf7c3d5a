//! Configuration file watcher for hot-reloading.
//!
//! Watches the configuration file's directory and hands every successfully
//! re-parsed configuration to a callback. `TilerHandle::watch_config` uses
//! it to feed reloads to a running tiler.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use super::types::{HyprTileConfig, load_config_from_path};

/// Drops reloads that parse to the configuration already delivered.
///
/// Editors fire several events per save (write to temp, rename, etc.).
/// Every event re-reads the file, so the last save of a burst always lands,
/// and the duplicates compare equal and are dropped here.
#[derive(Debug, Default)]
struct ReloadFilter {
    last: Option<HyprTileConfig>,
}

impl ReloadFilter {
    const fn new(initial: Option<HyprTileConfig>) -> Self { Self { last: initial } }

    /// Returns the configuration if it differs from the last one delivered.
    fn accept(&mut self, config: HyprTileConfig) -> Option<HyprTileConfig> {
        if self.last.as_ref() == Some(&config) {
            return None;
        }
        self.last = Some(config.clone());
        Some(config)
    }
}

/// A running configuration watcher. Watching stops when it is dropped.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
}

impl ConfigWatcher {
    /// Returns the path of the watched configuration file.
    #[must_use]
    pub fn path(&self) -> &Path { &self.path }
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").field("path", &self.path).finish_non_exhaustive()
    }
}

/// Returns whether a notify event touches the file named `filename`.
fn affects_file(event: &Event, filename: &OsString) -> bool {
    event.paths.iter().any(|p| p.file_name().is_some_and(|name| name == filename))
}

/// Starts watching `config_path` for changes.
///
/// The parent directory is watched so file replacements (write to a temp
/// file, then rename) are caught. Every change re-reads the file; parse
/// failures are logged and keep the previous configuration, and a reload
/// equal to the last delivered configuration is not reported.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created or the directory
/// cannot be watched.
pub fn watch_config_file<F>(config_path: &Path, mut on_change: F) -> notify::Result<ConfigWatcher>
where
    F: FnMut(HyprTileConfig) + Send + 'static,
{
    let path = config_path.to_path_buf();
    let filename = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
    let reload_path = path.clone();
    let mut filter = ReloadFilter::new(load_config_from_path(&path).ok().map(|(config, _)| config));

    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        let event = match result {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "config watch error");
                return;
            }
        };

        if !event.kind.is_modify() && !event.kind.is_create() {
            return;
        }

        if !affects_file(&event, &filename) {
            return;
        }

        match load_config_from_path(&reload_path) {
            Ok((config, _)) => match filter.accept(config) {
                Some(config) => {
                    tracing::info!(path = %reload_path.display(), "configuration reloaded");
                    on_change(config);
                }
                None => tracing::trace!("configuration unchanged"),
            },
            Err(err) => {
                tracing::warn!(error = %err, "failed to reload configuration, keeping previous");
            }
        }
    })?;

    let watch_path = path.parent().unwrap_or(&path);
    watcher.watch(watch_path, RecursiveMode::NonRecursive)?;
    tracing::debug!(path = %path.display(), "watching configuration file");

    Ok(ConfigWatcher { _watcher: watcher, path })
}
