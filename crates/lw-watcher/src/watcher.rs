use crate::error::{Result, WatcherError};
use crate::filter::ChangeFilter;

use std::path::{Path, PathBuf};

use log::{debug, error, info};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches a directory tree until dropped.
pub struct SourceWatcher {
    root: PathBuf,
    _watcher: RecommendedWatcher,
}

impl SourceWatcher {
    /// Watch `directory` recursively, calling `on_change` for every create or
    /// modify event outside the `ignore`d path components.
    ///
    /// `on_change` runs on the notify backend's thread and may fire more than
    /// once for a single save.
    pub fn start<F>(directory: &Path, ignore: Vec<String>, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let root = directory
            .canonicalize()
            .map_err(|e| WatcherError::directory(directory.to_path_buf(), e))?;
        let filter = ChangeFilter::new(root.clone(), ignore);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if filter.is_change(&event) => {
                debug!("Change detected: {:?} {:?}", event.kind, event.paths);
                on_change();
            }
            Ok(_) => {}
            Err(e) => error!("Watch error: {e}"),
        })
        .map_err(|e| WatcherError::notify(root.clone(), e))?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| WatcherError::notify(root.clone(), e))?;

        info!("Watching {} for changes", root.display());

        Ok(Self {
            root,
            _watcher: watcher,
        })
    }

    /// Canonical path of the watched directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
