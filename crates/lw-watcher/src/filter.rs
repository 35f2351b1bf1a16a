use std::path::{Component, Path, PathBuf};

use notify::{Event, EventKind};

/// Decides which filesystem events count as a source change.
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    root: PathBuf,
    ignore: Vec<String>,
}

impl ChangeFilter {
    pub fn new(root: PathBuf, ignore: Vec<String>) -> Self {
        Self { root, ignore }
    }

    /// True for a create or modify event touching at least one path
    /// outside every ignored directory.
    pub fn is_change(&self, event: &Event) -> bool {
        matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
            && event.paths.iter().any(|path| !self.is_ignored(path))
    }

    /// Components are matched below the watched root only.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|component| match component {
            Component::Normal(name) => self.ignore.iter().any(|ignored| name == ignored.as_str()),
            _ => false,
        })
    }
}
