//! Installed-set persistence.
//!
//! The installed set is a JSON array of product ids stored under the lists
//! directory. Reads never fail from the caller's point of view: a missing or
//! corrupt file simply means "nothing installed yet".

use std::path::{Path, PathBuf};

mod logging;

pub use logging::{log_installed, log_removed};

/// File name of the persisted installed set inside the lists directory.
pub const INSTALLED_FILE_NAME: &str = "installed_apps.json";

/// What: Ordered set of installed product ids.
///
/// Details:
/// - Membership semantics of a set; insertion order is kept for persistence and display.
/// - Serializes transparently as a plain JSON array of integers.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct InstalledSet {
    ids: Vec<u32>,
}

impl InstalledSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ids, keeping the first occurrence of duplicates.
    pub fn from_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        let mut out = Self::new();
        for id in ids {
            out.insert(id);
        }
        out
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Append `id` if absent; returns whether the set changed.
    pub fn insert(&mut self, id: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id` if present; returns whether the set changed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&x| x != id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

/// What: Load/save access to the persisted installed set.
///
/// Inputs:
/// - `path`: JSON file holding the id array.
///
/// Output:
/// - `load` always yields a set; `save` reports IO errors to the caller.
#[derive(Clone, Debug)]
pub struct InstallStore {
    path: PathBuf,
}

impl InstallStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at `lists_dir()/installed_apps.json`.
    pub fn default_location() -> Self {
        Self::new(crate::theme::lists_dir().join(INSTALLED_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read the persisted installed set.
    ///
    /// Output:
    /// - The stored ids with duplicates collapsed; an empty set when the file is
    ///   missing, unreadable, or not a JSON array of integers.
    ///
    /// Details:
    /// - Ids are not checked against the catalog; stale ids are filtered at lookup time.
    pub fn load(&self) -> InstalledSet {
        let body = match std::fs::read_to_string(&self.path) {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no installed set on disk");
                return InstalledSet::new();
            }
        };
        match serde_json::from_str::<Vec<u32>>(&body) {
            Ok(ids) => {
                let set = InstalledSet::from_ids(ids);
                tracing::info!(path = %self.path.display(), count = set.len(), "loaded installed set");
                set
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "installed set is malformed; starting empty");
                InstalledSet::new()
            }
        }
    }

    /// What: Overwrite the persisted installed set.
    ///
    /// Inputs:
    /// - `set`: Ids to persist.
    ///
    /// Output:
    /// - `Ok(())` once the file holds exactly `set`; IO errors otherwise.
    ///
    /// Details:
    /// - Writes a sibling temp file and renames it over the target so readers never see
    ///   a truncated array.
    pub fn save(&self, set: &InstalledSet) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string(set)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), count = set.len(), "saved installed set");
        Ok(())
    }
}
