//! Core FortuneStore implementation

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A single cracked fortune
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fortune {
    /// Unique record id
    pub id: String,
    /// The error message as entered
    pub original: String,
    /// Generated wisdom (may embed `<br>` and `<strong>` markers)
    pub wisdom: String,
    /// Name of the style that produced the wisdom
    pub style: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl Fortune {
    /// Create a fortune stamped with the current time and a fresh id
    pub fn new(original: impl Into<String>, wisdom: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            original: original.into(),
            wisdom: wisdom.into(),
            style: style.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether two fortunes refer to the same input cracked in the same style
    pub fn same_crack(&self, other: &Fortune) -> bool {
        self.original == other.original && self.style == other.style
    }
}

/// Capacity limits for the two lists
#[derive(Debug, Clone, Copy)]
pub struct StoreLimits {
    /// Maximum history entries kept
    pub max_history: usize,
    /// Maximum favorites kept
    pub max_favorites: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_history: crate::DEFAULT_MAX_HISTORY,
            max_favorites: crate::DEFAULT_MAX_FAVORITES,
        }
    }
}

/// Shape of an export file (also accepted by [`FortuneStore::import`])
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportData {
    /// History list, newest first
    #[serde(default)]
    pub history: Vec<Fortune>,
    /// Favorites list, newest first
    #[serde(default)]
    pub favorites: Vec<Fortune>,
    /// When the export was produced
    #[serde(rename = "exportDate")]
    pub export_date: Option<DateTime<Utc>>,
}

/// The fortune store
pub struct FortuneStore {
    /// Base path for storage
    base_path: PathBuf,
    limits: StoreLimits,
}

impl FortuneStore {
    /// Open or create a fortune store at the given path
    pub fn open(path: impl AsRef<Path>, limits: StoreLimits) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        Ok(Self { base_path, limits })
    }

    /// Capacity limits this store enforces
    pub fn limits(&self) -> StoreLimits {
        self.limits
    }

    fn history_path(&self) -> PathBuf {
        self.base_path.join("history.json")
    }

    fn favorites_path(&self) -> PathBuf {
        self.base_path.join("favorites.json")
    }

    /// Fortune history, newest first
    pub fn history(&self) -> Vec<Fortune> {
        self.read_list(&self.history_path())
    }

    /// Favorite fortunes, newest first
    pub fn favorites(&self) -> Vec<Fortune> {
        self.read_list(&self.favorites_path())
    }

    /// Prepend a fortune to history, evicting the oldest past capacity
    pub fn add_history(&self, fortune: &Fortune) -> Result<()> {
        let mut history = self.history();
        history.insert(0, fortune.clone());
        history.truncate(self.limits.max_history);
        self.write_list(&self.history_path(), &history)
    }

    /// Toggle a fortune in favorites, matching on `(original, style)`.
    ///
    /// Returns `true` if the fortune is now favorited, `false` if this
    /// call removed it.
    pub fn toggle_favorite(&self, fortune: &Fortune) -> Result<bool> {
        let mut favorites = self.favorites();
        if let Some(pos) = favorites.iter().position(|f| f.same_crack(fortune)) {
            favorites.remove(pos);
            self.write_list(&self.favorites_path(), &favorites)?;
            Ok(false)
        } else {
            favorites.insert(0, fortune.clone());
            favorites.truncate(self.limits.max_favorites);
            self.write_list(&self.favorites_path(), &favorites)?;
            Ok(true)
        }
    }

    /// Whether a matching `(original, style)` entry is in favorites
    pub fn is_favorite(&self, fortune: &Fortune) -> bool {
        self.favorites().iter().any(|f| f.same_crack(fortune))
    }

    /// Look up a fortune by full or prefix id, searching history then favorites
    pub fn find_by_id(&self, id: &str) -> Option<Fortune> {
        self.history()
            .into_iter()
            .chain(self.favorites())
            .find(|f| f.id == id || f.id.starts_with(id))
    }

    /// Serialize both lists as pretty-printed JSON
    pub fn export(&self) -> Result<String> {
        let data = ExportData {
            history: self.history(),
            favorites: self.favorites(),
            export_date: Some(Utc::now()),
        };
        serde_json::to_string_pretty(&data).context("Failed to serialize export data")
    }

    /// Replace both stored lists from an export document.
    ///
    /// The input is fully parsed before anything is written, so malformed
    /// JSON leaves the store untouched. Imported lists replace (not merge)
    /// the stored ones and are truncated to capacity.
    pub fn import(&self, json: &str) -> Result<()> {
        let mut data: ExportData = serde_json::from_str(json).context("Invalid export data")?;
        data.history.truncate(self.limits.max_history);
        data.favorites.truncate(self.limits.max_favorites);
        self.write_list(&self.history_path(), &data.history)?;
        self.write_list(&self.favorites_path(), &data.favorites)?;
        Ok(())
    }

    /// Read a list file; a missing, unreadable, or malformed file is an
    /// empty list, never an error to the caller
    fn read_list(&self, path: &Path) -> Vec<Fortune> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!("Ignoring unreadable fortune list {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }

    fn write_list(&self, path: &Path, list: &[Fortune]) -> Result<()> {
        let json = serde_json::to_string(list)?;
        fs::write(path, json).context(format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> FortuneStore {
        FortuneStore::open(temp.path().join("store"), StoreLimits::default()).unwrap()
    }

    fn fortune(original: &str, style: &str) -> Fortune {
        Fortune::new(original, format!("wisdom for {}", original), style)
    }

    #[test]
    fn test_history_most_recent_first() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.add_history(&fortune("E1", "confucius")).unwrap();
        store.add_history(&fortune("E2", "confucius")).unwrap();

        let history = store.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].original, "E2");
        assert_eq!(history[1].original, "E1");
    }

    #[test]
    fn test_history_evicts_oldest_at_capacity() {
        let temp = TempDir::new().unwrap();
        let store = FortuneStore::open(
            temp.path(),
            StoreLimits {
                max_history: 3,
                max_favorites: 3,
            },
        )
        .unwrap();

        for n in 0..5 {
            store.add_history(&fortune(&format!("E{}", n), "zen")).unwrap();
        }

        let history = store.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].original, "E4");
        assert_eq!(history[2].original, "E2");
    }

    #[test]
    fn test_favorite_toggle_removes_on_second_call() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let f = fortune("E1", "haiku");

        assert!(store.toggle_favorite(&f).unwrap());
        assert!(store.is_favorite(&f));

        // Same (original, style) pair, different id
        let again = fortune("E1", "haiku");
        assert!(!store.toggle_favorite(&again).unwrap());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_favorites_dedup_on_original_and_style() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.toggle_favorite(&fortune("E1", "haiku")).unwrap();
        store.toggle_favorite(&fortune("E1", "zen")).unwrap();

        // Different style is a different favorite
        assert_eq!(store.favorites().len(), 2);
    }

    #[test]
    fn test_corrupt_list_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        std::fs::write(temp.path().join("store").join("history.json"), "{not json").unwrap();
        assert!(store.history().is_empty());

        // And the store recovers on the next write
        store.add_history(&fortune("E1", "zen")).unwrap();
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_export_import_replaces_lists() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.add_history(&fortune("E1", "zen")).unwrap();
        store.toggle_favorite(&fortune("E1", "zen")).unwrap();
        let exported = store.export().unwrap();
        assert!(exported.contains("exportDate"));

        let other = FortuneStore::open(temp.path().join("other"), StoreLimits::default()).unwrap();
        other.add_history(&fortune("OLD", "haiku")).unwrap();
        other.import(&exported).unwrap();

        let history = other.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].original, "E1");
        assert_eq!(other.favorites().len(), 1);
    }

    #[test]
    fn test_import_malformed_leaves_store_untouched() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store.add_history(&fortune("E1", "zen")).unwrap();

        assert!(store.import("{definitely not json").is_err());
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].original, "E1");
    }

    #[test]
    fn test_find_by_id_prefix() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let f = fortune("E1", "zen");
        store.add_history(&f).unwrap();

        let found = store.find_by_id(&f.id[..8]).unwrap();
        assert_eq!(found.id, f.id);
        assert!(store.find_by_id("zzzzzzzz").is_none());
    }
}
