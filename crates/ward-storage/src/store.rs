//! The JSON file store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use ward_core::BedRegistry;

use crate::error::{Result, StoreError};
use crate::record::BedRecord;

/// Loads and saves the bed registry as one JSON array.
///
/// Saves go through a sibling temp file plus rename, so a crash mid-write
/// never leaves a truncated bed file behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store over the given file path. Nothing is touched until
    /// [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the registry from disk.
    ///
    /// A missing file is not an error: it yields an empty registry, which
    /// is the state before the first bed was ever registered.
    pub fn load(&self) -> Result<BedRegistry> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "bed file absent, starting empty");
            return Ok(BedRegistry::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<BedRecord> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        let beds = records
            .into_iter()
            .map(BedRecord::into_bed)
            .collect::<Result<Vec<_>>>()?;
        debug!(path = %self.path.display(), beds = beds.len(), "loaded bed file");
        Ok(BedRegistry::from_beds(beds)?)
    }

    /// Saves the registry to disk as pretty-printed JSON.
    pub fn save(&self, registry: &BedRegistry) -> Result<()> {
        let records: Vec<BedRecord> = registry.beds().iter().map(BedRecord::from).collect();
        let json = serde_json::to_string_pretty(&records).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), beds = records.len(), "saved bed file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use ward_core::BedId;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("beds.json"))
    }

    fn id(s: &str) -> BedId {
        BedId::parse(s).unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty_registry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut reg = BedRegistry::new();
        for n in ["10", "2", "1"] {
            reg.add(id(n)).unwrap();
        }
        let t0: DateTime<Utc> = "2026-08-20T08:00:00Z".parse().unwrap();
        reg.occupy_at(&id("2"), "Ana Silva", t0).unwrap();
        reg.occupy_at(&id("10"), "Jorge", t0).unwrap();
        reg.release_at(&id("10"), t0 + Duration::minutes(90)).unwrap();
        reg.start_cleaning_at(&id("1"), t0).unwrap();

        store.save(&reg).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, reg);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut reg = BedRegistry::new();
        reg.add(id("1")).unwrap();
        store.save(&reg).unwrap();

        reg.remove(&id("1")).unwrap();
        store.save(&reg).unwrap();

        assert!(store.load().unwrap().is_empty());
        // No temp file left behind.
        assert!(!dir.path().join("beds.json.tmp").exists());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            StoreError::Json { .. }
        ));
    }

    #[test]
    fn invariant_violations_are_corrupt_not_parse_errors() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"numero": "1", "status": "occupied"}]"#,
        )
        .unwrap();
        assert!(store.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn duplicate_bed_numbers_fail_to_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"numero": "1", "status": "available"},
                {"numero": "1", "status": "ready"}]"#,
        )
        .unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            StoreError::Registry(_)
        ));
    }
}
