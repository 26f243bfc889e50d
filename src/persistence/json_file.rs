use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{PersistenceError, SnapshotWriter};
use crate::actor_framework::Entity;

/// Catalog snapshot kept as a pretty-printed JSON object keyed by record id.
///
/// Each write goes to a `.tmp` sibling first and is then renamed over the
/// target, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last written snapshot.
    ///
    /// A missing file is an empty catalog. An unreadable or malformed file is
    /// an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No snapshot found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let records: BTreeMap<String, T> = serde_json::from_str(&contents)?;
        info!(records = records.len(), "Snapshot loaded");
        Ok(records.into_values().collect())
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl<T: Entity + Serialize> SnapshotWriter<T> for JsonSnapshotFile {
    fn write_snapshot(&self, records: &[T]) -> Result<(), PersistenceError> {
        let keyed: BTreeMap<String, &T> = records
            .iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        let bytes = serde_json::to_vec_pretty(&keyed)?;

        let tmp = self.temp_path();
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), records = keyed.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority, Product};

    fn product(id: &str, stock_quantity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: "Widget".to_string(),
            stock_quantity,
            min_threshold: 10,
            restock_quantity: 60,
            priority: Priority::High,
            category: Category::HighVolume,
        }
    }

    fn write(file: &JsonSnapshotFile, records: &[Product]) -> Result<(), PersistenceError> {
        file.write_snapshot(records)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonSnapshotFile::new(dir.path().join("inventory.json"));

        let records: Vec<Product> = file.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonSnapshotFile::new(dir.path().join("inventory.json"));
        let written = vec![product("P001", 50), product("P002", 7)];

        write(&file, &written).unwrap();
        let loaded: Vec<Product> = file.load().unwrap();

        assert_eq!(loaded, written);
        assert!(!file.temp_path().exists());
    }

    #[test]
    fn test_file_is_keyed_by_product_id() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonSnapshotFile::new(dir.path().join("inventory.json"));
        write(&file, &[product("P001", 50)]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["P001"]["product_id"], "P001");
        assert_eq!(raw["P001"]["stock_quantity"], 50);
        assert_eq!(raw["P001"]["category"], "high_volume");
    }

    #[test]
    fn test_overwrite_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonSnapshotFile::new(dir.path().join("inventory.json"));
        write(&file, &[product("P001", 50), product("P002", 1)]).unwrap();
        write(&file, &[product("P001", 5)]).unwrap();

        let loaded: Vec<Product> = file.load().unwrap();
        assert_eq!(loaded, vec![product("P001", 5)]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Vec<Product>, _> = JsonSnapshotFile::new(path).load();
        assert!(matches!(result, Err(PersistenceError::Serialization(_))));
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = JsonSnapshotFile::new(dir.path().join("missing").join("inventory.json"));

        let result = write(&file, &[product("P001", 1)]);
        assert!(matches!(result, Err(PersistenceError::Io(_))));
    }
}
