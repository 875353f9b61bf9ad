use crate::catalog::AppEntry;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of reading the catalog file.
///
/// Absent and unparseable files both yield an empty catalog so the tool
/// keeps working against a fresh or damaged checkout; the variants let the
/// caller decide how loudly to report the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from an existing catalog file.
    Loaded,
    /// File absent; starting from an empty catalog.
    Missing,
    /// File present but unreadable or unparseable; starting from an empty
    /// catalog. Saving will overwrite whatever is there.
    Malformed,
}

/// Reads and rewrites the catalog file wholesale.
///
/// The catalog is always loaded fresh from disk per operation and written
/// back in full. No locking and no atomic replace; concurrent invocations
/// are not a supported scenario.
pub struct CatalogStore {
    catalog_path: PathBuf,
}

impl CatalogStore {
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Self {
        Self {
            catalog_path: catalog_path.as_ref().to_path_buf(),
        }
    }

    /// Load the full catalog, preserving on-disk order.
    pub fn load(&self) -> (Vec<AppEntry>, LoadSource) {
        let raw = match fs::read_to_string(&self.catalog_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return (Vec::new(), LoadSource::Missing);
            }
            Err(_) => return (Vec::new(), LoadSource::Malformed),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => (entries, LoadSource::Loaded),
            Err(_) => (Vec::new(), LoadSource::Malformed),
        }
    }

    /// Overwrite the catalog file with the full entry list, pretty-printed.
    pub fn save(&self, entries: &[AppEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.catalog_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_entry(name: &str) -> AppEntry {
        AppEntry {
            id: format!("id-{name}"),
            name: name.to_string(),
            version: "1.0".to_string(),
            category: "Utility".to_string(),
            description: "a tool".to_string(),
            download_url: format!("downloads/{name}.zip"),
            icon_url: "https://via.placeholder.com/64".to_string(),
            date: "2026-08-26T10:00:00".to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_catalog() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("data.json"));
        let (entries, source) = store.load();
        assert!(entries.is_empty());
        assert_eq!(source, LoadSource::Missing);
    }

    #[test]
    fn malformed_file_loads_as_empty_catalog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json []").unwrap();
        let store = CatalogStore::new(&path);
        let (entries, source) = store.load();
        assert!(entries.is_empty());
        assert_eq!(source, LoadSource::Malformed);
    }

    #[test]
    fn save_then_load_round_trips_entries_in_order() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("data.json"));
        let entries = vec![sample_entry("alpha"), sample_entry("beta")];
        store.save(&entries).unwrap();

        let (loaded, source) = store.load();
        assert_eq!(source, LoadSource::Loaded);
        assert_eq!(loaded, entries);
    }

    #[test]
    fn save_writes_camel_case_wire_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = CatalogStore::new(&path);
        store.save(&[sample_entry("alpha")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"downloadUrl\""));
        assert!(raw.contains("\"iconUrl\""));
        assert!(!raw.contains("download_url"));
    }

    #[test]
    fn save_overwrites_prior_contents_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = CatalogStore::new(&path);
        store
            .save(&[sample_entry("alpha"), sample_entry("beta")])
            .unwrap();
        store.save(&[sample_entry("gamma")]).unwrap();

        let (loaded, _) = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "gamma");
    }
}
