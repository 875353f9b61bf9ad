use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Icon URL stored when no icon file is supplied for an entry.
pub const PLACEHOLDER_ICON_URL: &str = "https://via.placeholder.com/64";

/// Fixed layout of a store checkout, anchored at the repository root.
///
/// Every agent receives this by reference; nothing reads paths from
/// globals or the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    root: PathBuf,
    pub catalog_file: PathBuf,
    pub downloads_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub default_version: &'static str,
    pub default_category: &'static str,
}

impl StoreConfig {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            catalog_file: root.join("data.json"),
            downloads_dir: root.join("downloads"),
            icons_dir: root.join("icons"),
            default_version: "1.0",
            default_category: "Utility",
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the downloads and icons directories if they are missing.
    pub fn ensure_layout(&self) -> Result<()> {
        fs::create_dir_all(&self.downloads_dir)?;
        fs::create_dir_all(&self.icons_dir)?;
        Ok(())
    }

    /// Relative path recorded in `downloadUrl` for a given filename.
    /// The catalog always stores paths relative to the store root so the
    /// published JSON is independent of where the checkout lives.
    pub fn download_url(&self, file_name: &str) -> String {
        format!("downloads/{file_name}")
    }

    /// Relative path recorded in `iconUrl` for a given icon filename.
    pub fn icon_url(&self, icon_name: &str) -> String {
        format!("icons/{icon_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_layout_creates_asset_directories() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        config.ensure_layout().unwrap();
        assert!(config.downloads_dir.is_dir());
        assert!(config.icons_dir.is_dir());
    }

    #[test]
    fn ensure_layout_tolerates_existing_directories() {
        let dir = tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        config.ensure_layout().unwrap();
        config.ensure_layout().unwrap();
    }

    #[test]
    fn urls_are_relative_to_the_store_root() {
        let config = StoreConfig::new("/srv/store");
        assert_eq!(config.download_url("app.zip"), "downloads/app.zip");
        assert_eq!(config.icon_url("icon.png"), "icons/icon.png");
    }
}
