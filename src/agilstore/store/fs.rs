use super::DataStore;
use crate::config::DEFAULT_DATA_FILE;
use crate::error::{InventoryError, Result};
use crate::model::{Product, Scope};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    project_root: PathBuf,
    global_root: PathBuf,
    data_file: String,
    document_override: Option<PathBuf>,
}

impl FileStore {
    pub fn new(project_root: PathBuf, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
            data_file: DEFAULT_DATA_FILE.to_string(),
            document_override: None,
        }
    }

    /// Use `name` as the document's file name inside the scope directory.
    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    /// Pin the document to an explicit path, regardless of scope.
    pub fn with_document(mut self, path: PathBuf) -> Self {
        self.document_override = Some(path);
        self
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }

    fn scope_root(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Project => &self.project_root,
            Scope::Global => &self.global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(InventoryError::Io)?;
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<Option<Vec<Product>>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(InventoryError::Io(e)),
        };
        let products = serde_json::from_str(&content).map_err(InventoryError::Serialization)?;
        Ok(Some(products))
    }
}

impl DataStore for FileStore {
    fn load(&self, scope: Scope) -> Vec<Product> {
        let path = match self.document_path(scope) {
            Ok(path) => path,
            Err(e) => {
                warn!(error = %e, "No document location, using an empty collection");
                return Vec::new();
            }
        };

        match self.read_document(&path) {
            Ok(Some(products)) => {
                debug!(path = %path.display(), count = products.len(), "Loaded products");
                products
            }
            Ok(None) => {
                debug!(path = %path.display(), "No document yet, using an empty collection");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable document, using an empty collection");
                Vec::new()
            }
        }
    }

    fn save(&mut self, scope: Scope, products: &[Product]) -> Result<()> {
        let path = self.document_path(scope)?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(products).map_err(InventoryError::Serialization)?;

        // Write next to the target and rename over it so readers never see a partial file
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(InventoryError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(InventoryError::Io(e));
        }

        debug!(path = %path.display(), count = products.len(), "Saved products");
        Ok(())
    }

    fn exists(&self, scope: Scope) -> bool {
        self.document_path(scope)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn document_path(&self, scope: Scope) -> Result<PathBuf> {
        if let Some(path) = &self.document_override {
            return Ok(path.clone());
        }
        if self.data_file.trim().is_empty() {
            return Err(InventoryError::Store("Data file name is empty".to_string()));
        }
        Ok(self.scope_root(scope).join(&self.data_file))
    }
}
