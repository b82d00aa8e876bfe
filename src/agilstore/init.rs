use crate::api::{InventoryApi, StorePaths};
use crate::config::StoreConfig;
use crate::error::{InventoryError, Result};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the global data directory.
pub const HOME_ENV: &str = "AGILSTORE_HOME";

pub struct InventoryContext {
    pub api: InventoryApi<FileStore>,
    pub scope: Scope,
    pub config: StoreConfig,
}

/// The per-user data directory, honoring `AGILSTORE_HOME`.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "agilstore", "agilstore")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InventoryError::Store("Could not determine the data directory".to_string()))
}

/// Resolves directories and config for `cwd` and builds the API over a `FileStore`.
///
/// `document` pins the data file to an explicit path (relative paths resolve against
/// `cwd`); scope and the `data-file` setting then no longer pick the location.
pub fn initialize(
    cwd: &Path,
    use_global: bool,
    document: Option<PathBuf>,
) -> Result<InventoryContext> {
    let paths = StorePaths {
        project: cwd.to_path_buf(),
        global: global_data_dir()?,
    };

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config = StoreConfig::load(paths.scope_dir(scope))?;

    let mut store = FileStore::new(paths.project.clone(), paths.global.clone())
        .with_data_file(&config.data_file);
    if let Some(path) = document {
        store = store.with_document(cwd.join(path));
    }

    Ok(InventoryContext {
        api: InventoryApi::new(store, paths),
        scope,
        config,
    })
}
