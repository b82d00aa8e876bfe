//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every operation, whatever the UI. It dispatches to the matching command and
//! returns its `CmdResult` untouched.
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{NewProduct, ProductPatch, Scope};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct InventoryApi<S: DataStore> {
    store: S,
    paths: commands::StorePaths,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S, paths: commands::StorePaths) -> Self {
        Self { store, paths }
    }

    pub fn add_product(&mut self, scope: Scope, new: NewProduct) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, scope, new)
    }

    pub fn list_products(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, scope)
    }

    pub fn view_product(&self, scope: Scope, id: u64) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, scope, id)
    }

    pub fn search_products(&self, scope: Scope, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, scope, term)
    }

    pub fn update_product(
        &mut self,
        scope: Scope,
        id: u64,
        patch: &ProductPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, scope, id, patch)
    }

    pub fn delete_product(&mut self, scope: Scope, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, scope, id)
    }

    pub fn init(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn document_path(&self, scope: Scope) -> Result<PathBuf> {
        self.store.document_path(scope)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StorePaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> InventoryApi<InMemoryStore> {
        let paths = StorePaths {
            project: PathBuf::from("/nonexistent/project"),
            global: PathBuf::from("/nonexistent/global"),
        };
        InventoryApi::new(InMemoryStore::new(), paths)
    }

    #[test]
    fn dispatches_mutations_to_the_store() {
        let mut api = api();
        api.init(Scope::Project).unwrap();
        api.add_product(Scope::Project, NewProduct::new("Pen", "Office", 10, 1.5))
            .unwrap();
        api.update_product(Scope::Project, 1, &ProductPatch::default().with_quantity(9))
            .unwrap();

        let listed = api.list_products(Scope::Project).unwrap().listed_products;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].quantity, 9);

        api.delete_product(Scope::Project, 1).unwrap();
        assert!(api.list_products(Scope::Project).unwrap().listed_products.is_empty());
    }

    #[test]
    fn dispatches_queries_per_scope() {
        let mut api = api();
        api.add_product(Scope::Global, NewProduct::new("Blue Shirt", "Clothes", 1, 20.0))
            .unwrap();

        assert_eq!(
            api.search_products(Scope::Global, "SHIRT").unwrap().listed_products.len(),
            1
        );
        assert!(api
            .search_products(Scope::Project, "shirt")
            .unwrap()
            .listed_products
            .is_empty());
        assert_eq!(api.view_product(Scope::Global, 1).unwrap().listed_products.len(), 1);
    }
}
