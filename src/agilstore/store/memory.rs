use super::DataStore;
use crate::error::{InventoryError, Result};
use crate::model::{Product, Scope};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    documents: HashMap<Scope, Vec<Product>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `save` fail, as a full disk would.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, scope: Scope) -> Vec<Product> {
        self.documents.get(&scope).cloned().unwrap_or_default()
    }

    fn save(&mut self, scope: Scope, products: &[Product]) -> Result<()> {
        if self.simulate_write_error {
            return Err(InventoryError::Io(io::Error::other("simulated write failure")));
        }
        self.documents.insert(scope, products.to_vec());
        Ok(())
    }

    fn exists(&self, scope: Scope) -> bool {
        self.documents.contains_key(&scope)
    }

    fn document_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{:?}", scope).to_lowercase()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::inventory;
    use crate::model::NewProduct;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize, scope: Scope) -> Self {
            let mut products = self.store.load(scope);
            for i in 0..count {
                inventory::add(
                    &mut products,
                    NewProduct::new(format!("Product {}", i + 1), "General", 10, 9.99),
                )
                .unwrap();
            }
            self.store.save(scope, &products).unwrap();
            self
        }

        pub fn with_product(mut self, new: NewProduct, scope: Scope) -> Self {
            let mut products = self.store.load(scope);
            inventory::add(&mut products, new).unwrap();
            self.store.save(scope, &products).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_creates_empty_document_once() {
        let mut store = InMemoryStore::new();
        assert!(!store.exists(Scope::Project));
        assert!(store.bootstrap(Scope::Project).unwrap());
        assert!(store.exists(Scope::Project));
        assert!(!store.bootstrap(Scope::Project).unwrap());
        assert!(store.load(Scope::Project).is_empty());
    }

    #[test]
    fn scopes_are_isolated() {
        let store = fixtures::StoreFixture::new()
            .with_products(2, Scope::Global)
            .store;
        assert_eq!(store.load(Scope::Global).len(), 2);
        assert!(store.load(Scope::Project).is_empty());
    }

    #[test]
    fn simulated_failure_keeps_previous_document() {
        let mut store = fixtures::StoreFixture::new()
            .with_products(1, Scope::Project)
            .store;
        store.set_simulate_write_error(true);
        assert!(store.save(Scope::Project, &[]).is_err());
        assert_eq!(store.load(Scope::Project).len(), 1);
    }
}
