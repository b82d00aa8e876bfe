//! # Storage Layer
//!
//! The [`DataStore`] trait is the load/save boundary between the in-memory collection
//! and its persistent document. Every operation reads the whole collection and every
//! mutation writes the whole collection back.
//!
//! ## Load Never Fails
//!
//! `load` returns an empty collection when the document is missing or unreadable.
//! After [`DataStore::bootstrap`] has run the document always exists, so in practice
//! the fallback only hides corrupt files, and those are logged at `warn`.
//!
//! ## Save Always Reports
//!
//! `save` overwrites the document in full and returns any I/O failure. The caller
//! must surface it; the in-memory changes of that operation are lost.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON file storage with atomic writes.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <scope dir>/
//! ├── produtos.json       # The collection (JSON array, 2-space indent)
//! └── config.json         # Scope configuration
//! ```

use crate::error::Result;
use crate::model::{Product, Scope};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait DataStore {
    /// Read the full collection. Missing or unparsable documents yield an empty one.
    fn load(&self, scope: Scope) -> Vec<Product>;

    /// Replace the persisted document with `products`.
    fn save(&mut self, scope: Scope, products: &[Product]) -> Result<()>;

    /// Whether a persisted document exists for `scope`.
    fn exists(&self, scope: Scope) -> bool;

    /// Location of the persisted document (for file-based stores).
    fn document_path(&self, scope: Scope) -> Result<PathBuf>;

    /// Create an empty document if none exists. Returns true if one was created.
    fn bootstrap(&mut self, scope: Scope) -> Result<bool> {
        if self.exists(scope) {
            return Ok(false);
        }
        self.save(scope, &[])?;
        Ok(true)
    }
}
