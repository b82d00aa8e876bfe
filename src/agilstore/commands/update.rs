use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory;
use crate::model::{ProductPatch, Scope};
use crate::store::DataStore;
use tracing::{debug, info};

/// Applies `patch` to product `id`. A missing product is reported, and nothing is saved.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: u64,
    patch: &ProductPatch,
) -> Result<CmdResult> {
    if patch.is_blank() {
        debug!(id, "Update carries no changes");
    }

    let mut products = store.load(scope);
    let mut result = CmdResult::default();

    let Some(updated) = inventory::update(&mut products, id, patch).cloned() else {
        result.add_message(CmdMessage::warning(format!(
            "No product found with ID {}.",
            id
        )));
        return Ok(result);
    };

    store.save(scope, &products)?;
    info!(id, "Product updated");

    result.add_message(CmdMessage::success(format!(
        "Product ID {} updated.",
        id
    )));
    Ok(result.with_affected_products(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::model::NewProduct;
    use crate::store::memory::fixtures::StoreFixture;

    fn pen_store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_product(NewProduct::new("Pen", "Office", 10, 1.5), Scope::Project)
            .store
    }

    #[test]
    fn updates_only_given_fields() {
        let mut store = pen_store();
        let patch = ProductPatch::default().with_quantity(4).with_name("Blue Pen");
        run(&mut store, Scope::Project, 1, &patch).unwrap();

        let stored = &store.load(Scope::Project)[0];
        assert_eq!(stored.name, "Blue Pen");
        assert_eq!(stored.category, "Office");
        assert_eq!(stored.quantity, 4);
        assert_eq!(stored.price, 1.5);
    }

    #[test]
    fn blank_patch_leaves_product_unchanged() {
        let mut store = pen_store();
        let before = store.load(Scope::Project);
        let patch = ProductPatch::default().with_name("").with_category("   ");
        let result = run(&mut store, Scope::Project, 1, &patch).unwrap();

        assert_eq!(store.load(Scope::Project), before);
        assert_eq!(result.affected_products, before);
    }

    #[test]
    fn missing_product_does_not_save() {
        let mut store = pen_store();
        store.set_simulate_write_error(true);
        let patch = ProductPatch::default().with_name("Ghost");
        let result = run(&mut store, Scope::Project, 42, &patch).unwrap();

        assert!(result.has_warnings());
        assert!(result.affected_products.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = pen_store();
        store.set_simulate_write_error(true);
        let patch = ProductPatch::default().with_price(2.0);
        let err = run(&mut store, Scope::Project, 1, &patch).unwrap_err();

        assert!(matches!(err, InventoryError::Io(_)));
        assert_eq!(store.load(Scope::Project)[0].price, 1.5);
    }
}
