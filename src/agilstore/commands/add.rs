use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory;
use crate::model::{NewProduct, Scope};
use crate::store::DataStore;
use crate::validation::validate_name;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, scope: Scope, new: NewProduct) -> Result<CmdResult> {
    validate_name(&new.name)?;

    let mut products = store.load(scope);
    let id = inventory::add(&mut products, new)?;
    store.save(scope, &products)?;
    info!(id, "Product added");

    let mut result = CmdResult::default();
    if let Some(product) = inventory::find_by_id(&products, id) {
        result.add_message(CmdMessage::success(format!(
            "Product \"{}\" added with ID {}",
            product.name, id
        )));
        result.affected_products.push(product.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::error::InventoryError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let first = run(
            &mut store,
            Scope::Project,
            NewProduct::new("Pen", "Office", 10, 1.5),
        )
        .unwrap();
        let second = run(
            &mut store,
            Scope::Project,
            NewProduct::new("Paper", "Office", 500, 25.0),
        )
        .unwrap();

        assert_eq!(first.affected_products[0].id, 1);
        assert_eq!(second.affected_products[0].id, 2);
        assert_eq!(store.load(Scope::Project).len(), 2);
    }

    #[test]
    fn added_product_is_viewable() {
        let mut store = InMemoryStore::new();
        let new = NewProduct::new("Pen", "Office", 10, 1.5);
        run(&mut store, Scope::Project, new.clone()).unwrap();

        let viewed = view::run(&store, Scope::Project, 1).unwrap();
        assert_eq!(viewed.listed_products, vec![new.into_product(1)]);
    }

    #[test]
    fn rejects_blank_name_without_saving() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Scope::Project, NewProduct::new(" ", "Office", 1, 1.0))
            .unwrap_err();

        assert!(matches!(err, InventoryError::Validation { .. }));
        assert!(!store.exists(Scope::Project));
    }

    #[test]
    fn exhausted_ids_fail_without_saving() {
        let mut store = InMemoryStore::new();
        let last = NewProduct::new("Last", "Misc", 1, 1.0).into_product(u64::MAX);
        store.save(Scope::Project, &[last.clone()]).unwrap();

        let err = run(&mut store, Scope::Project, NewProduct::new("Pen", "Office", 1, 1.0))
            .unwrap_err();
        assert!(matches!(err, InventoryError::Store(_)));
        assert_eq!(store.load(Scope::Project), vec![last]);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let err = run(&mut store, Scope::Project, NewProduct::new("Pen", "Office", 1, 1.0))
            .unwrap_err();

        assert!(matches!(err, InventoryError::Io(_)));
        assert!(store.load(Scope::Project).is_empty());
    }
}
