use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory;
use crate::model::Scope;
use crate::store::DataStore;
use tracing::info;

/// Removes product `id`. Confirmation is the caller's job; this deletes unconditionally.
pub fn run<S: DataStore>(store: &mut S, scope: Scope, id: u64) -> Result<CmdResult> {
    let mut products = store.load(scope);
    let mut result = CmdResult::default();

    let Some(removed) = inventory::delete(&mut products, id) else {
        result.add_message(CmdMessage::warning(format!(
            "No product found with ID {}.",
            id
        )));
        return Ok(result);
    };

    store.save(scope, &products)?;
    info!(id, "Product deleted");

    result.add_message(CmdMessage::success(format!(
        "Product ID {} deleted.",
        id
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, view};
    use crate::model::NewProduct;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deleted_product_is_gone() {
        let mut store = StoreFixture::new().with_products(2, Scope::Project).store;
        let result = run(&mut store, Scope::Project, 1).unwrap();

        assert_eq!(result.affected_products[0].name, "Product 1");
        assert!(view::run(&store, Scope::Project, 1).unwrap().has_warnings());
        assert_eq!(
            view::run(&store, Scope::Project, 2).unwrap().listed_products[0].id,
            2
        );
    }

    #[test]
    fn missing_product_is_a_warning() {
        let mut store = StoreFixture::new().with_products(1, Scope::Project).store;
        let result = run(&mut store, Scope::Project, 5).unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.load(Scope::Project).len(), 1);
    }

    #[test]
    fn pen_scenario_end_to_end() {
        let mut store = InMemoryStore::new();
        let pen = add::run(
            &mut store,
            Scope::Project,
            NewProduct::new("Pen", "Office", 10, 1.5),
        )
        .unwrap();
        let pad = add::run(
            &mut store,
            Scope::Project,
            NewProduct::new("Notepad", "Office", 3, 4.25),
        )
        .unwrap();
        assert_eq!(pen.affected_products[0].id, 1);
        assert_eq!(pad.affected_products[0].id, 2);

        run(&mut store, Scope::Project, 1).unwrap();
        assert!(view::run(&store, Scope::Project, 1)
            .unwrap()
            .listed_products
            .is_empty());
        assert_eq!(
            view::run(&store, Scope::Project, 2).unwrap().listed_products[0].name,
            "Notepad"
        );
    }
}
