use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope, id: u64) -> Result<CmdResult> {
    let products = store.load(scope);
    let mut result = CmdResult::default();
    match inventory::find_by_id(&products, id) {
        Some(product) => result.listed_products.push(product.clone()),
        None => result.add_message(CmdMessage::warning(format!(
            "No product found with ID {}.",
            id
        ))),
    }
    Ok(result)
}
