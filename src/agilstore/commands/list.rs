use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let products = store.load(scope);
    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info("No products registered."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Total products: {}",
            products.len()
        )));
    }
    Ok(result.with_listed_products(products))
}
