use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope, term: &str) -> Result<CmdResult> {
    let products = store.load(scope);
    let matches: Vec<_> = inventory::find_by_name(&products, term).cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No product found matching \"{}\".",
            term
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} product(s) found.",
            matches.len()
        )));
    }
    Ok(result.with_listed_products(matches))
}
