use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let created = store.bootstrap(scope)?;
    let path = store.document_path(scope)?;
    let mut result = CmdResult::default();
    if created {
        info!(path = %path.display(), "Created empty product document");
        result.add_message(CmdMessage::success(format!(
            "Initialized product store at {}",
            path.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Product store already exists at {}",
            path.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_missing_document() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Scope::Global).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(store.exists(Scope::Global));
    }

    #[test]
    fn keeps_existing_document() {
        let mut store = StoreFixture::new().with_products(2, Scope::Project).store;
        let result = run(&mut store, Scope::Project).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.load(Scope::Project).len(), 2);
    }
}
