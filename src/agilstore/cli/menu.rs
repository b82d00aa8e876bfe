//! The numbered interactive menu.
//!
//! Each option is one round trip through the API: the menu gathers fields from the
//! session, calls one API method, and renders the `CmdResult`. A failed save is shown
//! and the menu carries on; end-of-input anywhere closes the menu cleanly.

use super::render::{
    render_messages, render_product_details, render_product_summary, render_product_table,
    RenderOptions,
};
use super::session::Session;
use agilstore::api::{CmdResult, InventoryApi};
use agilstore::error::Result;
use agilstore::model::{NewProduct, Product, ProductPatch, Scope};
use agilstore::store::DataStore;
use agilstore::validation::{parse_id, parse_optional, parse_price, parse_quantity, validate_name};
use std::io::{BufRead, Write};
use tracing::debug;

const RULE: &str = "=========================================";

const MENU: &str = "\
1. Add product
2. List products
3. Update product
4. Delete product
5. Search product
0. Exit";

enum Step {
    Continue,
    Closed,
}

pub fn run_menu<S, R, W>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        session.say(&format!("\n{RULE}\nPRODUCT MANAGEMENT - AGILSTORE\n{RULE}\n{MENU}\n{RULE}"))?;

        let Some(choice) = session.prompt("Choose an option: ")? else {
            session.say("\nProgram closed.")?;
            return Ok(());
        };
        debug!(choice = %choice.trim(), "Menu selection");

        let step = match choice.trim() {
            "1" => add_product(api, scope, session, opts),
            "2" => list_products(api, scope, session, opts),
            "3" => update_product(api, scope, session, opts),
            "4" => delete_product(api, scope, session, opts),
            "5" => search_product(api, scope, session, opts),
            "0" => {
                session.say("Goodbye!")?;
                return Ok(());
            }
            _ => {
                session.say("Invalid option!")?;
                Ok(Step::Continue)
            }
        };

        match step {
            Ok(Step::Continue) => {}
            Ok(Step::Closed) => {
                session.say("\nProgram closed.")?;
                return Ok(());
            }
            Err(e) => session.say(&format!("Error: {}", e))?,
        }
    }
}

fn heading<R: BufRead, W: Write>(session: &mut Session<R, W>, title: &str) -> Result<()> {
    session.say(&format!("\n{}\n{}", title, "=".repeat(title.chars().count())))
}

fn show_messages<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    result: &CmdResult,
    opts: &RenderOptions,
) -> Result<()> {
    if result.messages.is_empty() {
        return Ok(());
    }
    session.say(&render_messages(&result.messages, opts))
}

/// Looks up a product by id, reporting "not found" through the session.
fn lookup<S: DataStore, R: BufRead, W: Write>(
    api: &InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    id: u64,
) -> Result<Option<Product>> {
    let result = api.view_product(scope, id)?;
    match result.listed_products.into_iter().next() {
        Some(product) => Ok(Some(product)),
        None => {
            session.say(&render_messages(&result.messages, opts))?;
            Ok(None)
        }
    }
}

fn add_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<Step> {
    heading(session, "ADD NEW PRODUCT")?;

    let Some(name) = session.prompt_parsed("Product name: ", |s| {
        validate_name(s).map(|_| s.trim().to_string())
    })?
    else {
        return Ok(Step::Closed);
    };
    let Some(category) = session.prompt("Category: ")? else {
        return Ok(Step::Closed);
    };
    let Some(quantity) = session.prompt_parsed("Quantity in stock: ", parse_quantity)? else {
        return Ok(Step::Closed);
    };
    let Some(price) = session.prompt_parsed(&format!("Price: {} ", opts.currency), parse_price)?
    else {
        return Ok(Step::Closed);
    };

    let result = api.add_product(scope, NewProduct::new(name, category.trim(), quantity, price))?;
    show_messages(session, &result, opts)?;
    Ok(Step::Continue)
}

fn list_products<S: DataStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<Step> {
    heading(session, "PRODUCT LIST")?;
    let result = api.list_products(scope)?;
    if !result.listed_products.is_empty() {
        session.say(&render_product_table(&result.listed_products, opts))?;
    }
    show_messages(session, &result, opts)?;
    Ok(Step::Continue)
}

fn update_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<Step> {
    heading(session, "UPDATE PRODUCT")?;

    let Some(id) = session.prompt_parsed("ID of the product to update: ", parse_id)? else {
        return Ok(Step::Closed);
    };
    let Some(current) = lookup(api, scope, session, opts, id)? else {
        return Ok(Step::Continue);
    };

    session.say(&format!(
        "\nCurrent product: {}",
        render_product_summary(&current, opts)
    ))?;
    session.say("\nLeave blank to keep the current value.")?;

    let Some(name) = session.prompt(&format!("New name [{}]: ", current.name))? else {
        return Ok(Step::Closed);
    };
    let Some(category) = session.prompt(&format!("New category [{}]: ", current.category))?
    else {
        return Ok(Step::Closed);
    };
    let Some(quantity) = session.prompt_parsed(
        &format!("New quantity [{}]: ", current.quantity),
        |s| parse_optional(s, parse_quantity),
    )?
    else {
        return Ok(Step::Closed);
    };
    let Some(price) = session.prompt_parsed(&format!("New price [{}]: ", current.price), |s| {
        parse_optional(s, parse_price)
    })?
    else {
        return Ok(Step::Closed);
    };

    let patch = ProductPatch {
        name: Some(name.trim().to_string()),
        category: Some(category.trim().to_string()),
        quantity,
        price,
    };
    let result = api.update_product(scope, id, &patch)?;
    show_messages(session, &result, opts)?;
    Ok(Step::Continue)
}

fn delete_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<Step> {
    heading(session, "DELETE PRODUCT")?;

    let Some(id) = session.prompt_parsed("ID of the product to delete: ", parse_id)? else {
        return Ok(Step::Closed);
    };
    let Some(current) = lookup(api, scope, session, opts, id)? else {
        return Ok(Step::Continue);
    };

    session.say(&format!(
        "\nProduct to delete: {} - {}",
        current.name, current.category
    ))?;
    match session.confirm("Are you sure you want to delete it? (y/n): ")? {
        None => Ok(Step::Closed),
        Some(true) => {
            let result = api.delete_product(scope, id)?;
            show_messages(session, &result, opts)?;
            Ok(Step::Continue)
        }
        Some(false) => {
            session.say("Deletion cancelled.")?;
            Ok(Step::Continue)
        }
    }
}

fn search_product<S: DataStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    scope: Scope,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<Step> {
    heading(session, "SEARCH PRODUCT")?;

    let Some(mode) = session.prompt("Search by: (1) ID or (2) Name: ")? else {
        return Ok(Step::Closed);
    };
    match mode.trim() {
        "1" => {
            let Some(id) = session.prompt_parsed("Product ID: ", parse_id)? else {
                return Ok(Step::Closed);
            };
            if let Some(product) = lookup(api, scope, session, opts, id)? {
                session.say(&format!("\n{}", render_product_details(&product, opts)))?;
            }
        }
        "2" => {
            let Some(term) = session.prompt("Name or part of the name: ")? else {
                return Ok(Step::Closed);
            };
            let result = api.search_products(scope, term.trim())?;
            show_messages(session, &result, opts)?;
            for product in &result.listed_products {
                session.say(&format!("\n{}---", render_product_details(product, opts)))?;
            }
        }
        _ => session.say("Invalid option!")?,
    }
    Ok(Step::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agilstore::api::StorePaths;
    use agilstore::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn api() -> InventoryApi<InMemoryStore> {
        let paths = StorePaths {
            project: PathBuf::from("/nonexistent"),
            global: PathBuf::from("/nonexistent"),
        };
        let mut api = InventoryApi::new(InMemoryStore::new(), paths);
        api.init(Scope::Project).unwrap();
        api
    }

    fn drive(api: &mut InventoryApi<InMemoryStore>, input: &str) -> String {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_menu(api, Scope::Project, &mut session, &RenderOptions::new(false, "R$")).unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    fn stored(api: &InventoryApi<InMemoryStore>) -> Vec<Product> {
        api.list_products(Scope::Project).unwrap().listed_products
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        let out = drive(&mut api, "1\nPen\nOffice\n10\n1,5\n2\n0\n");

        assert!(out.contains("Product \"Pen\" added with ID 1"));
        assert!(out.contains("| R$ 1.50"));
        assert!(out.contains("Total products: 1"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(stored(&api)[0].price, 1.5);
    }

    #[test]
    fn invalid_numbers_are_asked_again() {
        let mut api = api();
        let out = drive(&mut api, "1\nPen\nOffice\nten\n10\nfree\n2\n0\n");

        assert!(out.contains("Invalid quantity"));
        assert!(out.contains("Invalid price"));
        assert_eq!(stored(&api)[0].quantity, 10);
        assert_eq!(stored(&api)[0].price, 2.0);
    }

    #[test]
    fn update_with_blank_answers_keeps_values() {
        let mut api = api();
        drive(&mut api, "1\nPen\nOffice\n10\n1.5\n0\n");
        let before = stored(&api);

        let out = drive(&mut api, "3\n1\n\n\n\n\n0\n");
        assert!(out.contains("New name [Pen]: "));
        assert!(out.contains("Product ID 1 updated."));
        assert_eq!(stored(&api), before);
    }

    #[test]
    fn update_changes_given_fields() {
        let mut api = api();
        drive(&mut api, "1\nPen\nOffice\n10\n1.5\n0\n");
        drive(&mut api, "3\n1\nGel Pen\n\n25\n\n0\n");

        let product = &stored(&api)[0];
        assert_eq!(product.name, "Gel Pen");
        assert_eq!(product.category, "Office");
        assert_eq!(product.quantity, 25);
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut api = api();
        let out = drive(&mut api, "3\n99\n0\n");
        assert!(out.contains("No product found with ID 99."));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut api = api();
        drive(&mut api, "1\nPen\nOffice\n10\n1.5\n0\n");

        let out = drive(&mut api, "4\n1\nn\n0\n");
        assert!(out.contains("Deletion cancelled."));
        assert_eq!(stored(&api).len(), 1);

        let out = drive(&mut api, "4\n1\ns\n0\n");
        assert!(out.contains("Product ID 1 deleted."));
        assert!(stored(&api).is_empty());
    }

    #[test]
    fn search_by_id_and_name() {
        let mut api = api();
        drive(&mut api, "1\nBlue Shirt\nClothes\n3\n49.9\n1\nHat\nClothes\n1\n20\n0\n");

        let out = drive(&mut api, "5\n2\nshirt\n5\n1\n2\n5\n1\n7\n0\n");
        assert!(out.contains("1 product(s) found."));
        assert!(out.contains("Name: Blue Shirt"));
        assert!(out.contains("Name: Hat"));
        assert!(out.contains("No product found with ID 7."));
    }

    #[test]
    fn end_of_input_closes_cleanly() {
        let mut api = api();
        let out = drive(&mut api, "1\nPen\n");
        assert!(out.ends_with("Program closed.\n"));
        assert!(stored(&api).is_empty());
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut api = api();
        let out = drive(&mut api, "9\n0\n");
        assert!(out.contains("Invalid option!"));
    }

    #[test]
    fn failed_save_is_reported_and_menu_continues() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let paths = StorePaths {
            project: PathBuf::from("/nonexistent"),
            global: PathBuf::from("/nonexistent"),
        };
        let mut api = InventoryApi::new(store, paths);

        let out = drive(&mut api, "1\nPen\nOffice\n10\n1.5\n9\n0\n");
        assert!(out.contains("Error: IO error: simulated write failure"));
        assert!(out.contains("Invalid option!"));
    }
}
