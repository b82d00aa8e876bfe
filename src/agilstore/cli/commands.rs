use super::menu::run_menu;
use super::render::{
    render_config, render_messages, render_product_details, render_product_table, RenderOptions,
};
use super::session::Session;
use super::setup::{Cli, Commands};
use agilstore::api::{CmdResult, ConfigAction};
use agilstore::error::Result;
use agilstore::init::{initialize, InventoryContext};
use agilstore::model::{NewProduct, ProductPatch};
use agilstore::validation::{parse_id, parse_price, parse_quantity};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(color);

    let mut ctx = init_context(&cli)?;
    let opts = RenderOptions::new(color, ctx.config.currency.clone());
    let mut session = Session::new(io::stdin().lock(), io::stdout());

    match cli.command {
        None | Some(Commands::Menu) => {
            run_menu(&mut ctx.api, ctx.scope, &mut session, &opts)
        }
        Some(Commands::Add {
            name,
            category,
            quantity,
            price,
        }) => handle_add(&mut ctx, &mut session, &opts, name, category, &quantity, &price),
        Some(Commands::List) => handle_list(&mut ctx, &mut session, &opts),
        Some(Commands::View { id }) => handle_view(&mut ctx, &mut session, &opts, &id),
        Some(Commands::Search { term }) => {
            handle_search(&mut ctx, &mut session, &opts, &term.join(" "))
        }
        Some(Commands::Update {
            id,
            name,
            category,
            quantity,
            price,
        }) => {
            let patch = build_patch(name, category, quantity.as_deref(), price.as_deref())?;
            handle_update(&mut ctx, &mut session, &opts, &id, &patch)
        }
        Some(Commands::Delete { id, yes }) => {
            handle_delete(&mut ctx, &mut session, &opts, &id, yes)
        }
        Some(Commands::Init) => {
            let result = ctx.api.init(ctx.scope)?;
            print_messages(&mut session, &result, &opts)
        }
        Some(Commands::Config { key, value }) => {
            handle_config(&mut ctx, &mut session, &opts, key, value)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "warn,agilstore=info",
        _ => "warn,agilstore=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<InventoryContext> {
    let cwd = std::env::current_dir()?;
    let mut ctx = initialize(&cwd, cli.global, cli.file.clone())?;

    let bootstrap = ctx.api.init(ctx.scope)?;
    for message in &bootstrap.messages {
        debug!("{}", message.content);
    }
    Ok(ctx)
}

fn print_messages<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    result: &CmdResult,
    opts: &RenderOptions,
) -> Result<()> {
    if result.messages.is_empty() {
        return Ok(());
    }
    session.say(&render_messages(&result.messages, opts))
}

fn build_patch(
    name: Option<String>,
    category: Option<String>,
    quantity: Option<&str>,
    price: Option<&str>,
) -> Result<ProductPatch> {
    Ok(ProductPatch {
        name,
        category,
        quantity: quantity.map(parse_quantity).transpose()?,
        price: price.map(parse_price).transpose()?,
    })
}

fn handle_add<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    name: String,
    category: String,
    quantity: &str,
    price: &str,
) -> Result<()> {
    let new = NewProduct::new(
        name.trim(),
        category.trim(),
        parse_quantity(quantity)?,
        parse_price(price)?,
    );
    let result = ctx.api.add_product(ctx.scope, new)?;
    print_messages(session, &result, opts)
}

fn handle_list<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
) -> Result<()> {
    let result = ctx.api.list_products(ctx.scope)?;
    if !result.listed_products.is_empty() {
        session.say(&render_product_table(&result.listed_products, opts))?;
    }
    print_messages(session, &result, opts)
}

fn handle_view<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    id: &str,
) -> Result<()> {
    let result = ctx.api.view_product(ctx.scope, parse_id(id)?)?;
    for product in &result.listed_products {
        session.say(&render_product_details(product, opts))?;
    }
    print_messages(session, &result, opts)
}

fn handle_search<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    term: &str,
) -> Result<()> {
    let result = ctx.api.search_products(ctx.scope, term)?;
    if !result.listed_products.is_empty() {
        session.say(&render_product_table(&result.listed_products, opts))?;
    }
    print_messages(session, &result, opts)
}

fn handle_update<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    id: &str,
    patch: &ProductPatch,
) -> Result<()> {
    let result = ctx.api.update_product(ctx.scope, parse_id(id)?, patch)?;
    for product in &result.affected_products {
        session.say(&render_product_details(product, opts))?;
    }
    print_messages(session, &result, opts)
}

fn handle_delete<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    let id = parse_id(id)?;

    if !skip_confirm {
        let found = ctx.api.view_product(ctx.scope, id)?;
        let Some(product) = found.listed_products.first() else {
            return print_messages(session, &found, opts);
        };
        session.say(&format!(
            "Product to delete: {} - {}",
            product.name, product.category
        ))?;
        if session.confirm("Are you sure you want to delete it? (y/n): ")? != Some(true) {
            return session.say("Deletion cancelled.");
        }
    }

    let result = ctx.api.delete_product(ctx.scope, id)?;
    print_messages(session, &result, opts)
}

fn handle_config<R: BufRead, W: Write>(
    ctx: &mut InventoryContext,
    session: &mut Session<R, W>,
    opts: &RenderOptions,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            session.say(&render_config(config))?;
        }
    }
    print_messages(session, &result, opts)
}
