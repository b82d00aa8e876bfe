//! # AgilStore CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns an error into exit code 1.
//!
//! Without a subcommand the CLI runs the numbered interactive menu; the subcommands
//! (`add`, `list`, `view`, `search`, `update`, `delete`, `init`, `config`) do the same
//! operations non-interactively for scripts. Both paths go through the same
//! `InventoryApi`, so behavior is identical.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
