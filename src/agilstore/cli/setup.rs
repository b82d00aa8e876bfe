use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agilstore", bin_name = "agilstore", version)]
#[command(about = "Manage a product inventory stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Read and write this data file instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default when no command is given)
    Menu,

    /// Add a product
    #[command(alias = "a")]
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product category
        #[arg(short, long, default_value = "")]
        category: String,

        /// Units in stock
        #[arg(short, long)]
        quantity: String,

        /// Unit price
        #[arg(short, long)]
        price: String,
    },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show one product by ID
    #[command(alias = "v")]
    View { id: String },

    /// Search products by name (case-insensitive)
    #[command(alias = "s")]
    Search {
        /// Name or part of the name
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Update a product; omitted fields keep their value
    #[command(alias = "u")]
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        quantity: Option<String>,

        #[arg(short, long)]
        price: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Create the data file if it does not exist
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
