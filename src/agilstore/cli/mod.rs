//! # CLI Layer
//!
//! This module is **one possible UI client** for the inventory library. It is the only
//! place that knows about stdin/stdout/stderr, argument parsing and exit codes.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context setup, logging, dispatch of subcommands
//! - `menu.rs`: the numbered interactive menu
//! - `session.rs`: the prompt object shared by the menu and confirmation prompts
//! - `render.rs`: tables, detail blocks and colored messages, all as `String`s

mod commands;
mod menu;
mod render;
mod session;
mod setup;

pub use commands::run;
