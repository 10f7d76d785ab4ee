//! CLI module
//!
//! Command-line front end standing in for the presentation layer.
//!
//! # Commands
//!
//! - `page` - Fetch one raw listing page
//! - `load` - Assemble the catalog page by page

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
