//! Command-line interface.
//!
//! Commands are organized by category (`player`, `progress`, `catalog`,
//! `config`) and generate their help text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod session;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use session::Session;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
