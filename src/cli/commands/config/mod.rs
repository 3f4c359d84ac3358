//! Configuration inspection commands.
mod get;
mod schema;

pub use get::GetCommand;
pub use schema::SchemaCommand;

use std::sync::Arc;

use crate::{cli::CommandRegistry, config_store::ConfigStore};

/// Registers all configuration-related commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Configuration store the commands read from
pub fn register_commands(registry: &mut CommandRegistry, config_store: &ConfigStore) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(GetCommand::new(Arc::new(config_store.clone()))),
    );
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand::new()));
}
