//! Course catalog commands.
mod list;
mod outline;

pub use list::ListCommand;
pub use outline::OutlineCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all catalog commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "catalog";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(services.catalog.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(OutlineCommand::new(services.catalog.clone())),
    );
}
