use std::collections::HashMap;

use crate::{config_store::ConfigStore, service_manager::Services};

use super::{
    CliError, Command,
    commands::{catalog, config, player, progress},
    session::Session,
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── player
/// │   ├── load
/// │   ├── play
/// │   └── ...
/// ├── progress
/// ├── catalog
/// └── config
/// ```
#[derive(Default)]
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key; registering the same name
    /// twice replaces the earlier command.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does
    /// not exist, `CliError::InvalidArguments` if the argument count is
    /// wrong, or whatever the command itself returns.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_command = self.command(category, command_name)?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Metadata of a registered command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the command does not exist.
    pub fn metadata(&self, category: &str, command_name: &str) -> Result<CommandMetadata, CliError> {
        Ok(self.command(category, command_name)?.metadata())
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Names of all registered categories, sorted.
    pub fn get_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.categories.keys().cloned().collect();
        categories.sort();
        categories
    }

    /// Registers every built-in command.
    pub fn register_all_commands(
        &mut self,
        config_store: &ConfigStore,
        services: &Services,
        session: &Session,
    ) {
        player::register_commands(self, services);
        progress::register_commands(self, services, session);
        catalog::register_commands(self, services);
        config::register_commands(self, config_store);
    }

    fn command(&self, category: &str, command_name: &str) -> Result<&dyn Command, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        found_category
            .get(command_name)
            .map(|command| command.as_ref())
            .ok_or_else(|| {
                CliError::CommandNotFound(format!(
                    "Failed to find command '{command_name}' in '{category}'"
                ))
            })
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            let missing: Vec<&str> = metadata
                .args
                .iter()
                .filter(|arg| arg.required)
                .skip(args.len())
                .map(|arg| arg.name.as_str())
                .collect();

            return Err(CliError::MissingArguments {
                missing: missing.join(", "),
                usage: usage_line(metadata),
            });
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }
}

/// `coursekit <category> <name> <required> [optional]`
pub(crate) fn usage_line(metadata: &CommandMetadata) -> String {
    let mut usage = format!("coursekit {} {}", metadata.category, metadata.name);
    for arg in &metadata.args {
        if arg.required {
            usage.push_str(&format!(" <{}>", arg.name));
        } else {
            usage.push_str(&format!(" [{}]", arg.name));
        }
    }
    usage
}
