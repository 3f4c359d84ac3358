use std::time::SystemTime;

use crate::{
    config_store::ConfigStore, runtime_state::RuntimeState, service_manager::Services,
};

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
    },
    registry::usage_line,
    session::Session,
};

/// High-level service for managing and executing CLI commands.
///
/// Owns the registry and the session state that commands may change, and
/// produces the runtime state to persist after a command ran.
pub struct CliService {
    registry: CommandRegistry,
    services: Services,
    session: Session,
    runtime: RuntimeState,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `config_store` - Configuration store for commands that need config access
    /// * `services` - Services restored from `runtime`
    /// * `runtime` - State loaded at startup
    pub fn new(config_store: &ConfigStore, services: Services, runtime: RuntimeState) -> Self {
        let session = Session::new(runtime.current_user.clone());
        let mut registry = CommandRegistry::new();
        registry.register_all_commands(config_store, &services, &session);

        Self {
            registry,
            services,
            session,
            runtime,
        }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category,
    /// or whatever error the command reports.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == "help" {
            let topic: Vec<&str> = [command_name]
                .into_iter()
                .chain(args.iter().map(String::as_str))
                .filter(|part| !part.is_empty())
                .collect();
            return self.help(&topic);
        }

        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Runtime state reflecting everything commands changed, or `None` if
    /// nothing changed since startup.
    pub fn updated_runtime(&self) -> Option<RuntimeState> {
        let now_playing = self.services.playback.state();
        let current_user = self.session.user.get();

        if now_playing == self.runtime.now_playing && current_user == self.runtime.current_user {
            return None;
        }

        Some(RuntimeState {
            now_playing,
            current_user,
            last_updated: SystemTime::now(),
        })
    }

    /// Help text: every category, one category, or one command.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` for an unknown category or command.
    pub fn help(&self, topic: &[&str]) -> Result<String, CliError> {
        match topic {
            [] => Ok(self.overview()),
            [category] => self.category_help(category),
            [category, command, ..] => {
                let metadata = self.registry.metadata(category, command)?;
                let mut output = format!(
                    "{}\n{}\n\n{}\n  {}\n",
                    format_header(&format!("{category} {command}")),
                    format_description(&metadata.description),
                    format_subheader("Usage:"),
                    usage_line(&metadata)
                );

                if !metadata.args.is_empty() {
                    output.push_str(&format!("\n{}\n", format_subheader("Arguments:")));
                    for arg in &metadata.args {
                        output.push_str(&format!(
                            "  {:<18} {}\n",
                            arg.name,
                            format_description(&arg.description)
                        ));
                    }
                }

                if !metadata.examples.is_empty() {
                    output.push_str(&format!("\n{}\n", format_subheader("Examples:")));
                    for example in &metadata.examples {
                        output.push_str(&format!("  {example}\n"));
                    }
                }

                Ok(output.trim_end().to_string())
            }
        }
    }

    fn overview(&self) -> String {
        let mut output = format!(
            "{}\n\n{}\n  coursekit <category> <command> [args]\n  coursekit help <category> [command]\n\n{}\n",
            format_header("coursekit - lesson player and course progress"),
            format_subheader("Usage:"),
            format_subheader("Categories:")
        );

        for (category, commands) in self.list_all() {
            output.push_str(&format!(
                "  {:<10} {}\n",
                format_category(&category),
                format_description(&commands.join(", "))
            ));
        }

        output.trim_end().to_string()
    }

    fn category_help(&self, category: &str) -> Result<String, CliError> {
        let (_, commands) = self
            .list_all()
            .into_iter()
            .find(|(name, _)| name == category)
            .ok_or_else(|| {
                CliError::CommandNotFound(format!("Failed to find category '{category}'"))
            })?;

        let mut output = format!("{}\n", format_header(category));
        for command in commands {
            let metadata = self.registry.metadata(category, &command)?;
            output.push_str(&format!(
                "  {:<12} {}\n",
                format_command(&command),
                format_description(&metadata.description)
            ));
        }

        Ok(output.trim_end().to_string())
    }
}
