use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandMetadata, arg, required},
    },
    config_store::ConfigStore,
};

/// Command for retrieving configuration values from the config store.
///
/// # Example Usage
///
/// ```bash
/// coursekit config get playback.skip_seconds
/// coursekit config get general
/// ```
pub struct GetCommand {
    /// Shared reference to the configuration store.
    config_store: Arc<ConfigStore>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

#[async_trait]
impl Command for GetCommand {
    /// Retrieves and formats a configuration value from the specified path.
    ///
    /// Tables are printed in full as TOML; scalars are printed inline.
    ///
    /// # Errors
    ///
    /// * `CliError::ConfigError` - If the path does not exist
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = required(args, 0, "path")?;

        let value = self
            .config_store
            .get_by_path(path)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        if let toml::Value::Table(table) = &value {
            let rendered =
                toml::to_string_pretty(table).map_err(|e| CliError::ConfigError(e.to_string()))?;
            return Ok(format!("[{path}]\n{}", rendered.trim_end()));
        }

        Ok(format!("{path}: {}", format_toml_value(&value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get configuration value".to_string(),
            category: "config".to_string(),
            args: vec![arg(
                "path",
                "Configuration path (e.g., playback.skip_seconds)",
                true,
                ArgType::Path,
            )],
            examples: vec![
                "coursekit config get playback.skip_seconds".to_string(),
                "coursekit config get general.log_level".to_string(),
                "coursekit config get progress".to_string(),
            ],
        }
    }
}
