use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Command to print the JSON Schema of the configuration file
///
/// Editors can use the output for completion and validation of
/// `config.toml` through a TOML language server.
pub struct SchemaCommand;

impl SchemaCommand {
    /// Creates a new SchemaCommand
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchemaCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the configuration JSON Schema".to_string(),
            category: "config".to_string(),
            args: Vec::new(),
            examples: vec!["coursekit config schema > coursekit.schema.json".to_string()],
        }
    }
}
