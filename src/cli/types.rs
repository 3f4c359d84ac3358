use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context to tell the user what to fix.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Argument count does not match the command's metadata.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A single argument has an unusable value.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: String,
        /// What was wrong with it
        reason: String,
    },

    /// Required arguments were not supplied.
    #[error("Missing arguments: {missing}\nUsage: {usage}")]
    MissingArguments {
        /// Names of the missing arguments
        missing: String,
        /// Usage line for the command
        usage: String,
    },

    /// A course, module, or lesson id does not exist in the catalog.
    #[error("{kind} '{id}' not found")]
    NotFound {
        /// What was looked up
        kind: String,
        /// The id that was not found
        id: String,
    },

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A service refused or failed the operation.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Service that failed
        service: String,
        /// Error details
        details: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return their user-facing output on success.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "course-id", "seconds").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for validation and help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// An identifier from the catalog or storage.
    Id,

    /// A configuration path.
    Path,
}

/// Complete metadata for a CLI command.
///
/// Used for help generation, argument count validation, and command
/// discovery.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "play", "complete").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "player", "progress").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`]; the command validates values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, unknown ids, or
    /// service failures.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}

/// Build a `CommandArg`.
pub(crate) fn arg(name: &str, description: &str, required: bool, value_type: ArgType) -> CommandArg {
    CommandArg {
        name: name.to_string(),
        description: description.to_string(),
        required,
        value_type,
    }
}

/// Parse a numeric argument.
pub(crate) fn parse_number(name: &str, value: &str) -> Result<f64, CliError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| CliError::InvalidArgument {
            arg: name.to_string(),
            reason: format!("'{value}' is not a number"),
        })
}

/// Positional argument `index`, or `MissingArguments` naming it.
pub(crate) fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingArguments {
            missing: name.to_string(),
            usage: format!("<{name}> is argument {}", index + 1),
        })
}
