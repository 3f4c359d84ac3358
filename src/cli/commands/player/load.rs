use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::playback::PlaybackController,
};

/// Command to load an audio source into the player
pub struct LoadCommand {
    playback: PlaybackController,
}

impl LoadCommand {
    /// Creates a new LoadCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for LoadCommand {
    /// Loads `source`, titled `title` or the configured fallback title
    ///
    /// # Errors
    ///
    /// Returns CliError if the source is empty
    async fn execute(&self, args: &[String]) -> CommandResult {
        let source = required(args, 0, "source")?;
        let title = args.get(1).map(String::as_str);

        self.playback
            .attach_lesson(Some(source), title)
            .map_err(|e| CliError::InvalidArgument {
                arg: "source".to_string(),
                reason: e.to_string(),
            })?;

        let state = self.playback.state();
        Ok(format!(
            "Loaded: {} ({})",
            state.current_title.unwrap_or_default(),
            source
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "load".to_string(),
            description: "Load an audio source, paused at the start".to_string(),
            category: "player".to_string(),
            args: vec![
                arg("source", "Audio URL or path", true, ArgType::String),
                arg("title", "Display title", false, ArgType::String),
            ],
            examples: vec![
                "coursekit player load /audio/l1.mp3".to_string(),
                "coursekit player load /audio/l1.mp3 \"Lesson 1\"".to_string(),
            ],
        }
    }
}
