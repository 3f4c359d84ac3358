use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::playback::PlaybackController,
};

/// Command to unload the current source
pub struct ClearCommand {
    playback: PlaybackController,
}

impl ClearCommand {
    /// Creates a new ClearCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for ClearCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.playback.clear_audio();
        Ok("Player cleared".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "clear".to_string(),
            description: "Unload the current source, keeping volume and mute".to_string(),
            category: "player".to_string(),
            args: Vec::new(),
            examples: vec!["coursekit player clear".to_string()],
        }
    }
}
