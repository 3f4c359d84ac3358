use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::playback::{PlaybackController, PlaybackPhase},
};

use super::status::phase_label;

fn transport_metadata(name: &str, description: &str) -> CommandMetadata {
    CommandMetadata {
        name: name.to_string(),
        description: description.to_string(),
        category: "player".to_string(),
        args: Vec::new(),
        examples: vec![format!("coursekit player {name}")],
    }
}

fn report(playback: &PlaybackController) -> CommandResult {
    match playback.phase() {
        PlaybackPhase::Empty => Ok("Nothing loaded".to_string()),
        phase => Ok(phase_label(phase).to_string()),
    }
}

/// Command to start playback
pub struct PlayCommand {
    playback: PlaybackController,
}

impl PlayCommand {
    /// Creates a new PlayCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for PlayCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.playback.play();
        report(&self.playback)
    }

    fn metadata(&self) -> CommandMetadata {
        transport_metadata("play", "Start playback of the loaded source")
    }
}

/// Command to pause playback
pub struct PauseCommand {
    playback: PlaybackController,
}

impl PauseCommand {
    /// Creates a new PauseCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for PauseCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.playback.pause();
        report(&self.playback)
    }

    fn metadata(&self) -> CommandMetadata {
        transport_metadata("pause", "Pause playback")
    }
}

/// Command to flip between play and pause
pub struct ToggleCommand {
    playback: PlaybackController,
}

impl ToggleCommand {
    /// Creates a new ToggleCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for ToggleCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.playback.toggle_play();
        report(&self.playback)
    }

    fn metadata(&self) -> CommandMetadata {
        transport_metadata("toggle", "Toggle between play and pause")
    }
}
