use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, parse_number},
    },
    services::playback::{PlaybackController, PlaybackState},
};

/// Command to show or set the volume
pub struct VolumeCommand {
    playback: PlaybackController,
}

impl VolumeCommand {
    /// Creates a new VolumeCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for VolumeCommand {
    /// Sets the volume when a level is given; values outside 0-1 are
    /// clamped and exactly 0 mutes
    ///
    /// # Errors
    ///
    /// Returns CliError if the level is not a number
    async fn execute(&self, args: &[String]) -> CommandResult {
        if let Some(level) = args.first() {
            self.playback.set_volume(parse_number("level", level)?);
        }

        Ok(volume_report(&self.playback.state()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "volume".to_string(),
            description: "Show or set the volume (0.0 - 1.0)".to_string(),
            category: "player".to_string(),
            args: vec![arg("level", "Volume between 0.0 and 1.0", false, ArgType::Number)],
            examples: vec![
                "coursekit player volume".to_string(),
                "coursekit player volume 0.5".to_string(),
            ],
        }
    }
}

/// Command to flip mute without changing the level
pub struct MuteCommand {
    playback: PlaybackController,
}

impl MuteCommand {
    /// Creates a new MuteCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for MuteCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.playback.toggle_mute();
        Ok(volume_report(&self.playback.state()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "mute".to_string(),
            description: "Toggle mute".to_string(),
            category: "player".to_string(),
            args: Vec::new(),
            examples: vec!["coursekit player mute".to_string()],
        }
    }
}

pub(super) fn volume_report(state: &PlaybackState) -> String {
    let level = state.volume.as_percentage().round();
    if state.is_muted {
        format!("Volume: {level}% (muted)")
    } else {
        format!("Volume: {level}%")
    }
}
