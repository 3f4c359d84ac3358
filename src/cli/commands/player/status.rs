use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::playback::{PlaybackController, PlaybackPhase, format_time},
};

use super::volume::volume_report;

/// Command to show the "now playing" state
pub struct StatusCommand {
    playback: PlaybackController,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let state = self.playback.state();
        let mut output = String::new();

        output.push_str(&format!("State: {}\n", phase_label(state.phase())));

        if let Some(source) = &state.current_source {
            output.push_str(&format!(
                "Title: {}\n",
                state.current_title.as_deref().unwrap_or("-")
            ));
            output.push_str(&format!("Source: {source}\n"));
            output.push_str(&format!(
                "Position: {} / {}\n",
                format_time(state.current_time),
                format_time(state.duration)
            ));
        }

        output.push_str(&volume_report(&state));

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show what is loaded and where playback is".to_string(),
            category: "player".to_string(),
            args: Vec::new(),
            examples: vec!["coursekit player status".to_string()],
        }
    }
}

pub(super) fn phase_label(phase: PlaybackPhase) -> &'static str {
    match phase {
        PlaybackPhase::Empty => "⏹ Empty",
        PlaybackPhase::Loading => "… Loading",
        PlaybackPhase::Ready => "● Ready",
        PlaybackPhase::Playing => "▶ Playing",
        PlaybackPhase::Paused => "⏸ Paused",
    }
}
