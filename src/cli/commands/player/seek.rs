use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, parse_number, required},
    },
    services::playback::{PlaybackController, format_time},
};

/// Command to move to an absolute position
///
/// Positions past the end clamp to the duration; before metadata has
/// loaded they are kept and clamped once it arrives.
pub struct SeekCommand {
    playback: PlaybackController,
}

impl SeekCommand {
    /// Creates a new SeekCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }

    /// Seconds (`90`, `12.5`) or `m:ss` (`1:30`).
    fn parse_position(position: &str) -> Result<f64, CliError> {
        let Some((minutes, seconds)) = position.split_once(':') else {
            return parse_number("position", position);
        };

        let invalid = |reason: &str| CliError::InvalidArgument {
            arg: "position".to_string(),
            reason: reason.to_string(),
        };

        let minutes = minutes
            .parse::<u64>()
            .map_err(|_| invalid("Invalid minutes value"))?;
        let seconds = seconds
            .parse::<u64>()
            .map_err(|_| invalid("Invalid seconds value"))?;
        if seconds >= 60 {
            return Err(invalid("Seconds must be less than 60"));
        }

        Ok((minutes * 60 + seconds) as f64)
    }
}

#[async_trait]
impl Command for SeekCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let position = Self::parse_position(required(args, 0, "position")?)?;

        if self.playback.state().current_source.is_none() {
            return Ok("Nothing loaded".to_string());
        }

        self.playback.seek(position);
        Ok(position_report(&self.playback))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "seek".to_string(),
            description: "Seek to a position in the loaded source".to_string(),
            category: "player".to_string(),
            args: vec![arg(
                "position",
                "Target position - seconds (90) or time (1:30)",
                true,
                ArgType::String,
            )],
            examples: vec![
                "coursekit player seek 90".to_string(),
                "coursekit player seek 1:30".to_string(),
            ],
        }
    }
}

/// Command to jump relative to the current position
pub struct SkipCommand {
    playback: PlaybackController,
}

impl SkipCommand {
    /// Creates a new SkipCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }
}

#[async_trait]
impl Command for SkipCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        if self.playback.state().current_source.is_none() {
            return Ok("Nothing loaded".to_string());
        }

        match args.first().map(String::as_str) {
            None | Some("forward") => self.playback.skip_forward(),
            Some("back") => self.playback.skip_back(),
            Some(delta) => self.playback.skip(parse_number("delta", delta)?),
        }

        Ok(position_report(&self.playback))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "skip".to_string(),
            description: format!(
                "Skip by a number of seconds (default forward {}s)",
                self.playback.skip_seconds()
            ),
            category: "player".to_string(),
            args: vec![arg(
                "delta",
                "Seconds to move (+30, -5), or 'forward' / 'back'",
                false,
                ArgType::String,
            )],
            examples: vec![
                "coursekit player skip".to_string(),
                "coursekit player skip back".to_string(),
                "coursekit player skip -30".to_string(),
            ],
        }
    }
}

fn position_report(playback: &PlaybackController) -> String {
    let state = playback.state();
    if state.is_loaded {
        format!(
            "Position: {} / {}",
            format_time(state.current_time),
            format_time(state.duration)
        )
    } else {
        format!("Position: {} (loading)", format_time(state.current_time))
    }
}
