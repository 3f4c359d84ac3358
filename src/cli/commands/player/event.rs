use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, parse_number, required},
    },
    services::playback::{EventOutcome, MediaEvent, MediaEventKind, PlaybackController},
};

/// Command to feed a media element event through the reducer
///
/// Stands in for the element when driving the player from a shell. Events
/// are tagged with the current source unless `--source=<url>` is given,
/// which lets stale events be replayed.
pub struct EventCommand {
    playback: PlaybackController,
}

impl EventCommand {
    /// Creates a new EventCommand
    pub fn new(playback: PlaybackController) -> Self {
        Self { playback }
    }

    fn parse_kind(name: &str, value: Option<&str>) -> Result<MediaEventKind, CliError> {
        let value_of = |arg: &str| {
            value.ok_or_else(|| CliError::MissingArguments {
                missing: arg.to_string(),
                usage: format!("coursekit player event {name} <{arg}>"),
            })
        };

        let kind = match name {
            "load-started" => MediaEventKind::LoadStarted,
            "metadata" => MediaEventKind::MetadataLoaded {
                duration: parse_number("duration", value_of("duration")?)?,
            },
            "can-play" => MediaEventKind::CanPlay,
            "time" => MediaEventKind::TimeUpdated {
                time: parse_number("time", value_of("time")?)?,
            },
            "playing" => MediaEventKind::Playing,
            "paused" => MediaEventKind::Paused,
            "waiting" => MediaEventKind::Waiting,
            "ended" => MediaEventKind::Ended,
            "error" => MediaEventKind::Errored {
                message: value.unwrap_or("media error").to_string(),
            },
            "rejected" => MediaEventKind::PlayRejected {
                reason: value.unwrap_or("play() refused").to_string(),
            },
            other => {
                return Err(CliError::InvalidArgument {
                    arg: "kind".to_string(),
                    reason: format!(
                        "unknown event '{other}'; expected load-started, metadata, can-play, \
                         time, playing, paused, waiting, ended, error or rejected"
                    ),
                });
            }
        };

        Ok(kind)
    }
}

#[async_trait]
impl Command for EventCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let name = required(args, 0, "kind")?;

        let mut value = None;
        let mut source = None;
        for extra in &args[1..] {
            match extra.strip_prefix("--source=") {
                Some(explicit) => source = Some(explicit.to_string()),
                None => value = Some(extra.as_str()),
            }
        }

        let kind = Self::parse_kind(name, value)?;
        let source = match source.or(self.playback.state().current_source) {
            Some(source) => source,
            None => return Ok("Nothing loaded; event ignored".to_string()),
        };

        let event = MediaEvent::new(source, kind);
        let outcome = self.playback.apply_event(&event);

        let verdict = match outcome {
            EventOutcome::Applied => "applied",
            EventOutcome::Unchanged => "no change",
            EventOutcome::Stale => "stale, discarded",
        };
        Ok(format!("{} from {}: {verdict}", event.kind, event.source))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "event".to_string(),
            description: "Apply a media element event to the player state".to_string(),
            category: "player".to_string(),
            args: vec![
                arg("kind", "Event name (metadata, time, playing, ended, ...)", true, ArgType::String),
                arg("value", "Duration, time, or message for the event", false, ArgType::String),
                arg("--source=<url>", "Source the event belongs to", false, ArgType::String),
            ],
            examples: vec![
                "coursekit player event metadata 180".to_string(),
                "coursekit player event time 42".to_string(),
                "coursekit player event ended".to_string(),
                "coursekit player event metadata 120 --source=/audio/old.mp3".to_string(),
            ],
        }
    }
}
