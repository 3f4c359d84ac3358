use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, parse_number},
    },
    services::playback::{MiniPlayer, PlayerVisibility},
};

/// Command to render the mini-player
///
/// A terminal never shows the main player, so the mini-player is shown
/// whenever something is loaded.
pub struct MiniCommand {
    mini_player: MiniPlayer,
    visibility: PlayerVisibility,
}

impl MiniCommand {
    /// Creates a new MiniCommand
    pub fn new(mini_player: MiniPlayer, visibility: PlayerVisibility) -> Self {
        Self {
            mini_player,
            visibility,
        }
    }
}

#[async_trait]
impl Command for MiniCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        self.visibility.set_visible(false);

        if let Some(fraction) = args.first() {
            let fraction = parse_number("fraction", fraction)?;
            if !(0.0..=1.0).contains(&fraction) {
                return Err(CliError::InvalidArgument {
                    arg: "fraction".to_string(),
                    reason: "must be between 0.0 and 1.0".to_string(),
                });
            }
            self.mini_player.seek_to_fraction(fraction);
        }

        let Some(view) = self.mini_player.view() else {
            return Ok(String::new());
        };

        const BAR_WIDTH: usize = 20;
        let filled = ((view.progress_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "━".repeat(filled.min(BAR_WIDTH)),
            "─".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        let icon = if view.is_playing { "▶" } else { "⏸" };

        Ok(format!(
            "{icon} {}  {} {bar} {}",
            view.title, view.elapsed, view.total
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "mini".to_string(),
            description: "Show the mini-player, optionally clicking its progress bar".to_string(),
            category: "player".to_string(),
            args: vec![arg(
                "fraction",
                "Where to click on the progress bar, 0.0 - 1.0",
                false,
                ArgType::Number,
            )],
            examples: vec![
                "coursekit player mini".to_string(),
                "coursekit player mini 0.5".to_string(),
            ],
        }
    }
}
