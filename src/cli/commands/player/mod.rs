//! Playback transport commands.
mod clear;
mod event;
mod load;
mod load_lesson;
mod mini;
mod seek;
mod status;
mod transport;
mod volume;

pub use clear::ClearCommand;
pub use event::EventCommand;
pub use load::LoadCommand;
pub use load_lesson::LoadLessonCommand;
pub use mini::MiniCommand;
pub use seek::{SeekCommand, SkipCommand};
pub use status::StatusCommand;
pub use transport::{PauseCommand, PlayCommand, ToggleCommand};
pub use volume::{MuteCommand, VolumeCommand};

use crate::{cli::CommandRegistry, service_manager::Services};

/// Registers all player commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
pub fn register_commands(registry: &mut CommandRegistry, services: &Services) {
    const CATEGORY_NAME: &str = "player";

    let playback = &services.playback;

    registry.register_command(CATEGORY_NAME, Box::new(LoadCommand::new(playback.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(LoadLessonCommand::new(
            playback.clone(),
            services.catalog.clone(),
        )),
    );
    registry.register_command(CATEGORY_NAME, Box::new(PlayCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PauseCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ToggleCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SeekCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SkipCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(VolumeCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(MuteCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ClearCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(playback.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(EventCommand::new(playback.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(MiniCommand::new(
            services.mini_player.clone(),
            services.visibility.clone(),
        )),
    );
}
