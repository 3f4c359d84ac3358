use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    config::{Config, ConfigPaths},
    config_store::ConfigStore,
    runtime_state::RuntimeState,
    services::{
        catalog::{CatalogProvider, MockCatalog},
        playback::{MiniPlayer, PlaybackController, PlayerVisibility},
        progress::{FileRepository, ProgressAggregator},
    },
};

/// Container for all application services
///
/// Services are created once per invocation and shared by handle. The
/// playback controller is restored from the runtime state so transport
/// commands continue where the previous invocation stopped.
#[derive(Clone)]
pub struct Services {
    /// Shared "now playing" state
    pub playback: PlaybackController,
    /// Whether the main player is on screen
    pub visibility: PlayerVisibility,
    /// Compact view over `playback`
    pub mini_player: MiniPlayer,
    /// Course catalog
    pub catalog: Arc<dyn CatalogProvider>,
    /// Completion tracking for the session's learner
    pub progress: ProgressAggregator,
}

impl Services {
    /// Create all application services
    ///
    /// # Arguments
    /// * `config_store` - Configuration store for loading service settings
    /// * `runtime` - State carried over from the previous invocation
    ///
    /// # Errors
    /// Returns error if the catalog fixture cannot be loaded or the data
    /// directory cannot be resolved
    #[instrument(skip_all)]
    pub fn new(
        config_store: &ConfigStore,
        runtime: &RuntimeState,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = config_store.get_current();

        let catalog = load_catalog(&config)?;
        let repository = Arc::new(open_repository(&config)?);

        let user_id = runtime
            .current_user
            .clone()
            .unwrap_or_else(|| config.general.user_id.clone());
        debug!(user_id = %user_id, "Creating services");

        let playback = PlaybackController::restore(runtime.now_playing.clone(), &config.playback);
        let visibility = PlayerVisibility::default();
        let mini_player = MiniPlayer::new(playback.clone(), visibility.clone());
        let progress = ProgressAggregator::new(user_id, repository, Arc::clone(&catalog));

        Ok(Self {
            playback,
            visibility,
            mini_player,
            catalog,
            progress,
        })
    }
}

fn load_catalog(config: &Config) -> Result<Arc<dyn CatalogProvider>, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog.fixture_path {
        Some(path) => MockCatalog::from_fixture(path)?,
        None => MockCatalog::sample(),
    };

    Ok(Arc::new(catalog))
}

fn open_repository(config: &Config) -> Result<FileRepository, Box<dyn std::error::Error>> {
    let root = match &config.progress.storage_dir {
        Some(dir) => dir.clone(),
        None => ConfigPaths::progress_dir()?,
    };

    Ok(FileRepository::with_prefix(
        root,
        config.progress.key_prefix.clone(),
    ))
}
