//! Unit tests for the CLI module
//!
//! Commands run against services backed by a temporary progress directory
//! and the built-in sample catalog.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use async_trait::async_trait;
use toml::Value;

use crate::{
    cli::{
        CliError, CliService, Command, CommandRegistry, CommandResult,
        formatting::format_toml_value,
        types::{ArgType, CommandMetadata, arg},
    },
    config::{Config, ProgressConfig},
    config_store::ConfigStore,
    runtime_state::RuntimeState,
    service_manager::Services,
};

fn cli(storage: &Path, runtime: RuntimeState) -> CliService {
    let config = Config {
        progress: ProgressConfig {
            storage_dir: Some(storage.to_path_buf()),
            ..ProgressConfig::default()
        },
        ..Config::default()
    };
    let config_store = ConfigStore::from_config(config);
    let services = Services::new(&config_store, &runtime).unwrap();

    CliService::new(&config_store, services, runtime)
}

async fn run(cli: &CliService, line: &str) -> CommandResult {
    let parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    cli.execute_command(&parts[0], &parts[1], &parts[2..]).await
}

struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        Ok(args.join(" "))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "echo".to_string(),
            description: "Echo arguments".to_string(),
            category: "test".to_string(),
            args: vec![
                arg("first", "Required", true, ArgType::String),
                arg("second", "Optional", false, ArgType::String),
            ],
            examples: Vec::new(),
        }
    }
}

mod formatting {
    use super::*;

    #[test]
    fn scalars_render_inline() {
        assert_eq!(format_toml_value(&Value::String("hi".to_string())), "\"hi\"");
        assert_eq!(format_toml_value(&Value::Integer(-123)), "-123");
        assert_eq!(format_toml_value(&Value::Float(2.5)), "2.5");
        assert_eq!(format_toml_value(&Value::Boolean(false)), "false");
    }

    #[test]
    fn collections_render_their_size() {
        let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(format_toml_value(&array), "[2]");

        let mut table = toml::map::Map::new();
        table.insert("key".to_string(), Value::Integer(1));
        assert_eq!(format_toml_value(&Value::Table(table)), "{1}");
        assert_eq!(format_toml_value(&Value::Table(toml::map::Map::new())), "{0}");
    }

    #[test]
    fn styled_text_is_reset_afterwards() {
        use crate::cli::formatting::{format_description, format_error};

        let error = format_error("Unknown lesson");
        assert!(error.starts_with("\x1b[1m\x1b[31m"));
        assert!(error.ends_with("Unknown lesson\x1b[0m"));

        assert_eq!(format_description("usage"), "\x1b[2musage\x1b[0m");
    }
}

mod registry {
    use super::*;

    #[test]
    fn new_registry_has_no_categories() {
        assert!(CommandRegistry::new().get_categories().is_empty());
    }

    #[tokio::test]
    async fn validates_argument_count() {
        let mut registry = CommandRegistry::new();
        registry.register_command("test", Box::new(EchoCommand));

        let missing = registry.execute("test", "echo", &[]).await;
        assert!(matches!(missing, Err(CliError::MissingArguments { missing, .. }) if missing == "first"));

        let too_many = ["a", "b", "c"].map(String::from);
        let result = registry.execute("test", "echo", &too_many).await;
        assert!(matches!(result, Err(CliError::InvalidArguments(_))));

        let ok = ["a", "b"].map(String::from);
        assert_eq!(registry.execute("test", "echo", &ok).await.unwrap(), "a b");
    }

    #[tokio::test]
    async fn unknown_category_or_command_is_not_found() {
        let mut registry = CommandRegistry::new();
        registry.register_command("test", Box::new(EchoCommand));

        assert!(matches!(
            registry.execute("nope", "echo", &[]).await,
            Err(CliError::CommandNotFound(_))
        ));
        assert!(matches!(
            registry.execute("test", "nope", &[]).await,
            Err(CliError::CommandNotFound(_))
        ));
    }

    #[test]
    fn all_categories_are_registered() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let categories: Vec<String> = cli.list_all().into_iter().map(|(name, _)| name).collect();
        assert_eq!(categories, ["catalog", "config", "player", "progress"]);
    }
}

mod player {
    use super::*;

    #[tokio::test]
    async fn load_lesson_then_transport() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let loaded = run(&cli, "player load-lesson course-1 l2").await.unwrap();
        assert!(loaded.contains("/audio/objavuj-ai/l2.mp3"));

        run(&cli, "player event metadata 180").await.unwrap();
        run(&cli, "player seek 9999").await.unwrap();
        run(&cli, "player play").await.unwrap();

        let state = cli.updated_runtime().unwrap().now_playing;
        assert_eq!(state.current_time, 180.0);
        assert!(state.is_playing);
    }

    #[tokio::test]
    async fn lesson_without_audio_clears_the_player() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        run(&cli, "player load /audio/a.mp3").await.unwrap();
        let output = run(&cli, "player load-lesson course-1 l5").await.unwrap();

        assert!(output.contains("has no audio"));
        assert!(cli.updated_runtime().is_none());
    }

    #[tokio::test]
    async fn stale_event_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        run(&cli, "player load a.mp3").await.unwrap();
        run(&cli, "player load b.mp3").await.unwrap();
        let output = run(&cli, "player event metadata 120 --source=a.mp3")
            .await
            .unwrap();

        assert!(output.ends_with("stale, discarded"));
        assert_eq!(cli.updated_runtime().unwrap().now_playing.duration, 0.0);
    }

    #[tokio::test]
    async fn volume_rejects_non_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        assert!(matches!(
            run(&cli, "player volume loud").await,
            Err(CliError::InvalidArgument { .. })
        ));
        assert_eq!(run(&cli, "player volume 0").await.unwrap(), "Volume: 0% (muted)");
    }

    #[tokio::test]
    async fn mini_player_renders_once_something_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        assert_eq!(run(&cli, "player mini").await.unwrap(), "");

        run(&cli, "player load a.mp3 Intro").await.unwrap();
        run(&cli, "player event metadata 100").await.unwrap();
        let output = run(&cli, "player mini 0.5").await.unwrap();

        assert!(output.contains("Intro"));
        assert!(output.contains("0:50"));
        assert!(output.contains("1:40"));
    }

    #[tokio::test]
    async fn restores_previous_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let first = cli(dir.path(), RuntimeState::default());
        run(&first, "player load a.mp3 Intro").await.unwrap();
        let saved = first.updated_runtime().unwrap();

        let second = cli(dir.path(), saved);
        let status = run(&second, "player status").await.unwrap();

        assert!(status.contains("Title: Intro"));
        assert!(second.updated_runtime().is_none());
    }
}

mod progress {
    use super::*;

    #[tokio::test]
    async fn complete_reports_course_progress() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let output = run(&cli, "progress complete course-1 l1").await.unwrap();

        assert_eq!(output, "Completed l1. Course progress: 20%");
        assert!(dir.path().join("user-1").join("progress_mock_l1.json").exists());
    }

    #[tokio::test]
    async fn unknown_lesson_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        assert!(matches!(
            run(&cli, "progress complete course-1 l9").await,
            Err(CliError::NotFound { .. })
        ));
        assert!(matches!(
            run(&cli, "progress next course-9 l1").await,
            Err(CliError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn navigation_marks_locked_lessons() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let next = run(&cli, "progress next course-1 l3").await.unwrap();
        assert!(next.starts_with("l4 (m2)"));
        assert!(next.ends_with("🔒"));

        assert_eq!(
            run(&cli, "progress previous course-1 l1").await.unwrap(),
            "No previous lesson"
        );
    }

    #[tokio::test]
    async fn switching_user_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        run(&cli, "progress user user-2").await.unwrap();

        let runtime = cli.updated_runtime().unwrap();
        assert_eq!(runtime.current_user.as_deref(), Some("user-2"));

        let next = super::cli(dir.path(), runtime);
        assert_eq!(run(&next, "progress user").await.unwrap(), "Learner: user-2");
    }
}

mod help {
    use super::*;

    #[tokio::test]
    async fn lists_categories_and_commands() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let overview = cli.execute_command("help", "", &[]).await.unwrap();
        assert!(overview.contains("player"));
        assert!(overview.contains("load-lesson"));

        let command = cli
            .execute_command("help", "player", &["seek".to_string()])
            .await
            .unwrap();
        assert!(command.contains("coursekit player seek <position>"));
    }

    #[tokio::test]
    async fn unknown_topic_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        assert!(matches!(
            cli.execute_command("help", "nope", &[]).await,
            Err(CliError::CommandNotFound(_))
        ));
    }
}

mod config {
    use super::*;

    #[tokio::test]
    async fn get_reads_values_and_sections() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        assert_eq!(
            run(&cli, "config get playback.skip_seconds").await.unwrap(),
            "playback.skip_seconds: 10"
        );
        let section = run(&cli, "config get general").await.unwrap();
        assert!(section.starts_with("[general]"));
        assert!(section.contains("user_id = \"user-1\""));
    }

    #[tokio::test]
    async fn schema_is_json() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli(dir.path(), RuntimeState::default());

        let schema = run(&cli, "config schema").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();

        assert!(value["properties"]["playback"].is_object());
    }
}
