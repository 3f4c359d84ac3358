use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::{catalog::CatalogProvider, playback::PlaybackController},
};

/// Command to open a catalog lesson in the player
///
/// Mirrors a lesson view mounting: audio lessons load their audio, other
/// lessons clear the player.
pub struct LoadLessonCommand {
    playback: PlaybackController,
    catalog: Arc<dyn CatalogProvider>,
}

impl LoadLessonCommand {
    /// Creates a new LoadLessonCommand
    pub fn new(playback: PlaybackController, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { playback, catalog }
    }
}

#[async_trait]
impl Command for LoadLessonCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let course_id = required(args, 0, "course-id")?;
        let lesson_id = required(args, 1, "lesson-id")?;

        if self.catalog.course(course_id).is_none() {
            return Err(CliError::NotFound {
                kind: "Course".to_string(),
                id: course_id.to_string(),
            });
        }

        let lesson = self
            .catalog
            .lesson(course_id, lesson_id)
            .ok_or_else(|| CliError::NotFound {
                kind: "Lesson".to_string(),
                id: lesson_id.to_string(),
            })?;

        self.playback
            .attach_lesson(lesson.audio_url.as_deref(), Some(&lesson.title))
            .map_err(|e| CliError::ServiceError {
                service: "Playback".to_string(),
                details: e.to_string(),
            })?;

        match &lesson.audio_url {
            Some(source) => Ok(format!("Loaded: {} ({source})", lesson.title)),
            None => Ok(format!("'{}' has no audio, player cleared", lesson.title)),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "load-lesson".to_string(),
            description: "Open a lesson's audio from the catalog".to_string(),
            category: "player".to_string(),
            args: vec![
                arg("course-id", "Course containing the lesson", true, ArgType::Id),
                arg("lesson-id", "Lesson to open", true, ArgType::Id),
            ],
            examples: vec!["coursekit player load-lesson course-1 l2".to_string()],
        }
    }
}
