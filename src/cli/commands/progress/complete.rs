use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::{catalog::CatalogProvider, progress::ProgressAggregator},
};

use super::ensure_lesson;

/// Command to mark a lesson as completed
pub struct CompleteCommand {
    progress: ProgressAggregator,
    catalog: Arc<dyn CatalogProvider>,
}

impl CompleteCommand {
    /// Creates a new CompleteCommand
    pub fn new(progress: ProgressAggregator, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { progress, catalog }
    }
}

#[async_trait]
impl Command for CompleteCommand {
    /// Marks the lesson completed for the session's learner
    ///
    /// # Errors
    ///
    /// Returns CliError if the course or lesson is unknown, or the record
    /// could not be stored
    async fn execute(&self, args: &[String]) -> CommandResult {
        let course_id = required(args, 0, "course-id")?;
        let lesson_id = required(args, 1, "lesson-id")?;
        ensure_lesson(self.catalog.as_ref(), course_id, lesson_id)?;

        let user_id = self.progress.user_id();
        if !self
            .progress
            .mark_lesson_complete(user_id, course_id, lesson_id)
        {
            return Err(CliError::ServiceError {
                service: "Progress".to_string(),
                details: format!("could not store completion of '{lesson_id}'"),
            });
        }

        Ok(format!(
            "Completed {lesson_id}. Course progress: {}%",
            self.progress.course_progress_percent(course_id)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "complete".to_string(),
            description: "Mark a lesson as completed".to_string(),
            category: "progress".to_string(),
            args: vec![
                arg("course-id", "Course containing the lesson", true, ArgType::Id),
                arg("lesson-id", "Lesson to mark", true, ArgType::Id),
            ],
            examples: vec!["coursekit progress complete course-1 l1".to_string()],
        }
    }
}
