use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::{catalog::CatalogProvider, progress::ProgressAggregator},
};

use super::ensure_lesson;

/// Which neighbour to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The following lesson.
    Next,
    /// The preceding lesson.
    Previous,
}

/// Command to find the lesson before or after another
///
/// Locked lessons are reported with a lock marker rather than skipped.
pub struct NavigateCommand {
    direction: Direction,
    progress: ProgressAggregator,
    catalog: Arc<dyn CatalogProvider>,
}

impl NavigateCommand {
    /// Creates a new NavigateCommand
    pub fn new(
        direction: Direction,
        progress: ProgressAggregator,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self {
            direction,
            progress,
            catalog,
        }
    }

    fn name(&self) -> &'static str {
        match self.direction {
            Direction::Next => "next",
            Direction::Previous => "previous",
        }
    }
}

#[async_trait]
impl Command for NavigateCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let course_id = required(args, 0, "course-id")?;
        let lesson_id = required(args, 1, "lesson-id")?;
        ensure_lesson(self.catalog.as_ref(), course_id, lesson_id)?;

        let neighbour = match self.direction {
            Direction::Next => self.progress.next_lesson(course_id, lesson_id),
            Direction::Previous => self.progress.previous_lesson(course_id, lesson_id),
        };

        let Some(neighbour) = neighbour else {
            return Ok(format!("No {} lesson", self.name()));
        };

        let title = self
            .catalog
            .lesson(course_id, &neighbour.lesson_id)
            .map(|lesson| lesson.title.as_str())
            .unwrap_or_default();
        let lock = if neighbour.is_locked { " 🔒" } else { "" };

        Ok(format!(
            "{} ({}): {title}{lock}",
            neighbour.lesson_id, neighbour.module_id
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.name();
        CommandMetadata {
            name: name.to_string(),
            description: format!("Show the {name} lesson in course order"),
            category: "progress".to_string(),
            args: vec![
                arg("course-id", "Course to navigate", true, ArgType::Id),
                arg("lesson-id", "Current lesson", true, ArgType::Id),
            ],
            examples: vec![format!("coursekit progress {name} course-1 l3")],
        }
    }
}
