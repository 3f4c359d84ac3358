use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::{catalog::CatalogProvider, progress::ProgressAggregator},
};

use super::find_course;

/// Command to show completion per module and for the whole course
pub struct StatusCommand {
    progress: ProgressAggregator,
    catalog: Arc<dyn CatalogProvider>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(progress: ProgressAggregator, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { progress, catalog }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let course_id = required(args, 0, "course-id")?;
        let course = find_course(self.catalog.as_ref(), course_id)?;
        let only_module = args.get(1);

        if let Some(module_id) = only_module {
            if !course.modules.iter().any(|module| &module.id == module_id) {
                return Err(CliError::NotFound {
                    kind: "Module".to_string(),
                    id: module_id.clone(),
                });
            }
        }

        let mut output = format!(
            "{} ({}): {}%\n",
            course.title,
            self.progress.user_id(),
            self.progress.course_progress_percent(course_id)
        );

        let mut modules: Vec<_> = course
            .modules
            .iter()
            .filter(|module| only_module.is_none_or(|id| &module.id == id))
            .collect();
        modules.sort_by_key(|module| module.order);

        for module in modules {
            let lock = if module.is_locked { " 🔒" } else { "" };
            output.push_str(&format!(
                "  {} {}{lock}: {}%\n",
                module.id,
                module.title,
                self.progress.module_progress_percent(course_id, &module.id)
            ));

            let mut lessons: Vec<_> = module.lessons.iter().collect();
            lessons.sort_by_key(|lesson| lesson.order);
            for lesson in lessons {
                let mark = if self.progress.is_lesson_complete(&lesson.id) {
                    "✓"
                } else {
                    " "
                };
                output.push_str(&format!("    [{mark}] {} {}\n", lesson.id, lesson.title));
            }
        }

        Ok(output.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show course and module completion".to_string(),
            category: "progress".to_string(),
            args: vec![
                arg("course-id", "Course to report on", true, ArgType::Id),
                arg("module-id", "Limit the report to one module", false, ArgType::Id),
            ],
            examples: vec![
                "coursekit progress status course-1".to_string(),
                "coursekit progress status course-1 m1".to_string(),
            ],
        }
    }
}
