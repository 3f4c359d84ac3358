use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandMetadata, arg, required},
    },
    services::catalog::CatalogProvider,
};

/// Command to print a course's lessons in navigation order
pub struct OutlineCommand {
    catalog: Arc<dyn CatalogProvider>,
}

impl OutlineCommand {
    /// Creates a new OutlineCommand
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Command for OutlineCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let key = required(args, 0, "course")?;

        let course = self
            .catalog
            .course(key)
            .or_else(|| self.catalog.course_by_slug(key))
            .ok_or_else(|| CliError::NotFound {
                kind: "Course".to_string(),
                id: key.to_string(),
            })?;

        let outline = self
            .catalog
            .course_outline(&course.id)
            .ok_or_else(|| CliError::NotFound {
                kind: "Outline".to_string(),
                id: course.id.clone(),
            })?;

        let mut output = format!("{} ({})\n", course.title, outline.course_id());
        let mut current_module = None;

        for (position, entry) in outline.lessons().iter().enumerate() {
            if current_module != Some(entry.module_id.as_str()) {
                current_module = Some(entry.module_id.as_str());
                let title = course
                    .modules
                    .iter()
                    .find(|module| module.id == entry.module_id)
                    .map(|module| module.title.as_str())
                    .unwrap_or_default();
                let lock = if entry.is_locked { " 🔒" } else { "" };
                output.push_str(&format!("  {} {title}{lock}\n", entry.module_id));
            }

            let Some(lesson) = self.catalog.lesson(&course.id, &entry.lesson_id) else {
                continue;
            };
            let audio = if lesson.audio_url.is_some() { " ♪" } else { "" };
            output.push_str(&format!(
                "    {:>2}. {} {} [{}]{audio}\n",
                position + 1,
                lesson.id,
                lesson.title,
                lesson.kind
            ));
        }

        Ok(output.trim_end().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "outline".to_string(),
            description: "Show a course's modules and lessons in order".to_string(),
            category: "catalog".to_string(),
            args: vec![arg("course", "Course id or slug", true, ArgType::Id)],
            examples: vec![
                "coursekit catalog outline course-1".to_string(),
                "coursekit catalog outline objavuj-ai".to_string(),
            ],
        }
    }
}
