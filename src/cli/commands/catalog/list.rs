use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    services::catalog::CatalogProvider,
};

/// Command to list the courses in the catalog
pub struct ListCommand {
    catalog: Arc<dyn CatalogProvider>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let courses = self.catalog.courses();
        if courses.is_empty() {
            return Ok("No courses".to_string());
        }

        let lines: Vec<String> = courses
            .iter()
            .map(|course| {
                format!(
                    "{} [{}] {} - {} modules, {} lessons",
                    course.id,
                    course.slug,
                    course.title,
                    course.modules.len(),
                    course.lesson_count()
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List available courses".to_string(),
            category: "catalog".to_string(),
            args: Vec::new(),
            examples: vec!["coursekit catalog list".to_string()],
        }
    }
}
