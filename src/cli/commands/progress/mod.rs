//! Lesson completion and navigation commands.
mod complete;
mod navigate;
mod status;
mod user;

pub use complete::CompleteCommand;
pub use navigate::{Direction, NavigateCommand};
pub use status::StatusCommand;
pub use user::UserCommand;

use crate::{
    cli::{CliError, CommandRegistry, session::Session},
    service_manager::Services,
    services::catalog::{CatalogProvider, Course},
};

/// Registers all progress commands with the command registry
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `services` - Application services container
/// * `session` - Session state the `user` command writes to
pub fn register_commands(registry: &mut CommandRegistry, services: &Services, session: &Session) {
    const CATEGORY_NAME: &str = "progress";

    registry.register_command(
        CATEGORY_NAME,
        Box::new(CompleteCommand::new(services.progress.clone(), services.catalog.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StatusCommand::new(services.progress.clone(), services.catalog.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(NavigateCommand::new(
            Direction::Next,
            services.progress.clone(),
            services.catalog.clone(),
        )),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(NavigateCommand::new(
            Direction::Previous,
            services.progress.clone(),
            services.catalog.clone(),
        )),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(UserCommand::new(session.clone(), services.progress.user_id())),
    );
}

/// Course by id, or `CliError::NotFound`.
fn find_course<'a>(catalog: &'a dyn CatalogProvider, course_id: &str) -> Result<&'a Course, CliError> {
    catalog.course(course_id).ok_or_else(|| CliError::NotFound {
        kind: "Course".to_string(),
        id: course_id.to_string(),
    })
}

/// Check that a lesson belongs to a course.
fn ensure_lesson(catalog: &dyn CatalogProvider, course_id: &str, lesson_id: &str) -> Result<(), CliError> {
    find_course(catalog, course_id)?;
    catalog
        .lesson(course_id, lesson_id)
        .map(|_| ())
        .ok_or_else(|| CliError::NotFound {
            kind: "Lesson".to_string(),
            id: lesson_id.to_string(),
        })
}
