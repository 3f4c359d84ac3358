//! Course catalog backed by mock fixtures.

mod error;
mod outline;
mod provider;
mod types;


pub use error::CatalogError;
pub use outline::{CourseOutline, LessonRef, ModuleOutline, OutlineError};
pub use provider::{CatalogProvider, MockCatalog};
pub use types::{Course, Lesson, LessonKind, Module};
